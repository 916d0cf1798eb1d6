//! Compiled-in comorbidity crosswalk tables.
//!
//! Static Charlson and Elixhauser code sets for ICD-9-CM and ICD-10, per
//! the Quan et al. 2005 coding algorithms, exposed through an immutable
//! process-wide registry. This crate carries data only; the matching
//! algorithm lives in `medcodes-classify`.

mod charlson;
mod codes;
mod elixhauser;
pub mod registry;

pub use registry::{registry_key, rule_set};
