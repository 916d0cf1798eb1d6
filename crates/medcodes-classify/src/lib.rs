//! Comorbidity classification engine.
//!
//! Maps normalized ICD diagnosis codes to comorbidity categories under the
//! Charlson and Elixhauser indices (Quan et al. 2005 crosswalks) or a
//! caller-supplied custom taxonomy. Pure computation over compiled-in
//! tables: no I/O, no network, no shared mutable state.
//!
//! ```
//! use medcodes_classify::classify;
//! use medcodes_model::{ComorbidityIndex, IcdVersion};
//!
//! let matched = classify("404.91", IcdVersion::Nine, ComorbidityIndex::Elixhauser).unwrap();
//! assert!(matched.iter().any(|c| c == "congestive heart failure"));
//! ```

pub mod batch;
pub mod classifier;
pub mod custom;
pub mod normalize;

pub use batch::{classify_many, classify_many_json};
pub use classifier::{classify, classify_str, classify_with_rules};
pub use custom::{CustomMap, classify_custom};
pub use normalize::normalize_code;
