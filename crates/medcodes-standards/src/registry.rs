//! Process-wide registry of compiled-in rule sets.
//!
//! The registry is built once on first use and never mutated afterwards,
//! so it can be shared across concurrent callers without locking.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use medcodes_model::{ComorbidityError, ComorbidityIndex, IcdVersion, Result, RuleSet};

use crate::{charlson, elixhauser};

static REGISTRY: LazyLock<BTreeMap<String, RuleSet>> = LazyLock::new(|| {
    let mut tables = BTreeMap::new();
    tables.insert("charlson_9".to_string(), charlson::icd9());
    tables.insert("charlson_10".to_string(), charlson::icd10());
    tables.insert("elixhauser_9".to_string(), elixhauser::icd9());
    tables.insert("elixhauser_10".to_string(), elixhauser::icd10());
    tables
});

/// Registry key for a taxonomy/version pair (e.g., "charlson_9").
pub fn registry_key(index: ComorbidityIndex, version: IcdVersion) -> String {
    format!("{}_{}", index.as_str(), version.as_u8())
}

/// Look up the compiled-in rule set for a taxonomy/version pair.
///
/// A missing key means the registry and the enums have drifted apart;
/// that is an internal defect, reported as a config-kind error rather
/// than a panic.
pub fn rule_set(index: ComorbidityIndex, version: IcdVersion) -> Result<&'static RuleSet> {
    let key = registry_key(index, version);
    REGISTRY
        .get(&key)
        .ok_or(ComorbidityError::RuleSetUnavailable { key })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs_registered() {
        for index in [ComorbidityIndex::Charlson, ComorbidityIndex::Elixhauser] {
            for version in [IcdVersion::Nine, IcdVersion::Ten] {
                let rules = rule_set(index, version).unwrap();
                assert!(!rules.is_empty());
            }
        }
    }

    #[test]
    fn test_charlson_has_seventeen_categories() {
        assert_eq!(
            rule_set(ComorbidityIndex::Charlson, IcdVersion::Nine)
                .unwrap()
                .len(),
            17
        );
        assert_eq!(
            rule_set(ComorbidityIndex::Charlson, IcdVersion::Ten)
                .unwrap()
                .len(),
            17
        );
    }

    #[test]
    fn test_elixhauser_icd9_has_thirty_one_categories() {
        assert_eq!(
            rule_set(ComorbidityIndex::Elixhauser, IcdVersion::Nine)
                .unwrap()
                .len(),
            31
        );
    }
}
