//! Caller-supplied custom taxonomies.
//!
//! A custom taxonomy is an ordered mapping from category name to a list of
//! code prefixes. Custom rules are prefix-only by design: exact-match
//! semantics are not distinguished in the custom path, so the compiled
//! rules carry empty exact-code sets and flow through the same prefix
//! evaluation phase as the built-in tables.

use medcodes_model::{CategoryRule, ComorbidityError, IcdVersion, Result, RuleSet};

use crate::classifier::classify_with_rules;
use crate::normalize::normalize_code;

/// Validated custom category -> prefixes mapping, preserving the caller's
/// category order.
#[derive(Debug, Clone, Default)]
pub struct CustomMap {
    entries: Vec<(String, Vec<String>)>,
}

impl CustomMap {
    /// Build from typed (category, prefixes) pairs.
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Build from a JSON value, the boundary where untyped caller input
    /// reaches the engine.
    ///
    /// The value must be an object whose values are arrays of strings. A
    /// bare string value is a common caller mistake and is rejected with a
    /// type error instead of being silently iterated character by
    /// character.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or(ComorbidityError::CustomMapNotObject)?;

        let mut entries = Vec::with_capacity(object.len());
        for (category, prefixes) in object {
            let list = prefixes
                .as_array()
                .ok_or_else(|| ComorbidityError::RuleValueNotList {
                    category: category.clone(),
                })?;
            let mut codes = Vec::with_capacity(list.len());
            for prefix in list {
                let text =
                    prefix
                        .as_str()
                        .ok_or_else(|| ComorbidityError::RulePrefixNotText {
                            category: category.clone(),
                        })?;
                codes.push(text.to_string());
            }
            entries.push((category.clone(), codes));
        }
        Ok(Self { entries })
    }

    /// Compile into the rule-set shape the classifier consumes:
    /// prefix-only rules in the caller's category order.
    pub fn to_rule_set(&self) -> Result<RuleSet> {
        let mut rules = RuleSet::new();
        for (category, prefixes) in &self.entries {
            rules.add_rule(CategoryRule::with_prefixes(
                category.clone(),
                prefixes.clone(),
            ))?;
        }
        Ok(rules)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classify a raw ICD code under a caller-supplied taxonomy.
pub fn classify_custom(
    code: &str,
    version: IcdVersion,
    rules: &CustomMap,
) -> Result<Vec<String>> {
    let normalized = normalize_code(code, version)?;
    let rule_set = rules.to_rule_set()?;
    Ok(classify_with_rules(&normalized, &rule_set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcodes_model::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_custom_prefix_match() {
        let map = CustomMap::new(vec![("stroke".to_string(), vec!["33".to_string()])]);
        let matched = classify_custom("33010", IcdVersion::Nine, &map).unwrap();
        assert_eq!(matched, vec!["stroke"]);
    }

    #[test]
    fn test_scalar_value_rejected() {
        let err = CustomMap::from_json(&json!({"stroke": "33"})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("stroke"));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = CustomMap::from_json(&json!(["stroke"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_non_string_prefix_rejected() {
        let err = CustomMap::from_json(&json!({"stroke": [33]})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_custom_rules_are_prefix_only() {
        let map = CustomMap::from_json(&json!({"stroke": ["33010"]})).unwrap();
        let rules = map.to_rule_set().unwrap();
        let rule = rules.get("stroke").unwrap();
        assert!(rule.exact_codes.is_empty());
        assert_eq!(rule.prefix_codes, vec!["33010"]);
    }

    #[test]
    fn test_json_category_order_preserved() {
        let map =
            CustomMap::from_json(&json!({"zeta": ["33"], "alpha": ["33"]})).unwrap();
        let rules = map.to_rule_set().unwrap();
        assert_eq!(rules.categories(), vec!["zeta", "alpha"]);
    }
}
