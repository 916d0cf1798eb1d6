//! Rule evaluation for a single code.

use medcodes_model::{ComorbidityIndex, IcdVersion, Result, RuleSet};

use crate::normalize::normalize_code;

/// Evaluate a normalized code against a rule set.
///
/// Exact-code rules are evaluated first, then prefix rules, each phase in
/// table order, and every match is reported. Categories are not mutually
/// exclusive: a code matching several categories yields them all, and a
/// category matched in the exact phase is not reported a second time by
/// the prefix phase. An empty result means no recognized comorbidity.
pub fn classify_with_rules(normalized_code: &str, rules: &RuleSet) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();

    for rule in rules {
        if rule.matches_exact(normalized_code) {
            matched.push(rule.category.clone());
        }
    }
    for rule in rules {
        if rule.matches_prefix(normalized_code)
            && !matched.iter().any(|category| *category == rule.category)
        {
            matched.push(rule.category.clone());
        }
    }

    matched
}

/// Classify a raw ICD code under a compiled-in taxonomy.
///
/// Normalizes the code, fetches the static rule set for the
/// taxonomy/version pair, and returns all matched category names in match
/// order. An empty list is a valid outcome, never an error.
pub fn classify(
    code: &str,
    version: IcdVersion,
    index: ComorbidityIndex,
) -> Result<Vec<String>> {
    let normalized = normalize_code(code, version)?;
    let rules = medcodes_standards::rule_set(index, version)?;
    let matched = classify_with_rules(&normalized, rules);
    tracing::debug!(
        code = normalized.as_str(),
        index = index.as_str(),
        version = version.as_u8(),
        match_count = matched.len(),
        "classified code"
    );
    Ok(matched)
}

/// String/number boundary wrapper around [`classify`] for callers holding
/// untyped inputs. Bad values are rejected with validation errors carrying
/// the offending input.
pub fn classify_str(code: &str, version: u8, taxonomy: &str) -> Result<Vec<String>> {
    let version = IcdVersion::try_from(version)?;
    let index: ComorbidityIndex = taxonomy.parse()?;
    classify(code, version, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcodes_model::{CategoryRule, ErrorKind};

    #[test]
    fn test_exact_matches_precede_prefix_matches() {
        let rules = RuleSet::from_rules(vec![
            CategoryRule::new("prefix category", &[], &["40"]),
            CategoryRule::new("exact category", &["40491"], &[]),
        ])
        .unwrap();
        assert_eq!(
            classify_with_rules("40491", &rules),
            vec!["exact category", "prefix category"]
        );
    }

    #[test]
    fn test_category_reported_once() {
        let rules = RuleSet::from_rules(vec![CategoryRule::new(
            "both phases",
            &["40491"],
            &["404"],
        )])
        .unwrap();
        assert_eq!(classify_with_rules("40491", &rules), vec!["both phases"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let matched = classify("78900", IcdVersion::Nine, ComorbidityIndex::Charlson).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_classify_str_rejects_bad_inputs() {
        let err = classify_str("40491", 11, "charlson").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = classify_str("40491", 9, "quan").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("quan"));
    }
}
