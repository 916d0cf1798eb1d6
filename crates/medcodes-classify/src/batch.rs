//! Batch classification over a sequence of codes.

use medcodes_model::{
    ComorbidityError, ComorbidityRow, ComorbidityTable, IcdVersion, MappingMode, Result, RuleSet,
};

use crate::classifier::classify_with_rules;
use crate::custom::CustomMap;
use crate::normalize::normalize_code;

/// Classify a sequence of raw ICD codes and assemble a two-column table:
/// the original code and its matched categories, one row per input code in
/// input order.
///
/// Input codes are neither deduplicated nor reordered. There is no
/// partial-result mode: the first code that fails normalization fails the
/// whole batch. For `mode == "custom"` the map is required, but its
/// absence only surfaces once a code is actually processed, so an empty
/// batch succeeds without one.
pub fn classify_many<S: AsRef<str>>(
    codes: &[S],
    version: IcdVersion,
    mode: &str,
    custom: Option<&CustomMap>,
) -> Result<ComorbidityTable> {
    let mode: MappingMode = mode.parse()?;
    let mut table = ComorbidityTable::new(mode.as_str());
    if codes.is_empty() {
        return Ok(table);
    }

    let custom_rules;
    let rules: &RuleSet = match mode.index() {
        Some(index) => medcodes_standards::rule_set(index, version)?,
        None => {
            let map = custom.ok_or(ComorbidityError::MissingCustomMap)?;
            custom_rules = map.to_rule_set()?;
            &custom_rules
        }
    };

    for code in codes {
        let code = code.as_ref();
        let normalized = normalize_code(code, version)?;
        table.push_row(ComorbidityRow {
            icd_code: code.to_string(),
            categories: classify_with_rules(&normalized, rules),
        });
    }

    tracing::debug!(
        mode = mode.as_str(),
        version = version.as_u8(),
        rows = table.len(),
        "classified batch"
    );
    Ok(table)
}

/// JSON boundary wrapper around [`classify_many`] for callers holding
/// untyped inputs: `codes` must be an array of strings and `custom` an
/// object of category -> list of prefixes.
pub fn classify_many_json(
    codes: &serde_json::Value,
    version: u8,
    mode: &str,
    custom: Option<&serde_json::Value>,
) -> Result<ComorbidityTable> {
    let version = IcdVersion::try_from(version)?;
    let entries = codes.as_array().ok_or(ComorbidityError::CodesNotList)?;
    let mut code_strings = Vec::with_capacity(entries.len());
    for entry in entries {
        let text = entry.as_str().ok_or_else(|| ComorbidityError::CodeNotText {
            value: entry.to_string(),
        })?;
        code_strings.push(text);
    }
    let custom = custom.map(CustomMap::from_json).transpose()?;
    classify_many(&code_strings, version, mode, custom.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcodes_model::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_unknown_mode_rejected() {
        let err = classify_many(&["40491"], IcdVersion::Nine, "quan", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("quan"));
    }

    #[test]
    fn test_missing_custom_map_surfaces_with_first_code() {
        let err = classify_many(&["40491"], IcdVersion::Nine, "custom", None).unwrap_err();
        assert!(matches!(err, ComorbidityError::MissingCustomMap));

        // No codes, no error: the map is only required once a code is
        // actually processed.
        let empty: &[&str] = &[];
        let table = classify_many(empty, IcdVersion::Nine, "custom", None).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_single_bad_code_fails_whole_batch() {
        let err =
            classify_many(&["40491", "123"], IcdVersion::Nine, "charlson", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_json_boundary_rejects_non_string_codes() {
        let err = classify_many_json(&json!([1001]), 9, "elixhauser", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("1001"));
    }
}
