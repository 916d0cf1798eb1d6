#![allow(missing_docs)]

use medcodes_model::{ComorbidityIndex, IcdVersion};
use medcodes_standards::rule_set;

#[test]
fn charlson_icd9_spot_checks() {
    let rules = rule_set(ComorbidityIndex::Charlson, IcdVersion::Nine).unwrap();

    let chf = rules.get("congestive heart failure").unwrap();
    assert!(chf.matches_exact("40491"));
    assert!(chf.matches_prefix("42800"));

    let mi = rules.get("myocardial infarction").unwrap();
    assert!(mi.exact_codes.is_empty());
    assert!(mi.matches_prefix("41000"));
    assert!(mi.matches_prefix("41200"));

    // Malignancy prefixes are generated ranges: 140-172, 174-194, 200-208.
    let malignancy = rules.get("malignancy").unwrap();
    assert!(malignancy.matches_exact("2386"));
    assert!(malignancy.matches_prefix("14012"));
    assert!(malignancy.matches_prefix("20800"));
    // 173 (other skin malignancy) is excluded from the span on purpose.
    assert!(!malignancy.matches_prefix("17300"));
}

#[test]
fn charlson_icd10_spot_checks() {
    let rules = rule_set(ComorbidityIndex::Charlson, IcdVersion::Ten).unwrap();

    let mi = rules.get("myocardial infarction").unwrap();
    assert!(mi.matches_exact("I252"));
    assert!(mi.matches_prefix("I219"));

    let malignancy = rules.get("malignancy").unwrap();
    assert!(malignancy.matches_prefix("C10"));
    assert!(malignancy.matches_prefix("C26"));
    // C27-C29 are unassigned in ICD-10 and not part of the crosswalk.
    assert!(!malignancy.matches_prefix("C27"));
    assert!(malignancy.matches_prefix("C97"));
}

#[test]
fn elixhauser_icd9_spot_checks() {
    let rules = rule_set(ComorbidityIndex::Elixhauser, IcdVersion::Nine).unwrap();

    let chf = rules.get("congestive heart failure").unwrap();
    assert!(chf.matches_exact("40491"));

    let pulmonary = rules.get("chronic pulmonary disease").unwrap();
    assert!(pulmonary.matches_prefix("49090"));
    assert!(pulmonary.matches_prefix("50500"));
    assert!(!pulmonary.matches_prefix("50600"));
    assert!(pulmonary.matches_exact("5064"));
}

#[test]
fn elixhauser_icd10_gap_is_preserved() {
    let rules = rule_set(ComorbidityIndex::Elixhauser, IcdVersion::Ten).unwrap();

    // Populated categories.
    assert!(rules.get("congestive heart failure").unwrap().matches_prefix("I500"));
    assert!(rules.get("cardiac arrhythmias").unwrap().matches_exact("T821"));

    // Known data gap: these categories exist but carry no codes, so no
    // ICD-10 code can ever match them. That is expected, not a defect.
    for category in ["depression", "obesity", "renal failure", "psychoses"] {
        let rule = rules.get(category).unwrap();
        assert!(rule.exact_codes.is_empty());
        assert!(rule.prefix_codes.is_empty());
    }
}

#[test]
fn tables_are_shared_references() {
    let first = rule_set(ComorbidityIndex::Charlson, IcdVersion::Nine).unwrap();
    let second = rule_set(ComorbidityIndex::Charlson, IcdVersion::Nine).unwrap();
    assert!(std::ptr::eq(first, second));
}
