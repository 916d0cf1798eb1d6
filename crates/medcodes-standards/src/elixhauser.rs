//! Elixhauser comorbidity index crosswalks.
//!
//! Code sets follow the Quan et al. 2005 coding algorithms for defining
//! comorbidities in ICD-9-CM and ICD-10 administrative data
//! (Med Care 43(11):1130-9).
//!
//! # Known data limitation
//!
//! The ICD-9 table is fully populated (31 categories). The ICD-10 table in
//! this data set is only partially populated: exact codes exist for three
//! categories and prefixes for five, and the remaining categories carry
//! empty rule sets, so no ICD-10 code will ever match them. The empty
//! categories are kept on purpose so that the table shape documents the
//! gap; do not fill them in without sourcing the codes from the published
//! crosswalk.

use medcodes_model::{CategoryRule, RuleSet};

use crate::codes::numeric_span;

fn rule(category: &str, exact: &[&str], prefixes: &[&str]) -> CategoryRule {
    CategoryRule::new(category, exact, prefixes)
}

/// Elixhauser crosswalk for ICD-9-CM.
pub(crate) fn icd9() -> RuleSet {
    let mut chronic_pulmonary = rule(
        "chronic pulmonary disease",
        &["4168", "4169", "5064", "5081", "5088"],
        &[],
    );
    chronic_pulmonary.prefix_codes.extend(numeric_span(490, 505));

    let mut solid_tumor = rule("solid tumor metastasis", &[], &[]);
    solid_tumor.prefix_codes.extend(numeric_span(140, 172));
    solid_tumor.prefix_codes.extend(numeric_span(174, 195));

    RuleSet::from_rules(vec![
        rule(
            "congestive heart failure",
            &[
                "39891", "40201", "40211", "40291", "40401", "40403", "40411", "40413", "40491",
                "40493", "4254", "4255", "4256", "4257", "4258", "4259",
            ],
            &["428"],
        ),
        rule(
            "cardiac arrhythmias",
            &[
                "4260", "42613", "4267", "4269", "42610", "42612", "4270", "4271", "4272", "4273",
                "4274", "4276", "4277", "4278", "4279", "7850", "99601", "99604", "V450", "V533",
            ],
            &[],
        ),
        rule(
            "valvular disease",
            &["0932", "7463", "7464", "7465", "7466", "V422", "V433"],
            &["394", "395", "396", "397", "424"],
        ),
        rule(
            "pulmonary circulation disorders",
            &["4150", "4151", "4170", "4178", "4179"],
            &["416"],
        ),
        rule(
            "peripheral vascular disorders",
            &[
                "0930", "4373", "4431", "4432", "4433", "4434", "4435", "4436", "4437", "4438",
                "4439", "4471", "5571", "5579", "V434",
            ],
            &["440", "441"],
        ),
        rule(
            "paralysis",
            &[
                "3440", "3441", "3442", "3443", "3444", "3445", "3446", "3341", "3449",
            ],
            &["342", "343"],
        ),
        rule(
            "other neurological disorders",
            &[
                "3319", "3320", "3321", "3334", "3335", "33392", "3362", "3481", "3483", "7803",
                "7843",
            ],
            &["334", "335", "340", "341", "345"],
        ),
        chronic_pulmonary,
        rule(
            "diabetes, uncomplicated",
            &["2500", "2501", "2502", "2503"],
            &[],
        ),
        rule(
            "diabetes, complicated",
            &["2504", "2505", "2506", "2507", "2508", "2509"],
            &[],
        ),
        rule("hypothyroidism", &["2409", "2461", "2468"], &["243", "244"]),
        rule(
            "renal failure",
            &[
                "40301", "40311", "40391", "40402", "40403", "40493", "5880", "V420",
            ],
            &["585", "586", "V56", "V451"],
        ),
        rule(
            "liver disease",
            &[
                "07022", "07023", "07032", "07033", "07044", "07054", "0706", "0709", "4560",
                "4561", "4562", "5722", "5723", "5724", "5725", "5726", "5727", "5728", "5733",
                "5734", "5738", "5739", "V427",
            ],
            &["570", "571"],
        ),
        rule(
            "peptic ulcer diease excluding bleeding",
            &[
                "5317", "5319", "5327", "5329", "5337", "5339", "5347", "5349",
            ],
            &[],
        ),
        rule("lymphoma", &["2030", "2386"], &["200", "201", "202"]),
        rule(
            "rheumatoid arthritis",
            &[
                "7010", "7100", "7101", "7102", "7103", "7104", "7108", "7109", "7112", "7193",
                "7285", "72889", "72930",
            ],
            &["446", "714", "720", "725"],
        ),
        rule(
            "coagulopathy",
            &["2871", "2873", "2874", "2875"],
            &["286"],
        ),
        rule("obesity", &["2780"], &[]),
        rule(
            "weight loss",
            &["7832", "7994"],
            &["260", "261", "262", "263"],
        ),
        rule("fluid and electrolyte disorders", &["2536"], &["276"]),
        rule("blood loss anemia", &["2800"], &[]),
        rule(
            "deficiency anemia",
            &[
                "2801", "2802", "2803", "2804", "2805", "2806", "2807", "2808", "2809",
            ],
            &["281"],
        ),
        rule(
            "alcohol abuse",
            &[
                "2652", "2911", "2913", "2915", "2916", "2917", "2918", "2919", "3030", "3039",
                "3050", "3575", "4255", "5353", "5710", "5711", "5712", "5713", "V113",
            ],
            &["980"],
        ),
        rule(
            "drug abuse",
            &[
                "3052", "3053", "3054", "3055", "3056", "3057", "3058", "3059", "V6542",
            ],
            &["292", "304"],
        ),
        rule(
            "psychoses",
            &["2938", "29604", "29614", "29644", "29654"],
            &["295", "297", "298"],
        ),
        rule(
            "depression",
            &["2962", "2963", "2965", "3004", "311"],
            &["309"],
        ),
        rule("hypertension, uncomplicated", &[], &["401"]),
        rule(
            "hypertension, complicated",
            &[],
            &["402", "403", "404", "405"],
        ),
        rule("AIDS/HIV", &[], &["042", "043", "044"]),
        rule("metastatic cancer", &[], &["196", "197", "198", "199"]),
        solid_tumor,
    ])
    .expect("elixhauser icd-9 table has duplicate categories")
}

/// Elixhauser crosswalk for ICD-10 (partial, see module docs).
pub(crate) fn icd10() -> RuleSet {
    RuleSet::from_rules(vec![
        rule(
            "congestive heart failure",
            &[
                "I099", "I110", "I130", "I132", "I255", "I420", "I425", "I426", "I427", "I428",
                "I429", "P290",
            ],
            &["I43", "I50"],
        ),
        rule(
            "cardiac arrhythmias",
            &[
                "I441", "I442", "I443", "I456", "I459", "R000", "R001", "R008", "T821", "Z450",
                "Z950",
            ],
            &["I47", "I48", "I49"],
        ),
        rule(
            "valvular disease",
            &[
                "A520", "I091", "I098", "Q230", "Q231", "Q232", "Q233", "Z952", "Z953", "Z954",
            ],
            &[
                "I05", "I06", "I07", "I08", "I34", "I35", "I36", "I37", "I38", "I39",
            ],
        ),
        rule("pulmonary circulation disorders", &[], &["I26", "I27"]),
        rule("peripheral vascular disorders", &[], &["I70", "I71"]),
        rule("paralysis", &[], &[]),
        rule("other neurological disorders", &[], &[]),
        rule("chronic pulmonary disease", &[], &[]),
        rule("diabetes, uncomplicated", &[], &[]),
        rule("diabetes, complicated", &[], &[]),
        rule("hypothyroidism", &[], &[]),
        rule("renal failure", &[], &[]),
        rule("liver disease", &[], &[]),
        rule("peptic ulcer diease excluding bleeding", &[], &[]),
        rule("lymphoma", &[], &[]),
        rule("rheumatoid arthritis", &[], &[]),
        rule("coagulopathy", &[], &[]),
        rule("obesity", &[], &[]),
        rule("weight loss", &[], &[]),
        rule("fluid and electrolyte disorders", &[], &[]),
        rule("blood loss anemia", &[], &[]),
        rule("deficiency anemia", &[], &[]),
        rule("alcohol abuse", &[], &[]),
        rule("drug abuse", &[], &[]),
        rule("psychoses", &[], &[]),
        rule("depression", &[], &[]),
        rule("hypertension, uncomplicated", &[], &[]),
        rule("hypertension, complicated", &[], &[]),
    ])
    .expect("elixhauser icd-10 table has duplicate categories")
}
