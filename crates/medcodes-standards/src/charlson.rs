//! Charlson comorbidity index crosswalks.
//!
//! Code sets follow the Quan et al. 2005 coding algorithms for defining
//! comorbidities in ICD-9-CM and ICD-10 administrative data
//! (Med Care 43(11):1130-9). Seventeen categories per coding version.
//!
//! Table order is part of the contract: classification reports categories
//! in the order they are listed here, exact-code rules and prefix rules
//! alike.

use medcodes_model::{CategoryRule, RuleSet};

use crate::codes::{lettered_span, numeric_span};

fn rule(category: &str, exact: &[&str], prefixes: &[&str]) -> CategoryRule {
    CategoryRule::new(category, exact, prefixes)
}

/// Charlson crosswalk for ICD-9-CM.
pub(crate) fn icd9() -> RuleSet {
    let mut malignancy = rule("malignancy", &["2386"], &[]);
    malignancy.prefix_codes.extend(numeric_span(140, 172));
    malignancy.prefix_codes.extend(numeric_span(174, 194));
    malignancy.prefix_codes.extend(numeric_span(200, 208));

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
            "peripheral vascular disease",
            &[
                "4431", "4432", "4433", "4434", "4435", "4436", "4437", "4438", "4439", "0930",
                "4373", "4471", "5571", "5579", "V434",
            ],
            &["440", "441"],
        ),
        rule(
            "cerebrovascular disease",
            &["36234"],
            &[
                "430", "431", "432", "433", "434", "435", "436", "437", "438",
            ],
        ),
        rule("dementia", &["2941", "3312"], &["290"]),
        rule(
            "chronic pulmonary disease",
            &["4168", "4169", "5064", "5081", "5088"],
            &[
                "490", "491", "492", "493", "494", "495", "496", "497", "498", "499", "500", "501",
                "502", "503", "504", "505",
            ],
        ),
        rule(
            "rheumatic disease",
            &[
                "4465", "7100", "7101", "7102", "7103", "7104", "7140", "7141", "7142", "7148",
            ],
            &["725"],
        ),
        rule(
            "mild liver disease",
            &[
                "07022", "07023", "07032", "07033", "07044", "07054", "0706", "0709", "5733",
                "5734", "5738", "5739", "V427",
            ],
            &["570", "571"],
        ),
        rule(
            "diabetes without chronic complication",
            &["2500", "2501", "2502", "2503", "2508", "2509"],
            &[],
        ),
        rule(
            "diabetes with chronic complication",
            &["2504", "2505", "2506", "2507"],
            &[],
        ),
        rule(
            "hemiplegia",
            &[
                "3340", "3341", "3342", "3343", "3344", "3345", "3346", "3349",
            ],
            &["342", "343"],
        ),
        rule(
            "renal disease",
            &[
                "40301", "40311", "40391", "40402", "40403", "40412", "40413", "40492", "40493",
                "5830", "5831", "5832", "5833", "5834", "5835", "5836", "5837", "5880", "V420",
                "V451",
            ],
            &["585", "586", "V56", "582"],
        ),
        malignancy,
        rule(
            "moderate or severe liver disease",
            &[
                "4560", "4561", "4562", "5722", "5723", "5724", "5725", "5726", "5727", "5728",
            ],
            &[],
        ),
        rule("myocardial infarction", &[], &["410", "412"]),
        rule("peptic ulcer disease", &[], &["531", "532", "533", "534"]),
        rule(
            "metastatic solid tumor",
            &[],
            &["196", "197", "198", "199"],
        ),
        rule("AIDS/HIV", &[], &["042", "043", "044"]),
    ])
    .expect("charlson icd-9 table has duplicate categories")
}

/// Charlson crosswalk for ICD-10.
pub(crate) fn icd10() -> RuleSet {
    let mut malignancy = rule(
        "malignancy",
        &[],
        &[
            "C00", "C01", "C02", "C03", "C04", "C05", "C06", "C07", "C08", "C09", "C43", "C88",
        ],
    );
    malignancy.prefix_codes.extend(lettered_span('C', 10, 26));
    malignancy.prefix_codes.extend(lettered_span('C', 30, 34));
    malignancy.prefix_codes.extend(lettered_span('C', 37, 41));
    malignancy.prefix_codes.extend(lettered_span('C', 45, 58));
    malignancy.prefix_codes.extend(lettered_span('C', 60, 76));
    malignancy.prefix_codes.extend(lettered_span('C', 81, 85));
    malignancy.prefix_codes.extend(lettered_span('C', 90, 97));

    RuleSet::from_rules(vec![
        rule("myocardial infarction", &["I252"], &["I21", "I22"]),
        rule(
            "congestive heart failure",
            &[
                "I099", "I110", "I132", "I255", "I420", "I425", "I426", "I427", "I428", "I429",
                "P290",
            ],
            &["I50", "I43"],
        ),
        rule(
            "peripheral vascular disease",
            &[
                "I731", "I738", "I739", "I771", "I790", "I792", "K551", "K558", "K559", "Z958",
                "Z959",
            ],
            &["I70", "I71"],
        ),
        rule(
            "cerebrovascular disease",
            &["H340"],
            &[
                "G45", "G46", "I60", "I61", "I62", "I63", "I64", "I65", "I66", "I67", "I68", "I69",
            ],
        ),
        rule(
            "dementia",
            &["F051", "G311"],
            &["F00", "F01", "F02", "F03", "G30"],
        ),
        rule(
            "chronic pulmonary disease",
            &["I278", "I279", "J684", "J701", "J703"],
            &[
                "J40", "J41", "J42", "J43", "J44", "J45", "J46", "J47", "J60", "J61", "J62", "J63",
                "J64", "J65", "J66", "J67",
            ],
        ),
        rule(
            "rheumatic disease",
            &["M315", "M351", "M353", "M360"],
            &["M05", "M06", "M32", "M33", "M34"],
        ),
        rule(
            "mild liver disease",
            &[
                "K700", "K701", "K702", "K703", "K709", "K713", "K714", "K715", "K717", "K760",
                "K762", "K763", "K764", "K768", "K769", "Z944",
            ],
            &["B18", "K73", "K74"],
        ),
        rule(
            "diabetes without chronic complication",
            &[
                "E100", "E101", "E106", "E108", "E109", "E110", "E111", "E116", "E118", "E119",
                "E120", "E121", "E126", "E128", "E129", "E130", "E131", "E136", "E138", "E139",
                "E140", "E141", "E146", "E148", "E149",
            ],
            &[],
        ),
        rule(
            "diabetes with chronic complication",
            &[
                "E102", "E103", "E104", "E105", "E107", "E112", "E113", "E114", "E115", "E117",
                "E122", "E123", "E124", "E125", "E127", "E132", "E133", "E134", "E135", "E137",
                "E142", "E143", "E144", "E145", "E147",
            ],
            &[],
        ),
        rule(
            "hemiplegia or paraplegia",
            &[
                "G041", "G114", "G801", "G802", "G830", "G831", "G832", "G833", "G834", "G839",
            ],
            &["G81", "G82"],
        ),
        rule(
            "renal disease",
            &[
                "I120", "I131", "N032", "N033", "N034", "N035", "N036", "N037", "N052", "N053",
                "N054", "N055", "N056", "N057", "N250", "Z490", "Z491", "Z492", "Z940", "Z992",
            ],
            &["N18", "N19"],
        ),
        rule(
            "moderate or severe liver disease",
            &[
                "I850", "I859", "I864", "I982", "K704", "K711", "K721", "K729", "K765", "K766",
                "K767",
            ],
            &[],
        ),
        rule("peptic ulcer disease", &[], &["K25", "K26", "K27", "K28"]),
        malignancy,
        rule(
            "metastatic solid tumor",
            &[],
            &["C77", "C78", "C79", "C80"],
        ),
        rule("AIDS/HIV", &[], &["B20", "B21", "B22", "B24"]),
    ])
    .expect("charlson icd-10 table has duplicate categories")
}
