use thiserror::Error;

/// Coarse failure classification.
///
/// Callers that only care about *what went wrong* rather than the exact
/// variant can branch on [`ComorbidityError::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong argument type (non-string code, non-object custom map,
    /// non-list rule values).
    Type,
    /// Right type but invalid value (unsupported version, wrong code
    /// length, unknown taxonomy or mode name).
    Validation,
    /// Internal inconsistency in the compiled-in tables. Unreachable
    /// through the typed API; kept as a defensive assertion.
    Config,
}

#[derive(Debug, Error)]
pub enum ComorbidityError {
    #[error("icd code must be a string, got {value}")]
    CodeNotText { value: String },

    #[error("icd codes must be a list of strings")]
    CodesNotList,

    #[error("custom map must be an object of category -> list of code prefixes")]
    CustomMapNotObject,

    #[error("custom map values must be lists: category {category} has a scalar value")]
    RuleValueNotList { category: String },

    #[error("custom map prefixes must be strings: category {category} has a non-string entry")]
    RulePrefixNotText { category: String },

    #[error("icd version must be either 9 or 10, got {version}")]
    UnsupportedVersion { version: u8 },

    #[error(
        "icd-{version} code {code} must be exactly {expected} characters after normalization, got {actual}"
    )]
    CodeLength {
        code: String,
        version: u8,
        expected: usize,
        actual: usize,
    },

    #[error("unknown comorbidity index: {name} (expected charlson or elixhauser)")]
    UnknownIndex { name: String },

    #[error("unknown mapping mode: {name} (expected charlson, elixhauser, or custom)")]
    UnknownMode { name: String },

    #[error("duplicate category in rule set: {category}")]
    DuplicateCategory { category: String },

    #[error("mapping mode is custom but no custom map was provided")]
    MissingCustomMap,

    #[error("no rule set registered under key {key}")]
    RuleSetUnavailable { key: String },
}

impl ComorbidityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CodeNotText { .. }
            | Self::CodesNotList
            | Self::CustomMapNotObject
            | Self::RuleValueNotList { .. }
            | Self::RulePrefixNotText { .. } => ErrorKind::Type,
            Self::UnsupportedVersion { .. }
            | Self::CodeLength { .. }
            | Self::UnknownIndex { .. }
            | Self::UnknownMode { .. }
            | Self::DuplicateCategory { .. }
            | Self::MissingCustomMap => ErrorKind::Validation,
            Self::RuleSetUnavailable { .. } => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, ComorbidityError>;
