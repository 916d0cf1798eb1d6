//! Type-safe enumerations for comorbidity classification.
//!
//! These enums provide compile-time type safety for concepts that are
//! represented as bare strings and integers at the API boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ComorbidityError;

/// ICD coding-system version.
///
/// Two revisions are supported:
/// - **ICD-9**: ~13,000 codes, 5 characters after normalization
/// - **ICD-10**: ~68,000 codes, 4 characters after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IcdVersion {
    /// ICD-9-CM.
    Nine,
    /// ICD-10.
    Ten,
}

impl IcdVersion {
    /// Returns the numeric revision as it appears in published crosswalks.
    pub fn as_u8(&self) -> u8 {
        match self {
            IcdVersion::Nine => 9,
            IcdVersion::Ten => 10,
        }
    }

    /// Expected code length after punctuation is stripped.
    ///
    /// Codes shorter or longer are rejected, never truncated or padded.
    pub fn expected_len(&self) -> usize {
        match self {
            IcdVersion::Nine => 5,
            IcdVersion::Ten => 4,
        }
    }
}

impl TryFrom<u8> for IcdVersion {
    type Error = ComorbidityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(IcdVersion::Nine),
            10 => Ok(IcdVersion::Ten),
            other => Err(ComorbidityError::UnsupportedVersion { version: other }),
        }
    }
}

impl fmt::Display for IcdVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Published comorbidity taxonomy.
///
/// Both index mappings follow the Quan et al. 2005 coding algorithms
/// (Med Care 43(11):1130-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComorbidityIndex {
    /// Charlson comorbidity index (17 categories).
    Charlson,
    /// Elixhauser comorbidity index (31 categories).
    Elixhauser,
}

impl ComorbidityIndex {
    /// Returns the lowercase name used as registry key and column prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComorbidityIndex::Charlson => "charlson",
            ComorbidityIndex::Elixhauser => "elixhauser",
        }
    }
}

impl FromStr for ComorbidityIndex {
    type Err = ComorbidityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "charlson" => Ok(ComorbidityIndex::Charlson),
            "elixhauser" => Ok(ComorbidityIndex::Elixhauser),
            _ => Err(ComorbidityError::UnknownIndex {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ComorbidityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping mode accepted by the batch driver.
///
/// Extends [`ComorbidityIndex`] with the caller-supplied custom taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappingMode {
    /// Use the compiled-in Charlson tables.
    Charlson,
    /// Use the compiled-in Elixhauser tables.
    Elixhauser,
    /// Use a caller-supplied category -> prefixes map.
    Custom,
}

impl MappingMode {
    /// Returns the lowercase name used as the result column prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingMode::Charlson => "charlson",
            MappingMode::Elixhauser => "elixhauser",
            MappingMode::Custom => "custom",
        }
    }

    /// The compiled-in index behind this mode, if any.
    pub fn index(&self) -> Option<ComorbidityIndex> {
        match self {
            MappingMode::Charlson => Some(ComorbidityIndex::Charlson),
            MappingMode::Elixhauser => Some(ComorbidityIndex::Elixhauser),
            MappingMode::Custom => None,
        }
    }
}

impl FromStr for MappingMode {
    type Err = ComorbidityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "charlson" => Ok(MappingMode::Charlson),
            "elixhauser" => Ok(MappingMode::Elixhauser),
            "custom" => Ok(MappingMode::Custom),
            _ => Err(ComorbidityError::UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_version_from_u8() {
        assert_eq!(IcdVersion::try_from(9).unwrap(), IcdVersion::Nine);
        assert_eq!(IcdVersion::try_from(10).unwrap(), IcdVersion::Ten);
        let err = IcdVersion::try_from(11).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_expected_len() {
        assert_eq!(IcdVersion::Nine.expected_len(), 5);
        assert_eq!(IcdVersion::Ten.expected_len(), 4);
    }

    #[test]
    fn test_index_from_str() {
        assert_eq!(
            "charlson".parse::<ComorbidityIndex>().unwrap(),
            ComorbidityIndex::Charlson
        );
        assert_eq!(
            "ELIXHAUSER".parse::<ComorbidityIndex>().unwrap(),
            ComorbidityIndex::Elixhauser
        );
        let err = "quan".parse::<ComorbidityIndex>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "custom".parse::<MappingMode>().unwrap(),
            MappingMode::Custom
        );
        assert_eq!(MappingMode::Charlson.index(), Some(ComorbidityIndex::Charlson));
        assert_eq!(MappingMode::Custom.index(), None);
        assert!("cci".parse::<MappingMode>().is_err());
    }
}
