//! Category rules and ordered rule sets.
//!
//! A [`CategoryRule`] pairs a comorbidity category name with the codes that
//! select it: full codes matched exactly and prefixes matched with
//! `starts_with`. A [`RuleSet`] holds the rules for one taxonomy/version
//! pair in a fixed iteration order.
//!
//! Categories are not guaranteed mutually exclusive: a single code may
//! satisfy rules in more than one category, and classification reports all
//! of them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ComorbidityError, Result};

/// Codes selecting a single comorbidity category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category name, unique within one rule set (e.g., "congestive heart failure").
    pub category: String,

    /// Full normalized codes matched exactly.
    pub exact_codes: BTreeSet<String>,

    /// Code prefixes matched with `starts_with`, in authored order.
    pub prefix_codes: Vec<String>,
}

impl CategoryRule {
    /// Create a rule from authored code lists. Either list may be empty:
    /// a rule with no codes never matches (ICD-10 tables contain such
    /// categories deliberately).
    pub fn new<S: Into<String>>(category: S, exact: &[&str], prefixes: &[&str]) -> Self {
        Self {
            category: category.into(),
            exact_codes: exact.iter().map(|code| (*code).to_string()).collect(),
            prefix_codes: prefixes.iter().map(|code| (*code).to_string()).collect(),
        }
    }

    /// Create a prefix-only rule (the custom-taxonomy shape).
    pub fn with_prefixes<S: Into<String>>(category: S, prefixes: Vec<String>) -> Self {
        Self {
            category: category.into(),
            exact_codes: BTreeSet::new(),
            prefix_codes: prefixes,
        }
    }

    /// Whether the normalized code is one of this rule's exact codes.
    pub fn matches_exact(&self, code: &str) -> bool {
        self.exact_codes.contains(code)
    }

    /// Whether the normalized code starts with any of this rule's prefixes.
    pub fn matches_prefix(&self, code: &str) -> bool {
        self.prefix_codes
            .iter()
            .any(|prefix| code.starts_with(prefix.as_str()))
    }
}

/// Ordered mapping from category name to [`CategoryRule`] for one
/// taxonomy/version pair.
///
/// Iteration order is insertion order; classification results depend on it,
/// so the order is part of the table's contract. The compiled-in rule sets
/// are built once at first use and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from authored rules, rejecting duplicate categories.
    pub fn from_rules(rules: Vec<CategoryRule>) -> Result<Self> {
        let mut set = Self::new();
        for rule in rules {
            set.add_rule(rule)?;
        }
        Ok(set)
    }

    /// Append a rule, rejecting duplicate category names.
    pub fn add_rule(&mut self, rule: CategoryRule) -> Result<()> {
        if self.get(&rule.category).is_some() {
            return Err(ComorbidityError::DuplicateCategory {
                category: rule.category,
            });
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Look up a rule by category name.
    pub fn get(&self, category: &str) -> Option<&CategoryRule> {
        self.rules.iter().find(|rule| rule.category == category)
    }

    /// Rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryRule> {
        self.rules.iter()
    }

    /// Category names in insertion order.
    pub fn categories(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.category.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a CategoryRule;
    type IntoIter = std::slice::Iter<'a, CategoryRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
