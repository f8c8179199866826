//! Rule table types.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{NandiError, Result};

/// Subject a rule answers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    Weather,
    MarketPrices,
    Loan,
    TrustScore,
    Satellite,
    FarmingAdvice,
    /// Catch-all answer listing the supported topics.
    Fallback,
}

/// A single keyword rule.
///
/// Keywords are stored lower-cased. A rule without keywords matches any
/// input and may only appear as the last entry of a [`RuleTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub topic: Topic,
    pub keywords: Vec<String>,
    /// Response body; may contain template placeholders.
    pub template: String,
}

impl Rule {
    /// Creates a keyword rule. Keywords are case-folded.
    pub fn new<I, S>(topic: Topic, keywords: I, template: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            topic,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            template: template.into(),
        }
    }

    /// Creates the keyword-less fallback rule.
    pub fn fallback(template: impl Into<String>) -> Self {
        Self {
            topic: Topic::Fallback,
            keywords: Vec::new(),
            template: template.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns true if any keyword occurs in the already lower-cased input.
    pub fn matches(&self, normalized: &str) -> bool {
        self.is_fallback() || self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// Ordered list of rules with exactly one trailing fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Validates and wraps an ordered rule list. Keywords are case-folded.
    ///
    /// # Errors
    ///
    /// Returns `NandiError::Config` if the list is empty, if the last rule
    /// is not a fallback, if a fallback appears anywhere else, or if a rule
    /// carries an empty keyword (which would match every input).
    pub fn new(mut rules: Vec<Rule>) -> Result<Self> {
        for keyword in rules.iter_mut().flat_map(|r| r.keywords.iter_mut()) {
            *keyword = keyword.to_lowercase();
        }

        let Some(last) = rules.last() else {
            return Err(NandiError::config("rule table is empty"));
        };
        if !last.is_fallback() {
            return Err(NandiError::config(
                "rule table must end with a fallback rule",
            ));
        }

        for (position, rule) in rules[..rules.len() - 1].iter().enumerate() {
            if rule.is_fallback() {
                return Err(NandiError::config(format!(
                    "fallback rule at position {} is not last",
                    position
                )));
            }
            if rule.keywords.iter().any(|k| k.is_empty()) {
                return Err(NandiError::config(format!(
                    "rule '{}' has an empty keyword",
                    rule.topic
                )));
            }
        }

        Ok(Self { rules })
    }

    /// Wraps rules already known to satisfy the table invariants.
    pub(super) fn from_checked(rules: Vec<Rule>) -> Self {
        debug_assert!(rules.last().is_some_and(Rule::is_fallback));
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false: a valid table holds at least the fallback.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Index of the first rule matching the input, or of the fallback.
    pub fn position(&self, input: &str) -> usize {
        let normalized = input.to_lowercase();
        self.rules
            .iter()
            .position(|rule| rule.matches(&normalized))
            .unwrap_or(self.rules.len() - 1)
    }

    /// First rule matching the input, falling back to the last rule.
    pub fn find(&self, input: &str) -> &Rule {
        &self.rules[self.position(input)]
    }

    pub fn fallback(&self) -> &Rule {
        &self.rules[self.rules.len() - 1]
    }
}

impl TryFrom<Vec<Rule>> for RuleTable {
    type Error = NandiError;

    fn try_from(rules: Vec<Rule>) -> Result<Self> {
        Self::new(rules)
    }
}

impl From<RuleTable> for Vec<Rule> {
    fn from(table: RuleTable) -> Self {
        table.rules
    }
}
