use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use super::rule::{RuleTable, Topic};
use super::snapshot::FarmSnapshot;
use crate::error::Result;

/// Resolves free text to one canned response body.
///
/// Templates are rendered once at construction, so [`resolve`](Self::resolve)
/// is a pure lookup that never fails: no match is the fallback path, not an
/// error.
#[derive(Debug, Clone)]
pub struct ResponseResolver {
    table: RuleTable,
    /// Rendered body for each rule, parallel to `table.rules()`.
    bodies: Vec<String>,
}

impl ResponseResolver {
    /// Renders every rule template against `context`.
    ///
    /// # Errors
    ///
    /// Returns `NandiError::Template` if a template is malformed or refers
    /// to a value missing from the context.
    pub fn new<C: Serialize>(table: RuleTable, context: &C) -> Result<Self> {
        let env = template_env();
        let bodies = table
            .rules()
            .iter()
            .map(|rule| env.render_str(&rule.template, context))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(rules = table.len(), "response resolver ready");
        Ok(Self { table, bodies })
    }

    /// The builtin table rendered with the demo figures.
    pub fn demo() -> Result<Self> {
        Self::new(RuleTable::builtin(), &FarmSnapshot::demo())
    }

    /// Returns the response body for `input`.
    pub fn resolve(&self, input: &str) -> &str {
        &self.bodies[self.position(input)]
    }

    /// Returns the topic that would answer `input`.
    pub fn resolve_topic(&self, input: &str) -> Topic {
        self.table.rules()[self.position(input)].topic
    }

    /// Rendered body of the fallback rule.
    pub fn fallback(&self) -> &str {
        &self.bodies[self.bodies.len() - 1]
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    fn position(&self, input: &str) -> usize {
        let index = self.table.position(input);
        tracing::trace!(topic = %self.table.rules()[index].topic, "resolved input");
        index
    }
}

fn template_env() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_filter("inr", format_inr);
    env
}

/// Formats a rupee amount with Indian digit grouping (`1,00,000`).
pub fn format_inr(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
