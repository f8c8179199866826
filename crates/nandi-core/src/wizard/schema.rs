//! Step declarations and the validated wizard schema.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::field::{FieldSpec, FieldValues};
use crate::error::{NandiError, Result};

type Predicate = dyn Fn(&FieldValues) -> bool + Send + Sync;

/// Decides whether a step may be left forward.
#[derive(Clone)]
pub enum StepValidator {
    /// Every field marked `required` must be filled.
    RequiredFields,
    /// Caller-supplied predicate over the step-local values.
    Custom(Arc<Predicate>),
}

impl StepValidator {
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&FieldValues) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }
}

impl fmt::Debug for StepValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredFields => f.write_str("RequiredFields"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One page of the wizard.
#[derive(Debug, Clone)]
pub struct StepSpec {
    pub title: String,
    pub fields: Vec<FieldSpec>,
    pub validator: StepValidator,
}

impl StepSpec {
    /// A step gated on its required fields.
    pub fn new(title: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            title: title.into(),
            fields,
            validator: StepValidator::RequiredFields,
        }
    }

    pub fn with_validator(mut self, validator: StepValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Evaluates the validator against the step-local values.
    pub fn is_valid(&self, local: &FieldValues) -> bool {
        match &self.validator {
            StepValidator::RequiredFields => self
                .fields
                .iter()
                .filter(|f| f.required)
                .all(|f| local.is_filled(&f.key)),
            StepValidator::Custom(predicate) => predicate(local),
        }
    }
}

/// Ordered, non-empty list of steps with schema-wide unique field keys.
#[derive(Debug, Clone)]
pub struct WizardSchema {
    steps: Vec<StepSpec>,
}

impl WizardSchema {
    /// # Errors
    ///
    /// Returns `NandiError::Config` if there are no steps, a key repeats
    /// anywhere in the schema, or a declared default does not match its
    /// field's kind.
    pub fn new(steps: Vec<StepSpec>) -> Result<Self> {
        if steps.is_empty() {
            return Err(NandiError::config("wizard needs at least one step"));
        }

        let mut seen = HashSet::new();
        for (index, step) in steps.iter().enumerate() {
            for field in &step.fields {
                if !seen.insert(field.key.as_str()) {
                    return Err(NandiError::config(format!(
                        "duplicate field key '{}' on step {}",
                        field.key, index
                    )));
                }
                if let Some(default) = &field.default {
                    if default.kind() != field.kind {
                        return Err(NandiError::config(format!(
                            "default for '{}' is {} but the field is {}",
                            field.key,
                            default.kind(),
                            field.kind
                        )));
                    }
                }
            }
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a constructed schema.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Result<&StepSpec> {
        self.steps
            .get(index)
            .ok_or_else(|| NandiError::invalid_step(index, self.steps.len()))
    }

    /// Every field at its declared initial value.
    pub fn initial_values(&self) -> FieldValues {
        self.steps
            .iter()
            .flat_map(|step| step.fields.iter())
            .map(|field| (field.key.clone(), field.initial_value()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::field::FieldValue;

    #[test]
    fn test_rejects_empty_schema() {
        assert!(WizardSchema::new(vec![]).unwrap_err().is_config());
    }

    #[test]
    fn test_rejects_duplicate_keys_across_steps() {
        let err = WizardSchema::new(vec![
            StepSpec::new("a", vec![FieldSpec::text("name", "Name")]),
            StepSpec::new("b", vec![FieldSpec::text("name", "Name again")]),
        ])
        .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_rejects_mismatched_default() {
        let err = WizardSchema::new(vec![StepSpec::new(
            "a",
            vec![FieldSpec::flag("agree", "Agree").with_default("yes")],
        )])
        .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_required_fields_validator() {
        let step = StepSpec::new(
            "a",
            vec![
                FieldSpec::text("name", "Name").required(),
                FieldSpec::text("nickname", "Nickname"),
            ],
        );
        let mut local = FieldValues::new();
        local.insert("name", FieldValue::text(" "));
        assert!(!step.is_valid(&local));
        local.insert("name", FieldValue::text("Ram"));
        assert!(step.is_valid(&local));
    }

    #[test]
    fn test_custom_validator() {
        let step = StepSpec::new("a", vec![FieldSpec::text("pin", "PIN")]).with_validator(
            StepValidator::custom(|values| values.text("pin").len() == 6),
        );
        let mut local = FieldValues::new();
        local.insert("pin", FieldValue::text("1410"));
        assert!(!step.is_valid(&local));
        local.insert("pin", FieldValue::text("141001"));
        assert!(step.is_valid(&local));
    }

    #[test]
    fn test_step_out_of_range() {
        let schema = WizardSchema::new(vec![StepSpec::new("a", vec![])]).unwrap();
        assert!(schema.step(0).is_ok());
        assert!(schema.step(1).unwrap_err().is_invalid_step());
    }
}
