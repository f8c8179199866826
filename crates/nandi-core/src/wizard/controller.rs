use serde::{Deserialize, Serialize};

use super::field::{FieldValue, FieldValues};
use super::schema::{StepSpec, WizardSchema};
use crate::error::{NandiError, Result};

/// Snapshot of a wizard's mutable state.
///
/// Invariant: `current_step < total steps`. `terminal` flips to true only
/// through a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub current_step: usize,
    pub values: FieldValues,
    pub terminal: bool,
}

/// Drives a [`WizardSchema`] through its steps.
///
/// Rejected forward moves leave the state untouched and report `Ok(false)`
/// (or `Ok(None)` for submit); callers surface them as disabled controls.
/// After submission every mutating call fails with
/// `NandiError::AlreadySubmitted`, while read-only queries keep working.
#[derive(Debug, Clone)]
pub struct StepWizard {
    schema: WizardSchema,
    state: WizardState,
}

impl StepWizard {
    /// Starts at step 0 with every field at its declared default.
    pub fn new(schema: WizardSchema) -> Self {
        let values = schema.initial_values();
        Self {
            schema,
            state: WizardState {
                current_step: 0,
                values,
                terminal: false,
            },
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn values(&self) -> &FieldValues {
        &self.state.values
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.schema.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.terminal
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_step + 1 == self.schema.len()
    }

    pub fn schema(&self) -> &WizardSchema {
        &self.schema
    }

    pub fn step(&self, index: usize) -> Result<&StepSpec> {
        self.schema.step(index)
    }

    pub fn current_spec(&self) -> &StepSpec {
        &self.schema.steps()[self.state.current_step]
    }

    /// Writes one field of the current step.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` once the wizard is terminal
    /// - `InvalidStepIndex` if `step` is out of range
    /// - `FieldNotFound` if the step does not declare `key`
    /// - `FieldKindMismatch` if `value` has the wrong tag
    /// - `StepOutOfOrder` if `step` is not the current step; nothing is stored
    pub fn update_field(&mut self, step: usize, key: &str, value: FieldValue) -> Result<()> {
        self.check_editable(step, key, Some(&value))?;
        tracing::debug!(step, key, "field updated");
        self.state.values.insert(key, value);
        Ok(())
    }

    /// Adds `item` to a multi-select field, or removes it if already selected.
    ///
    /// Returns whether the item is selected afterwards. Errors as
    /// [`update_field`](Self::update_field); a non-list field is a
    /// `FieldKindMismatch`.
    pub fn toggle_item(&mut self, step: usize, key: &str, item: &str) -> Result<bool> {
        self.check_editable(step, key, Some(&FieldValue::List(Vec::new())))?;

        let Some(FieldValue::List(items)) = self.state.values.get_mut(key) else {
            return Err(NandiError::internal(format!(
                "field '{}' has no list value",
                key
            )));
        };

        let selected = if let Some(pos) = items.iter().position(|i| i == item) {
            items.remove(pos);
            false
        } else {
            items.push(item.to_string());
            true
        };
        tracing::debug!(step, key, item, selected, "item toggled");
        Ok(selected)
    }

    /// Evaluates the validator of `step` against the current values.
    ///
    /// # Errors
    ///
    /// `InvalidStepIndex` if `step` is out of range.
    pub fn can_advance(&self, step: usize) -> Result<bool> {
        let step_spec = self.schema.step(step)?;
        Ok(step_spec.is_valid(&self.step_values(step_spec)))
    }

    /// Moves one step forward if the current step validates.
    ///
    /// Returns `Ok(false)` without changing state when validation fails or
    /// the wizard is already on its last step.
    pub fn next(&mut self) -> Result<bool> {
        self.ensure_not_terminal()?;

        let current = self.state.current_step;
        if !self.can_advance(current)? {
            tracing::debug!(step = current, "next rejected: step incomplete");
            return Ok(false);
        }
        if self.is_last_step() {
            return Ok(false);
        }

        self.state.current_step += 1;
        tracing::debug!(from = current, to = current + 1, "advanced");
        Ok(true)
    }

    /// Moves one step back. Never re-validates; a no-op on the first step.
    pub fn previous(&mut self) -> Result<bool> {
        self.ensure_not_terminal()?;

        if self.state.current_step == 0 {
            return Ok(false);
        }
        self.state.current_step -= 1;
        tracing::debug!(to = self.state.current_step, "went back");
        Ok(true)
    }

    /// Submits the form from the last step.
    ///
    /// Returns the full value snapshot and enters the terminal state when
    /// on the last step and it validates; otherwise `Ok(None)` with no
    /// change.
    ///
    /// # Errors
    ///
    /// `AlreadySubmitted` on any call after a successful submit.
    pub fn submit(&mut self) -> Result<Option<FieldValues>> {
        self.ensure_not_terminal()?;

        let last = self.schema.len() - 1;
        if self.state.current_step != last || !self.can_advance(last)? {
            tracing::debug!(step = self.state.current_step, "submit rejected");
            return Ok(None);
        }

        self.state.terminal = true;
        tracing::info!(fields = self.state.values.len(), "wizard submitted");
        Ok(Some(self.state.values.clone()))
    }

    /// `(current + 1) / total * 100`, for display only.
    pub fn progress_percent(&self) -> f64 {
        (self.state.current_step + 1) as f64 / self.schema.len() as f64 * 100.0
    }

    fn ensure_not_terminal(&self) -> Result<()> {
        if self.state.terminal {
            tracing::warn!("operation rejected: wizard already submitted");
            return Err(NandiError::AlreadySubmitted);
        }
        Ok(())
    }

    fn check_editable(&self, step: usize, key: &str, value: Option<&FieldValue>) -> Result<()> {
        self.ensure_not_terminal()?;

        let step_spec = self.schema.step(step)?;
        let field = step_spec
            .field(key)
            .ok_or_else(|| NandiError::field_not_found(step, key))?;

        if let Some(value) = value {
            if value.kind() != field.kind {
                return Err(NandiError::FieldKindMismatch {
                    key: key.to_string(),
                    expected: field.kind.to_string(),
                    actual: value.kind().to_string(),
                });
            }
        }

        if step != self.state.current_step {
            tracing::warn!(step, current = self.state.current_step, key, "out-of-order edit");
            return Err(NandiError::StepOutOfOrder {
                requested: step,
                current: self.state.current_step,
            });
        }
        Ok(())
    }

    fn step_values(&self, step_spec: &StepSpec) -> FieldValues {
        step_spec.fields
            .iter()
            .filter_map(|field| {
                self.state
                    .values
                    .get(&field.key)
                    .map(|value| (field.key.clone(), value.clone()))
            })
            .collect()
    }
}
