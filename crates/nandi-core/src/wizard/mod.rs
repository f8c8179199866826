//! Multi-step form wizard with per-step validation gating.
//!
//! A [`WizardSchema`] declares the ordered steps and their fields; a
//! [`StepWizard`] owns the mutable [`WizardState`] and is the only way to
//! change it. Navigation forward is gated on the current step's validator,
//! navigation backward never is, and a successful [`StepWizard::submit`]
//! moves the wizard into a terminal state that rejects every further
//! mutation with `NandiError::AlreadySubmitted`.

mod controller;
mod field;
mod registration;
mod schema;

pub use controller::{StepWizard, WizardState};
pub use field::{FieldKind, FieldSpec, FieldValue, FieldValues};
pub use registration::{
    CONTACT_CHANNELS, CROPS, FARM_SIZE_UNITS, INDIAN_STATES, IRRIGATION_TYPES, LAND_OWNERSHIP,
    registration_languages, registration_schema,
};
pub use schema::{StepSpec, StepValidator, WizardSchema};
