use nandi_core::NandiError;
use nandi_core::wizard::{
    FieldSpec, FieldValue, StepSpec, StepValidator, StepWizard, WizardSchema, registration_schema,
};

fn registration() -> StepWizard {
    StepWizard::new(registration_schema().unwrap())
}

fn fill_to_last_step(wizard: &mut StepWizard) {
    wizard.update_field(0, "fullName", "Ram".into()).unwrap();
    wizard.update_field(0, "phoneNumber", "9876543210".into()).unwrap();
    wizard.update_field(0, "language", "hindi".into()).unwrap();
    assert!(wizard.next().unwrap());

    wizard.update_field(1, "state", "Punjab".into()).unwrap();
    wizard.update_field(1, "district", "Ludhiana".into()).unwrap();
    wizard.update_field(1, "village", "Khanna".into()).unwrap();
    assert!(wizard.next().unwrap());

    wizard.update_field(2, "farmSize", "5".into()).unwrap();
    wizard.update_field(2, "landOwnership", "owned".into()).unwrap();
    wizard.toggle_item(2, "primaryCrops", "Rice").unwrap();
    assert!(wizard.next().unwrap());
}

#[test]
fn test_blank_first_step_does_not_advance() {
    let mut wizard = registration();
    wizard.update_field(0, "fullName", "".into()).unwrap();
    assert!(!wizard.next().unwrap());
    assert_eq!(wizard.current_step(), 0);
}

#[test]
fn test_previous_is_idempotent_at_start() {
    let mut wizard = registration();
    assert!(!wizard.previous().unwrap());
    assert!(!wizard.previous().unwrap());
    assert_eq!(wizard.current_step(), 0);
}

#[test]
fn test_previous_ignores_validity() {
    let mut wizard = registration();
    fill_to_last_step(&mut wizard);
    // last step is still invalid: consents unticked
    assert!(!wizard.can_advance(3).unwrap());
    assert!(wizard.previous().unwrap());
    assert_eq!(wizard.current_step(), 2);

    // clearing a required field does not block going back either
    wizard.update_field(2, "farmSize", "".into()).unwrap();
    assert!(wizard.previous().unwrap());
    assert_eq!(wizard.current_step(), 1);
}

#[test]
fn test_submit_before_last_step_is_noop() {
    let mut wizard = registration();
    wizard.update_field(0, "fullName", "Ram".into()).unwrap();
    assert_eq!(wizard.submit().unwrap(), None);
    assert!(!wizard.is_terminal());
}

#[test]
fn test_second_submit_is_rejected_and_values_unchanged() {
    let mut wizard = registration();
    fill_to_last_step(&mut wizard);
    wizard.update_field(3, "agreeTerms", true.into()).unwrap();
    wizard.update_field(3, "agreeDataUsage", true.into()).unwrap();

    let submitted = wizard.submit().unwrap().unwrap();
    assert!(wizard.is_terminal());

    assert_eq!(wizard.submit(), Err(NandiError::AlreadySubmitted));
    assert_eq!(
        wizard.update_field(3, "monthlyIncome", "20000".into()),
        Err(NandiError::AlreadySubmitted)
    );
    assert_eq!(wizard.previous(), Err(NandiError::AlreadySubmitted));
    assert_eq!(wizard.values(), &submitted);
}

#[test]
fn test_progress_formula() {
    let mut wizard = registration();
    let expected = [25.0, 50.0, 75.0, 100.0];
    assert_eq!(wizard.progress_percent(), expected[0]);
    fill_to_last_step(&mut wizard);
    assert_eq!(wizard.progress_percent(), expected[3]);
    wizard.previous().unwrap();
    assert_eq!(wizard.progress_percent(), expected[2]);
}

#[test]
fn test_out_of_range_step_index() {
    let mut wizard = registration();
    let err = wizard.can_advance(4).unwrap_err();
    assert_eq!(err, NandiError::invalid_step(4, 4));

    let err = wizard.update_field(9, "fullName", "Ram".into()).unwrap_err();
    assert!(err.is_invalid_step());
    assert_eq!(wizard.values().text("fullName"), "");
}

#[test]
fn test_kind_checked_on_write() {
    let mut wizard = registration();
    let err = wizard
        .update_field(0, "fullName", FieldValue::Flag(true))
        .unwrap_err();
    assert!(matches!(err, NandiError::FieldKindMismatch { .. }));
}

#[test]
fn test_custom_validator_gates_step() {
    let schema = WizardSchema::new(vec![
        StepSpec::new(
            "Phone",
            vec![FieldSpec::text("phone", "Phone").required()],
        )
        .with_validator(StepValidator::custom(|values| {
            let phone = values.text("phone");
            phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
        })),
        StepSpec::new("Done", vec![FieldSpec::flag("ok", "Ok")]),
    ])
    .unwrap();

    let mut wizard = StepWizard::new(schema);
    wizard.update_field(0, "phone", "98765".into()).unwrap();
    assert!(!wizard.next().unwrap());
    wizard.update_field(0, "phone", "9876543210".into()).unwrap();
    assert!(wizard.next().unwrap());
    assert!(wizard.is_last_step());
}
