use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use nandi_application::{LoggingSubmissionHandler, RegistrationFlow};
use nandi_core::wizard::{
    CONTACT_CHANNELS, CROPS, FARM_SIZE_UNITS, FieldKind, FieldSpec, FieldValue, INDIAN_STATES,
    IRRIGATION_TYPES, LAND_OWNERSHIP, StepWizard, registration_languages,
};

enum Answer {
    Keep,
    Set(FieldValue),
    Toggle(Vec<String>),
    Back,
    Quit,
}

pub async fn run() -> Result<()> {
    let mut flow = RegistrationFlow::new(Arc::new(LoggingSubmissionHandler))?;
    let mut rl = DefaultEditor::new()?;

    println!("{}", "=== Farmer Registration ===".bright_magenta().bold());
    println!(
        "{}",
        "Press Enter to keep the current value, 'back' for the previous step, 'quit' to abort."
            .bright_black()
    );

    loop {
        let index = flow.wizard().current_step();
        let step = flow.wizard().current_spec().clone();
        println!();
        println!(
            "{}",
            format!(
                "Step {} of {}: {} ({:.0}%)",
                index + 1,
                flow.wizard().total_steps(),
                step.title,
                flow.wizard().progress_percent()
            )
            .bold()
        );

        let mut went_back = false;
        for field in &step.fields {
            match ask(&mut rl, flow.wizard(), field)? {
                Answer::Keep => {}
                Answer::Set(value) => flow.wizard_mut().update_field(index, &field.key, value)?,
                Answer::Toggle(items) => {
                    for item in items {
                        flow.wizard_mut().toggle_item(index, &field.key, &item)?;
                    }
                }
                Answer::Back => {
                    if !flow.wizard_mut().previous()? {
                        println!("{}", "Already on the first step.".yellow());
                    }
                    went_back = true;
                    break;
                }
                Answer::Quit => {
                    println!("{}", "Registration aborted.".yellow());
                    return Ok(());
                }
            }
        }
        if went_back {
            continue;
        }

        if flow.wizard().is_last_step() {
            if let Some(message) = flow.submit().await? {
                println!();
                println!("{}", format!("🎉 {}", message).bright_green());
                return Ok(());
            }
            report_missing(flow.wizard(), index);
        } else if !flow.wizard_mut().next()? {
            report_missing(flow.wizard(), index);
        }
    }
}

fn ask(rl: &mut DefaultEditor, wizard: &StepWizard, field: &FieldSpec) -> Result<Answer> {
    let marker = if field.required { "*" } else { "" };
    let choices = choices_for(&field.key);
    if let Some(choices) = &choices {
        println!("  {}", format!("options: {}", choices.join(", ")).bright_black());
    }

    loop {
        let current = describe(wizard.values().get(&field.key));
        let prompt = format!("  {}{} [{}]: ", field.label, marker, current);
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(Answer::Quit),
            Err(err) => return Err(err.into()),
        };
        let input = line.trim();

        match input {
            "" => return Ok(Answer::Keep),
            "back" => return Ok(Answer::Back),
            "quit" | "exit" => return Ok(Answer::Quit),
            _ => {}
        }

        match field.kind {
            FieldKind::Text => match &choices {
                Some(choices) => match pick(choices, input) {
                    Some(choice) => return Ok(Answer::Set(FieldValue::text(choice))),
                    None => println!("  {}", "Not one of the options.".yellow()),
                },
                None => return Ok(Answer::Set(FieldValue::text(input))),
            },
            FieldKind::MultiSelect => {
                let mut items = Vec::new();
                let mut rejected = Vec::new();
                for raw in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    match &choices {
                        Some(choices) => match pick(choices, raw) {
                            Some(choice) => items.push(choice.to_string()),
                            None => rejected.push(raw),
                        },
                        None => items.push(raw.to_string()),
                    }
                }
                if rejected.is_empty() {
                    return Ok(Answer::Toggle(items));
                }
                println!("  {}", format!("Unknown: {}", rejected.join(", ")).yellow());
            }
            FieldKind::Flag => match input.to_lowercase().as_str() {
                "y" | "yes" => return Ok(Answer::Set(FieldValue::Flag(true))),
                "n" | "no" => return Ok(Answer::Set(FieldValue::Flag(false))),
                _ => println!("  {}", "Answer y or n.".yellow()),
            },
        }
    }
}

fn report_missing(wizard: &StepWizard, index: usize) {
    let values = wizard.values();
    let missing: Vec<&str> = wizard
        .current_spec()
        .fields
        .iter()
        .filter(|f| f.required && !values.is_filled(&f.key))
        .map(|f| f.label.as_str())
        .collect();
    tracing::debug!(step = index, missing = missing.len(), "step incomplete");
    println!(
        "{}",
        format!("Please complete: {}", missing.join(", ")).yellow()
    );
}

fn describe(value: Option<&FieldValue>) -> String {
    match value {
        Some(FieldValue::Text(text)) => text.clone(),
        Some(FieldValue::List(items)) => items.join(", "),
        Some(FieldValue::Flag(true)) => "y".to_string(),
        Some(FieldValue::Flag(false)) => "n".to_string(),
        None => String::new(),
    }
}

fn pick<'a>(choices: &'a [String], input: &str) -> Option<&'a str> {
    choices
        .iter()
        .find(|c| c.eq_ignore_ascii_case(input))
        .map(String::as_str)
}

fn choices_for(key: &str) -> Option<Vec<String>> {
    let fixed: &[&str] = match key {
        "language" => return Some(registration_languages().map(|l| l.key().to_string()).collect()),
        "state" => &INDIAN_STATES,
        "farmSizeUnit" => &FARM_SIZE_UNITS,
        "landOwnership" => &LAND_OWNERSHIP,
        "primaryCrops" => &CROPS,
        "irrigationType" => &IRRIGATION_TYPES,
        "preferredContact" => &CONTACT_CHANNELS,
        _ => return None,
    };
    Some(fixed.iter().map(|s| s.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_is_case_insensitive() {
        let choices = choices_for("state").unwrap();
        assert_eq!(pick(&choices, "punjab"), Some("Punjab"));
        assert_eq!(pick(&choices, "Atlantis"), None);
    }

    #[test]
    fn test_free_text_fields_have_no_choices() {
        assert!(choices_for("fullName").is_none());
        assert!(choices_for("language").unwrap().contains(&"hindi".to_string()));
    }

    #[test]
    fn test_describe_values() {
        assert_eq!(describe(Some(&FieldValue::Flag(true))), "y");
        assert_eq!(describe(Some(&FieldValue::list(["Rice", "Wheat"]))), "Rice, Wheat");
        assert_eq!(describe(None), "");
    }
}
