//! The four-step farmer registration form.

use strum::IntoEnumIterator;

use super::field::{FieldSpec, FieldValue};
use super::schema::{StepSpec, WizardSchema};
use crate::error::Result;
use crate::language::Language;

pub const INDIAN_STATES: [&str; 15] = [
    "Andhra Pradesh",
    "Bihar",
    "Gujarat",
    "Haryana",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Tamil Nadu",
    "Telangana",
    "Uttar Pradesh",
    "West Bengal",
];

pub const CROPS: [&str; 12] = [
    "Rice",
    "Wheat",
    "Cotton",
    "Sugarcane",
    "Maize",
    "Soybean",
    "Groundnut",
    "Sunflower",
    "Mustard",
    "Pulses",
    "Vegetables",
    "Fruits",
];

pub const FARM_SIZE_UNITS: [&str; 3] = ["acres", "hectares", "bigha"];

pub const LAND_OWNERSHIP: [&str; 4] = ["owned", "leased", "sharecropping", "mixed"];

pub const IRRIGATION_TYPES: [&str; 6] = ["rainfed", "canal", "borewell", "drip", "sprinkler", "mixed"];

pub const CONTACT_CHANNELS: [&str; 3] = ["sms", "voice", "both"];

/// Builds the registration schema.
///
/// Required fields gate each step; the last step additionally needs both
/// consent checkboxes ticked.
pub fn registration_schema() -> Result<WizardSchema> {
    WizardSchema::new(vec![
        StepSpec::new(
            "Personal Information",
            vec![
                FieldSpec::text("fullName", "Full Name").required(),
                FieldSpec::text("phoneNumber", "Mobile Number").required(),
                FieldSpec::text("alternatePhone", "Alternate Mobile Number"),
                FieldSpec::text("language", "Preferred Language").required(),
            ],
        ),
        StepSpec::new(
            "Location Details",
            vec![
                FieldSpec::text("state", "State").required(),
                FieldSpec::text("district", "District").required(),
                FieldSpec::text("village", "Village/Town").required(),
                FieldSpec::text("pincode", "PIN Code"),
            ],
        ),
        StepSpec::new(
            "Farm Information",
            vec![
                FieldSpec::text("farmSize", "Farm Size").required(),
                FieldSpec::text("farmSizeUnit", "Unit").with_default(FARM_SIZE_UNITS[0]),
                FieldSpec::text("landOwnership", "Land Ownership").required(),
                FieldSpec::multi_select("primaryCrops", "Primary Crops").required(),
                FieldSpec::text("secondaryCrops", "Secondary Crops"),
                FieldSpec::text("irrigationType", "Irrigation Type"),
            ],
        ),
        StepSpec::new(
            "Preferences & Terms",
            vec![
                FieldSpec::text("monthlyIncome", "Monthly Income"),
                FieldSpec::flag("hasLoan", "Has an existing loan"),
                FieldSpec::flag("bankAccount", "Has a bank account"),
                FieldSpec::text("preferredContact", "Preferred Contact Method")
                    .with_default(CONTACT_CHANNELS[0]),
                FieldSpec::flag("marketUpdates", "Receive daily market price updates")
                    .with_default(FieldValue::Flag(true)),
                FieldSpec::flag("weatherAlerts", "Receive weather alerts and farming tips")
                    .with_default(FieldValue::Flag(true)),
                FieldSpec::flag("agreeTerms", "I agree to the Terms of Service").required(),
                FieldSpec::flag("agreeDataUsage", "I consent to data usage for advisory services")
                    .required(),
            ],
        ),
    ])
}

/// Language codes accepted by the `language` field.
pub fn registration_languages() -> impl Iterator<Item = Language> {
    Language::iter()
}
