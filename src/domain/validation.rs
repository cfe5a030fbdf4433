//! Field rules for user records.
//!
//! Every field is checked independently and all violations are collected.
//! Values are trimmed before checking; a blank field reports only its blank
//! message, otherwise the `validator` rules below apply.

use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use super::user::{CanonicalUserRecord, ValidatedUserRecord};

pub const NAME_BLANK: &str = "Name cannot be blank.";
pub const NAME_TOO_LONG: &str = "Name cannot exceed 100 characters.";
pub const EMAIL_BLANK: &str = "Email cannot be blank.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const AGE_BLANK: &str = "Age cannot be blank.";
pub const AGE_TOO_LONG: &str = "Age cannot exceed 100 characters.";

/// Trimmed field values checked by the derived rules.
#[derive(Debug, Validate)]
struct UserFields {
    #[validate(length(max = 100, message = "Name cannot exceed 100 characters."))]
    name: String,
    #[validate(email(message = "Enter a valid email address."))]
    email: String,
    #[validate(length(max = 100, message = "Age cannot exceed 100 characters."))]
    age: String,
}

/// Violated-rule messages per field, in rule order.
///
/// Serializes as an object keyed by field name; fields without violations
/// are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    name: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    email: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    age: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.age.is_empty()
    }

    /// Messages recorded for `field`; empty for unknown fields.
    pub fn get(&self, field: &str) -> &[String] {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "age" => &self.age,
            _ => &[],
        }
    }

    /// Fields with at least one violation, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        [
            ("name", self.name.as_slice()),
            ("email", self.email.as_slice()),
            ("age", self.age.as_slice()),
        ]
        .into_iter()
        .filter(|(_, messages)| !messages.is_empty())
    }

    fn slot(&mut self, field: &str) -> Option<&mut Vec<String>> {
        match field {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "age" => Some(&mut self.age),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Check a canonical record against the field rules.
pub fn validate(record: &CanonicalUserRecord) -> Result<ValidatedUserRecord, FieldErrors> {
    let fields = UserFields {
        name: record.name.trim().to_string(),
        email: record.email.trim().to_string(),
        age: record.age.trim().to_string(),
    };

    let mut errors = FieldErrors::default();
    for (field, value, blank_message) in [
        ("name", &fields.name, NAME_BLANK),
        ("email", &fields.email, EMAIL_BLANK),
        ("age", &fields.age, AGE_BLANK),
    ] {
        if value.is_empty() {
            if let Some(slot) = errors.slot(field) {
                slot.push(blank_message.to_string());
            }
        }
    }

    if let Err(report) = fields.validate() {
        for (field, violations) in report.field_errors() {
            let field: &str = &field;
            if !errors.get(field).is_empty() {
                continue;
            }
            if let Some(slot) = errors.slot(field) {
                slot.extend(violations.iter().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                }));
            }
        }
    }

    if errors.is_empty() {
        Ok(ValidatedUserRecord::new(fields.name, fields.email, fields.age))
    } else {
        Err(errors)
    }
}
