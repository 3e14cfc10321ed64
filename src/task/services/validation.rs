//! Request validation applied before any store mutation.
//!
//! Request fields hold raw JSON values so that a field of the wrong type is
//! reported on its own instead of failing the whole body. A non-string text
//! field counts as missing; a non-string category or urgency is invalid.

use crate::task::domain::{Category, NewTask, RequiredText, Urgency, Volunteer};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// Request payload for opening a help request.
///
/// Every field is optional so that absent and empty values can be reported
/// together. JSON `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Short summary of the request.
    pub title: Option<Value>,
    /// What the volunteer is asked to do.
    pub description: Option<Value>,
    /// One of the category labels, e.g. `Elderly Care`.
    pub category: Option<Value>,
    /// One of `Low`, `Medium`, `High`.
    pub urgency: Option<Value>,
    /// Where the help is needed.
    pub location: Option<Value>,
    /// Who asked for help.
    pub requester_name: Option<Value>,
}

impl CreateTaskRequest {
    /// Creates a request with every field present.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        urgency: impl Into<String>,
        location: impl Into<String>,
        requester_name: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            description: Some(Value::String(description.into())),
            category: Some(Value::String(category.into())),
            urgency: Some(Value::String(urgency.into())),
            location: Some(Value::String(location.into())),
            requester_name: Some(Value::String(requester_name.into())),
        }
    }

    /// Reads the known keys of a decoded JSON object. Unknown keys are
    /// ignored.
    #[must_use]
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        Self {
            title: take_field(&mut object, "title"),
            description: take_field(&mut object, "description"),
            category: take_field(&mut object, "category"),
            urgency: take_field(&mut object, "urgency"),
            location: take_field(&mut object, "location"),
            requester_name: take_field(&mut object, "requesterName"),
        }
    }
}

/// Request payload for claiming a task.
///
/// `volunteer_note` must be present but may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClaimTaskRequest {
    /// Name of the volunteer taking the task.
    pub volunteer_name: Option<Value>,
    /// Note from the volunteer; an empty string is accepted.
    pub volunteer_note: Option<Value>,
}

impl ClaimTaskRequest {
    /// Creates a request with both fields present.
    #[must_use]
    pub fn new(volunteer_name: impl Into<String>, volunteer_note: impl Into<String>) -> Self {
        Self {
            volunteer_name: Some(Value::String(volunteer_name.into())),
            volunteer_note: Some(Value::String(volunteer_note.into())),
        }
    }

    /// Reads the known keys of a decoded JSON object. Unknown keys are
    /// ignored.
    #[must_use]
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        Self {
            volunteer_name: take_field(&mut object, "volunteerName"),
            volunteer_note: take_field(&mut object, "volunteerNote"),
        }
    }
}

fn take_field(object: &mut Map<String, Value>, key: &str) -> Option<Value> {
    object.remove(key).filter(|value| !value.is_null())
}

/// Returns the string inside `value`, or `None` for any other JSON type.
fn string_value(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

/// Every problem found in a request, reported at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    missing: Vec<&'static str>,
    invalid: Vec<&'static str>,
}

impl ValidationError {
    /// Returns the fields that were absent or empty, in request order.
    #[must_use]
    pub fn missing_fields(&self) -> &[&'static str] {
        &self.missing
    }

    /// Returns the fields whose values were outside the allowed set.
    #[must_use]
    pub fn invalid_fields(&self) -> &[&'static str] {
        &self.invalid
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(1 + self.invalid.len());
        if !self.missing.is_empty() {
            parts.push(format!("Missing fields: {}", self.missing.join(", ")));
        }
        parts.extend(self.invalid.iter().map(|field| format!("Invalid {field}")));
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Takes a non-empty string or records `field` as missing.
fn required(
    errors: &mut ValidationError,
    field: &'static str,
    value: Option<Value>,
) -> Option<RequiredText> {
    let text = string_value(value).and_then(|raw| RequiredText::new(field, raw).ok());
    if text.is_none() {
        errors.missing.push(field);
    }
    text
}

/// Parses an enumerated value, recording missing or invalid input.
fn enumerated<T>(
    errors: &mut ValidationError,
    field: &'static str,
    value: Option<&Value>,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    match value {
        None => {
            errors.missing.push(field);
            None
        }
        Some(Value::String(raw)) if raw.is_empty() => {
            errors.missing.push(field);
            None
        }
        Some(Value::String(raw)) => {
            let parsed = parse(raw);
            if parsed.is_none() {
                errors.invalid.push(field);
            }
            parsed
        }
        Some(_) => {
            errors.invalid.push(field);
            None
        }
    }
}

/// Validates a create request into task fields.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming every missing or invalid field.
pub fn validate_create(request: CreateTaskRequest) -> Result<NewTask, ValidationError> {
    let mut errors = ValidationError::default();
    let title = required(&mut errors, "title", request.title);
    let description = required(&mut errors, "description", request.description);
    let category = enumerated(
        &mut errors,
        "category",
        request.category.as_ref(),
        |raw| Category::try_from(raw).ok(),
    );
    let urgency = enumerated(&mut errors, "urgency", request.urgency.as_ref(), |raw| {
        Urgency::try_from(raw).ok()
    });
    let location = required(&mut errors, "location", request.location);
    let requester_name = required(&mut errors, "requesterName", request.requester_name);

    match (title, description, category, urgency, location, requester_name) {
        (
            Some(title),
            Some(description),
            Some(category),
            Some(urgency),
            Some(location),
            Some(requester_name),
        ) => Ok(NewTask {
            title,
            description,
            category,
            urgency,
            location,
            requester_name,
        }),
        _ => Err(errors),
    }
}

/// Validates a claim request into volunteer details.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the name is absent, empty, or not a
/// string, or the note is absent or not a string.
pub fn validate_claim(request: ClaimTaskRequest) -> Result<Volunteer, ValidationError> {
    let mut errors = ValidationError::default();
    let name = required(&mut errors, "volunteerName", request.volunteer_name);
    let note = string_value(request.volunteer_note);
    if note.is_none() {
        errors.missing.push("volunteerNote");
    }

    match (name, note) {
        (Some(name), Some(note)) => Ok(Volunteer::new(name, note)),
        _ => Err(errors),
    }
}
