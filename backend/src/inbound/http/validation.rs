//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::domain::{EmailAddress, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

pub(crate) fn parse_uuid(value: String, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(&value).map_err(|_| invalid_uuid_error(field, &value))
}

/// Pull a required field out of an optional DTO slot.
pub(crate) fn require_field<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Pull a required text field, treating blank input the same as absence.
pub(crate) fn require_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    let value = require_field(value, field)?;
    if value.trim().is_empty() {
        return Err(missing_field_error(field));
    }
    Ok(value)
}

/// Pull and validate a required email field.
pub(crate) fn parse_email(value: Option<String>, field: FieldName) -> Result<EmailAddress, Error> {
    let value = require_text(value, field)?;
    EmailAddress::new(&value).map_err(|err| {
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": field.as_str(), "code": "invalid_email" }))
    })
}

/// Pull a required password field into zeroed-on-drop storage.
pub(crate) fn parse_password(value: Option<String>) -> Result<Zeroizing<String>, Error> {
    let field = FieldName::new("password");
    let password = require_field(value, field)?;
    if password.is_empty() {
        return Err(Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": field.as_str(), "code": "empty_password" })));
    }
    Ok(Zeroizing::new(password))
}
