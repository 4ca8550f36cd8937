//! Input validation errors shared by all write requests.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raised before any store access when a write request is malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required field is empty or whitespace only.
    MissingField(&'static str),
    /// Field must be numeric but the given text does not parse.
    NotNumeric { field: &'static str, value: String },
    /// Salary parsed but is NaN or infinite.
    NonFiniteSalary(f64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::NotNumeric { field, value } => {
                write!(f, "{field} must be numeric, got `{value}`")
            }
            Self::NonFiniteSalary(value) => write!(f, "salary must be a finite number, got {value}"),
        }
    }
}

impl Error for ValidationError {}

/// Trims `value` and rejects it when nothing is left.
pub fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Parses a required integer id.
pub fn required_id(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    parse_id(field, trimmed)
}

/// Parses an optional integer id. Blank input means "none".
pub fn optional_id(field: &'static str, value: &str) -> Result<Option<i64>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_id(field, trimmed).map(Some)
}

/// Parses a required salary amount.
pub fn required_salary(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("salary"));
    }
    let salary = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::NotNumeric {
            field: "salary",
            value: trimmed.to_string(),
        })?;
    if !salary.is_finite() {
        return Err(ValidationError::NonFiniteSalary(salary));
    }
    Ok(salary)
}

fn parse_id(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    value.parse::<i64>().map_err(|_| ValidationError::NotNumeric {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{optional_id, required_id, required_salary, required_text, ValidationError};

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(required_text("name", "  Legal ").unwrap(), "Legal");
        assert_eq!(
            required_text("name", " \t").unwrap_err(),
            ValidationError::MissingField("name")
        );
    }

    #[test]
    fn optional_id_maps_blank_to_none() {
        assert_eq!(optional_id("manager_id", "").unwrap(), None);
        assert_eq!(optional_id("manager_id", "   ").unwrap(), None);
        assert_eq!(optional_id("manager_id", " 12 ").unwrap(), Some(12));
    }

    #[test]
    fn ids_must_be_integers() {
        let err = required_id("role_id", "abc").unwrap_err();
        assert!(matches!(err, ValidationError::NotNumeric { field: "role_id", .. }));
        assert!(matches!(
            required_id("role_id", "1.5"),
            Err(ValidationError::NotNumeric { .. })
        ));
    }

    #[test]
    fn salary_accepts_decimals_and_rejects_non_finite() {
        assert_eq!(required_salary("90000.50").unwrap(), 90000.5);
        assert!(matches!(
            required_salary("lots"),
            Err(ValidationError::NotNumeric { field: "salary", .. })
        ));
        assert!(matches!(
            required_salary("inf"),
            Err(ValidationError::NonFiniteSalary(_))
        ));
    }
}
