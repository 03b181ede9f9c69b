//! Validation of a submitted form snapshot.

use std::fmt;

use crate::field::TextField;
use crate::record::{Loves, PoetRecord};

/// Raw form values read at submission time.
///
/// `second_love` is read even when its input is disabled; only
/// `has_second_love` decides whether it is required and kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub era: String,
    pub first_love: String,
    pub second_love: String,
    pub has_second_love: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", TextField::Name.missing_message())]
    MissingName,
    #[error("{}", TextField::Era.missing_message())]
    MissingEra,
    #[error("{}", TextField::FirstLove.missing_message())]
    MissingFirstLove,
    #[error("{}", TextField::SecondLove.missing_message())]
    MissingSecondLove,
}

impl ValidationError {
    /// The field whose error slot shows this error.
    pub fn field(self) -> TextField {
        match self {
            Self::MissingName => TextField::Name,
            Self::MissingEra => TextField::Era,
            Self::MissingFirstLove => TextField::FirstLove,
            Self::MissingSecondLove => TextField::SecondLove,
        }
    }

    pub fn message(self) -> &'static str {
        self.field().missing_message()
    }
}

/// Every rule that failed on one submission, in rule order. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    pub fn iter(&self) -> impl Iterator<Item = ValidationError> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks all four rules without short-circuiting and builds the record
/// when every rule passes.
pub fn validate(input: &FormInput) -> Result<PoetRecord, ValidationErrors> {
    let mut errors = Vec::new();
    if input.name.is_empty() {
        errors.push(ValidationError::MissingName);
    }
    if input.era.is_empty() {
        errors.push(ValidationError::MissingEra);
    }
    if input.first_love.is_empty() {
        errors.push(ValidationError::MissingFirstLove);
    }
    if input.has_second_love && input.second_love.is_empty() {
        errors.push(ValidationError::MissingSecondLove);
    }
    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    let loves = if input.has_second_love {
        Loves::WithTwoLoves {
            first: input.first_love.clone(),
            second: input.second_love.clone(),
        }
    } else {
        Loves::WithOneLove(input.first_love.clone())
    };
    Ok(PoetRecord::new(input.name.clone(), input.era.clone(), loves))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FormInput {
        FormInput {
            name: "Petőfi".into(),
            era: "Romantic".into(),
            first_love: "Júlia".into(),
            second_love: String::new(),
            has_second_love: false,
        }
    }

    #[test]
    fn error_display_matches_slot_message() {
        for error in [
            ValidationError::MissingName,
            ValidationError::MissingEra,
            ValidationError::MissingFirstLove,
            ValidationError::MissingSecondLove,
        ] {
            assert_eq!(error.to_string(), error.message());
        }
    }

    #[test]
    fn all_rules_are_reported_together() {
        let input = FormInput {
            has_second_love: true,
            ..FormInput::default()
        };
        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors.as_slice(),
            &[
                ValidationError::MissingName,
                ValidationError::MissingEra,
                ValidationError::MissingFirstLove,
                ValidationError::MissingSecondLove,
            ]
        );
    }

    #[test]
    fn second_love_is_ignored_when_toggle_is_off() {
        let input = FormInput {
            second_love: "left over".into(),
            ..complete()
        };
        let record = validate(&input).unwrap();
        assert_eq!(record.second_love(), None);
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        let input = FormInput {
            name: " ".into(),
            ..complete()
        };
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn errors_join_for_display() {
        let input = FormInput {
            name: String::new(),
            era: String::new(),
            ..complete()
        };
        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Kérem adja meg a költő nevét!; Kérem adja meg a korszakot!"
        );
    }
}
