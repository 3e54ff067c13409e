//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the registry's input rules (positive identifiers,
//! digit-only phone numbers, a closed set of roles) so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number is not 10 or 11 digits.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Role name is not one of the known roles.
    #[error("invalid role: {0}")]
    InvalidRole(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ProfessionalId, "Unique identifier for a professional.");
id_newtype!(ContactId, "Unique identifier for a contact.");

/// Returns `true` when `phone`, once trimmed, is 10 or 11 ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    matches!(phone.len(), 10 | 11) && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Trimmed phone number made only of digits.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validates the phone number and stores its trimmed form.
    pub fn new<S: AsRef<str>>(phone: S) -> Result<Self, TypeConstraintError> {
        let phone = phone.as_ref();
        if is_valid_phone(phone) {
            Ok(Self(phone.trim().to_string()))
        } else {
            Err(TypeConstraintError::InvalidPhone)
        }
    }

    /// Borrow the phone number as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Non-empty, trimmed display name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Trims the name and rejects it when nothing is left.
    pub fn new<S: AsRef<str>>(name: S) -> Result<Self, TypeConstraintError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            Err(TypeConstraintError::EmptyString)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Borrow the name as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PersonName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position held by a professional.
///
/// The machine value (`as_str`) is what gets persisted and searched; the
/// label is what clients see.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Desenvolvedor,
    Designer,
    Suporte,
    Tester,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Desenvolvedor,
        Role::Designer,
        Role::Suporte,
        Role::Tester,
    ];

    /// Upper-case value stored in the `professionals.role` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Desenvolvedor => "DESENVOLVEDOR",
            Role::Designer => "DESIGNER",
            Role::Suporte => "SUPORTE",
            Role::Tester => "TESTER",
        }
    }

    /// Human readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Role::Desenvolvedor => "Desenvolvedor",
            Role::Designer => "Designer",
            Role::Suporte => "Suporte",
            Role::Tester => "Tester",
        }
    }

    /// Case-insensitive lookup accepting the stored values and their English
    /// names (`Developer`, `Support`).
    pub fn parse(raw: &str) -> Result<Self, TypeConstraintError> {
        let upper = raw.trim().to_uppercase();
        let role = match upper.as_str() {
            "DESENVOLVEDOR" | "DEVELOPER" => Role::Desenvolvedor,
            "DESIGNER" => Role::Designer,
            "SUPORTE" | "SUPPORT" => Role::Suporte,
            "TESTER" => Role::Tester,
            _ => return Err(TypeConstraintError::InvalidRole(raw.to_string())),
        };
        Ok(role)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(ProfessionalId::new(3).unwrap().get(), 3);
        assert_eq!(ContactId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ContactId::try_from(-7), Err(TypeConstraintError::NonPositiveId));
    }

    #[test]
    fn phone_accepts_ten_or_eleven_digits() {
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone("12345678901"));
        assert!(is_valid_phone("  1234567890 "));
    }

    #[test]
    fn phone_rejects_everything_else() {
        for phone in [
            "",
            "   ",
            "123",
            "123456789",
            "123456789012",
            "12345abcde",
            "(11)9876543",
            "123 4567890",
            "١٢٣٤٥٦٧٨٩٠",
        ] {
            assert!(!is_valid_phone(phone), "{phone:?} should be rejected");
        }
    }

    #[test]
    fn phone_number_is_stored_trimmed() {
        let phone = PhoneNumber::new(" 11987654321\n").unwrap();
        assert_eq!(phone.as_str(), "11987654321");
        assert_eq!(
            PhoneNumber::try_from("98765"),
            Err(TypeConstraintError::InvalidPhone)
        );
    }

    #[test]
    fn person_name_rejects_blank() {
        assert_eq!(PersonName::new("  Ana ").unwrap().as_str(), "Ana");
        assert_eq!(PersonName::new(" "), Err(TypeConstraintError::EmptyString));
        assert_eq!(PersonName::new("\tJoão\n").unwrap().into_inner(), "João");
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("desenvolvedor").unwrap(), Role::Desenvolvedor);
        assert_eq!(Role::parse("Developer").unwrap(), Role::Desenvolvedor);
        assert_eq!(Role::parse("DESIGNER").unwrap(), Role::Designer);
        assert_eq!(Role::parse("support").unwrap(), Role::Suporte);
        assert_eq!("tEsTeR".parse::<Role>().unwrap(), Role::Tester);
    }

    #[test]
    fn role_parse_rejects_unknown() {
        assert_eq!(
            Role::parse("Astronauta"),
            Err(TypeConstraintError::InvalidRole("Astronauta".to_string()))
        );
        assert!(Role::parse("").is_err());
    }

    #[test]
    fn every_role_round_trips_through_its_stored_value() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()).unwrap(), role);
        }
        assert_eq!(Role::Suporte.label(), "Suporte");
        assert_eq!(Role::Tester.to_string(), "Tester");
    }
}
