//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, normalized
//! email, valid CPF, non-negative monthly fee) so that once a value reaches
//! the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};

use phonenumber::{Mode, country, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// CPF failed length or check-digit validation.
    #[error("invalid tax id")]
    InvalidTaxId,
    /// Monthly fee was negative or not a finite number.
    #[error("invalid monthly fee")]
    InvalidMonthlyFee,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
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

id_newtype!(ClientId, "Unique identifier for a client.");
id_newtype!(DependentId, "Unique identifier for a dependent.");
id_newtype!(PaymentId, "Unique identifier for a payment.");

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClientEmail(String);

impl ClientEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ClientEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ClientEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ClientEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientEmail> for String {
    fn from(value: ClientEmail) -> Self {
        value.0
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client name wrapper enforcing trimmed, non-empty values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientName(String);

impl ClientName {
    /// Constructs a trimmed, non-empty value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?;
        Ok(Self(inner.into_inner()))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ClientName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ClientName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ClientName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientName> for String {
    fn from(value: ClientName) -> Self {
        value.0
    }
}

/// Normalizes a phone number string to E.164 format. Numbers without a
/// country prefix are parsed as Brazilian.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed =
        parse(Some(country::BR), trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

/// Normalized phone number wrapper (expected E.164).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Constructs a phone number ensuring it is valid and normalizes to E.164 format.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_phone_to_e164(&value.into())?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

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

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

/// Validated Brazilian CPF, stored as its eleven digits.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TaxId(String);

impl TaxId {
    /// Strips punctuation and validates length and both check digits.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let digits: String = value
            .into()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if digits.len() != 11 {
            return Err(TypeConstraintError::InvalidTaxId);
        }

        let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

        // CPFs made of a single repeated digit pass the check-digit math but
        // are not issued.
        if d.iter().all(|&v| v == d[0]) {
            return Err(TypeConstraintError::InvalidTaxId);
        }

        if check_digit(&d[..9], 10) != d[9] || check_digit(&d[..10], 11) != d[10] {
            return Err(TypeConstraintError::InvalidTaxId);
        }

        Ok(Self(digits))
    }

    /// Borrow the digits as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Formats the CPF with its conventional punctuation (000.000.000-00).
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..]
        )
    }
}

fn check_digit(digits: &[u32], start_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &v)| v * (start_weight - i as u32))
        .sum();
    match 11 - sum % 11 {
        dv if dv >= 10 => 0,
        dv => dv,
    }
}

impl Display for TaxId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl TryFrom<String> for TaxId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TaxId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaxId> for String {
    fn from(value: TaxId) -> Self {
        value.0
    }
}

/// Non-negative, finite monthly plan fee in BRL.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MonthlyFee(f64);

impl MonthlyFee {
    /// Rejects NaN, infinities and negative amounts.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidMonthlyFee)
        }
    }

    /// Parses a raw decimal string, then applies the numeric invariant.
    pub fn parse(raw: &str) -> Result<Self, TypeConstraintError> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| TypeConstraintError::InvalidMonthlyFee)
            .and_then(Self::new)
    }

    /// Returns the raw `f64` backing this fee.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for MonthlyFee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for MonthlyFee {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonthlyFee> for f64 {
    fn from(value: MonthlyFee) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_rejects_non_positive() {
        assert!(ClientId::new(1).is_ok());
        assert_eq!(ClientId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ClientId::new(-3), Err(TypeConstraintError::NonPositiveId));
    }

    #[test]
    fn tax_id_accepts_valid_cpf() {
        let cpf = TaxId::new("529.982.247-25").unwrap();
        assert_eq!(cpf.as_str(), "52998224725");
        assert_eq!(cpf.formatted(), "529.982.247-25");

        assert!(TaxId::new("52998224725").is_ok());
    }

    #[test]
    fn tax_id_rejects_bad_check_digits() {
        assert_eq!(
            TaxId::new("123.456.789-00"),
            Err(TypeConstraintError::InvalidTaxId)
        );
    }

    #[test]
    fn tax_id_rejects_repeated_digits_and_bad_length() {
        assert_eq!(
            TaxId::new("111.111.111-11"),
            Err(TypeConstraintError::InvalidTaxId)
        );
        assert_eq!(TaxId::new("1234"), Err(TypeConstraintError::InvalidTaxId));
        assert_eq!(TaxId::new(""), Err(TypeConstraintError::InvalidTaxId));
    }

    #[test]
    fn monthly_fee_guards_numeric_invariant() {
        assert_eq!(MonthlyFee::parse("12.5").unwrap().get(), 12.5);
        assert_eq!(MonthlyFee::parse(" 0 ").unwrap().get(), 0.0);
        assert_eq!(
            MonthlyFee::parse("abc"),
            Err(TypeConstraintError::InvalidMonthlyFee)
        );
        assert_eq!(
            MonthlyFee::parse("-10"),
            Err(TypeConstraintError::InvalidMonthlyFee)
        );
        assert_eq!(
            MonthlyFee::parse("NaN"),
            Err(TypeConstraintError::InvalidMonthlyFee)
        );
        assert_eq!(
            MonthlyFee::new(f64::INFINITY),
            Err(TypeConstraintError::InvalidMonthlyFee)
        );
    }

    #[test]
    fn email_is_normalized() {
        let email = ClientEmail::new("  Maria@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "maria@example.com");
        assert!(ClientEmail::new("not-an-email").is_err());
    }
}
