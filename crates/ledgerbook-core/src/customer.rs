//! Customer records and their validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};
use crate::ids::CustomerId;

/// Validation limits for customer fields.
pub mod limits {
    /// Minimum customer name length.
    pub const NAME_MIN: usize = 2;
    /// Maximum customer name length.
    pub const NAME_MAX: usize = 100;
    /// Minimum phone length.
    pub const PHONE_MIN: usize = 10;
    /// Maximum phone length.
    pub const PHONE_MAX: usize = 15;
    /// Maximum email length.
    pub const EMAIL_MAX: usize = 100;
}

/// A customer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier, assigned on creation and immutable.
    pub id: CustomerId,

    /// Display name, 2–100 characters.
    pub name: String,

    /// Phone number, 10–15 characters.
    pub phone: String,

    /// Email, up to 100 characters. Empty when not provided.
    #[serde(default)]
    pub email: String,

    /// Postal address. Empty when not provided.
    #[serde(default)]
    pub address: String,

    /// When the record was created. Set once.
    pub created_at: DateTime<Utc>,

    /// When the record was last mutated.
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or updating a customer.
///
/// All fields are optional at the serialization layer so that missing required
/// fields surface as a `Validation` error rather than a deserialize failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    /// Display name. Required.
    pub name: Option<String>,
    /// Phone number. Required.
    pub phone: Option<String>,
    /// Email. Optional, defaults to empty.
    pub email: Option<String>,
    /// Postal address. Optional, defaults to empty.
    pub address: Option<String>,
}

impl CustomerInput {
    fn validate(&self) -> Result<(String, String)> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LedgerError::validation("name and phone are required"))?;
        let phone = self
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LedgerError::validation("name and phone are required"))?;

        let name_len = name.chars().count();
        if !(limits::NAME_MIN..=limits::NAME_MAX).contains(&name_len) {
            return Err(LedgerError::validation(format!(
                "name must be between {} and {} characters",
                limits::NAME_MIN,
                limits::NAME_MAX
            )));
        }

        let phone_len = phone.chars().count();
        if !(limits::PHONE_MIN..=limits::PHONE_MAX).contains(&phone_len) {
            return Err(LedgerError::validation(format!(
                "phone must be between {} and {} characters",
                limits::PHONE_MIN,
                limits::PHONE_MAX
            )));
        }

        if let Some(email) = &self.email {
            if email.chars().count() > limits::EMAIL_MAX {
                return Err(LedgerError::validation(format!(
                    "email must be at most {} characters",
                    limits::EMAIL_MAX
                )));
            }
        }

        Ok((name.to_string(), phone.to_string()))
    }
}

impl Customer {
    /// Create a new customer from caller input.
    ///
    /// Assigns a fresh id and sets `created_at` = `updated_at` = now.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` when `name` or `phone` is missing or
    /// out of length bounds, or when `email` is too long.
    pub fn create(input: CustomerInput) -> Result<Self> {
        let (name, phone) = input.validate()?;
        let now = Utc::now();
        Ok(Self {
            id: CustomerId::generate(),
            name,
            phone,
            email: input.email.unwrap_or_default(),
            address: input.address.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the mutable fields from caller input and bump `updated_at`.
    ///
    /// `id` and `created_at` are preserved.
    ///
    /// # Errors
    ///
    /// Same validation as [`Customer::create`]. The record is untouched on
    /// failure.
    pub fn apply_update(&mut self, input: CustomerInput) -> Result<()> {
        let (name, phone) = input.validate()?;
        self.name = name;
        self.phone = phone;
        self.email = input.email.unwrap_or_default();
        self.address = input.address.unwrap_or_default();
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CustomerInput {
        CustomerInput {
            name: Some("John Doe".into()),
            phone: Some("+1234567890".into()),
            email: Some("john@example.com".into()),
            address: Some("123 Main St".into()),
        }
    }

    #[test]
    fn create_sets_server_fields() {
        let customer = Customer::create(valid_input()).unwrap();
        assert_eq!(customer.name, "John Doe");
        assert_eq!(customer.phone, "+1234567890");
        assert_eq!(customer.created_at, customer.updated_at);
    }

    #[test]
    fn create_defaults_optional_fields() {
        let customer = Customer::create(CustomerInput {
            name: Some("Jane Smith".into()),
            phone: Some("+0987654321".into()),
            ..CustomerInput::default()
        })
        .unwrap();
        assert_eq!(customer.email, "");
        assert_eq!(customer.address, "");
    }

    #[test]
    fn create_requires_name_and_phone() {
        let missing_name = CustomerInput {
            name: None,
            ..valid_input()
        };
        assert!(matches!(
            Customer::create(missing_name),
            Err(LedgerError::Validation(_))
        ));

        let missing_phone = CustomerInput {
            phone: None,
            ..valid_input()
        };
        assert!(matches!(
            Customer::create(missing_phone),
            Err(LedgerError::Validation(_))
        ));
    }

    #[test]
    fn create_enforces_length_bounds() {
        let short_name = CustomerInput {
            name: Some("J".into()),
            ..valid_input()
        };
        assert!(Customer::create(short_name).is_err());

        let long_name = CustomerInput {
            name: Some("x".repeat(101)),
            ..valid_input()
        };
        assert!(Customer::create(long_name).is_err());

        let short_phone = CustomerInput {
            phone: Some("12345".into()),
            ..valid_input()
        };
        assert!(Customer::create(short_phone).is_err());

        let long_email = CustomerInput {
            email: Some(format!("{}@example.com", "x".repeat(100))),
            ..valid_input()
        };
        assert!(Customer::create(long_email).is_err());
    }

    #[test]
    fn update_preserves_id_and_created_at() {
        let mut customer = Customer::create(valid_input()).unwrap();
        let id = customer.id;
        let created_at = customer.created_at;

        customer
            .apply_update(CustomerInput {
                name: Some("John Q. Doe".into()),
                phone: Some("+1234567890".into()),
                ..CustomerInput::default()
            })
            .unwrap();

        assert_eq!(customer.id, id);
        assert_eq!(customer.created_at, created_at);
        assert_eq!(customer.name, "John Q. Doe");
        assert_eq!(customer.email, "");
    }

    #[test]
    fn update_leaves_record_untouched_on_failure() {
        let mut customer = Customer::create(valid_input()).unwrap();
        let before = customer.clone();

        let result = customer.apply_update(CustomerInput::default());
        assert!(result.is_err());
        assert_eq!(customer, before);
    }

    #[test]
    fn serde_uses_camel_case() {
        let customer = Customer::create(valid_input()).unwrap();
        let json = serde_json::to_value(&customer).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
