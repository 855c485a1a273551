use thiserror::Error;

use crate::domain::client::{Client, SubscriptionStatus};
use crate::domain::types::MonthlyFee;

/// Errors produced when a raw field value cannot be stored in the draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// Monetary input did not parse to a non-negative finite number.
    #[error("invalid monthly fee: {0:?}")]
    InvalidFee(String),
    /// Status input is outside the closed three-member set.
    #[error("unknown status: {0:?}")]
    UnknownStatus(String),
}

/// The finite set of editable client fields.
///
/// Raw form input is routed through this enum so every field gets its own
/// typed store; there is no stringly-keyed assignment path into the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientField {
    Name,
    TaxId,
    Email,
    Phone,
    Address,
    PlanName,
    MonthlyFee,
    Status,
}

/// Editable draft of a single client record.
///
/// The draft is a deep copy of the canonical record and is the only value
/// mutated while an edit session is open; the canonical record is refreshed
/// by the owning layer after a successful save.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientDraft {
    draft: Client,
}

impl ClientDraft {
    /// Starts a draft from a deep copy of `record`.
    #[must_use]
    pub fn new(record: &Client) -> Self {
        Self {
            draft: record.clone(),
        }
    }

    /// Replaces the entire draft with a fresh copy of `record`.
    ///
    /// Must be called whenever the canonical record's identity changes while
    /// the session is open, otherwise the draft goes stale.
    pub fn initialize(&mut self, record: &Client) {
        self.draft = record.clone();
    }

    /// Stores one raw field value, leaving every other field untouched.
    ///
    /// String fields are stored as provided (empty contact fields clear the
    /// value); the monetary fee and the status are parsed first and the
    /// draft is left unchanged when parsing fails.
    pub fn set_field(&mut self, field: ClientField, raw: &str) -> Result<(), DraftError> {
        match field {
            ClientField::Name => self.draft.name = raw.to_string(),
            ClientField::TaxId => self.draft.tax_id = raw.to_string(),
            ClientField::Email => {
                self.draft.email = Some(raw.to_string()).filter(|s| !s.is_empty());
            }
            ClientField::Phone => {
                self.draft.phone = Some(raw.to_string()).filter(|s| !s.is_empty());
            }
            ClientField::Address => {
                self.draft.address = Some(raw.to_string()).filter(|s| !s.is_empty());
            }
            ClientField::PlanName => self.draft.plan_name = raw.to_string(),
            ClientField::MonthlyFee => {
                let fee = MonthlyFee::parse(raw)
                    .map_err(|_| DraftError::InvalidFee(raw.to_string()))?;
                self.draft.monthly_fee = fee.get();
            }
            ClientField::Status => {
                self.draft.status = SubscriptionStatus::try_from(raw)
                    .map_err(|_| DraftError::UnknownStatus(raw.to_string()))?;
            }
        }
        Ok(())
    }

    /// Borrow the current draft value.
    pub fn record(&self) -> &Client {
        &self.draft
    }

    /// Consume the store and return the owned draft.
    pub fn into_record(self) -> Client {
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::dependent::Dependent;

    fn sample_client() -> Client {
        let now = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Client {
            id: 7,
            name: "Maria Souza".to_string(),
            tax_id: "52998224725".to_string(),
            email: Some("maria@example.com".to_string()),
            phone: Some("+5511999990000".to_string()),
            address: Some("Rua das Flores, 10".to_string()),
            plan_name: "Essencial".to_string(),
            monthly_fee: 49.9,
            status: SubscriptionStatus::Active,
            created_at: now,
            updated_at: now,
            dependents: vec![Dependent {
                id: 1,
                client_id: 7,
                name: "João Souza".to_string(),
                relationship: "Filho".to_string(),
                status: SubscriptionStatus::Pending,
                created_at: now,
            }],
        }
    }

    #[test]
    fn initialize_copies_the_record_deeply() {
        let record = sample_client();
        let draft = ClientDraft::new(&record);
        assert_eq!(draft.record(), &record);

        let other = Client {
            id: 8,
            name: "Outro".to_string(),
            ..record.clone()
        };
        let mut draft = draft;
        draft.initialize(&other);
        assert_eq!(draft.record(), &other);
    }

    #[test]
    fn set_field_touches_only_the_named_field() {
        let record = sample_client();
        let mut draft = ClientDraft::new(&record);

        draft.set_field(ClientField::Name, "Maria S. Lima").unwrap();

        let expected = Client {
            name: "Maria S. Lima".to_string(),
            ..record
        };
        assert_eq!(draft.record(), &expected);
    }

    #[test]
    fn monthly_fee_parses_decimal_input() {
        let mut draft = ClientDraft::new(&sample_client());
        draft.set_field(ClientField::MonthlyFee, "12.5").unwrap();
        assert_eq!(draft.record().monthly_fee, 12.5);
    }

    #[test]
    fn malformed_fee_is_rejected_and_draft_unchanged() {
        let record = sample_client();
        let mut draft = ClientDraft::new(&record);

        for raw in ["abc", "", "-1", "NaN", "12,50"] {
            assert_eq!(
                draft.set_field(ClientField::MonthlyFee, raw),
                Err(DraftError::InvalidFee(raw.to_string()))
            );
        }
        assert_eq!(draft.record(), &record);
    }

    #[test]
    fn status_only_accepts_the_three_known_values() {
        let mut draft = ClientDraft::new(&sample_client());

        draft.set_field(ClientField::Status, "pending").unwrap();
        assert_eq!(draft.record().status, SubscriptionStatus::Pending);

        assert_eq!(
            draft.set_field(ClientField::Status, "archived"),
            Err(DraftError::UnknownStatus("archived".to_string()))
        );
        assert_eq!(draft.record().status, SubscriptionStatus::Pending);
    }

    #[test]
    fn empty_contact_input_clears_the_optional_field() {
        let mut draft = ClientDraft::new(&sample_client());
        draft.set_field(ClientField::Email, "").unwrap();
        assert_eq!(draft.record().email, None);
        draft.set_field(ClientField::Email, "novo@example.com").unwrap();
        assert_eq!(draft.record().email.as_deref(), Some("novo@example.com"));
    }
}
