use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub client_id: i32,
    pub description: String,
    pub amount: f64,
    pub method: PaymentMethod,
    pub due_date: NaiveDateTime,
    pub paid_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    Boleto,
    CreditCard,
    Pix,
    Other(String),
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Boleto => write!(f, "Boleto"),
            PaymentMethod::CreditCard => write!(f, "CreditCard"),
            PaymentMethod::Pix => write!(f, "Pix"),
            PaymentMethod::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(s: &str) -> Self {
        match s {
            "Boleto" => PaymentMethod::Boleto,
            "CreditCard" => PaymentMethod::CreditCard,
            "Pix" => PaymentMethod::Pix,
            _ => PaymentMethod::Other(s.to_string()),
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPayment {
    pub client_id: i32,
    pub description: String,
    pub amount: f64,
    pub method: PaymentMethod,
    pub due_date: NaiveDateTime,
    pub paid_at: Option<NaiveDateTime>,
}

/// Settlement state derived for display, relative to a caller-supplied date
/// so rendering stays deterministic under test.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum SettlementState {
    Paid,
    Open,
    Overdue,
}

impl Payment {
    #[must_use]
    pub fn settlement_state(&self, today: NaiveDate) -> SettlementState {
        if self.paid_at.is_some() {
            SettlementState::Paid
        } else if self.due_date.date() < today {
            SettlementState::Overdue
        } else {
            SettlementState::Open
        }
    }
}
