//! DTOs shaped for the payment detail modal.

use serde::Serialize;

use crate::domain::payment::{Payment, SettlementState};

/// Data required to render the payment detail modal body.
#[derive(Debug, Serialize)]
pub struct PaymentModalData {
    pub payment: Payment,
    pub client_name: String,
    pub state: SettlementState,
}
