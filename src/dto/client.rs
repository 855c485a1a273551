//! DTOs shaped for the client detail and edit templates.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::dependent::Dependent;
use crate::domain::payment::{Payment, SettlementState};
use crate::domain::types::ClientId;
use crate::edit::status::{StatusBadge, badge};

/// One dependent with its presented status badge.
#[derive(Debug, Clone, Serialize)]
pub struct DependentRow {
    pub dependent: Dependent,
    pub badge: StatusBadge,
}

/// One payment with its derived settlement state.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRow {
    pub payment: Payment,
    pub state: SettlementState,
}

/// Aggregated data required to render the client details page.
#[derive(Debug, Serialize)]
pub struct ClientPageData {
    pub client: Client,
    pub status_badge: StatusBadge,
    /// Dependents in identifier order; empty renders the explicit
    /// "Nenhum dependente" block rather than an empty table.
    pub dependents: Vec<DependentRow>,
    pub has_dependents: bool,
    pub payments: Vec<PaymentRow>,
    pub total_payments: usize,
}

impl ClientPageData {
    #[must_use]
    pub fn new(client: Client, payments: Vec<Payment>, total_payments: usize, today: NaiveDate) -> Self {
        let status_badge = badge(client.status);
        let dependents: Vec<DependentRow> = client
            .dependents
            .iter()
            .cloned()
            .map(|dependent| DependentRow {
                badge: badge(dependent.status),
                dependent,
            })
            .collect();
        let payments = payments
            .into_iter()
            .map(|payment| PaymentRow {
                state: payment.settlement_state(today),
                payment,
            })
            .collect();

        Self {
            has_dependents: !dependents.is_empty(),
            status_badge,
            dependents,
            payments,
            total_payments,
            client,
        }
    }
}

/// Generic result wrapper for client mutations so callers can redirect easily.
#[derive(Debug)]
pub struct ClientOperationOutcome {
    pub client_id: ClientId,
}
