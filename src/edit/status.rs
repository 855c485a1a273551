use serde::Serialize;

use crate::domain::client::SubscriptionStatus;

/// Display label and style class for a subscription status.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub css_class: &'static str,
}

/// Pure mapping from the three-member status set to its badge.
#[must_use]
pub fn badge(status: SubscriptionStatus) -> StatusBadge {
    match status {
        SubscriptionStatus::Active => StatusBadge {
            label: "Ativo",
            css_class: "success",
        },
        SubscriptionStatus::Pending => StatusBadge {
            label: "Pendente",
            css_class: "warning",
        },
        SubscriptionStatus::Inactive => StatusBadge {
            label: "Inativo",
            css_class: "secondary",
        },
    }
}
