use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::dependent::Dependent;
use crate::domain::types::{
    ClientEmail, ClientName, MonthlyFee, PhoneNumber, TaxId, TypeConstraintError,
};

/// Subscription state shared by clients and their dependents.
///
/// The set is closed: persistence and presentation both map over exactly
/// these three members.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Pending,
}

impl Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionStatus::Active => write!(f, "active"),
            SubscriptionStatus::Inactive => write!(f, "inactive"),
            SubscriptionStatus::Pending => write!(f, "pending"),
        }
    }
}

impl TryFrom<&str> for SubscriptionStatus {
    type Error = TypeConstraintError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "active" => Ok(SubscriptionStatus::Active),
            "inactive" => Ok(SubscriptionStatus::Inactive),
            "pending" => Ok(SubscriptionStatus::Pending),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown subscription status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub tax_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub plan_name: String,
    pub monthly_fee: f64,
    pub status: SubscriptionStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Dependents covered by this client's plan, ordered by identifier.
    pub dependents: Vec<Dependent>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub tax_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub plan_name: String,
    pub monthly_fee: f64,
    pub status: SubscriptionStatus,
}

impl NewClient {
    /// New sign-ups start out pending until the first payment clears.
    #[must_use]
    pub fn new(
        name: ClientName,
        tax_id: TaxId,
        email: Option<ClientEmail>,
        phone: Option<PhoneNumber>,
        address: Option<String>,
        plan_name: String,
        monthly_fee: MonthlyFee,
    ) -> Self {
        Self {
            name: name.into_inner(),
            tax_id: tax_id.into_inner(),
            email: email.map(ClientEmail::into_inner),
            phone: phone.map(PhoneNumber::into_inner),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            plan_name: plan_name.trim().to_string(),
            monthly_fee: monthly_fee.get(),
            status: SubscriptionStatus::Pending,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateClient {
    pub name: String,
    pub tax_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub plan_name: String,
    pub monthly_fee: f64,
    pub status: SubscriptionStatus,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        name: String,
        tax_id: String,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        plan_name: String,
        monthly_fee: MonthlyFee,
        status: SubscriptionStatus,
    ) -> Self {
        Self {
            name,
            tax_id,
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            plan_name,
            monthly_fee: monthly_fee.get(),
            status,
        }
    }
}

impl From<&Client> for UpdateClient {
    /// Project a full draft record into the update payload sent to storage.
    fn from(draft: &Client) -> Self {
        // The draft already went through the typed field stores, so
        // monthly_fee satisfies the fee invariant here.
        Self {
            name: draft.name.clone(),
            tax_id: draft.tax_id.clone(),
            email: draft.email.clone().filter(|s| !s.is_empty()),
            phone: draft.phone.clone().filter(|s| !s.is_empty()),
            address: draft.address.clone().filter(|s| !s.is_empty()),
            plan_name: draft.plan_name.clone(),
            monthly_fee: draft.monthly_fee,
            status: draft.status,
        }
    }
}
