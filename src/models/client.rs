use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, NewClient as DomainNewClient, SubscriptionStatus,
    UpdateClient as DomainUpdateClient,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub name: String,
    pub tax_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub plan_name: String,
    pub monthly_fee: f64,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub name: &'a str,
    pub tax_id: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub plan_name: &'a str,
    pub monthly_fee: f64,
    pub status: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
/// Data used when updating a [`Client`] record.
pub struct UpdateClient<'a> {
    pub name: &'a str,
    pub tax_id: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub plan_name: &'a str,
    pub monthly_fee: f64,
    pub status: String,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        let status = SubscriptionStatus::try_from(client.status.as_str())?;
        Ok(Self {
            id: client.id,
            name: client.name,
            tax_id: client.tax_id,
            email: client.email,
            phone: client.phone,
            address: client.address,
            plan_name: client.plan_name,
            monthly_fee: client.monthly_fee,
            status,
            created_at: client.created_at,
            updated_at: client.updated_at,
            dependents: Vec::new(),
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: client.name.as_str(),
            tax_id: client.tax_id.as_str(),
            email: client.email.as_deref(),
            phone: client.phone.as_deref(),
            address: client.address.as_deref(),
            plan_name: client.plan_name.as_str(),
            monthly_fee: client.monthly_fee,
            status: client.status.to_string(),
        }
    }
}

impl<'a> From<&'a DomainUpdateClient> for UpdateClient<'a> {
    fn from(client: &'a DomainUpdateClient) -> Self {
        Self {
            name: client.name.as_str(),
            tax_id: client.tax_id.as_str(),
            email: client.email.as_deref(),
            phone: client.phone.as_deref(),
            address: client.address.as_deref(),
            plan_name: client.plan_name.as_str(),
            monthly_fee: client.monthly_fee,
            status: client.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::{ClientName, MonthlyFee, TaxId};

    #[test]
    fn from_domain_new_creates_newclient() {
        let domain = DomainNewClient::new(
            ClientName::new("João").unwrap(),
            TaxId::new("529.982.247-25").unwrap(),
            None,
            None,
            Some("Av. Paulista, 1000".to_string()),
            "Essencial".to_string(),
            MonthlyFee::new(49.9).unwrap(),
        );
        let new: NewClient = (&domain).into();
        assert_eq!(new.name, "João");
        assert_eq!(new.tax_id, "52998224725");
        assert_eq!(new.email, None);
        assert_eq!(new.address, Some("Av. Paulista, 1000"));
        assert_eq!(new.monthly_fee, 49.9);
        assert_eq!(new.status, "pending");
    }

    #[test]
    fn client_try_into_domain() {
        let now = Utc::now().naive_utc();
        let db_client = Client {
            id: 1,
            name: "n".to_string(),
            tax_id: "52998224725".to_string(),
            email: Some("e@example.com".to_string()),
            phone: Some("p".to_string()),
            address: Some("a".to_string()),
            plan_name: "Essencial".to_string(),
            monthly_fee: 12.5,
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
        };
        let domain: DomainClient = db_client.try_into().unwrap();
        assert_eq!(domain.id, 1);
        assert_eq!(domain.status, SubscriptionStatus::Active);
        assert_eq!(domain.monthly_fee, 12.5);
        assert!(domain.dependents.is_empty());
    }

    #[test]
    fn unknown_status_text_is_rejected_at_the_boundary() {
        let now = Utc::now().naive_utc();
        let db_client = Client {
            id: 1,
            name: "n".to_string(),
            tax_id: "52998224725".to_string(),
            email: None,
            phone: None,
            address: None,
            plan_name: "Essencial".to_string(),
            monthly_fee: 0.0,
            status: "archived".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert!(DomainClient::try_from(db_client).is_err());
    }
}
