use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::SubscriptionStatus;
use crate::domain::dependent::{Dependent as DomainDependent, NewDependent as DomainNewDependent};
use crate::domain::types::TypeConstraintError;
use crate::models::client::Client;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Client, foreign_key = client_id))]
#[diesel(table_name = crate::schema::dependents)]
pub struct Dependent {
    pub id: i32,
    pub client_id: i32,
    pub name: String,
    pub relationship: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::dependents)]
pub struct NewDependent<'a> {
    pub client_id: i32,
    pub name: &'a str,
    pub relationship: &'a str,
    pub status: String,
}

impl TryFrom<Dependent> for DomainDependent {
    type Error = TypeConstraintError;

    fn try_from(dependent: Dependent) -> Result<Self, Self::Error> {
        let status = SubscriptionStatus::try_from(dependent.status.as_str())?;
        Ok(Self {
            id: dependent.id,
            client_id: dependent.client_id,
            name: dependent.name,
            relationship: dependent.relationship,
            status,
            created_at: dependent.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewDependent> for NewDependent<'a> {
    fn from(dependent: &'a DomainNewDependent) -> Self {
        Self {
            client_id: dependent.client_id,
            name: dependent.name.as_str(),
            relationship: dependent.relationship.as_str(),
            status: dependent.status.to_string(),
        }
    }
}
