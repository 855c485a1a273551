use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::payment::{
    NewPayment as DomainNewPayment, Payment as DomainPayment, PaymentMethod,
};
use crate::models::client::Client;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Client, foreign_key = client_id))]
#[diesel(table_name = crate::schema::payments)]
pub struct Payment {
    pub id: i32,
    pub client_id: i32,
    pub description: String,
    pub amount: f64,
    pub method: String,
    pub due_date: NaiveDateTime,
    pub paid_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::payments)]
pub struct NewPayment<'a> {
    pub client_id: i32,
    pub description: &'a str,
    pub amount: f64,
    pub method: String,
    pub due_date: NaiveDateTime,
    pub paid_at: Option<NaiveDateTime>,
}

impl From<Payment> for DomainPayment {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            client_id: payment.client_id,
            description: payment.description,
            amount: payment.amount,
            method: PaymentMethod::from(payment.method),
            due_date: payment.due_date,
            paid_at: payment.paid_at,
            created_at: payment.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewPayment> for NewPayment<'a> {
    fn from(payment: &'a DomainNewPayment) -> Self {
        Self {
            client_id: payment.client_id,
            description: payment.description.as_str(),
            amount: payment.amount,
            method: payment.method.to_string(),
            due_date: payment.due_date,
            paid_at: payment.paid_at,
        }
    }
}
