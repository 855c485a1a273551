use crate::db::{DbConnection, DbPool};
use crate::domain::client::{Client, NewClient, SubscriptionStatus, UpdateClient};
use crate::domain::dependent::{Dependent, NewDependent};
use crate::domain::payment::{NewPayment, Payment};
use crate::domain::types::{ClientId, PaymentId};
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod payment;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    pub search: Option<String>,
    pub status: Option<SubscriptionStatus>,
    pub pagination: Option<Pagination>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: SubscriptionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone)]
pub struct PaymentListQuery {
    pub client_id: ClientId,
    pub pagination: Option<Pagination>,
}

impl PaymentListQuery {
    pub fn new(client_id: ClientId) -> Self {
        Self {
            client_id,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ClientReader {
    /// Loads a client with its dependents attached in identifier order.
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
    fn list_dependents(&self, client_id: ClientId) -> RepositoryResult<Vec<Dependent>>;
}

pub trait ClientWriter {
    fn create_clients(&self, new_clients: &[NewClient]) -> RepositoryResult<usize>;
    fn update_client(&self, client_id: ClientId, updates: &UpdateClient)
    -> RepositoryResult<Client>;
    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
}

pub trait DependentWriter {
    fn add_dependents(&self, new_dependents: &[NewDependent]) -> RepositoryResult<usize>;
}

pub trait PaymentReader {
    fn get_payment_by_id(&self, id: PaymentId) -> RepositoryResult<Option<Payment>>;
    fn list_payments(&self, query: PaymentListQuery) -> RepositoryResult<(usize, Vec<Payment>)>;
}

pub trait PaymentWriter {
    fn create_payments(&self, new_payments: &[NewPayment]) -> RepositoryResult<usize>;
}

/// Diesel-backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(Into::into)
    }
}
