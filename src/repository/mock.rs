//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::dependent::{Dependent, NewDependent};
use crate::domain::payment::{NewPayment, Payment};
use crate::domain::types::{ClientId, PaymentId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientListQuery, ClientReader, ClientWriter, DependentWriter, PaymentListQuery, PaymentReader,
    PaymentWriter,
};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
        fn list_dependents(&self, client_id: ClientId) -> RepositoryResult<Vec<Dependent>>;
    }

    impl ClientWriter for Repository {
        fn create_clients(&self, new_clients: &[NewClient]) -> RepositoryResult<usize>;
        fn update_client(
            &self,
            client_id: ClientId,
            updates: &UpdateClient,
        ) -> RepositoryResult<Client>;
        fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
    }

    impl DependentWriter for Repository {
        fn add_dependents(&self, new_dependents: &[NewDependent]) -> RepositoryResult<usize>;
    }

    impl PaymentReader for Repository {
        fn get_payment_by_id(&self, id: PaymentId) -> RepositoryResult<Option<Payment>>;
        fn list_payments(&self, query: PaymentListQuery) -> RepositoryResult<(usize, Vec<Payment>)>;
    }

    impl PaymentWriter for Repository {
        fn create_payments(&self, new_payments: &[NewPayment]) -> RepositoryResult<usize>;
    }
}
