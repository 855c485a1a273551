use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::main::{IndexPageData, IndexQuery};
use crate::forms::client::AddClientForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Loads the clients list for the main index page.
pub fn load_index_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: IndexQuery,
) -> ServiceResult<IndexPageData>
where
    R: ClientReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let page = query.page.unwrap_or(1);
    let mut list_query = ClientListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if let Some(term) = &search_query {
        list_query = list_query.search(term.clone());
    }

    let (total, clients) = repo.list_clients(list_query)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let clients = Paginated::new(clients, page, total_pages);

    Ok(IndexPageData {
        clients,
        search_query,
    })
}

/// Validates the add-client form and persists a new client record.
pub fn add_client<R>(repo: &R, user: &AuthenticatedUser, form: AddClientForm) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    if !check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Erro de validação do formulário".to_string()));
    }

    let new_client = form.to_new_client().map_err(|err| {
        log::error!("Rejected new client data: {err}");
        ServiceError::Form("Dados do cliente inválidos".to_string())
    })?;

    repo.create_clients(&[new_client]).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}
