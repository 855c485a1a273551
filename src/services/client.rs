use chrono::NaiveDate;
use validator::Validate;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::types::ClientId;
use crate::dto::client::{ClientOperationOutcome, ClientPageData};
use crate::edit::session::EditSession;
use crate::forms::client::SaveClientForm;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{ClientReader, ClientWriter, PaymentListQuery, PaymentReader};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

/// Loads the client detail page: the record, its dependents with presented
/// badges, and the most recent payments.
pub fn load_client_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    client_id: ClientId,
    today: NaiveDate,
) -> ServiceResult<ClientPageData>
where
    R: ClientReader + PaymentReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let client = repo
        .get_client_by_id(client_id)?
        .ok_or(ServiceError::NotFound)?;

    let (total_payments, payments) =
        repo.list_payments(PaymentListQuery::new(client_id).paginate(1, DEFAULT_ITEMS_PER_PAGE))?;

    Ok(ClientPageData::new(client, payments, total_payments, today))
}

/// Runs the edit-and-save flow for one client record.
///
/// Projects the canonical record into an edit session, routes every form
/// value through the typed draft, and submits the whole draft through the
/// save controller. A failed update leaves the record unchanged; the caller
/// redirects back to the still-editable page.
pub fn save_client<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveClientForm,
) -> ServiceResult<ClientOperationOutcome>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form("Erro de validação do formulário".to_string()));
    }

    let client_id = ClientId::new(form.id)?;
    let canonical = repo
        .get_client_by_id(client_id)?
        .ok_or(ServiceError::NotFound)?;

    let mut session = EditSession::open(&canonical)?;
    for (field, raw) in form.field_values() {
        session.set_field(field, raw).map_err(|err| {
            log::error!("Rejected field value for client {client_id}: {err}");
            ServiceError::Form("Valor inválido no formulário".to_string())
        })?;
    }

    session.submit(repo, || {
        log::debug!("Edit session for client {client_id} closed");
    })?;

    Ok(ClientOperationOutcome { client_id })
}
