use chrono::NaiveDate;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::types::{ClientId, PaymentId};
use crate::dto::payment::PaymentModalData;
use crate::repository::{ClientReader, PaymentReader};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

/// Loads the payment detail modal for one payment.
///
/// An absent payment (or a payment whose client vanished) resolves to
/// `NotFound`, which the route renders as an inert empty response.
pub fn load_payment_modal<R>(
    repo: &R,
    user: &AuthenticatedUser,
    payment_id: PaymentId,
    today: NaiveDate,
) -> ServiceResult<PaymentModalData>
where
    R: PaymentReader + ClientReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let payment = repo
        .get_payment_by_id(payment_id)?
        .ok_or(ServiceError::NotFound)?;

    let client = repo
        .get_client_by_id(ClientId::new(payment.client_id)?)?
        .ok_or(ServiceError::NotFound)?;

    Ok(PaymentModalData {
        state: payment.settlement_state(today),
        payment,
        client_name: client.name,
    })
}
