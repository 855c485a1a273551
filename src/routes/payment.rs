use actix_web::{HttpResponse, Responder, post, web};
use chrono::Utc;
use tera::{Context, Tera};

use crate::domain::auth::AuthenticatedUser;
use crate::domain::types::PaymentId;
use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::{ServiceError, payment as payment_service};

#[post("/payments/modal/{payment_id}")]
pub async fn payment_modal(
    payment_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let payment_id = match PaymentId::new(payment_id.into_inner()) {
        Ok(payment_id) => payment_id,
        Err(_) => return HttpResponse::NoContent().finish(),
    };

    let today = Utc::now().date_naive();

    match payment_service::load_payment_modal(repo.get_ref(), &user, payment_id, today) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("payment", &data.payment);
            context.insert("client_name", &data.client_name);
            context.insert("state", &data.state);
            render_template(&tera, "payment/modal_body.html", &context)
        }
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(ServiceError::NotFound) => {
            // Absent subject: render nothing rather than crash the page.
            log::warn!("Payment modal requested for a missing payment");
            HttpResponse::NoContent().finish()
        }
        Err(err) => {
            log::error!("Failed to load payment modal: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
