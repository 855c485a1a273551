use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Utc;
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::types::ClientId;
use crate::forms::client::SaveClientForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, client as client_service};

#[get("/client/{client_id}")]
pub async fn show_client(
    client_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let client_id = match ClientId::new(client_id.into_inner()) {
        Ok(client_id) => client_id,
        Err(_) => {
            FlashMessage::error("Cliente não encontrado.").send();
            return redirect("/");
        }
    };

    let today = Utc::now().date_naive();

    match client_service::load_client_page(repo.get_ref(), &user, client_id, today) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                &user,
                "client",
                &server_config.auth_service_url,
            );
            context.insert("client", &data.client);
            context.insert("status_badge", &data.status_badge);
            context.insert("dependents", &data.dependents);
            context.insert("has_dependents", &data.has_dependents);
            context.insert("payments", &data.payments);
            context.insert("total_payments", &data.total_payments);

            render_template(&tera, "client/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Permissão insuficiente.").send();
            redirect("/na")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Cliente não encontrado.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load client page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/client/save")]
pub async fn save_client(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveClientForm>,
) -> impl Responder {
    let back_to = format!("/client/{}", form.id);

    match client_service::save_client(repo.get_ref(), &user, form) {
        Ok(outcome) => {
            FlashMessage::success("Cliente atualizado.".to_string()).send();
            redirect(&format!("/client/{}", outcome.client_id))
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Permissão insuficiente.").send();
            redirect("/na")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Cliente não encontrado.").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&back_to)
        }
        Err(err) => {
            // The draft was not persisted; the page stays editable and the
            // user may resubmit.
            log::error!("Failed to update client: {err}");
            FlashMessage::error("Erro ao atualizar cliente").send();
            redirect(&back_to)
        }
    }
}
