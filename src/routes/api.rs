use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::auth::AuthenticatedUser;
use crate::repository::{ClientListQuery, ClientReader, DieselRepository};
use crate::routes::check_role;

#[derive(Deserialize)]
struct ApiV1ClientsQueryParams {
    query: String,
}

#[get("/v1/clients")]
pub async fn api_v1_clients(
    params: web::Query<ApiV1ClientsQueryParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return HttpResponse::Unauthorized().finish();
    }

    match repo.list_clients(ClientListQuery::new().search(params.query.clone())) {
        Ok((_total, clients)) => HttpResponse::Ok().json(clients),
        Err(e) => {
            log::error!("Failed to list clients: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
