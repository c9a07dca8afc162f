use actix_web::{web, HttpResponse, Responder};

use crate::models::CareerResponse;
use crate::routes::AppState;

/// Configure career hub routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/career/links", web::get().to(list_links));
}

/// List curated career resources
///
/// GET /api/v1/career/links
async fn list_links(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CareerResponse {
        links: state.career.as_ref().clone(),
    })
}
