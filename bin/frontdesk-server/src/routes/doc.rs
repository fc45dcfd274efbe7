use utoipa::OpenApi;

use crate::routes::{contact, health};

#[derive(OpenApi)]
#[openapi(info(
    title = "frontdesk-server",
    description = "Contact-message intake API for the marketing site",
    version = "0.1.0",
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(contact::ContactApi::openapi());
    root.merge(health::HealthApi::openapi());
    root
}
