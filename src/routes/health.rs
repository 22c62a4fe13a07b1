use actix_web::get;
use serde::Serialize;

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Response {
    pub status: &'static str,
}

#[get("")]
async fn health() -> ApiResult<Response> {
    Ok(ApiResponse::Ok(Response { status: "ok" }))
}
