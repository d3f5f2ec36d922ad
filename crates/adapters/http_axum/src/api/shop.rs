//! JSON REST handlers for the shop info record.
//!
//! Writes are not authenticated.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use shopfront_app::ports::{ProductRepository, ShopInfoRepository};
use shopfront_domain::shop_info::ShopInfo;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for saving the shop info.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopInfoRequest {
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

impl From<ShopInfoRequest> for ShopInfo {
    fn from(req: ShopInfoRequest) -> Self {
        ShopInfo::builder()
            .fields(req.shop_name, req.address, req.phone, req.whatsapp)
            .build()
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    /// `null` until the shop info is first saved.
    Ok(Json<Option<ShopInfo>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the save endpoint.
pub enum SaveResponse {
    Ok(Json<ShopInfo>),
}

impl IntoResponse for SaveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/shop`
pub async fn get<PR, SR>(State(state): State<AppState<PR, SR>>) -> Result<GetResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ShopInfoRepository + Send + Sync + 'static,
{
    let info = state.shop_info_service.get_shop_info().await?;
    Ok(GetResponse::Ok(Json(info)))
}

/// `POST /api/shop` — create the shop info or overwrite it.
pub async fn save<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    payload: Result<Json<ShopInfoRequest>, JsonRejection>,
) -> Result<SaveResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ShopInfoRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let saved = state.shop_info_service.save_shop_info(req.into()).await?;
    Ok(SaveResponse::Ok(Json(saved)))
}
