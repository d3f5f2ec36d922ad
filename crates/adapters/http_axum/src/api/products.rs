//! JSON REST handlers for catalog products.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use shopfront_app::ports::{ProductRepository, ShopInfoRepository};
use shopfront_domain::error::ShopfrontError;
use shopfront_domain::id::ProductId;
use shopfront_domain::product::Product;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a product.
///
/// Every field is optional; on update an omitted field clears the stored one.
#[derive(Debug, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductRequest {
    fn into_product(self, id: Option<ProductId>) -> Result<Product, ShopfrontError> {
        let mut builder = Product::builder().fields(self.title, self.image, self.price, self.category);
        if let Some(id) = id {
            builder = builder.id(id);
        }
        builder.build()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceInput {
    Number(f64),
    Text(String),
}

/// Accept a price as a JSON number or a numeric string. Blank strings and
/// `null` mean "no price".
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<PriceInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(PriceInput::Number(value)) => Ok(Some(value)),
        Some(PriceInput::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(PriceInput::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid price {text:?}"))),
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Product>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Product>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Product>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/products`
pub async fn list<PR, SR>(
    State(state): State<AppState<PR, SR>>,
) -> Result<ListResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ShopInfoRepository + Send + Sync + 'static,
{
    let products = state.product_service.list_products().await?;
    Ok(ListResponse::Ok(Json(products)))
}

/// `GET /api/products/:id`
pub async fn get<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ShopInfoRepository + Send + Sync + 'static,
{
    let product_id = ProductId::parse(&id).map_err(ShopfrontError::from)?;
    let product = state.product_service.get_product(product_id).await?;
    Ok(GetResponse::Ok(Json(product)))
}

/// `POST /api/products`
pub async fn create<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ShopInfoRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let product = req.into_product(None)?;
    let created = state.product_service.create_product(product).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/products/:id` — replace every field of an existing product.
pub async fn update<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ShopInfoRepository + Send + Sync + 'static,
{
    let product_id = ProductId::parse(&id).map_err(ShopfrontError::from)?;
    let Json(req) = payload?;
    let product = req.into_product(Some(product_id))?;
    let updated = state.product_service.update_product(product).await?;
    Ok(GetResponse::Ok(Json(updated)))
}
