use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use stockroom_core::ProductId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/add-product", post(add_product))
        .route("/get-single-product/:id", get(get_single_product))
        .route("/get-all-products", get(get_all_products))
        .route("/update-product/:id", put(update_product))
        .route("/delete-product/:id", delete(delete_product))
}

pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProductDto>,
) -> axum::response::Response {
    match services.products.create(dto::to_domain(body)).await {
        Ok(created) => (StatusCode::CREATED, Json(dto::to_dto(created))).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn get_single_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid product id"),
    };

    match services.products.get_by_id(id).await {
        Ok(product) => (StatusCode::OK, Json(dto::to_dto(product))).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn get_all_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products.list_all().await {
        Ok(products) => {
            let items = products.into_iter().map(dto::to_dto).collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductDto>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid product id"),
    };

    match services.products.update(id, dto::to_domain(body)).await {
        Ok(updated) => (StatusCode::OK, Json(dto::to_dto(updated))).into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid product id"),
    };

    match services.products.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::product_error_to_response(e),
    }
}
