use axum::Json;

use super::Payload;
use crate::models::{PackagingAdvice, PackagingRequest};
use crate::services::packaging::optimize_packaging;

pub async fn optimize(Payload(request): Payload<PackagingRequest>) -> Json<PackagingAdvice> {
    Json(optimize_packaging(
        request.product_weight,
        request.volume,
        request.fragile,
    ))
}
