use axum::Json;
use validator::Validate;

use super::{AppError, Payload};
use crate::models::footprint::{FootprintReport, FootprintRequest};
use crate::services::footprint;

pub async fn calculate(
    Payload(request): Payload<FootprintRequest>,
) -> Result<Json<FootprintReport>, AppError> {
    request.validate()?;
    Ok(Json(footprint::calculate(&request)))
}
