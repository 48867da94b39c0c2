use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{apply_weight_change, normalize_weights};
use crate::models::NormalizeWeightsRequest;
use crate::routes::destinations::error_response;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/weights/normalize", web::post().to(normalize));
}

/// Normalize endpoint
///
/// POST /api/v1/weights/normalize
///
/// Request body:
/// ```json
/// {
///   "weights": { "waveQuality": 25, "budget": 20, ... },
///   "factor": "safetyFactors",
///   "value": 30
/// }
/// ```
async fn normalize(req: web::Json<NormalizeWeightsRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let weights = match (req.factor, req.value) {
        (Some(factor), Some(value)) => apply_weight_change(&req.weights, factor, value),
        _ => normalize_weights(&req.weights),
    };

    HttpResponse::Ok().json(weights)
}
