use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::Settings;
use crate::core::{parse_preferences, unranked, ExplanationEngine, Geocoder, Ranker};
use crate::models::{
    ErrorResponse, ExplainRequest, HealthResponse, PreferenceWeights, RankRequest, RankResponse,
    SeasonalQuery,
};
use crate::services::{
    CacheManager, CatalogError, DestinationCatalog, ForecastService, SeasonalService,
    TravelTimeService,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<DestinationCatalog>,
    pub ranker: Ranker,
    pub explainer: ExplanationEngine,
    pub forecasts: Arc<ForecastService>,
    pub seasonal: SeasonalService,
}

impl AppState {
    /// Wire up every service from configuration
    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        let catalog = match &settings.catalog.path {
            Some(path) => DestinationCatalog::from_path(path)?,
            None => DestinationCatalog::embedded()?,
        };

        let travel = TravelTimeService::new(
            Geocoder::new(),
            CacheManager::new(settings.travel.cache_capacity, settings.travel.cache_ttl()),
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            ranker: Ranker::new(Arc::new(travel), settings.travel.lookup_timeout()),
            explainer: ExplanationEngine::new(PreferenceWeights::from(&settings.scoring.weights)),
            forecasts: Arc::new(ForecastService::new(
                settings.forecast.cache_capacity,
                settings.forecast.cache_ttl(),
            )),
            seasonal: SeasonalService::new(),
        })
    }
}

/// Configure all destination routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/destinations/rank", web::post().to(rank_destinations))
        .route("/destinations/{id}/explain", web::post().to(explain_destination))
        .route("/destinations/{id}/forecast", web::get().to(get_forecast))
        .route("/destinations/{id}/seasonal", web::get().to(get_seasonal));
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

fn not_found(id: &str) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        "Destination not found",
        format!("No destination with id {:?}", id),
    )
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        destinations: state.catalog.len(),
    })
}

/// Rank destinations endpoint
///
/// POST /api/v1/destinations/rank
///
/// Request body:
/// ```json
/// {
///   "preferences": { "surfingAbility": 2, "currentLocation": "London", ... },
///   "destinations": [ ... ],
///   "includeExplanations": false
/// }
/// ```
///
/// Invalid or wrongly-typed preferences do not fail the request: every
/// candidate comes back unranked with `"ranked": false`. Supplied destinations
/// must pass the same id and coordinate checks as the catalog.
async fn rank_destinations(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    let RankRequest {
        preferences,
        destinations,
        include_explanations,
    } = req.into_inner();

    let candidates = match destinations {
        Some(supplied) => match DestinationCatalog::new(supplied) {
            Ok(checked) => checked.into_destinations(),
            Err(e) => {
                tracing::info!("Rejected supplied destinations: {}", e);
                return error_response(StatusCode::BAD_REQUEST, "Invalid destinations", e.to_string());
            }
        },
        None => state.catalog.all().to_vec(),
    };
    let total_candidates = candidates.len();

    let preferences = match parse_preferences(preferences) {
        Ok(preferences) => preferences,
        Err(e) => {
            tracing::warn!("Ranking failed, returning unranked destinations: {}", e);
            return HttpResponse::Ok().json(RankResponse {
                destinations: unranked(&candidates),
                total_candidates,
                ranked: false,
            });
        }
    };

    let (mut ranked_destinations, ranked) =
        state.ranker.rank_or_unranked(&candidates, &preferences).await;

    if ranked && include_explanations {
        for entry in ranked_destinations.iter_mut() {
            entry.recommendation_score =
                Some(state.explainer.generate_explanation(&entry.destination, &preferences, None));
        }
    }

    HttpResponse::Ok().json(RankResponse {
        destinations: ranked_destinations,
        total_candidates,
        ranked,
    })
}

/// Explain endpoint
///
/// POST /api/v1/destinations/{id}/explain
async fn explain_destination(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ExplainRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for explain request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let id = path.into_inner();
    let Some(destination) = state.catalog.get(&id) else {
        return not_found(&id);
    };

    let explanation =
        state
            .explainer
            .generate_explanation(destination, &req.preferences, req.weights.as_ref());

    tracing::debug!("Explained {}: overall {}", id, explanation.overall_score);

    HttpResponse::Ok().json(explanation)
}

/// Forecast endpoint
///
/// GET /api/v1/destinations/{id}/forecast
async fn get_forecast(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    if state.catalog.get(&id).is_none() {
        return not_found(&id);
    }

    HttpResponse::Ok().json(state.forecasts.get_forecast(&id).await)
}

/// Seasonal conditions endpoint
///
/// GET /api/v1/destinations/{id}/seasonal?month=7
async fn get_seasonal(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SeasonalQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let id = path.into_inner();
    let Some(destination) = state.catalog.get(&id) else {
        return not_found(&id);
    };

    HttpResponse::Ok().json(state.seasonal.seasonal_conditions(destination, query.month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Explanation, SeasonalConditions, SurfForecast};
    use actix_web::{test, App};
    use serde_json::{json, Value};

    fn create_state() -> AppState {
        AppState::from_settings(&Settings::default()).unwrap()
    }

    fn preferences_json(surfing_ability: u8) -> Value {
        json!({
            "surfingAbility": surfing_ability,
            "currentLocation": "London",
            "transportModes": ["flight"],
            "maxTravelTime": 12,
            "budget": 80,
            "currency": "USD",
            "temperatureRange": 2,
            "travelDates": { "startDate": "2025-10-01", "endDate": "2025-10-10" },
            "needsSurfLessons": true
        })
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(create_state()))
                    .service(web::scope("/api/v1").configure(configure)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["destinations"], 12);
    }

    #[actix_web::test]
    async fn test_rank_catalog() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/destinations/rank")
            .set_json(json!({ "preferences": preferences_json(2), "includeExplanations": true }))
            .to_request();
        let body: RankResponse = test::call_and_read_body_json(&app, req).await;

        assert!(body.ranked);
        assert_eq!(body.total_candidates, 12);
        assert!(!body.destinations.is_empty());
        for entry in &body.destinations {
            assert!(entry.travel_time.as_ref().unwrap().duration_hours <= 12.0);
            assert!(entry.recommendation_score.is_some());
            assert!(entry.numbeo_url.is_some());
        }
        assert!(body
            .destinations
            .windows(2)
            .all(|w| w[0].score.unwrap() >= w[1].score.unwrap()));
    }

    #[actix_web::test]
    async fn test_rank_invalid_preferences_fails_open() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/destinations/rank")
            .set_json(json!({ "preferences": preferences_json(7) }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: RankResponse = test::read_body_json(resp).await;
        assert!(!body.ranked);
        assert_eq!(body.destinations.len(), 12);
        assert!(body.destinations.iter().all(|d| d.score.is_none()));
    }

    #[actix_web::test]
    async fn test_rank_wrongly_typed_preferences_fails_open() {
        let app = app!();
        let mut missing_dates = preferences_json(2);
        missing_dates.as_object_mut().unwrap().remove("travelDates");

        for preferences in [
            json!({ "surfingAbility": "expert" }),
            {
                let mut value = preferences_json(2);
                value["surfingAbility"] = json!("expert");
                value
            },
            {
                let mut value = preferences_json(2);
                value["surfingAbility"] = json!(300);
                value
            },
            missing_dates,
        ] {
            let req = test::TestRequest::post()
                .uri("/api/v1/destinations/rank")
                .set_json(json!({ "preferences": preferences, "includeExplanations": true }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: RankResponse = test::read_body_json(resp).await;
            assert!(!body.ranked);
            assert_eq!(body.total_candidates, 12);
            assert_eq!(body.destinations.len(), 12);
            assert!(body
                .destinations
                .iter()
                .all(|d| d.score.is_none() && d.recommendation_score.is_none()));
        }
    }

    #[actix_web::test]
    async fn test_rank_supplied_destinations() {
        let app = app!();
        let catalog = DestinationCatalog::embedded().unwrap();
        let supplied: Vec<_> = catalog.all()[..3].to_vec();

        let req = test::TestRequest::post()
            .uri("/api/v1/destinations/rank")
            .set_json(json!({ "preferences": preferences_json(7), "destinations": supplied }))
            .to_request();
        let body: RankResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.total_candidates, 3);
        assert_eq!(body.destinations.len(), 3);
    }

    #[actix_web::test]
    async fn test_rank_rejects_invalid_supplied_destinations() {
        let app = app!();
        let catalog = DestinationCatalog::embedded().unwrap();

        let mut off_the_map = catalog.all()[0].clone();
        off_the_map.coordinates.lat = 120.0;
        let duplicated = vec![catalog.all()[1].clone(), catalog.all()[1].clone()];

        for supplied in [vec![off_the_map], duplicated] {
            let req = test::TestRequest::post()
                .uri("/api/v1/destinations/rank")
                .set_json(json!({ "preferences": preferences_json(2), "destinations": supplied }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.error, "Invalid destinations");
        }
    }

    #[actix_web::test]
    async fn test_explain() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/destinations/cr-nosara/explain")
            .set_json(json!({ "preferences": preferences_json(1) }))
            .to_request();
        let explanation: Explanation = test::call_and_read_body_json(&app, req).await;

        assert!((0.0..=100.0).contains(&explanation.overall_score));
        assert_eq!(explanation.factor_breakdown.skill_match.score, 100.0);
    }

    #[actix_web::test]
    async fn test_explain_rejects_invalid_preferences() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/destinations/cr-nosara/explain")
            .set_json(json!({ "preferences": preferences_json(0) }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.status_code, 400);
    }

    #[actix_web::test]
    async fn test_unknown_destination() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/v1/destinations/atlantis/forecast")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_forecast() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/v1/destinations/pt-ericeira/forecast")
            .to_request();
        let forecast: SurfForecast = test::call_and_read_body_json(&app, req).await;
        assert!((1..=10).contains(&forecast.rating));
    }

    #[actix_web::test]
    async fn test_seasonal() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/v1/destinations/za-jeffreys-bay/seasonal?month=7")
            .to_request();
        let conditions: SeasonalConditions = test::call_and_read_body_json(&app, req).await;

        assert_eq!(conditions.consistency, "Excellent");
        assert_eq!(conditions.wave_height, "9-17ft");
        // Southern winter
        assert_eq!(conditions.water_temp, 14.0);
    }

    #[actix_web::test]
    async fn test_seasonal_rejects_bad_month() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/v1/destinations/za-jeffreys-bay/seasonal?month=13")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
