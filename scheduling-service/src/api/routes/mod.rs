use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::api::requests::{ScheduleRequest, SeedShiftRequest};
use crate::api::state::AppState;
use crate::presentation::{AssignedShiftSerialize, RosterSerialize};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scheduling Service API",
        version = "1.0.0",
        description = "Constraint-programming duty roster generator"
    ),
    paths(crate::api::handlers::schedule_handlers::generate_schedule,),
    components(schemas(
        ScheduleRequest,
        SeedShiftRequest,
        RosterSerialize,
        AssignedShiftSerialize,
    ))
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new().route("/schedules", post(handlers::generate_schedule));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
