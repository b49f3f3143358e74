//! Route handlers for the five endpoints of §6's HTTP surface, and the
//! router assembly helper that wires them together with the CORS and
//! tracing middleware the teacher applies at this layer.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use wps_access::AccessOracle;
use wps_core::{
    validate_creation_data, Dataset, WorkOrderTokenResponse, WorkPackageCreationData, WorkPackageCreationResponse,
    WorkPackageDetails,
};
use wps_manager::WorkPackageManager;
use wps_store::{DatasetStore, WorkPackageStore};

use crate::error::WpsHttpError;
use crate::extractors::{AccessToken, InternalAssertion};

type SharedManager<DS, WS, AO> = Arc<WorkPackageManager<DS, WS, AO>>;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "OK" })
}

async fn create_work_package<DS, WS, AO>(
    State(manager): State<SharedManager<DS, WS, AO>>,
    InternalAssertion(assertion): InternalAssertion,
    Json(creation_data): Json<WorkPackageCreationData>,
) -> Result<(StatusCode, Json<WorkPackageCreationResponse>), WpsHttpError>
where
    DS: DatasetStore,
    WS: WorkPackageStore,
    AO: AccessOracle,
{
    validate_creation_data(&creation_data)?;
    let response = manager.create_work_package(creation_data, &assertion).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_work_package_details<DS, WS, AO>(
    State(manager): State<SharedManager<DS, WS, AO>>,
    Path(wp_id): Path<String>,
    AccessToken(token): AccessToken,
) -> Result<Json<WorkPackageDetails>, WpsHttpError>
where
    DS: DatasetStore,
    WS: WorkPackageStore,
    AO: AccessOracle,
{
    let details = manager.get_work_package_details(&wp_id, &token).await?;
    Ok(Json(details))
}

async fn create_work_order_token<DS, WS, AO>(
    State(manager): State<SharedManager<DS, WS, AO>>,
    Path((wp_id, file_id)): Path<(String, String)>,
    AccessToken(token): AccessToken,
) -> Result<(StatusCode, Json<WorkOrderTokenResponse>), WpsHttpError>
where
    DS: DatasetStore,
    WS: WorkPackageStore,
    AO: AccessOracle,
{
    let response = manager.create_work_order_token(&wp_id, &file_id, &token).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_user_datasets<DS, WS, AO>(
    State(manager): State<SharedManager<DS, WS, AO>>,
    Path(user_id): Path<String>,
    InternalAssertion(assertion): InternalAssertion,
) -> Result<Json<Vec<Dataset>>, WpsHttpError>
where
    DS: DatasetStore,
    WS: WorkPackageStore,
    AO: AccessOracle,
{
    let datasets = manager.list_user_datasets(&user_id, &assertion).await?;
    Ok(Json(datasets))
}

/// Builds the full router, generic over the store/oracle implementations
/// the binary wires up (in-memory fakes for tests, Mongo/HTTP in
/// production).
pub fn router<DS, WS, AO>(manager: SharedManager<DS, WS, AO>) -> Router
where
    DS: DatasetStore + 'static,
    WS: WorkPackageStore + 'static,
    AO: AccessOracle + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/work-packages", post(create_work_package::<DS, WS, AO>))
        .route("/work-packages/:wp_id", get(get_work_package_details::<DS, WS, AO>))
        .route(
            "/work-packages/:wp_id/files/:file_id/work-order-tokens",
            post(create_work_order_token::<DS, WS, AO>),
        )
        .route("/users/:user_id/datasets", get(list_user_datasets::<DS, WS, AO>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(manager)
}
