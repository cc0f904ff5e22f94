use axum::Json;
use axum::extract::{Path, State};

use crate::dto::PackageResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/packages - List packages open for investment.
pub async fn list_packages_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PackageResponse>>> {
    let packages = state.package_service.list_active().await?;

    Ok(Json(packages.into_iter().map(PackageResponse::from).collect()))
}

/// GET /api/packages/{id} - Fetch a single package.
pub async fn get_package_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PackageResponse>> {
    let package = state.package_service.find_by_id(id).await?;

    Ok(Json(PackageResponse::from(package)))
}
