use std::collections::HashMap;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use crate::availability::command::get_availability_cmd::{GetAvailabilityCommand, GetAvailabilityCommandRequest, GetAvailabilityCommandResponse};
use crate::availability::domain::AvailabilityService;
use crate::availability::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

async fn build_service(state: AppState) -> Box<dyn AvailabilityService> {
    factory::create_availability_service(&state.config, state.store).await
}

pub(crate) async fn get_availability(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<GetAvailabilityCommandResponse>, ServerError> {
    let req = GetAvailabilityCommandRequest {
        item_id,
        patron_id: params.get("patron_id").map(|s| s.to_string()),
    };
    let svc = build_service(state).await;
    let res = GetAvailabilityCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
