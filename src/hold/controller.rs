use std::collections::HashMap;
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::hold::command::cancel_hold_cmd::{CancelHoldCommand, CancelHoldCommandRequest, CancelHoldCommandResponse};
use crate::hold::command::list_holds_cmd::{ListHoldsCommand, ListHoldsCommandRequest, ListHoldsCommandResponse};
use crate::hold::command::reserve_item_cmd::{ReserveItemCommand, ReserveItemCommandRequest, ReserveItemCommandResponse};
use crate::hold::domain::HoldService;
use crate::hold::factory;

async fn build_service(state: AppState) -> Box<dyn HoldService> {
    factory::create_hold_service(&state.config, state.store).await
}

pub(crate) async fn reserve_item(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReserveItemCommandResponse>, ServerError> {
    let req: ReserveItemCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = ReserveItemCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn cancel_hold(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CancelHoldCommandResponse>, ServerError> {
    let req: CancelHoldCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = CancelHoldCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_holds(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<ListHoldsCommandResponse>, ServerError> {
    let req = ListHoldsCommandRequest {
        patron_id: params.get("patron_id").map(|s| s.to_string()).unwrap_or_default(),
        page: params.get("page").map(|s| s.to_string()),
        page_size: None,
    };
    let svc = build_service(state).await;
    let res = ListHoldsCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
