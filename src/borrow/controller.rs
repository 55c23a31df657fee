use std::collections::HashMap;
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde_json::Value;
use crate::borrow::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest, BorrowItemCommandResponse};
use crate::borrow::command::list_borrows_cmd::{ListBorrowsCommand, ListBorrowsCommandRequest, ListBorrowsCommandResponse};
use crate::borrow::command::renew_borrow_cmd::{RenewBorrowCommand, RenewBorrowCommandRequest, RenewBorrowCommandResponse};
use crate::borrow::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest, ReturnItemCommandResponse};
use crate::borrow::domain::BorrowService;
use crate::borrow::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

async fn build_service(state: AppState) -> Box<dyn BorrowService> {
    factory::create_borrow_service(&state.config, state.store).await
}

pub(crate) async fn borrow_item(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<BorrowItemCommandResponse>, ServerError> {
    let req: BorrowItemCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = BorrowItemCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn renew_borrow(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<RenewBorrowCommandResponse>, ServerError> {
    let req: RenewBorrowCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = RenewBorrowCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_item(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnItemCommandResponse>, ServerError> {
    let req: ReturnItemCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = ReturnItemCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_borrows(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<ListBorrowsCommandResponse>, ServerError> {
    let req = ListBorrowsCommandRequest {
        patron_id: params.get("patron_id").map(|s| s.to_string()).unwrap_or_default(),
        page: params.get("page").map(|s| s.to_string()),
        page_size: None,
    };
    let svc = build_service(state).await;
    let res = ListBorrowsCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
