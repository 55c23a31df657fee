use std::collections::HashMap;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;
use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest, AddItemCommandResponse};
use crate::catalog::command::get_item_cmd::{GetItemCommand, GetItemCommandRequest, GetItemCommandResponse};
use crate::catalog::command::list_items_cmd::{ListItemsCommand, ListItemsCommandRequest, ListItemsCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

async fn build_service(state: AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.store).await
}

pub(crate) async fn add_item(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddItemCommandResponse>, ServerError> {
    let req: AddItemCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddItemCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_item_by_id(
    State(state): State<AppState>,
    Path(item_id): Path<String>) -> Result<Json<GetItemCommandResponse>, ServerError> {
    let req = GetItemCommandRequest { item_id };
    let svc = build_service(state).await;
    let res = GetItemCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<ListItemsCommandResponse>, ServerError> {
    let req = ListItemsCommandRequest {
        age_group: params.get("age_group").map(|s| s.to_string()),
        page: params.get("page").map(|s| s.to_string()),
        page_size: None,
    };
    let svc = build_service(state).await;
    let res = ListItemsCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
