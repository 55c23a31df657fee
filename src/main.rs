include!("lib.rs");

use std::net::SocketAddr;
use std::time::Duration;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::warn;
use crate::availability::controller::get_availability;
use crate::borrow::controller::{borrow_item, list_borrows, renew_borrow, return_item};
use crate::borrow::factory::create_borrow_service;
use crate::catalog::controller::{add_item, find_item_by_id, list_items};
use crate::core::controller::AppState;
use crate::core::repository::RepositoryStore;
use crate::hold::controller::{cancel_hold, list_holds, reserve_item};
use crate::hold::factory::create_hold_service;
use crate::utils::store::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let state = AppState::new("main", RepositoryStore::InMemory);
    spawn_sweeps(&state);

    let app = Router::new()
        .route("/items", post(add_item).get(list_items))
        .route("/items/:item_id", get(find_item_by_id))
        .route("/borrow", post(borrow_item).get(list_borrows))
        .route("/borrow/renew", post(renew_borrow))
        .route("/borrow/return", post(return_item))
        .route("/hold", post(reserve_item).get(list_holds))
        .route("/hold/cancel", post(cancel_hold))
        .route("/availability/:item_id", get(get_availability))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

// the periodic sweeps run on their own timers, independent of request
// traffic, and go through the same per-item exclusive sections
fn spawn_sweeps(state: &AppState) {
    let overdue_state = state.clone();
    tokio::spawn(async move {
        let svc = create_borrow_service(&overdue_state.config, overdue_state.store).await;
        let mut ticker = tokio::time::interval(
            Duration::from_secs(overdue_state.config.sweep_interval_secs));
        loop {
            ticker.tick().await;
            if let Err(err) = svc.mark_overdue().await {
                warn!("overdue sweep failed: {}", err);
            }
        }
    });
    let expiry_state = state.clone();
    tokio::spawn(async move {
        let svc = create_hold_service(&expiry_state.config, expiry_state.store).await;
        let mut ticker = tokio::time::interval(
            Duration::from_secs(expiry_state.config.sweep_interval_secs));
        loop {
            ticker.tick().await;
            if let Err(err) = svc.expire_ready().await {
                warn!("hold expiry sweep failed: {}", err);
            }
        }
    });
}
