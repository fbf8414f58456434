use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tracing::info;

use crate::{
    app_state::AppState,
    handlers::{
        records::{
            create_appointment, create_customer, create_inventory_item, create_invoice,
            create_supplier, list_appointments, list_customers, list_inventory, list_invoices,
            list_suppliers,
        },
        reminders::send_reminder,
    },
    middleware::auth::auth_middleware,
};

/// Register the business record routes. Every route requires a live session.
pub fn create_router_records(state: Arc<AppState>) -> Router<Arc<AppState>> {
    info!("Creating records router");
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/suppliers", get(list_suppliers).post(create_supplier))
        .route(
            "/inventory",
            get(list_inventory).post(create_inventory_item),
        )
        .route(
            "/appointments",
            get(list_appointments).post(create_appointment),
        )
        .route("/appointments/{id}/reminder", post(send_reminder))
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
