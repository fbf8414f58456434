//! Handlers for the business record collections.
//!
//! All of these sit behind the auth middleware; validation is limited to
//! rejecting blank identifying fields, the rest is the caller's problem.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use crate::{
    app_state::AppState,
    http::error::{ApiError, AppResult},
};
use shared::models::{
    Appointment, CreateAppointmentRequest, CreateCustomerRequest, CreateInventoryItemRequest,
    CreateInvoiceRequest, CreateSupplierRequest, Customer, InventoryItem, Invoice, Supplier,
};

fn require_nonempty(value: &str, field: &'static str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::unprocessable(format!("{field} is required")));
    }
    Ok(())
}

/// List customers.
#[utoipa::path(
    get,
    path = "/api/customers",
    responses((status = 200, description = "All customers", body = [Customer])),
    tag = "Records"
)]
#[instrument(skip(state))]
pub async fn list_customers(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(state.records.list_customers()))
}

/// Create a customer.
#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Created", body = Customer),
        (status = 422, description = "Missing required fields")
    ),
    tag = "Records"
)]
#[instrument(skip(state, payload))]
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    require_nonempty(&payload.name, "name")?;
    require_nonempty(&payload.phone, "phone")?;
    Ok((
        StatusCode::CREATED,
        Json(state.records.create_customer(payload)),
    ))
}

/// List suppliers.
#[utoipa::path(
    get,
    path = "/api/suppliers",
    responses((status = 200, description = "All suppliers", body = [Supplier])),
    tag = "Records"
)]
#[instrument(skip(state))]
pub async fn list_suppliers(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Supplier>>> {
    Ok(Json(state.records.list_suppliers()))
}

/// Create a supplier.
#[utoipa::path(
    post,
    path = "/api/suppliers",
    request_body = CreateSupplierRequest,
    responses(
        (status = 201, description = "Created", body = Supplier),
        (status = 422, description = "Missing required fields")
    ),
    tag = "Records"
)]
#[instrument(skip(state, payload))]
pub async fn create_supplier(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSupplierRequest>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    require_nonempty(&payload.name, "name")?;
    Ok((
        StatusCode::CREATED,
        Json(state.records.create_supplier(payload)),
    ))
}

/// List inventory items.
#[utoipa::path(
    get,
    path = "/api/inventory",
    responses((status = 200, description = "All inventory items", body = [InventoryItem])),
    tag = "Records"
)]
#[instrument(skip(state))]
pub async fn list_inventory(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    Ok(Json(state.records.list_inventory()))
}

/// Create an inventory item.
#[utoipa::path(
    post,
    path = "/api/inventory",
    request_body = CreateInventoryItemRequest,
    responses(
        (status = 201, description = "Created", body = InventoryItem),
        (status = 422, description = "Missing required fields")
    ),
    tag = "Records"
)]
#[instrument(skip(state, payload))]
pub async fn create_inventory_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateInventoryItemRequest>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    require_nonempty(&payload.name, "name")?;
    require_nonempty(&payload.sku, "sku")?;
    if payload.quantity < 0 {
        return Err(ApiError::unprocessable("quantity must not be negative"));
    }
    Ok((
        StatusCode::CREATED,
        Json(state.records.create_inventory_item(payload)),
    ))
}

/// List appointments.
#[utoipa::path(
    get,
    path = "/api/appointments",
    responses((status = 200, description = "All appointments", body = [Appointment])),
    tag = "Records"
)]
#[instrument(skip(state))]
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<Appointment>>> {
    Ok(Json(state.records.list_appointments()))
}

/// Create an appointment.
#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Created", body = Appointment),
        (status = 422, description = "Missing required fields")
    ),
    tag = "Records"
)]
#[instrument(skip(state, payload))]
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    require_nonempty(&payload.customer_name, "customer_name")?;
    require_nonempty(&payload.customer_phone, "customer_phone")?;
    require_nonempty(&payload.service, "service")?;
    Ok((
        StatusCode::CREATED,
        Json(state.records.create_appointment(payload)),
    ))
}

/// List invoices.
#[utoipa::path(
    get,
    path = "/api/invoices",
    responses((status = 200, description = "All invoices", body = [Invoice])),
    tag = "Records"
)]
#[instrument(skip(state))]
pub async fn list_invoices(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Invoice>>> {
    Ok(Json(state.records.list_invoices()))
}

/// Create an invoice.
#[utoipa::path(
    post,
    path = "/api/invoices",
    request_body = CreateInvoiceRequest,
    responses(
        (status = 201, description = "Created", body = Invoice),
        (status = 422, description = "Missing required fields")
    ),
    tag = "Records"
)]
#[instrument(skip(state, payload))]
pub async fn create_invoice(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateInvoiceRequest>,
) -> AppResult<(StatusCode, Json<Invoice>)> {
    require_nonempty(&payload.customer_name, "customer_name")?;
    if payload.total_cents < 0 {
        return Err(ApiError::unprocessable("total_cents must not be negative"));
    }
    Ok((
        StatusCode::CREATED,
        Json(state.records.create_invoice(payload)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::testing::test_state;
    use axum::{Router, routing::get};
    use axum_test::TestServer;

    fn records_app() -> TestServer {
        // Middleware is exercised separately; these tests target the handlers.
        let app = Router::new()
            .route("/api/customers", get(list_customers).post(create_customer))
            .route("/api/inventory", get(list_inventory).post(create_inventory_item))
            .with_state(test_state());
        TestServer::new(app).expect("test server")
    }

    #[tokio::test]
    async fn create_then_list_customers() {
        let server = records_app();

        let created = server
            .post("/api/customers")
            .json(&CreateCustomerRequest {
                name: "Dana".into(),
                phone: "+15550100".into(),
                email: None,
            })
            .await;
        assert_eq!(created.status_code(), StatusCode::CREATED);

        let listed = server.get("/api/customers").await;
        let customers: Vec<Customer> = listed.json();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "Dana");
    }

    #[tokio::test]
    async fn blank_customer_name_is_rejected() {
        let server = records_app();
        let response = server
            .post("/api/customers")
            .json(&CreateCustomerRequest {
                name: "   ".into(),
                phone: "+15550100".into(),
                email: None,
            })
            .await;
        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn negative_inventory_quantity_is_rejected() {
        let server = records_app();
        let response = server
            .post("/api/inventory")
            .json(&CreateInventoryItemRequest {
                name: "Shampoo".into(),
                sku: "SH-001".into(),
                quantity: -1,
                unit_price_cents: 1_299,
            })
            .await;
        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
