#![allow(clippy::needless_for_each)] // Derive macro emits a for_each internally

use shared::models::{
    Appointment, AuthenticatedUser, CreateAppointmentRequest, CreateCustomerRequest,
    CreateInventoryItemRequest, CreateInvoiceRequest, CreateSupplierRequest, Customer,
    InventoryItem, Invoice, InvoiceStatus, LoginRequest, LoginResponse, ReminderResponse,
    Role, Supplier, ThemeSettings,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ShopKeep API",
        version = "1.0.0",
        description = "API documentation for ShopKeep"
    ),
    paths(
        crate::handlers::auth::login,
        crate::handlers::auth::me,
        crate::handlers::auth::logout,
        crate::handlers::theme::get_theme,
        crate::handlers::records::list_customers,
        crate::handlers::records::create_customer,
        crate::handlers::records::list_suppliers,
        crate::handlers::records::create_supplier,
        crate::handlers::records::list_inventory,
        crate::handlers::records::create_inventory_item,
        crate::handlers::records::list_appointments,
        crate::handlers::records::create_appointment,
        crate::handlers::records::list_invoices,
        crate::handlers::records::create_invoice,
        crate::handlers::reminders::send_reminder,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            AuthenticatedUser,
            Role,
            ThemeSettings,
            Customer,
            CreateCustomerRequest,
            Supplier,
            CreateSupplierRequest,
            InventoryItem,
            CreateInventoryItemRequest,
            Appointment,
            CreateAppointmentRequest,
            Invoice,
            InvoiceStatus,
            CreateInvoiceRequest,
            ReminderResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Session endpoints"),
        (name = "Theme", description = "Dashboard appearance settings"),
        (name = "Records", description = "Business record collections"),
        (name = "Reminders", description = "WhatsApp appointment reminders")
    )
)]
pub struct ApiDoc;
