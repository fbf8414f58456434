//! Wire models shared between the server and the dashboard.

pub mod records;
pub mod theme;
pub mod timestamp;
pub mod user;

pub use records::{
    Appointment, CreateAppointmentRequest, CreateCustomerRequest, CreateInventoryItemRequest,
    CreateInvoiceRequest, CreateSupplierRequest, Customer, InventoryItem, Invoice, InvoiceStatus,
    ReminderResponse, Supplier,
};
pub use theme::{ThemeSettings, hex_to_hsl};
pub use timestamp::Timestamp;
pub use user::{AuthenticatedUser, LoginRequest, LoginResponse, Role};
