//! Business record models: customers, suppliers, inventory, appointments,
//! and invoices. The schema is deliberately thin; the dashboard only needs
//! enough structure to list records and create new ones.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Timestamp;

/// A customer of the business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Customer {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Phone number in international format, used for WhatsApp reminders.
    pub phone: String,
    /// Optional email address.
    pub email: Option<String>,
    /// When the record was created.
    pub created_at: Timestamp,
}

/// Request to create a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CreateCustomerRequest {
    /// Display name.
    pub name: String,
    /// Phone number in international format.
    pub phone: String,
    /// Optional email address.
    pub email: Option<String>,
}

/// A supplier the business orders from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Supplier {
    /// Unique identifier.
    pub id: Uuid,
    /// Company or contact name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Free-form notes (lead times, terms).
    pub notes: Option<String>,
    /// When the record was created.
    pub created_at: Timestamp,
}

/// Request to create a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CreateSupplierRequest {
    /// Company or contact name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// A stocked product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct InventoryItem {
    /// Unique identifier.
    pub id: Uuid,
    /// Product name.
    pub name: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Units on hand.
    pub quantity: i64,
    /// Unit price in minor currency units (cents).
    pub unit_price_cents: i64,
    /// When the record was created.
    pub created_at: Timestamp,
}

/// Request to create an inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CreateInventoryItemRequest {
    /// Product name.
    pub name: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Units on hand.
    pub quantity: i64,
    /// Unit price in minor currency units (cents).
    pub unit_price_cents: i64,
}

/// A scheduled appointment with a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Appointment {
    /// Unique identifier.
    pub id: Uuid,
    /// Customer display name, denormalized for the reminder body.
    pub customer_name: String,
    /// Customer phone number the reminder is sent to.
    pub customer_phone: String,
    /// Short description of the service.
    pub service: String,
    /// Scheduled start time.
    pub scheduled_at: Timestamp,
    /// When the record was created.
    pub created_at: Timestamp,
}

/// Request to create an appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CreateAppointmentRequest {
    /// Customer display name.
    pub customer_name: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Short description of the service.
    pub service: String,
    /// Scheduled start time.
    pub scheduled_at: Timestamp,
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
}

/// An invoice issued to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Invoice {
    /// Unique identifier.
    pub id: Uuid,
    /// Customer display name.
    pub customer_name: String,
    /// Total in minor currency units (cents).
    pub total_cents: i64,
    /// Payment state.
    pub status: InvoiceStatus,
    /// When the record was created.
    pub created_at: Timestamp,
}

/// Request to create an invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CreateInvoiceRequest {
    /// Customer display name.
    pub customer_name: String,
    /// Total in minor currency units (cents).
    pub total_cents: i64,
    /// Payment state; defaults to draft when omitted.
    pub status: Option<InvoiceStatus>,
}

/// Response for a dispatched appointment reminder.
///
/// Delivery is fire-and-forget; this only confirms the hand-off to the
/// notification sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ReminderResponse {
    /// The appointment the reminder was composed from.
    pub appointment_id: Uuid,
    /// The phone number the message was handed off for.
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn invoice_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Paid).unwrap(),
            "\"paid\""
        );
    }

    #[test]
    fn appointment_roundtrip() {
        let appointment = Appointment {
            id: Uuid::new_v4(),
            customer_name: "Dana".to_string(),
            customer_phone: "+15550100".to_string(),
            service: "Consultation".to_string(),
            scheduled_at: Timestamp(Utc::now()),
            created_at: Timestamp(Utc::now()),
        };
        let json = serde_json::to_string(&appointment).unwrap();
        let back: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, appointment);
    }

    #[test]
    fn create_invoice_status_defaults_to_none() {
        let request: CreateInvoiceRequest =
            serde_json::from_str(r#"{"customer_name":"Dana","total_cents":5000,"status":null}"#)
                .unwrap();
        assert!(request.status.is_none());
    }
}
