//! In-memory business record store.
//!
//! The real deployment persists these through an external data layer; the
//! server only needs list/create/get so the dashboard has live endpoints.

use std::sync::{PoisonError, RwLock};

use shared::models::{
    Appointment, CreateAppointmentRequest, CreateCustomerRequest, CreateInventoryItemRequest,
    CreateInvoiceRequest, CreateSupplierRequest, Customer, InventoryItem, Invoice, InvoiceStatus,
    Supplier, Timestamp,
};
use uuid::Uuid;

/// Thread-safe collections for every record type the dashboard lists.
#[derive(Default)]
pub struct DataStore {
    customers: RwLock<Vec<Customer>>,
    suppliers: RwLock<Vec<Supplier>>,
    inventory: RwLock<Vec<InventoryItem>>,
    appointments: RwLock<Vec<Appointment>>,
    invoices: RwLock<Vec<Invoice>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_customers(&self) -> Vec<Customer> {
        self.customers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn create_customer(&self, request: CreateCustomerRequest) -> Customer {
        let customer = Customer {
            id: Uuid::new_v4(),
            name: request.name,
            phone: request.phone,
            email: request.email,
            created_at: Timestamp::now(),
        };
        self.customers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(customer.clone());
        customer
    }

    pub fn list_suppliers(&self) -> Vec<Supplier> {
        self.suppliers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn create_supplier(&self, request: CreateSupplierRequest) -> Supplier {
        let supplier = Supplier {
            id: Uuid::new_v4(),
            name: request.name,
            phone: request.phone,
            notes: request.notes,
            created_at: Timestamp::now(),
        };
        self.suppliers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(supplier.clone());
        supplier
    }

    pub fn list_inventory(&self) -> Vec<InventoryItem> {
        self.inventory
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn create_inventory_item(&self, request: CreateInventoryItemRequest) -> InventoryItem {
        let item = InventoryItem {
            id: Uuid::new_v4(),
            name: request.name,
            sku: request.sku,
            quantity: request.quantity,
            unit_price_cents: request.unit_price_cents,
            created_at: Timestamp::now(),
        };
        self.inventory
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item.clone());
        item
    }

    pub fn list_appointments(&self) -> Vec<Appointment> {
        self.appointments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn create_appointment(&self, request: CreateAppointmentRequest) -> Appointment {
        let appointment = Appointment {
            id: Uuid::new_v4(),
            customer_name: request.customer_name,
            customer_phone: request.customer_phone,
            service: request.service,
            scheduled_at: request.scheduled_at,
            created_at: Timestamp::now(),
        };
        self.appointments
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(appointment.clone());
        appointment
    }

    pub fn appointment(&self, id: Uuid) -> Option<Appointment> {
        self.appointments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|appointment| appointment.id == id)
            .cloned()
    }

    pub fn list_invoices(&self) -> Vec<Invoice> {
        self.invoices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn create_invoice(&self, request: CreateInvoiceRequest) -> Invoice {
        let invoice = Invoice {
            id: Uuid::new_v4(),
            customer_name: request.customer_name,
            total_cents: request.total_cents,
            status: request.status.unwrap_or(InvoiceStatus::Draft),
            created_at: Timestamp::now(),
        };
        self.invoices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(invoice.clone());
        invoice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn created_customers_are_listed_in_insertion_order() {
        let store = DataStore::new();
        assert!(store.list_customers().is_empty());

        let first = store.create_customer(CreateCustomerRequest {
            name: "Dana".into(),
            phone: "+15550100".into(),
            email: None,
        });
        let second = store.create_customer(CreateCustomerRequest {
            name: "Ravi".into(),
            phone: "+15550101".into(),
            email: Some("ravi@example.com".into()),
        });

        let listed = store.list_customers();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn appointment_lookup_by_id() {
        let store = DataStore::new();
        let appointment = store.create_appointment(CreateAppointmentRequest {
            customer_name: "Dana".into(),
            customer_phone: "+15550100".into(),
            service: "Haircut".into(),
            scheduled_at: Timestamp(Utc::now()),
        });

        assert_eq!(store.appointment(appointment.id), Some(appointment));
        assert_eq!(store.appointment(Uuid::new_v4()), None);
    }

    #[test]
    fn invoice_status_defaults_to_draft() {
        let store = DataStore::new();
        let invoice = store.create_invoice(CreateInvoiceRequest {
            customer_name: "Dana".into(),
            total_cents: 12_500,
            status: None,
        });
        assert_eq!(invoice.status, InvoiceStatus::Draft);

        let sent = store.create_invoice(CreateInvoiceRequest {
            customer_name: "Ravi".into(),
            total_cents: 4_000,
            status: Some(InvoiceStatus::Sent),
        });
        assert_eq!(sent.status, InvoiceStatus::Sent);
    }

    #[test]
    fn collections_are_independent() {
        let store = DataStore::new();
        store.create_supplier(CreateSupplierRequest {
            name: "Acme Wholesale".into(),
            phone: "+15550200".into(),
            notes: None,
        });
        store.create_inventory_item(CreateInventoryItemRequest {
            name: "Shampoo".into(),
            sku: "SH-001".into(),
            quantity: 12,
            unit_price_cents: 1_299,
        });

        assert_eq!(store.list_suppliers().len(), 1);
        assert_eq!(store.list_inventory().len(), 1);
        assert!(store.list_customers().is_empty());
        assert!(store.list_invoices().is_empty());
    }
}
