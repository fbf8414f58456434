use once_cell::unsync::OnceCell;
use reqwest::{Client, Error};
use shared::models::{
    Appointment, AuthenticatedUser, CreateAppointmentRequest, CreateCustomerRequest,
    CreateInventoryItemRequest, CreateInvoiceRequest, CreateSupplierRequest, Customer,
    InventoryItem, Invoice, LoginRequest, LoginResponse, ReminderResponse, Supplier,
    ThemeSettings,
};
use uuid::Uuid;

const DEFAULT_BASE_URL: &str = "/api";

thread_local! {
    static SHARED_CLIENT: OnceCell<ShopKeepClient> = const { OnceCell::new() };
}

/// Lightweight API client for ShopKeep web interactions.
///
/// The session cookie rides along automatically in the browser; the client
/// never touches it.
#[derive(Clone, Debug)]
pub struct ShopKeepClient {
    base_url: String,
    client: Client,
}

impl ShopKeepClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(DEFAULT_BASE_URL)).clone())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Authenticate with username/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, Error> {
        let url = self.api_url("auth/login");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Retrieve the authenticated user, or a 401 error when no session lives.
    pub async fn current_user(&self) -> Result<AuthenticatedUser, Error> {
        let url = self.api_url("auth/me");
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    /// Revoke the current session.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.api_url("auth/logout");
        let response = self.client.post(url).send().await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Retrieve the dashboard theme settings.
    pub async fn theme(&self) -> Result<ThemeSettings, Error> {
        let url = self.api_url("theme");
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, Error> {
        let url = self.api_url("customers");
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    pub async fn create_customer(&self, payload: &CreateCustomerRequest) -> Result<Customer, Error> {
        let url = self.api_url("customers");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    pub async fn list_suppliers(&self) -> Result<Vec<Supplier>, Error> {
        let url = self.api_url("suppliers");
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    pub async fn create_supplier(&self, payload: &CreateSupplierRequest) -> Result<Supplier, Error> {
        let url = self.api_url("suppliers");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    pub async fn list_inventory(&self) -> Result<Vec<InventoryItem>, Error> {
        let url = self.api_url("inventory");
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    pub async fn create_inventory_item(
        &self,
        payload: &CreateInventoryItemRequest,
    ) -> Result<InventoryItem, Error> {
        let url = self.api_url("inventory");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, Error> {
        let url = self.api_url("appointments");
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    pub async fn create_appointment(
        &self,
        payload: &CreateAppointmentRequest,
    ) -> Result<Appointment, Error> {
        let url = self.api_url("appointments");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, Error> {
        let url = self.api_url("invoices");
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    pub async fn create_invoice(&self, payload: &CreateInvoiceRequest) -> Result<Invoice, Error> {
        let url = self.api_url("invoices");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Ask the server to hand a WhatsApp reminder for an appointment to the
    /// provider. Fire-and-forget from the client's point of view.
    pub async fn send_reminder(&self, appointment_id: Uuid) -> Result<ReminderResponse, Error> {
        let url = self.api_url(&format!("appointments/{appointment_id}/reminder"));
        let response = self.client.post(url).send().await?;
        response.error_for_status()?.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_without_double_slashes() {
        let client = ShopKeepClient::new("/api/");
        assert_eq!(client.api_url("/auth/login"), "/api/auth/login");
        assert_eq!(client.api_url("customers"), "/api/customers");
    }
}
