use shared::models::Role;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    auth::{guard::SessionGuard, protected::ProtectedRoute},
    containers::layout::Layout,
    pages::{
        appointments::AppointmentsPage, customers::CustomersPage, dashboard::DashboardPage,
        error::ErrorPage, inventory::InventoryPage, invoices::InvoicesPage, login::LoginPage,
        settings::SettingsPage, suppliers::SuppliersPage,
    },
};

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/customers")]
    Customers,
    #[at("/suppliers")]
    Suppliers,
    #[at("/inventory")]
    Inventory,
    #[at("/appointments")]
    Appointments,
    #[at("/invoices")]
    Invoices,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    pub fn label(&self) -> &'static str {
        match self {
            MainRoute::Home => "Dashboard",
            MainRoute::Login => "Login",
            MainRoute::Customers => "Customers",
            MainRoute::Suppliers => "Suppliers",
            MainRoute::Inventory => "Inventory",
            MainRoute::Appointments => "Appointments",
            MainRoute::Invoices => "Invoices",
            MainRoute::Settings => "Settings",
            MainRoute::NotFound => "Not found",
        }
    }

    /// Routes shown in the header navigation. Settings is admin chrome and
    /// handled separately; login and 404 never appear.
    pub fn in_nav(&self) -> bool {
        !matches!(
            self,
            MainRoute::Login | MainRoute::Settings | MainRoute::NotFound
        )
    }
}

fn guarded(current: MainRoute, required_role: Option<Role>, page: Html) -> Html {
    html! {
        <SessionGuard>
            <ProtectedRoute {required_role}>
                <Layout current_route={current}>
                    {page}
                </Layout>
            </ProtectedRoute>
        </SessionGuard>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    match route {
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Home => guarded(MainRoute::Home, None, html! { <DashboardPage /> }),
        MainRoute::Customers => guarded(MainRoute::Customers, None, html! { <CustomersPage /> }),
        MainRoute::Suppliers => guarded(MainRoute::Suppliers, None, html! { <SuppliersPage /> }),
        MainRoute::Inventory => guarded(MainRoute::Inventory, None, html! { <InventoryPage /> }),
        MainRoute::Appointments => {
            guarded(MainRoute::Appointments, None, html! { <AppointmentsPage /> })
        }
        MainRoute::Invoices => guarded(MainRoute::Invoices, None, html! { <InvoicesPage /> }),
        MainRoute::Settings => guarded(
            MainRoute::Settings,
            Some(Role::Administrator),
            html! { <SettingsPage /> },
        ),
        MainRoute::NotFound => guarded(MainRoute::NotFound, None, html! { <ErrorPage /> }),
    }
}
