use yew::prelude::*;
use yew_hooks::{UseAsyncOptions, use_async_with_options};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::{api::ShopKeepClient, routes::MainRoute};

#[derive(Clone, PartialEq, Eq, Default)]
struct Counts {
    customers: usize,
    appointments: usize,
    invoices: usize,
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let counts = use_async_with_options(
        async move {
            let client = ShopKeepClient::shared();
            let customers = client.list_customers().await.map_err(|err| err.to_string())?;
            let appointments = client
                .list_appointments()
                .await
                .map_err(|err| err.to_string())?;
            let invoices = client.list_invoices().await.map_err(|err| err.to_string())?;
            Ok::<Counts, String>(Counts {
                customers: customers.len(),
                appointments: appointments.len(),
                invoices: invoices.len(),
            })
        },
        UseAsyncOptions::enable_auto(),
    );

    let stats = counts.data.clone().unwrap_or_default();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"ShopKeep"}</h1>

            if let Some(error) = &counts.error {
                <div class="alert alert-error">
                    <span>{format!("Could not load dashboard stats: {error}")}</span>
                </div>
            }

            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Customers"}</div>
                    <div class="stat-value">{stats.customers}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineCalendarDays} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Appointments"}</div>
                    <div class="stat-value">{stats.appointments}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{"Invoices"}</div>
                    <div class="stat-value">{stats.invoices}</div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-6 h-6" />
                            {"Customers"}
                        </h2>
                        <p>{"Contact details for everyone you do business with."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Customers} classes="btn btn-primary">
                                {"Open"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineCalendarDays} class="w-6 h-6" />
                            {"Appointments"}
                        </h2>
                        <p>{"Upcoming bookings, with one-tap WhatsApp reminders."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Appointments} classes="btn btn-primary">
                                {"Open"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-6 h-6" />
                            {"Invoices"}
                        </h2>
                        <p>{"Draft, send and settle invoices."}</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Invoices} classes="btn btn-secondary">
                                {"Open"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
