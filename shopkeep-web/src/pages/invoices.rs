use shared::models::{CreateInvoiceRequest, InvoiceStatus};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::{UseAsyncOptions, use_async_with_options};

use crate::{
    api::ShopKeepClient,
    components::toast::use_toaster,
    net::gate::{FeatureKind, NetworkGate},
    pages::inventory::format_cents,
};

pub fn status_badge_class(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Draft => "badge badge-ghost",
        InvoiceStatus::Sent => "badge badge-info",
        InvoiceStatus::Paid => "badge badge-success",
    }
}

fn status_label(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Draft => "Draft",
        InvoiceStatus::Sent => "Sent",
        InvoiceStatus::Paid => "Paid",
    }
}

#[function_component(InvoicesPage)]
pub fn invoices_page() -> Html {
    let customer_name = use_state(String::new);
    let total = use_state(String::new);
    let toaster = use_toaster();

    let invoices = use_async_with_options(
        async move {
            ShopKeepClient::shared()
                .list_invoices()
                .await
                .map_err(|err| err.to_string())
        },
        UseAsyncOptions::enable_auto(),
    );

    let on_refresh = {
        let invoices = invoices.clone();
        Callback::from(move |_: MouseEvent| invoices.run())
    };

    let on_create = {
        let customer_name = customer_name.clone();
        let total = total.clone();
        let invoices = invoices.clone();
        let toaster = toaster.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(total_value) = total.parse::<i64>() else {
                toaster.error("Total must be whole cents");
                return;
            };
            let request = CreateInvoiceRequest {
                customer_name: (*customer_name).clone(),
                total_cents: total_value,
                status: None,
            };
            let customer_name = customer_name.clone();
            let total = total.clone();
            let invoices = invoices.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ShopKeepClient::shared().create_invoice(&request).await {
                    Ok(created) => {
                        toaster.success(format!("Invoice drafted for {}", created.customer_name));
                        customer_name.set(String::new());
                        total.set(String::new());
                        invoices.run();
                    }
                    Err(err) => toaster.error(format!("Could not draft invoice: {err}")),
                }
            });
        })
    };

    let bind_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    html! {
        <div class="p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Invoices"}</h1>
                <NetworkGate kind={FeatureKind::Sync}>
                    <button class="btn btn-ghost btn-sm" onclick={on_refresh}>{"Refresh"}</button>
                </NetworkGate>
            </div>

            if let Some(error) = &invoices.error {
                <div class="alert alert-error"><span>{format!("Could not load invoices: {error}")}</span></div>
            }

            if invoices.loading {
                <span class="loading loading-dots loading-md"></span>
            }

            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Customer"}</th>
                            <th>{"Total"}</th>
                            <th>{"Status"}</th>
                            <th>{"Created"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for invoices.data.iter().flatten().map(|invoice| html! {
                            <tr key={invoice.id.to_string()}>
                                <td>{&invoice.customer_name}</td>
                                <td>{format_cents(invoice.total_cents)}</td>
                                <td>
                                    <span class={status_badge_class(invoice.status)}>
                                        {status_label(invoice.status)}
                                    </span>
                                </td>
                                <td>{invoice.created_at.0.format("%Y-%m-%d").to_string()}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>

            <form class="card bg-base-200 p-4 flex flex-row gap-2 items-end" onsubmit={on_create}>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Customer"}</span></label>
                    <input class="input input-bordered input-sm" required=true
                        value={(*customer_name).clone()} oninput={bind_input(&customer_name)} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Total (cents)"}</span></label>
                    <input class="input input-bordered input-sm" type="number" required=true
                        value={(*total).clone()} oninput={bind_input(&total)} />
                </div>
                <button class="btn btn-primary btn-sm" type="submit">{"Draft invoice"}</button>
            </form>
        </div>
    }
}
