use shared::models::CreateCustomerRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::{UseAsyncOptions, use_async_with_options};

use crate::{
    api::ShopKeepClient,
    components::toast::use_toaster,
    net::gate::{FeatureKind, NetworkGate},
};

#[function_component(CustomersPage)]
pub fn customers_page() -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let toaster = use_toaster();

    let customers = use_async_with_options(
        async move {
            ShopKeepClient::shared()
                .list_customers()
                .await
                .map_err(|err| err.to_string())
        },
        UseAsyncOptions::enable_auto(),
    );

    let on_refresh = {
        let customers = customers.clone();
        Callback::from(move |_: MouseEvent| customers.run())
    };

    let on_create = {
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let customers = customers.clone();
        let toaster = toaster.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = CreateCustomerRequest {
                name: (*name).clone(),
                phone: (*phone).clone(),
                email: Some((*email).clone()).filter(|value| !value.is_empty()),
            };
            let name = name.clone();
            let phone = phone.clone();
            let email = email.clone();
            let customers = customers.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ShopKeepClient::shared().create_customer(&request).await {
                    Ok(created) => {
                        toaster.success(format!("Added {}", created.name));
                        name.set(String::new());
                        phone.set(String::new());
                        email.set(String::new());
                        customers.run();
                    }
                    Err(err) => toaster.error(format!("Could not add customer: {err}")),
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
                <h1 class="text-2xl font-bold">{"Customers"}</h1>
                <NetworkGate kind={FeatureKind::Sync}>
                    <button class="btn btn-ghost btn-sm" onclick={on_refresh}>{"Refresh"}</button>
                </NetworkGate>
            </div>

            if let Some(error) = &customers.error {
                <div class="alert alert-error"><span>{format!("Could not load customers: {error}")}</span></div>
            }

            if customers.loading {
                <span class="loading loading-dots loading-md"></span>
            }

            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Phone"}</th>
                            <th>{"Email"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for customers.data.iter().flatten().map(|customer| html! {
                            <tr key={customer.id.to_string()}>
                                <td>{&customer.name}</td>
                                <td>{&customer.phone}</td>
                                <td>{customer.email.clone().unwrap_or_default()}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>

            <form class="card bg-base-200 p-4 flex flex-row gap-2 items-end" onsubmit={on_create}>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Name"}</span></label>
                    <input class="input input-bordered input-sm" required=true
                        value={(*name).clone()} oninput={bind_input(&name)} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Phone"}</span></label>
                    <input class="input input-bordered input-sm" required=true
                        value={(*phone).clone()} oninput={bind_input(&phone)} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Email"}</span></label>
                    <input class="input input-bordered input-sm" type="email"
                        value={(*email).clone()} oninput={bind_input(&email)} />
                </div>
                <button class="btn btn-primary btn-sm" type="submit">{"Add customer"}</button>
            </form>
        </div>
    }
}
