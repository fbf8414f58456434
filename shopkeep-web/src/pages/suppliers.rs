use shared::models::CreateSupplierRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::{UseAsyncOptions, use_async_with_options};

use crate::{
    api::ShopKeepClient,
    components::toast::use_toaster,
    net::gate::{FeatureKind, NetworkGate},
};

#[function_component(SuppliersPage)]
pub fn suppliers_page() -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let notes = use_state(String::new);
    let toaster = use_toaster();

    let suppliers = use_async_with_options(
        async move {
            ShopKeepClient::shared()
                .list_suppliers()
                .await
                .map_err(|err| err.to_string())
        },
        UseAsyncOptions::enable_auto(),
    );

    let on_refresh = {
        let suppliers = suppliers.clone();
        Callback::from(move |_: MouseEvent| suppliers.run())
    };

    let on_create = {
        let name = name.clone();
        let phone = phone.clone();
        let notes = notes.clone();
        let suppliers = suppliers.clone();
        let toaster = toaster.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = CreateSupplierRequest {
                name: (*name).clone(),
                phone: (*phone).clone(),
                notes: Some((*notes).clone()).filter(|value| !value.is_empty()),
            };
            let name = name.clone();
            let phone = phone.clone();
            let notes = notes.clone();
            let suppliers = suppliers.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ShopKeepClient::shared().create_supplier(&request).await {
                    Ok(created) => {
                        toaster.success(format!("Added {}", created.name));
                        name.set(String::new());
                        phone.set(String::new());
                        notes.set(String::new());
                        suppliers.run();
                    }
                    Err(err) => toaster.error(format!("Could not add supplier: {err}")),
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
                <h1 class="text-2xl font-bold">{"Suppliers"}</h1>
                <NetworkGate kind={FeatureKind::Sync}>
                    <button class="btn btn-ghost btn-sm" onclick={on_refresh}>{"Refresh"}</button>
                </NetworkGate>
            </div>

            if let Some(error) = &suppliers.error {
                <div class="alert alert-error"><span>{format!("Could not load suppliers: {error}")}</span></div>
            }

            if suppliers.loading {
                <span class="loading loading-dots loading-md"></span>
            }

            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Phone"}</th>
                            <th>{"Notes"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for suppliers.data.iter().flatten().map(|supplier| html! {
                            <tr key={supplier.id.to_string()}>
                                <td>{&supplier.name}</td>
                                <td>{&supplier.phone}</td>
                                <td>{supplier.notes.clone().unwrap_or_default()}</td>
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
                    <label class="label"><span class="label-text">{"Notes"}</span></label>
                    <input class="input input-bordered input-sm"
                        value={(*notes).clone()} oninput={bind_input(&notes)} />
                </div>
                <button class="btn btn-primary btn-sm" type="submit">{"Add supplier"}</button>
            </form>
        </div>
    }
}
