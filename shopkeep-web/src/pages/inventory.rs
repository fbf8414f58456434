use shared::models::CreateInventoryItemRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::{UseAsyncOptions, use_async_with_options};

use crate::{
    api::ShopKeepClient,
    components::toast::use_toaster,
    net::gate::{FeatureKind, NetworkGate},
};

/// Renders integer cents as a dollar amount.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}${}.{:02}", cents / 100, cents % 100)
}

#[function_component(InventoryPage)]
pub fn inventory_page() -> Html {
    let name = use_state(String::new);
    let sku = use_state(String::new);
    let quantity = use_state(String::new);
    let unit_price = use_state(String::new);
    let toaster = use_toaster();

    let inventory = use_async_with_options(
        async move {
            ShopKeepClient::shared()
                .list_inventory()
                .await
                .map_err(|err| err.to_string())
        },
        UseAsyncOptions::enable_auto(),
    );

    let on_refresh = {
        let inventory = inventory.clone();
        Callback::from(move |_: MouseEvent| inventory.run())
    };

    let on_create = {
        let name = name.clone();
        let sku = sku.clone();
        let quantity = quantity.clone();
        let unit_price = unit_price.clone();
        let inventory = inventory.clone();
        let toaster = toaster.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(quantity_value) = quantity.parse::<i64>() else {
                toaster.error("Quantity must be a whole number");
                return;
            };
            let Ok(price_value) = unit_price.parse::<i64>() else {
                toaster.error("Unit price must be whole cents");
                return;
            };
            let request = CreateInventoryItemRequest {
                name: (*name).clone(),
                sku: (*sku).clone(),
                quantity: quantity_value,
                unit_price_cents: price_value,
            };
            let name = name.clone();
            let sku = sku.clone();
            let quantity = quantity.clone();
            let unit_price = unit_price.clone();
            let inventory = inventory.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ShopKeepClient::shared().create_inventory_item(&request).await {
                    Ok(created) => {
                        toaster.success(format!("Added {}", created.name));
                        name.set(String::new());
                        sku.set(String::new());
                        quantity.set(String::new());
                        unit_price.set(String::new());
                        inventory.run();
                    }
                    Err(err) => toaster.error(format!("Could not add item: {err}")),
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
                <h1 class="text-2xl font-bold">{"Inventory"}</h1>
                <NetworkGate kind={FeatureKind::Sync}>
                    <button class="btn btn-ghost btn-sm" onclick={on_refresh}>{"Refresh"}</button>
                </NetworkGate>
            </div>

            if let Some(error) = &inventory.error {
                <div class="alert alert-error"><span>{format!("Could not load inventory: {error}")}</span></div>
            }

            if inventory.loading {
                <span class="loading loading-dots loading-md"></span>
            }

            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"SKU"}</th>
                            <th>{"Quantity"}</th>
                            <th>{"Unit price"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for inventory.data.iter().flatten().map(|item| html! {
                            <tr key={item.id.to_string()}>
                                <td>{&item.name}</td>
                                <td>{&item.sku}</td>
                                <td>{item.quantity}</td>
                                <td>{format_cents(item.unit_price_cents)}</td>
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
                    <label class="label"><span class="label-text">{"SKU"}</span></label>
                    <input class="input input-bordered input-sm" required=true
                        value={(*sku).clone()} oninput={bind_input(&sku)} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Quantity"}</span></label>
                    <input class="input input-bordered input-sm" type="number" required=true
                        value={(*quantity).clone()} oninput={bind_input(&quantity)} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Unit price (cents)"}</span></label>
                    <input class="input input-bordered input-sm" type="number" required=true
                        value={(*unit_price).clone()} oninput={bind_input(&unit_price)} />
                </div>
                <button class="btn btn-primary btn-sm" type="submit">{"Add item"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_cents_pads_and_signs() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(1999), "$19.99");
        assert_eq!(format_cents(-250), "-$2.50");
    }
}
