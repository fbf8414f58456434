use yew::prelude::*;
use yew_hooks::{UseAsyncOptions, use_async_with_options};

use crate::{api::ShopKeepClient, theme};

/// Admin-only appearance settings. The values come from server configuration;
/// this page surfaces them and re-applies them to the document on demand.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let fetched = use_async_with_options(
        async move {
            ShopKeepClient::shared()
                .theme()
                .await
                .map_err(|err| err.to_string())
        },
        UseAsyncOptions::enable_auto(),
    );

    let on_reapply = {
        let fetched = fetched.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(settings) = &fetched.data {
                theme::apply_theme(settings);
                theme::cache_theme(settings);
            }
        })
    };

    html! {
        <div class="p-4 space-y-4 max-w-2xl">
            <h1 class="text-2xl font-bold">{"Settings"}</h1>

            if let Some(error) = &fetched.error {
                <div class="alert alert-error"><span>{format!("Could not load theme: {error}")}</span></div>
            }

            if let Some(settings) = &fetched.data {
                <div class="card bg-base-200">
                    <div class="card-body">
                        <h2 class="card-title">{"Appearance"}</h2>
                        <table class="table">
                            <tbody>
                                <tr>
                                    <td>{"Primary color"}</td>
                                    <td class="flex items-center gap-2">
                                        <span
                                            class="inline-block w-4 h-4 rounded"
                                            style={format!("background-color: {}", settings.primary)}
                                        ></span>
                                        {settings.primary.clone()}
                                    </td>
                                </tr>
                                <tr><td>{"Variant"}</td><td>{settings.variant.clone()}</td></tr>
                                <tr><td>{"Appearance"}</td><td>{settings.appearance.clone()}</td></tr>
                                <tr><td>{"Corner radius"}</td><td>{format!("{}rem", settings.radius)}</td></tr>
                                <tr><td>{"Font size"}</td><td>{format!("{}px", settings.font_size)}</td></tr>
                                <tr><td>{"Heading size"}</td><td>{format!("{}px", settings.heading_size)}</td></tr>
                                <tr><td>{"Font family"}</td><td>{settings.font_family.clone()}</td></tr>
                            </tbody>
                        </table>
                        <div class="card-actions justify-end">
                            <button class="btn btn-secondary btn-sm" onclick={on_reapply}>
                                {"Re-apply theme"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
