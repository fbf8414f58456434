use reqwest::StatusCode;
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use crate::{
    api::ShopKeepClient, components::toast::use_toaster, models::app_state::AppState,
    routes::MainRoute, storage,
};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let toaster = use_toaster();
    let (_, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let username_handle = username.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        let toaster = toaster;
        let dispatch = dispatch;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let username_value = (*username_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let toaster = toaster.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = ShopKeepClient::shared();
                let request = LoginRequest {
                    username: username_value,
                    password: password_value,
                };
                match client.login(&request).await {
                    Ok(response) => {
                        // Hint flag set only on success; the cookie is the
                        // actual credential.
                        storage::set_auth_hint(true);
                        dispatch.reduce_mut(|state| state.user = Some(response.user.clone()));
                        toaster.success(format!("Welcome back, {}", response.user.username));
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        let message = err.status().map_or_else(
                            || "Unable to connect to server".to_string(),
                            |status| match status {
                                StatusCode::UNAUTHORIZED => "Invalid credentials".to_string(),
                                StatusCode::UNPROCESSABLE_ENTITY => {
                                    "Username and password are required".to_string()
                                }
                                _ => format!("Login failed: {status}"),
                            },
                        );
                        toaster.error(message.clone());
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in to ShopKeep"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
