mod api;
mod app;
mod auth;
mod components;
mod containers;
mod models;
mod net;
mod pages;
mod routes;
mod storage;
mod theme;

#[cfg(test)]
mod routes_test;

use app::App;
use components::toast::ToastProvider;
use net::connectivity::ConnectivityProvider;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    // The connectivity provider mounts here, above the router, so its
    // listeners are registered before any gate can mount.
    html! {
        <YewduxRoot>
            <ConnectivityProvider>
                <ToastProvider>
                    <App />
                </ToastProvider>
            </ConnectivityProvider>
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Starting ShopKeep Dashboard".into());

    Renderer::<Root>::new().render();
}
