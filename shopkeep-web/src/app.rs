use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{routes, theme};

/// Application root: paints the theme once at startup, then routes.
#[function_component(App)]
pub fn app() -> Html {
    use_effect_with((), |()| {
        spawn_local(async {
            theme::bootstrap_theme().await;
        });
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<routes::MainRoute> render={routes::switch} />
        </BrowserRouter>
    }
}
