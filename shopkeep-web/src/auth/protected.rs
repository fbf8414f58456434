//! Role-gated route wrapper.

use shared::models::{AuthenticatedUser, Role};
use yew::prelude::*;
use yew_hooks::{UseAsyncOptions, use_async_with_options};
use yew_router::prelude::Redirect;
use yewdux::prelude::use_store;

use crate::{
    api::ShopKeepClient, components::loading::Loading, models::app_state::AppState,
    routes::MainRoute,
};

/// Terminal result of the gate once the current-user fetch settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Loading,
    Unauthenticated,
    Authorized,
    Forbidden,
}

/// Pure branch decision. Fetch errors are folded into `Unauthenticated` on
/// purpose: an unreachable server and a missing session get the same
/// treatment. The role comparison is strict equality, no hierarchy.
pub fn resolve_gate(
    settled: bool,
    user: Option<&AuthenticatedUser>,
    required_role: Option<Role>,
) -> GateOutcome {
    if !settled {
        return GateOutcome::Loading;
    }
    match user {
        None => GateOutcome::Unauthenticated,
        Some(user) if user.role.satisfies(required_role) => GateOutcome::Authorized,
        Some(_) => GateOutcome::Forbidden,
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
    #[prop_or_default]
    pub required_role: Option<Role>,
}

/// Verifies the session against the server before rendering children.
///
/// `Loading -> { Unauthenticated, Authorized, Forbidden }`, terminal per
/// mount. Forbidden renders a static message in place; it does not redirect.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let (_, dispatch) = use_store::<AppState>();
    let fetch = use_async_with_options(
        async move {
            let client = ShopKeepClient::shared();
            client.current_user().await.map_err(|err| err.to_string())
        },
        UseAsyncOptions::enable_auto(),
    );

    {
        let user = fetch.data.clone();
        use_effect_with(user, move |user| {
            if let Some(user) = user.clone() {
                dispatch.reduce_mut(|state| state.user = Some(user));
            }
            || ()
        });
    }

    let settled = !fetch.loading && (fetch.data.is_some() || fetch.error.is_some());
    match resolve_gate(settled, fetch.data.as_ref(), props.required_role) {
        GateOutcome::Loading => html! { <Loading /> },
        GateOutcome::Unauthenticated => html! { <Redirect<MainRoute> to={MainRoute::Login} /> },
        GateOutcome::Forbidden => html! {
            <div class="flex items-center justify-center min-h-screen">
                <div class="alert alert-warning max-w-md">
                    <span>{"You do not have permission to view this page."}</span>
                </div>
            </div>
        },
        GateOutcome::Authorized => html! { <>{props.children.clone()}</> },
    }
}
