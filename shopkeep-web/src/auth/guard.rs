//! Mount-time session guard.

use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::{routes::MainRoute, storage};

/// Mount decision for the guard, pure over the stored hint.
pub fn should_render_children(hint: bool) -> bool {
    hint
}

#[derive(Properties, PartialEq)]
pub struct SessionGuardProps {
    pub children: Children,
}

/// Redirects to the login route when the local auth hint is absent.
///
/// The hint is read once per mount. When it is absent the children still
/// render for the single tick before the navigation resolves; the hint is a
/// flash-avoidance measure, the server cookie stays the authority and the
/// current-user fetch downstream corrects any stale hint.
#[function_component(SessionGuard)]
pub fn session_guard(props: &SessionGuardProps) -> Html {
    let allowed = should_render_children(storage::auth_hint());
    let navigator = use_navigator();

    use_effect_with(allowed, move |&allowed| {
        if !allowed
            && let Some(navigator) = navigator
        {
            navigator.push(&MainRoute::Login);
        }
        || ()
    });

    html! { <>{props.children.clone()}</> }
}
