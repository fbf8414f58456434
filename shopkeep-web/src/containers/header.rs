use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::{use_selector, use_store};

use crate::{api::ShopKeepClient, models::app_state::AppState, routes::MainRoute, storage};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let is_admin = use_selector(AppState::is_admin);
    let (_, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // Best effort: the hint clears even when the revoke call
                // cannot reach the server.
                let _ = ShopKeepClient::shared().logout().await;
                storage::clear_auth_hint();
                dispatch.reduce_mut(|state| state.user = None);
                if let Some(navigator) = navigator {
                    navigator.push(&MainRoute::Login);
                }
            });
        })
    };

    let nav_item = |route: MainRoute| -> Html {
        let active = props.current_route.as_ref() == Some(&route);
        let classes = if active { "active" } else { "" };
        html! {
            <li>
                <Link<MainRoute> to={route.clone()} classes={classes}>
                    {route.label()}
                </Link<MainRoute>>
            </li>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {"ShopKeep"}
                </Link<MainRoute>>
            </a>
            <ul class="hidden menu sm:menu-horizontal">
                { for MainRoute::iter().filter(MainRoute::in_nav).map(nav_item) }
                if *is_admin {
                    { nav_item(MainRoute::Settings) }
                }
            </ul>
            <div class="hidden sm:flex items-center gap-2">
                {
                    (*user).as_ref().map_or_else(
                        || html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<MainRoute>>
                        },
                        |user| html! {
                            <>
                                <span class="text-sm text-base-content/80 mr-2">{ &user.username }</span>
                                <button class="btn btn-ghost btn-sm" onclick={on_logout.clone()}>
                                    <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-4 h-4" />
                                    {"Sign out"}
                                </button>
                            </>
                        },
                    )
                }
            </div>
        </nav>
    }
}
