use yew::{Children, Html, Properties, classes, function_component, html};

use crate::{containers::header::Header, routes::MainRoute};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
    <>
        <Header current_route={props.current_route.clone()} />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!(
                "flex-grow",
                "p-4",
                "transition-all",
                "duration-300"
            )}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"© 2026 ShopKeep · Powered by Rust, Yew and DaisyUI"}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
