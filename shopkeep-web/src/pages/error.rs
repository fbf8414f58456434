use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::MainRoute;

#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] gap-4">
            <h1 class="text-5xl font-bold">{"404"}</h1>
            <p class="text-base-content/70">{"That page does not exist."}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                {"Back to the dashboard"}
            </Link<MainRoute>>
        </div>
    }
}
