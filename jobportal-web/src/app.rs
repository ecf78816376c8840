use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Root component: the router over the gated route table. The session is
/// already hydrated by the time the first switch runs, because the yewdux
/// store initializes itself from durable storage on first read.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
