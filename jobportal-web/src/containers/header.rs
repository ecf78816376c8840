use crate::components::user_dropdown::UserDropdown;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

/// Top navigation bar. Which links appear depends only on whether a token is
/// held: Login/Register when signed out, Home/Dashboard plus the user
/// dropdown when signed in.
#[function_component(Header)]
pub fn header() -> Html {
    let authenticated = use_selector(|state: &AppState| state.session.authenticated());
    let is_authenticated = *authenticated;

    let nav_items = MainRoute::iter()
        .filter(|route| route.in_nav(is_authenticated))
        .map(|route| {
            let label = route.nav_label().unwrap_or_default();
            html! {
                <li>
                    <Link<MainRoute> to={route}>{ label }</Link<MainRoute>>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {"Job Portal"}
                </Link<MainRoute>>
            </a>
            <div class="flex items-center gap-2">
                <ul class="menu menu-horizontal px-1">
                    { nav_items }
                </ul>
                if is_authenticated {
                    <UserDropdown />
                }
            </div>
        </nav>
    }
}
