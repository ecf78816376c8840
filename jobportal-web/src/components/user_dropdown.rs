use crate::api::PortalClient;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::Session;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator().unwrap();
    let (state, dispatch) = use_store::<AppState>();
    if !state.session.authenticated() {
        return html! {};
    }
    let greeting = state
        .session
        .display_name
        .clone()
        .unwrap_or_else(|| "User".to_string());

    let profile_button = {
        let profile_navigator = navigator.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            profile_navigator.push(&MainRoute::Dashboard);
        });
        html! {
            <li><a {onclick}>{"User Info"}</a></li>
        }
    };

    let logout_button = {
        let navigator = navigator;
        let dispatch = dispatch;
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            // Logout is entirely client-side: drop the stored credential and
            // reset the published session.
            PortalClient::shared().session().clear();
            dispatch.set(AppState {
                session: Session::default(),
            });
            navigator.push(&MainRoute::Login);
        });
        html! {
            <li><a {onclick}>{"Logout"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-6 h-6" />
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold">{ format!("Hi, {greeting}") }</div>
                </li>
                <div class="divider my-0"></div>
                {profile_button}
                {logout_button}
            </ul>
        </div>
    }
}
