use crate::api::PortalClient;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::RegisterRequest;
use shared::rules::passwords_match;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// Shown when the server provides no message of its own.
const REGISTER_FALLBACK: &str = "An error occurred during registration";

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let name_handle = name.clone();
        let email_handle = email.clone();
        let password_handle = password.clone();
        let confirm_handle = confirm_password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            // The confirmation never leaves the client; a mismatch is caught
            // here before any request is built.
            if !passwords_match(password_handle.as_str(), confirm_handle.as_str()) {
                error_handle.set(Some("Passwords do not match".to_string()));
                return;
            }
            let request = RegisterRequest {
                name: (*name_handle).clone(),
                email: (*email_handle).clone(),
                password: (*password_handle).clone(),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator_handle = navigator.clone();
            let display_name = (*name_handle).clone();
            spawn_local(async move {
                let client = PortalClient::shared();
                match client.register(&request).await {
                    Ok(response) => {
                        let store = client.session();
                        store.set_token(Some(&response.token));
                        store.set_display_name(
                            response.name.as_deref().or(Some(display_name.as_str())),
                        );
                        dispatch.set(AppState {
                            session: store.snapshot(),
                        });
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Dashboard);
                        }
                    }
                    Err(err) => {
                        error_ref.set(Some(err.surface_message(REGISTER_FALLBACK)));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let text_input = |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      handle: &UseStateHandle<String>| {
        let handle_ref = handle.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle_ref.set(input.value());
            }
        });
        html! {
            <div class="form-control">
                <label class="label" for={id}>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id={id}
                    class="input input-bordered"
                    type={kind}
                    required=true
                    value={(**handle).clone()}
                    {oninput}
                />
            </div>
        }
    };

    let is_busy = *loading;
    let disable_submit = (*name).is_empty()
        || (*email).is_empty()
        || (*password).is_empty()
        || (*confirm_password).is_empty()
        || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-[70vh] bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Register"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    { text_input("name", "Full Name", "text", &name) }
                    { text_input("email", "Email Address", "email", &email) }
                    { text_input("password", "Password", "password", &password) }
                    { text_input("confirm-password", "Confirm Password", "password", &confirm_password) }
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Registering..." } else { "Register" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
