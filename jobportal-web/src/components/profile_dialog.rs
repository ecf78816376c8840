use crate::api::PortalClient;
use chrono::Local;
use shared::models::UserProfile;
use shared::rules::check_profile_update;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Shown when the server provides no message of its own.
const UPDATE_FALLBACK: &str = "Error updating profile";

#[derive(Properties, PartialEq)]
pub struct ProfileDialogProps {
    /// Profile the dialog edits a copy of.
    pub profile: UserProfile,
    /// Fired with the server's response after a successful update.
    pub on_updated: Callback<UserProfile>,
    /// Fired when the dialog is dismissed without saving.
    pub on_cancel: Callback<()>,
}

/// Modal edit form for name and date of birth.
///
/// The age rule runs at submit time against the edited date; an under-age or
/// unreadable value never produces a request. Everything else on the profile
/// rides along unchanged so the `PUT` carries the full object.
#[function_component(ProfileDialog)]
pub fn profile_dialog(props: &ProfileDialogProps) -> Html {
    let name = use_state(|| props.profile.name.clone());
    let date_of_birth = use_state(|| props.profile.date_of_birth.clone().unwrap_or_default());
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let onsubmit = {
        let base_profile = props.profile.clone();
        let name = name.clone();
        let date_of_birth = date_of_birth.clone();
        let error = error.clone();
        let saving = saving.clone();
        let on_updated = props.on_updated.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let edited_date = (*date_of_birth).clone();
            if let Err(rule) = check_profile_update(&edited_date, Local::now().date_naive()) {
                error.set(Some(rule.to_string()));
                return;
            }
            let mut edited = base_profile.clone();
            edited.name = (*name).clone();
            edited.date_of_birth = if edited_date.trim().is_empty() {
                None
            } else {
                Some(edited_date)
            };
            saving.set(true);
            error.set(None);
            let error = error.clone();
            let saving = saving.clone();
            let on_updated = on_updated.clone();
            spawn_local(async move {
                match PortalClient::shared().update_profile(&edited).await {
                    Ok(updated) => on_updated.emit(updated),
                    Err(err) => error.set(Some(err.surface_message(UPDATE_FALLBACK))),
                }
                saving.set(false);
            });
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_date_change = {
        let date_of_birth = date_of_birth.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                date_of_birth.set(input.value());
            }
        })
    };

    let oncancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_event: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <h3 class="text-lg font-bold">{"Update Profile"}</h3>
                if let Some(message) = &*error {
                    <div class="alert alert-error mt-2">
                        <span>{message.clone()}</span>
                    </div>
                }
                <form onsubmit={onsubmit}>
                    <div class="form-control">
                        <label class="label" for="profile-name">
                            <span class="label-text">{"Full Name"}</span>
                        </label>
                        <input
                            id="profile-name"
                            class="input input-bordered"
                            type="text"
                            value={(*name).clone()}
                            oninput={on_name_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="profile-date-of-birth">
                            <span class="label-text">{"Date of Birth"}</span>
                        </label>
                        <input
                            id="profile-date-of-birth"
                            class="input input-bordered"
                            type="date"
                            value={(*date_of_birth).clone()}
                            oninput={on_date_change}
                        />
                    </div>
                    <div class="modal-action">
                        <button class="btn" type="button" onclick={oncancel}>
                            {"Cancel"}
                        </button>
                        <button class="btn btn-primary" type="submit" disabled={*saving}>
                            {if *saving { "Updating..." } else { "Update" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
