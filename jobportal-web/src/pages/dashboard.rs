use crate::api::PortalClient;
use crate::components::loading::Loading;
use crate::components::profile_dialog::ProfileDialog;
use crate::routes::MainRoute;
use shared::models::{AppliedOpportunity, UserProfile};
use shared::rules::normalize_date_of_birth;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Bring a fetched date of birth into the `YYYY-MM-DD` form the edit dialog
/// works with; values that fail to parse are left as served.
fn with_normalized_date(mut profile: UserProfile) -> UserProfile {
    profile.date_of_birth = profile
        .date_of_birth
        .as_deref()
        .map(|raw| normalize_date_of_birth(raw).unwrap_or_else(|| raw.to_string()));
    profile
}

/// Signed-in view: the user's profile with an in-place edit dialog, and the
/// list of postings already applied to.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let profile = use_state(|| None::<UserProfile>);
    let profile_error = use_state(|| None::<String>);
    let applied = use_state(|| None::<Vec<AppliedOpportunity>>);
    let applied_error = use_state(|| None::<String>);
    let dialog_open = use_state(|| false);
    let toast = use_state(|| None::<String>);

    {
        let profile = profile.clone();
        let profile_error = profile_error.clone();
        let applied = applied.clone();
        let applied_error = applied_error.clone();
        use_effect_with((), move |_| {
            // Two independent requests; each region renders as soon as its
            // own response lands, in whichever order that happens.
            spawn_local(async move {
                match PortalClient::shared().get_profile().await {
                    Ok(fetched) => profile.set(Some(with_normalized_date(fetched))),
                    Err(err) => {
                        profile_error.set(Some(err.surface_message("Error fetching user data")));
                    }
                }
            });
            spawn_local(async move {
                match PortalClient::shared().get_applied_opportunities().await {
                    Ok(list) => applied.set(Some(list)),
                    Err(err) => {
                        applied_error.set(Some(err.surface_message("Error fetching user data")));
                    }
                }
            });
            || ()
        });
    }

    let open_dialog = {
        let dialog_open = dialog_open.clone();
        let toast = toast.clone();
        Callback::from(move |_event: MouseEvent| {
            toast.set(None);
            dialog_open.set(true);
        })
    };

    let close_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |()| dialog_open.set(false))
    };

    let on_updated = {
        let profile = profile.clone();
        let dialog_open = dialog_open.clone();
        let toast = toast.clone();
        Callback::from(move |updated: UserProfile| {
            // The server's response is authoritative; local edits are
            // discarded in favor of it.
            profile.set(Some(with_normalized_date(updated)));
            dialog_open.set(false);
            toast.set(Some("Profile updated successfully".to_string()));
        })
    };

    let profile_region = match (&*profile, &*profile_error) {
        (_, Some(message)) => html! {
            <div class="alert alert-error max-w-md mx-auto">
                <span>{message.clone()}</span>
            </div>
        },
        (None, None) => html! { <Loading /> },
        (Some(current), None) => html! {
            <div class="card bg-base-200 shadow max-w-md mx-auto">
                <div class="card-body">
                    <h2 class="card-title">{ "User Info" }</h2>
                    <p>{ format!("Name: {}", current.name) }</p>
                    <p>{ format!("Email: {}", current.email) }</p>
                    if let Some(date_of_birth) = &current.date_of_birth {
                        <p>{ format!("Date of Birth: {date_of_birth}") }</p>
                    }
                    <div class="card-actions justify-end">
                        <button class="btn btn-primary btn-sm" onclick={open_dialog}>
                            { "Update Profile" }
                        </button>
                    </div>
                </div>
            </div>
        },
    };

    let applied_region = match (&*applied, &*applied_error) {
        (_, Some(message)) => html! {
            <div class="alert alert-error max-w-md mx-auto">
                <span>{message.clone()}</span>
            </div>
        },
        (None, None) => html! { <Loading /> },
        (Some(entries), None) if entries.is_empty() => html! {
            <p class="text-center">
                { "No opportunities applied. " }
                <Link<MainRoute> to={MainRoute::Home} classes="link link-primary">
                    { "Apply?" }
                </Link<MainRoute>>
            </p>
        },
        (Some(entries), None) => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for entries.iter().map(|entry| html! {
                    <div key={entry.id.clone()} class="card bg-base-100 shadow border border-base-300">
                        <div class="card-body items-center text-center">
                            <h3 class="card-title text-lg">
                                { entry.profile_name.clone().unwrap_or_else(|| "Opportunity".to_string()) }
                            </h3>
                            <p>{ format!("Company: {}", entry.company_name) }</p>
                            <p class="text-success text-sm">{ "Status: Applied" }</p>
                        </div>
                    </div>
                }) }
            </div>
        },
    };

    html! {
        <div class="p-4 space-y-6">
            if let Some(message) = &*toast {
                <div class="alert alert-success max-w-md mx-auto">
                    <span>{message.clone()}</span>
                </div>
            }
            { profile_region }
            <h1 class="text-2xl font-bold text-center">{ "Applied Opportunities" }</h1>
            { applied_region }
            if *dialog_open {
                if let Some(current) = &*profile {
                    <ProfileDialog
                        profile={current.clone()}
                        on_updated={on_updated}
                        on_cancel={close_dialog}
                    />
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamped_birth_dates_normalize_for_editing() {
        let profile = UserProfile {
            date_of_birth: Some("1999-04-02T00:00:00.000Z".to_string()),
            ..UserProfile::default()
        };
        assert_eq!(
            with_normalized_date(profile).date_of_birth.as_deref(),
            Some("1999-04-02")
        );
    }

    #[test]
    fn bare_birth_dates_are_untouched() {
        let profile = UserProfile {
            date_of_birth: Some("2000-01-31".to_string()),
            ..UserProfile::default()
        };
        assert_eq!(
            with_normalized_date(profile).date_of_birth.as_deref(),
            Some("2000-01-31")
        );
    }

    #[test]
    fn absent_birth_dates_stay_absent() {
        assert_eq!(
            with_normalized_date(UserProfile::default()).date_of_birth,
            None
        );
    }

    #[test]
    fn unreadable_birth_dates_are_left_as_served() {
        let profile = UserProfile {
            date_of_birth: Some("unknown".to_string()),
            ..UserProfile::default()
        };
        assert_eq!(
            with_normalized_date(profile).date_of_birth.as_deref(),
            Some("unknown")
        );
    }
}
