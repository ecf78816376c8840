use crate::api::PortalClient;
use crate::format::{format_start_date, format_stipend};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::Opportunity;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

/// Shown for failures the server gave no usable message for.
const APPLY_FALLBACK: &str = "An error occurred while applying to the opportunity";

#[derive(Properties, PartialEq)]
pub struct OpportunityCardProps {
    pub opportunity: Opportunity,
}

/// Outcome banner shown inside the card after an apply attempt.
#[derive(Clone, PartialEq)]
enum ApplyNotice {
    Confirmed(String),
    Failed(String),
}

/// One posting. Each card owns its apply state; siblings are unaffected by
/// anything that happens here.
#[function_component(OpportunityCard)]
pub fn opportunity_card(props: &OpportunityCardProps) -> Html {
    let navigator = use_navigator();
    let authenticated = use_selector(|state: &AppState| state.session.authenticated());
    let notice = use_state(|| None::<ApplyNotice>);
    let busy = use_state(|| false);

    let onapply = {
        let opportunity_id = props.opportunity.id.clone();
        let is_authenticated = *authenticated;
        let notice = notice.clone();
        let busy = busy.clone();
        let navigator = navigator;
        Callback::from(move |_event: MouseEvent| {
            if !is_authenticated {
                // Without a credential there is nothing to send; go sign in.
                if let Some(ref nav) = navigator {
                    nav.push(&MainRoute::Login);
                }
                return;
            }
            let opportunity_id = opportunity_id.clone();
            let notice = notice.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                let client = PortalClient::shared();
                match client.apply_to_opportunity(&opportunity_id).await {
                    Ok(confirmation) => {
                        notice.set(Some(ApplyNotice::Confirmed(
                            confirmation.message.unwrap_or_else(|| {
                                "Successfully applied to the opportunity!".to_string()
                            }),
                        )));
                    }
                    Err(err) if err.is_client_error() => {
                        // Duplicate applications and the like: the server's
                        // wording is shown as-is.
                        notice.set(Some(ApplyNotice::Failed(
                            err.surface_message(APPLY_FALLBACK),
                        )));
                    }
                    Err(err) => {
                        log::error!("apply failed for {opportunity_id}: {err}");
                        notice.set(Some(ApplyNotice::Failed(APPLY_FALLBACK.to_string())));
                    }
                }
                busy.set(false);
            });
        })
    };

    let opportunity = &props.opportunity;
    let apply_label = if *authenticated {
        "Apply"
    } else {
        "Login to Apply"
    };

    html! {
        <div class="card bg-base-100 shadow border border-base-300">
            <div class="card-body items-center text-center">
                <h3 class="card-title text-lg">{ &opportunity.profile_name }</h3>
                <p>{ format!("Company: {}", opportunity.company_name) }</p>
                <p>{ format!("Stipend: {}", format_stipend(&opportunity.stipend)) }</p>
                <p>{ format!("Location: {}", opportunity.location) }</p>
                <p>{ format!("Duration: {}", opportunity.duration) }</p>
                <p>{ format!("Start Date: {}", format_start_date(&opportunity.start_date)) }</p>
                if let Some(outcome) = &*notice {
                    {
                        match outcome {
                            ApplyNotice::Confirmed(message) => html! {
                                <div class="alert alert-success">
                                    <span>{message.clone()}</span>
                                </div>
                            },
                            ApplyNotice::Failed(message) => html! {
                                <div class="alert alert-error">
                                    <span>{message.clone()}</span>
                                </div>
                            },
                        }
                    }
                }
                <div class="card-actions mt-2">
                    <button class="btn btn-primary btn-sm" onclick={onapply} disabled={*busy}>
                        { apply_label }
                    </button>
                </div>
            </div>
        </div>
    }
}
