use crate::api::PortalClient;
use crate::components::loading::Loading;
use crate::components::opportunity_card::OpportunityCard;
use shared::models::Opportunity;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Public listing of every posting. No credential required, no pagination,
/// no client-side caching: the full collection is fetched on every mount.
#[function_component(OpportunitiesPage)]
pub fn opportunities_page() -> Html {
    let opportunities = use_state(Vec::<Opportunity>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let opportunities = opportunities.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = PortalClient::shared();
                match client.get_opportunities().await {
                    Ok(postings) => opportunities.set(postings),
                    Err(err) => {
                        error.set(Some(err.surface_message("Error fetching opportunities")));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <Loading /> };
    }
    if let Some(message) = &*error {
        return html! {
            <div class="p-4">
                <div class="alert alert-error max-w-md mx-auto">
                    <span>{message.clone()}</span>
                </div>
            </div>
        };
    }

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold text-center">{ "Available Opportunities" }</h1>
            if opportunities.is_empty() {
                <p class="text-center">{ "No opportunities available at the moment." }</p>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for opportunities.iter().map(|opportunity| html! {
                        <OpportunityCard
                            key={opportunity.id.clone()}
                            opportunity={opportunity.clone()}
                        />
                    }) }
                </div>
            }
        </div>
    }
}
