use canopy::plans::{BillingCycle, Plan, PLANS_FAILED};
use leptos::{
    component, create_resource, create_signal, server, view, CollectView, IntoView, ReadSignal,
    ServerFnError, SignalGet, SignalUpdate, Suspense,
};
use strum::IntoEnumIterator;

#[cfg(feature = "ssr")]
use crate::components::server_error;
#[cfg(feature = "ssr")]
use crate::state::grove_state;

use super::top_bar::TopBar;

#[server(ListPlans, "/api")]
pub async fn list_plans() -> Result<Vec<Plan>, ServerFnError> {
    use canopy::api::Backend as _;
    use tracing::warn;

    grove_state()?.backend.list_plans().await.map_err(|err| {
        warn!("Plan listing failed: {err}");
        server_error(PLANS_FAILED)
    })
}

#[component]
pub fn PricingScreen() -> impl IntoView {
    let plans = create_resource(|| (), |_| list_plans());
    let (cycle, set_cycle) = create_signal(BillingCycle::default());

    let plan_cards = move || {
        plans.get().map(|plans| match plans {
            Ok(plans) => plans
                .into_iter()
                .map(|plan| view! { <PlanCard plan=plan cycle=cycle/> })
                .collect_view(),
            Err(_) => view! { <p class="notice notice-error">{PLANS_FAILED}</p> }.into_view(),
        })
    };

    view! {
        <TopBar/>
        <main class="pricing">
            <h1>"Simple pricing"</h1>
            <button
                class="cycle-toggle"
                aria-label="Switch billing cycle"
                on:click=move |_| set_cycle.update(|cycle| *cycle = cycle.toggled())
            >
                {BillingCycle::iter()
                    .map(|option| {
                        let class = move || {
                            if cycle.get() == option { "cycle-option active" } else { "cycle-option" }
                        };
                        view! { <span class=class>{option.label()}</span> }
                    })
                    .collect_view()}
            </button>
            <Suspense fallback=move || view! { <p class="plans-loading">"Loading plans..."</p> }>
                <div class="plan-grid">{plan_cards}</div>
            </Suspense>
        </main>
    }
}

#[component]
fn PlanCard(plan: Plan, cycle: ReadSignal<BillingCycle>) -> impl IntoView {
    let savings = plan.yearly_savings_percent();
    let class = if plan.popular { "plan-card popular" } else { "plan-card" };
    let price = {
        let plan = plan.clone();
        move || plan.price_label(cycle.get())
    };
    let cta = if plan.is_free() { "Get started" } else { "Choose plan" };

    view! {
        <article class=class>
            {plan.popular.then(|| view! { <span class="badge">"Most popular"</span> })}
            <h2>{plan.name}</h2>
            {plan.description.map(|description| view! { <p class="plan-description">{description}</p> })}
            <p class="plan-price">{price}</p>
            {move || {
                savings
                    .filter(|_| cycle.get() == BillingCycle::Yearly)
                    .map(|percent| view! { <p class="plan-savings">"Save "{percent}"%"</p> })
            }}
            <ul class="plan-features">
                {plan
                    .features
                    .into_iter()
                    .map(|feature| view! { <li>{feature}</li> })
                    .collect_view()}
            </ul>
            <a href="/register" class="cta">{cta}</a>
        </article>
    }
}
