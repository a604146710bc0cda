use yew::prelude::*;

use crate::{components::stats_card::StatsCard, router::Route};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <div class="max-w-7xl mx-auto">
            <div class="mb-8 mt-12 md:mt-0">
                <h1 class="text-3xl font-bold mb-2">{ "Dashboard" }</h1>
                <p class="text-[var(--muted)]">{ "Welcome back! Here's what's happening today." }</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <StatsCard title="Total Projects" value="24" route={Route::Projects} />
                <StatsCard title="Articles" value="156" accent="text-blue-600" route={Route::ManageArticles} />
                <StatsCard title="Active Users" value="1,234" accent="text-purple-600" />
            </div>
        </div>
    }
}
