use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="container mx-auto flex min-h-[60vh] flex-col items-center justify-center gap-4 px-6 text-center">
            <p class="text-7xl font-bold text-[var(--primary)]">{ "404" }</p>
            <h1 class="text-2xl font-semibold">{ "Page not found" }</h1>
            <p class="text-[var(--muted)]">{ "The page you are looking for does not exist or has moved." }</p>
            <Link<Route> to={Route::Home} classes={classes!("mt-4", "rounded-lg", "bg-[var(--primary)]", "px-5", "py-2", "text-white")}>
                { "Go home" }
            </Link<Route>>
        </div>
    }
}
