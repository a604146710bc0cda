use yew::prelude::*;
use yew_hooks::prelude::use_interval;
use yew_router::prelude::Link;

use crate::{
    components::terminal::Terminal, config::TITLE_ROTATION_MS, data::HERO_TITLES, router::Route,
};

#[function_component(AnimatedTitle)]
fn animated_title() -> Html {
    let index = use_state(|| 0usize);

    {
        let index = index.clone();
        use_interval(
            move || index.set((*index + 1) % HERO_TITLES.len().max(1)),
            TITLE_ROTATION_MS,
        );
    }

    let title = HERO_TITLES.get(*index).copied().unwrap_or_default();

    html! {
        <div class="space-y-3">
            <div class="flex items-center gap-2 text-[var(--muted)]">
                <i class="fas fa-fan animate-spin" aria-hidden="true"></i>
                <span class="text-sm font-medium">{ "Full-Stack" }</span>
            </div>
            <h1 class="text-4xl md:text-7xl font-bold leading-tight">
                { "WEB" }
                <br />
                <span key={*index} class="text-emerald-400 animate-[fadeIn_0.6s_ease-out]">{ title }</span>
            </h1>
            <p class="text-lg text-[var(--muted)] mt-6 max-w-lg">
                { "Transforming creative ideas into elegant, high-performance applications with modern web technologies and clean code." }
            </p>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="relative min-h-screen overflow-hidden">
            <div class="relative container mx-auto px-6 pt-16 pb-24">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8">
                        <AnimatedTitle />
                        <div class="flex flex-wrap gap-4">
                            <Link<Route>
                                to={Route::Projects}
                                classes={classes!("px-6", "py-3", "rounded", "border", "border-[var(--text)]", "font-medium")}
                            >
                                { "View Projects" }
                            </Link<Route>>
                            <Link<Route>
                                to={Route::CategoryList}
                                classes={classes!("px-6", "py-3", "rounded", "bg-[var(--primary)]", "text-white", "font-medium")}
                            >
                                { "Read Articles" }
                                <i class="fas fa-arrow-right ml-2" aria-hidden="true"></i>
                            </Link<Route>>
                        </div>
                    </div>
                    <Terminal />
                </div>
            </div>
        </section>
    }
}
