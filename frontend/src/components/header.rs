use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::theme_toggle::ThemeToggle, router::Route};

#[derive(Clone, Copy, PartialEq, Eq)]
enum NavSection {
    Home,
    Projects,
    Articles,
}

impl NavSection {
    const ALL: [NavSection; 3] = [NavSection::Home, NavSection::Projects, NavSection::Articles];

    fn label(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Projects => "Projects",
            NavSection::Articles => "Articles",
        }
    }

    fn route(self) -> Route {
        match self {
            NavSection::Home => Route::Home,
            NavSection::Projects => Route::Projects,
            NavSection::Articles => Route::CategoryList,
        }
    }

    /// Section highlighted for the current route.
    fn for_route(route: Option<&Route>) -> Option<Self> {
        match route? {
            Route::Home => Some(NavSection::Home),
            Route::Projects => Some(NavSection::Projects),
            Route::Articles
            | Route::CategoryList
            | Route::CategoryArticles {
                ..
            }
            | Route::ArticleDetail {
                ..
            } => Some(NavSection::Articles),
            _ => None,
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);
    let route = use_route::<Route>();
    let active = NavSection::for_route(route.as_ref());

    {
        let mobile_menu_open = mobile_menu_open.clone();
        use_effect_with(route, move |_| {
            mobile_menu_open.set(false);
            || ()
        });
    }

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let link_classes = |section: NavSection| {
        classes!(
            "px-4",
            "py-2",
            "rounded-full",
            "text-sm",
            "font-medium",
            "uppercase",
            "tracking-wide",
            "transition-colors",
            "duration-150",
            if active == Some(section) {
                "bg-[var(--primary)] text-white"
            } else {
                "text-[var(--text)] hover:bg-[var(--surface-alt)]"
            }
        )
    };

    let nav_links = NavSection::ALL
        .iter()
        .map(|section| {
            html! {
                <Link<Route> to={section.route()} classes={link_classes(*section)}>
                    { section.label() }
                </Link<Route>>
            }
        })
        .collect::<Html>();

    let mobile_menu_classes = classes!(
        "md:hidden",
        "flex",
        "flex-col",
        "gap-2",
        "px-6",
        "pb-4",
        "transition-all",
        "duration-300",
        if *mobile_menu_open { "max-h-64 opacity-100" } else { "max-h-0 opacity-0 pointer-events-none overflow-hidden" }
    );

    html! {
        <header class="fixed top-0 inset-x-0 z-50 bg-[var(--surface)]/90 backdrop-blur border-b border-[var(--border)]">
            <div class="container mx-auto flex items-center justify-between px-6 h-16">
                <Link<Route> to={Route::Home} classes={classes!("text-xl", "font-bold", "tracking-tight")}>
                    { "Folio" }
                </Link<Route>>
                <nav class="hidden md:flex items-center gap-2" aria-label="Main">
                    { nav_links.clone() }
                </nav>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="md:hidden inline-flex h-10 w-10 items-center justify-center rounded-lg border border-[var(--border)]"
                        aria-label={if *mobile_menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={mobile_menu_open.to_string()}
                        onclick={toggle_mobile_menu}
                    >
                        <i class={classes!("fas", if *mobile_menu_open { "fa-xmark" } else { "fa-bars" })} aria-hidden="true"></i>
                    </button>
                </div>
            </div>
            <nav class={mobile_menu_classes} aria-label="Mobile">
                { nav_links }
            </nav>
        </header>
    }
}
