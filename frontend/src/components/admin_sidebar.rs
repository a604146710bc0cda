use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

const NAV_ITEMS: [(&str, &str, Route); 4] = [
    ("Dashboard", "fa-gauge", Route::Dashboard),
    ("Add Category", "fa-folder-plus", Route::AddCategory),
    ("Add Article", "fa-pen-to-square", Route::AddArticles),
    ("Manage Articles", "fa-table-list", Route::ManageArticles),
];

/// Collapsible admin navigation.
#[function_component(AdminSidebar)]
pub fn admin_sidebar() -> Html {
    let is_open = use_state(|| false);
    let current = use_route::<Route>();

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(!*is_open))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(false))
    };

    let panel_classes = classes!(
        "fixed",
        "md:static",
        "inset-y-0",
        "left-0",
        "z-40",
        "w-64",
        "flex",
        "flex-col",
        "gap-2",
        "p-6",
        "bg-[var(--surface)]",
        "border-r",
        "border-[var(--border)]",
        "transition-transform",
        "duration-300",
        "md:translate-x-0",
        if *is_open { "translate-x-0" } else { "-translate-x-full" }
    );

    html! {
        <>
            <button
                type="button"
                class="md:hidden fixed top-4 left-4 z-50 h-10 w-10 rounded-lg border border-[var(--border)] bg-[var(--surface)]"
                aria-label="Toggle admin menu"
                onclick={toggle}
            >
                <i class="fas fa-bars" aria-hidden="true"></i>
            </button>
            <aside class={panel_classes}>
                <p class="mb-4 text-lg font-bold">{ "Admin" }</p>
                { for NAV_ITEMS.iter().map(|(label, icon, route)| {
                    let active = current.as_ref() == Some(route);
                    let onclick = close.clone();
                    html! {
                        <div {onclick}>
                            <Link<Route>
                                to={route.clone()}
                                classes={classes!(
                                    "flex", "items-center", "gap-3", "rounded-lg", "px-3", "py-2",
                                    if active { "bg-[var(--primary)] text-white" } else { "hover:bg-[var(--surface-alt)]" }
                                )}
                            >
                                <i class={classes!("fas", *icon, "w-5")} aria-hidden="true"></i>
                                <span>{ *label }</span>
                            </Link<Route>>
                        </div>
                    }
                }) }
                <div class="mt-auto">
                    <Link<Route> to={Route::Home} classes={classes!("flex", "items-center", "gap-3", "px-3", "py-2", "text-[var(--muted)]")}>
                        <i class="fas fa-arrow-left w-5" aria-hidden="true"></i>
                        <span>{ "Back to site" }</span>
                    </Link<Route>>
                </div>
            </aside>
        </>
    }
}
