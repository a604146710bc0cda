use folio_shared::articles::{group_by_category, CategorySummary};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::fetch_all_articles,
    components::{error_banner::ErrorBanner, loading_spinner::LoadingSpinner},
    hooks::{use_remote, FetchState},
    router::Route,
};

/// (icon, gradient) pairs handed out to categories in first-seen order.
const PALETTE: [(&str, &str); 6] = [
    ("fa-code", "from-blue-500 to-cyan-500"),
    ("fa-palette", "from-purple-500 to-pink-500"),
    ("fa-server", "from-emerald-500 to-teal-500"),
    ("fa-mobile-screen", "from-orange-500 to-red-500"),
    ("fa-database", "from-indigo-500 to-violet-500"),
    ("fa-rocket", "from-yellow-500 to-amber-500"),
];

fn category_card(summary: &CategorySummary) -> Html {
    let (icon, gradient) = PALETTE[summary.palette_index % PALETTE.len()];
    let noun = if summary.count == 1 { "article" } else { "articles" };
    let latest = summary.articles.first().map(|article| article.title.clone());

    html! {
        <Link<Route>
            to={Route::CategoryArticles { category: summary.name.clone() }}
            classes={classes!(
                "group", "block", "rounded-2xl", "border", "border-[var(--border)]",
                "bg-[var(--surface)]", "p-6", "transition-all", "duration-200",
                "hover:-translate-y-1", "hover:shadow-xl"
            )}
        >
            <div class={classes!("mb-4", "inline-flex", "h-12", "w-12", "items-center", "justify-center", "rounded-xl", "bg-gradient-to-br", "text-white", gradient)}>
                <i class={classes!("fas", icon)} aria-hidden="true"></i>
            </div>
            <h2 class="text-xl font-bold group-hover:text-[var(--primary)]">{ &summary.name }</h2>
            <p class="mt-1 text-sm text-[var(--muted)]">{ format!("{} {noun}", summary.count) }</p>
            if let Some(title) = latest {
                <p class="mt-3 text-xs text-[var(--muted)] line-clamp-1">{ title }</p>
            }
        </Link<Route>>
    }
}

/// Category overview built from the full article list.
#[function_component(CategoryListPage)]
pub fn category_list_page() -> Html {
    let remote = use_remote((), |_| fetch_all_articles());
    let retry = remote.reload.reform(|_: MouseEvent| ());

    let body = match &remote.state {
        FetchState::Loading => html! { <LoadingSpinner label={AttrValue::from("Loading categories...")} /> },
        FetchState::Failed(message) => html! {
            <div class="flex flex-col items-center gap-4 py-12">
                <ErrorBanner message={message.clone()} title="Failed to load categories" auto_dismiss={false} />
                <button type="button" class="rounded-lg bg-[var(--primary)] px-4 py-2 text-sm font-semibold text-white" onclick={retry.clone()}>
                    { "Try again" }
                </button>
            </div>
        },
        FetchState::Ready(articles) => {
            let categories = group_by_category(articles);
            if categories.is_empty() {
                html! { <p class="py-20 text-center text-xl text-[var(--muted)]">{ "No categories yet." }</p> }
            } else {
                html! {
                    <>
                        <p class="mb-6 text-sm text-[var(--muted)]">
                            { format!("{} categories · {} articles", categories.len(), articles.len()) }
                        </p>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                            { for categories.iter().map(category_card) }
                        </div>
                    </>
                }
            }
        },
    };

    html! {
        <div class="container mx-auto px-6 py-12">
            <div class="mb-10 flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-3xl md:text-5xl font-bold">{ "ARTICLE CATEGORIES" }</h1>
                <div class="flex gap-3">
                    <Link<Route> to={Route::Articles} classes={classes!("rounded-lg", "border", "border-[var(--border)]", "px-4", "py-2", "text-sm")}>
                        { "All articles" }
                    </Link<Route>>
                    <button type="button" class="rounded-lg border border-[var(--border)] px-4 py-2 text-sm" onclick={retry}>
                        <i class="fas fa-rotate-right mr-2" aria-hidden="true"></i>{ "Refresh" }
                    </button>
                </div>
            </div>
            { body }
        </div>
    }
}
