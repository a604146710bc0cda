use folio_shared::{
    pagination::{page_after_refresh, visible_range, ListQuery, PUBLIC_PAGE_SIZE},
    Article, Paged,
};
use yew::prelude::*;

use crate::{
    api::fetch_articles,
    components::{
        article_card::ArticleCard, error_banner::ErrorBanner, loading_spinner::LoadingSpinner,
        pagination::Pagination,
    },
    hooks::{scroll_window_to_top, use_remote, FetchState},
};

#[derive(Properties, PartialEq)]
pub struct ArticleListingProps {
    /// Restrict to one category; `None` lists everything.
    #[prop_or_default]
    pub category: Option<String>,
}

/// Server-paged article grid shared by the article and category pages.
#[function_component(ArticleListing)]
pub fn article_listing(props: &ArticleListingProps) -> Html {
    let page = use_state(|| 1usize);

    let query = {
        let query = ListQuery::page(*page);
        match props.category.clone() {
            Some(category) => query.in_category(category),
            None => query,
        }
    };
    let remote = use_remote(query, |query: ListQuery| async move { fetch_articles(&query).await });

    // The server may report fewer pages than the one we are on after the
    // list shrinks.
    {
        let page = page.clone();
        let server_pages = match &remote.state {
            FetchState::Ready(paged) => Some(paged.total_pages),
            _ => None,
        };
        use_effect_with(server_pages, move |server_pages| {
            if let Some(total) = server_pages {
                let total = usize::try_from(*total).unwrap_or(usize::MAX);
                let next = page_after_refresh(*page, total);
                if next != *page {
                    page.set(next);
                }
            }
            || ()
        });
    }

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: usize| {
            page.set(next);
            scroll_window_to_top();
        })
    };

    match &remote.state {
        FetchState::Loading => html! { <LoadingSpinner label={AttrValue::from("Loading articles...")} /> },
        FetchState::Failed(message) => html! {
            <div class="flex flex-col items-center gap-4 py-12">
                <ErrorBanner message={message.clone()} title="Failed to load articles" auto_dismiss={false} />
                <button
                    type="button"
                    class="rounded-lg bg-[var(--primary)] px-4 py-2 text-sm font-semibold text-white"
                    onclick={remote.reload.reform(|_: MouseEvent| ())}
                >
                    { "Try again" }
                </button>
            </div>
        },
        FetchState::Ready(paged) if paged.items.is_empty() => html! {
            <p class="py-20 text-center text-xl text-[var(--muted)]">{ "No articles found." }</p>
        },
        FetchState::Ready(paged) => render_page(paged, *page, on_page_change),
    }
}

fn render_page(paged: &Paged<Article>, page: usize, on_page_change: Callback<usize>) -> Html {
    let total_items = usize::try_from(paged.total).unwrap_or(usize::MAX);
    let total_pages = usize::try_from(paged.total_pages).unwrap_or(1).max(1);
    let caption = visible_range(page, PUBLIC_PAGE_SIZE, total_items)
        .map(|range| {
            format!(
                "Showing {} to {} of {} articles",
                range.start(),
                range.end(),
                total_items
            )
        })
        .unwrap_or_default();

    html! {
        <div class="space-y-10">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for paged.items.iter().map(|article| html! {
                    <ArticleCard key={article.id.clone()} article={article.clone()} />
                }) }
            </div>
            <div class="flex flex-col items-center gap-4">
                <Pagination current_page={page} {total_pages} {on_page_change} />
                <p class="text-sm text-[var(--muted)]">{ caption }</p>
            </div>
        </div>
    }
}

#[function_component(ArticlesPage)]
pub fn articles_page() -> Html {
    html! {
        <div class="container mx-auto px-6 py-12">
            <h1 class="text-3xl md:text-5xl font-bold mb-10">{ "ARTICLES" }</h1>
            <ArticleListing />
        </div>
    }
}
