use std::{collections::HashSet, rc::Rc};

use folio_shared::{
    articles::{filter_by_title, format_date_short},
    pagination::{visible_range, PageLayout, ADMIN_PAGE_SIZE},
    Article,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::{delete_article, fetch_all_articles},
    components::{
        error_banner::ErrorBanner, loading_spinner::LoadingSpinner, pagination::Pagination,
    },
    hooks::{use_pagination, use_remote, FetchState},
    router::Route,
};

/// Ids whose delete request is in flight.
#[derive(Default, PartialEq)]
struct Deleting(HashSet<String>);

enum DeletingAction {
    Start(String),
    Finish(String),
}

impl Reducible for Deleting {
    type Action = DeletingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut ids = self.0.clone();
        match action {
            DeletingAction::Start(id) => ids.insert(id),
            DeletingAction::Finish(id) => ids.remove(&id),
        };
        Deleting(ids).into()
    }
}

fn confirm_delete(title: &str) -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message(&format!("Delete \"{title}\"? This cannot be undone."))
                .ok()
        })
        .unwrap_or(false)
}

/// Admin table of every article with title search and per-row delete.
#[function_component(ManageArticlesPage)]
pub fn manage_articles_page() -> Html {
    let remote = use_remote((), |_| fetch_all_articles());
    let query = use_state(String::new);
    let deleting = use_reducer(Deleting::default);
    let notice = use_state(|| None::<String>);

    let all: &[Article] = match &remote.state {
        FetchState::Ready(articles) => articles,
        _ => &[],
    };
    let filtered = filter_by_title(all, &query)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    let filtered_len = filtered.len();
    let (visible, current_page, total_pages, go_to_page) =
        use_pagination(filtered, ADMIN_PAGE_SIZE);

    let on_search = {
        let query = query.clone();
        let go_to_page = go_to_page.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
                go_to_page.emit(1);
            }
        })
    };

    let on_delete = {
        let deleting = deleting.clone();
        let notice = notice.clone();
        let reload = remote.reload.clone();
        Callback::from(move |article: Article| {
            if deleting.0.contains(&article.id) || !confirm_delete(&article.title) {
                return;
            }
            deleting.dispatch(DeletingAction::Start(article.id.clone()));

            let deleting = deleting.clone();
            let notice = notice.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match delete_article(&article.id).await {
                    Ok(_) => reload.emit(()),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Failed to delete article {}: {err}", article.id).into(),
                        );
                        notice.set(Some(err.user_message()));
                    },
                }
                deleting.dispatch(DeletingAction::Finish(article.id));
            });
        })
    };
    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let caption = match visible_range(current_page, ADMIN_PAGE_SIZE, filtered_len) {
        Some(range) => format!(
            "Showing {} to {} of {} articles",
            range.start(),
            range.end(),
            filtered_len
        ),
        None => String::new(),
    };

    let body = match &remote.state {
        FetchState::Loading => html! { <LoadingSpinner label={AttrValue::from("Loading articles...")} /> },
        FetchState::Failed(message) => html! {
            <ErrorBanner message={message.clone()} title="Failed to load articles" auto_dismiss={false} />
        },
        FetchState::Ready(_) if visible.is_empty() => html! {
            <p class="py-16 text-center text-[var(--muted)]">
                { if query.trim().is_empty() { "No articles yet." } else { "No articles match your search." } }
            </p>
        },
        FetchState::Ready(_) => html! {
            <div class="overflow-x-auto rounded-xl border border-[var(--border)]">
                <table class="min-w-full text-sm">
                    <thead class="bg-[var(--surface-alt)] text-left">
                        <tr>
                            <th class="px-4 py-3">{ "Title" }</th>
                            <th class="px-4 py-3">{ "Category" }</th>
                            <th class="px-4 py-3">{ "Views" }</th>
                            <th class="px-4 py-3">{ "Likes" }</th>
                            <th class="px-4 py-3">{ "Created" }</th>
                            <th class="px-4 py-3 text-right">{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.into_iter().map(|article| {
                            let busy = deleting.0.contains(&article.id);
                            let on_click = {
                                let on_delete = on_delete.clone();
                                let article = article.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(article.clone()))
                            };
                            html! {
                                <tr key={article.id.clone()} class={classes!("border-t", "border-[var(--border)]", busy.then_some("opacity-50"))}>
                                    <td class="px-4 py-3 font-medium">
                                        <Link<Route> to={Route::ArticleDetail { slug: article.slug.clone() }} classes="hover:underline">
                                            { &article.title }
                                        </Link<Route>>
                                    </td>
                                    <td class="px-4 py-3">{ &article.category }</td>
                                    <td class="px-4 py-3">{ article.views }</td>
                                    <td class="px-4 py-3">{ article.likes }</td>
                                    <td class="px-4 py-3">{ format_date_short(&article.created_at) }</td>
                                    <td class="px-4 py-3 text-right">
                                        <button
                                            type="button"
                                            class="rounded-md bg-red-500 px-3 py-1 text-white hover:bg-red-600 disabled:cursor-not-allowed"
                                            onclick={on_click}
                                            disabled={busy}
                                            aria-label={format!("Delete {}", article.title)}
                                        >
                                            if busy { { "Deleting..." } } else { <i class="fas fa-trash" aria-hidden="true"></i> }
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <div class="max-w-7xl mx-auto mt-12 md:mt-0 space-y-6">
            <div class="flex flex-col gap-4 md:flex-row md:items-end md:justify-between">
                <div>
                    <h1 class="text-3xl font-bold mb-2">{ "Manage Articles" }</h1>
                    <p class="text-[var(--muted)]">{ caption }</p>
                </div>
                <input
                    type="search"
                    class="w-full md:w-80 rounded-lg border border-[var(--border)] bg-transparent px-4 py-2"
                    placeholder="Search by title..."
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </div>
            if let Some(message) = (*notice).clone() {
                <ErrorBanner {message} title="Failed to delete article" on_close={on_dismiss} />
            }
            { body }
            <Pagination
                {current_page}
                {total_pages}
                on_page_change={go_to_page}
                layout={PageLayout::Sliding { width: 5 }}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_deletes_track_each_row() {
        let state = Rc::new(Deleting::default())
            .reduce(DeletingAction::Start("a".into()))
            .reduce(DeletingAction::Start("b".into()))
            .reduce(DeletingAction::Finish("a".into()));

        assert!(!state.0.contains("a"));
        assert!(state.0.contains("b"));
    }
}
