use folio_shared::{
    articles::{format_date, parse_code_blocks, read_time},
    AnonymousUserId, Article, LikeSnapshot,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::fetch_article_by_slug,
    components::{
        code_terminal::CodeTerminal, comment_section::CommentSection,
        error_banner::ErrorBanner, like_button::LikeButton, loading_spinner::LoadingSpinner,
    },
    hooks::{use_remote, use_view_tracker, FetchState},
    router::Route,
    user_context::use_anonymous_user,
};

#[derive(Properties, PartialEq)]
pub struct ArticleDetailPageProps {
    pub slug: String,
}

/// Article page: header, code panels, like button and comments.
///
/// Mounted once per slug, so the view is counted once per visit.
#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailPageProps) -> Html {
    let remote = use_remote(props.slug.clone(), |slug: String| async move {
        fetch_article_by_slug(&slug).await
    });
    let user = use_anonymous_user();

    let loaded_id = match &remote.state {
        FetchState::Ready(article) => Some(article.id.clone()),
        _ => None,
    };
    use_view_tracker(loaded_id);

    let content = match &remote.state {
        FetchState::Loading => html! { <LoadingSpinner label={AttrValue::from("Loading article...")} /> },
        FetchState::Failed(message) => html! {
            <div class="flex flex-col items-center gap-4 py-12">
                <ErrorBanner message={message.clone()} title="Failed to load article" auto_dismiss={false} />
                <button
                    type="button"
                    class="rounded-lg bg-[var(--primary)] px-4 py-2 text-sm font-semibold text-white"
                    onclick={remote.reload.reform(|_: MouseEvent| ())}
                >
                    { "Try again" }
                </button>
            </div>
        },
        FetchState::Ready(article) => render_article(article, user, remote.reload.clone()),
    };

    html! {
        <div class="container mx-auto max-w-4xl px-6 py-12">
            <Link<Route> to={Route::Articles} classes={classes!("mb-8", "inline-flex", "items-center", "gap-2", "text-sm", "text-[var(--muted)]", "hover:text-[var(--text)]")}>
                <i class="fas fa-arrow-left" aria-hidden="true"></i>
                { "Back to articles" }
            </Link<Route>>
            { content }
        </div>
    }
}

/// `reload` refetches the article after a like settles so its counters
/// follow the server.
fn render_article(article: &Article, user: Option<AnonymousUserId>, reload: Callback<()>) -> Html {
    let blocks = parse_code_blocks(&article.code);
    let like_button = user.map(|user| {
        let initial = LikeSnapshot {
            is_liked: article.is_liked_by(user.as_str()),
            like_count: article.likes,
        };
        html! {
            <LikeButton article_id={article.id.clone()} {user} {initial} on_settled={reload} />
        }
    });

    html! {
        <article class="space-y-8">
            if !article.img.is_empty() {
                <img src={article.img.clone()} alt={article.title.clone()} class="w-full max-h-[420px] rounded-2xl object-cover" />
            }
            <header class="space-y-4">
                <Link<Route>
                    to={Route::CategoryArticles { category: article.category.clone() }}
                    classes={classes!("inline-block", "rounded-full", "bg-[var(--surface-alt)]", "px-3", "py-1", "text-xs", "font-semibold")}
                >
                    { &article.category }
                </Link<Route>>
                <h1 class="text-3xl md:text-5xl font-bold leading-tight">{ &article.title }</h1>
                <div class="flex flex-wrap items-center gap-4 text-sm text-[var(--muted)]">
                    if !article.avatar.is_empty() {
                        <img src={article.avatar.clone()} alt="" class="h-10 w-10 rounded-full object-cover" />
                    }
                    <span><i class="far fa-calendar mr-1" aria-hidden="true"></i>{ format_date(&article.created_at) }</span>
                    <span><i class="far fa-clock mr-1" aria-hidden="true"></i>{ read_time(&article.description, &article.code) }</span>
                    <span><i class="far fa-eye mr-1" aria-hidden="true"></i>{ format!("{} views", article.views) }</span>
                </div>
            </header>

            <p class="text-lg leading-relaxed whitespace-pre-line">{ &article.description }</p>

            <div>
                { for blocks.into_iter().enumerate().map(|(index, block)| html! {
                    <CodeTerminal key={index} {block} />
                }) }
            </div>

            { for like_button }

            <CommentSection article_id={article.id.clone()} />
        </article>
    }
}
