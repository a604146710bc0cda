use folio_shared::{AnonymousUserId, LikeSnapshot};
use yew::prelude::*;

use crate::{components::error_banner::ErrorBanner, hooks::use_like_toggle};

#[derive(Properties, PartialEq)]
pub struct LikeButtonProps {
    pub article_id: String,
    pub user: AnonymousUserId,
    /// What the article payload said; replaced by the server's like status
    /// once it arrives.
    pub initial: LikeSnapshot,
    /// Fired after each toggle settles, whatever the outcome.
    #[prop_or_default]
    pub on_settled: Callback<()>,
}

/// Heart button with an optimistic count. Disabled while a toggle is in
/// flight; a failed toggle rolls back and shows a notice.
#[function_component(LikeButton)]
pub fn like_button(props: &LikeButtonProps) -> Html {
    let like = use_like_toggle(
        props.article_id.clone(),
        props.user.clone(),
        props.initial,
        props.on_settled.clone(),
    );

    let onclick = {
        let on_toggle = like.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let LikeSnapshot {
        is_liked,
        like_count,
    } = like.snapshot;
    let label = if is_liked { "Unlike this article" } else { "Like this article" };

    html! {
        <div class="flex flex-col items-start gap-3">
            <button
                type="button"
                class={classes!(
                    "inline-flex", "items-center", "gap-2", "rounded-full", "border", "px-4", "py-2",
                    "text-sm", "font-semibold", "transition-colors", "duration-150",
                    "disabled:cursor-wait", "disabled:opacity-70",
                    if is_liked {
                        "border-red-500 bg-red-500/10 text-red-500"
                    } else {
                        "border-[var(--border)] text-[var(--text)] hover:border-red-400 hover:text-red-400"
                    }
                )}
                disabled={like.pending}
                aria-pressed={is_liked.to_string()}
                aria-label={label}
                title={label}
                {onclick}
            >
                <i class={classes!(if is_liked { "fas" } else { "far" }, "fa-heart")} aria-hidden="true"></i>
                <span>{ like_count }</span>
            </button>
            if let Some(message) = like.notice.clone() {
                <ErrorBanner
                    {message}
                    title="Could not update like"
                    on_close={like.on_dismiss.clone()}
                />
            }
        </div>
    }
}
