use folio_shared::{articles::format_date_short, Comment};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::{
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::use_comments,
};

#[derive(Properties, PartialEq)]
pub struct CommentSectionProps {
    pub article_id: String,
}

#[function_component(CommentSection)]
pub fn comment_section(props: &CommentSectionProps) -> Html {
    let comments = use_comments(props.article_id.clone());
    let draft = use_state(String::new);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                draft.set(target.value());
            }
        })
    };

    let submit = {
        let draft = draft.clone();
        let on_submit = comments.on_submit.clone();
        Callback::from(move |_: ()| {
            let text = (*draft).clone();
            if text.trim().is_empty() {
                return;
            }
            let draft = draft.clone();
            let done = Callback::from(move |clear: bool| {
                if clear {
                    draft.set(String::new());
                }
            });
            on_submit.emit((text, done));
        })
    };

    let on_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let on_keydown = {
        let submit = submit.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() {
                event.prevent_default();
                submit.emit(());
            }
        })
    };

    let can_post = !comments.submitting && !draft.trim().is_empty();

    html! {
        <section class="mt-12 space-y-6" aria-labelledby="comments-heading">
            <h2 id="comments-heading" class="text-2xl font-bold">
                { format!("Comments ({})", comments.comments.len()) }
            </h2>

            if let Some(message) = comments.error.clone() {
                <ErrorBanner {message} on_close={comments.on_dismiss.clone()} />
            }

            <div class="flex flex-col gap-3 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-4">
                <textarea
                    class="min-h-[96px] w-full resize-y rounded-lg border border-[var(--border)] bg-transparent p-3 text-sm focus:outline-none focus:border-[var(--primary)]"
                    placeholder="Share your thoughts..."
                    value={(*draft).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    disabled={comments.submitting}
                />
                <div class="flex justify-end">
                    <button
                        type="button"
                        class="inline-flex items-center gap-2 rounded-lg bg-[var(--primary)] px-4 py-2 text-sm font-semibold text-white disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={!can_post}
                        onclick={on_click}
                    >
                        if comments.submitting {
                            <LoadingSpinner size={SpinnerSize::Small} inline={true} label={AttrValue::from("Posting...")} />
                        } else {
                            { "Post comment" }
                        }
                    </button>
                </div>
            </div>

            if comments.loading {
                <LoadingSpinner size={SpinnerSize::Small} />
            } else if comments.comments.is_empty() {
                <p class="text-sm text-[var(--muted)]">{ "No comments yet. Be the first to comment!" }</p>
            } else {
                <ul class="space-y-4">
                    { for comments.comments.iter().map(|comment| render_comment(comment, &comments.on_like)) }
                </ul>
            }
        </section>
    }
}

fn render_comment(comment: &Comment, on_like: &Callback<String>) -> Html {
    let onclick = {
        let on_like = on_like.clone();
        let id = comment.id.clone();
        Callback::from(move |_: MouseEvent| on_like.emit(id.clone()))
    };
    let when = comment
        .created_at
        .as_deref()
        .map(format_date_short)
        .unwrap_or_else(|| comment.time.clone());

    html! {
        <li key={comment.id.clone()} class="rounded-xl border border-[var(--border)] p-4">
            <div class="flex items-center justify-between gap-3">
                <div class="flex items-center gap-2">
                    <span class="flex h-8 w-8 items-center justify-center rounded-full bg-[var(--surface-alt)] text-sm font-bold">
                        { comment.user.chars().next().unwrap_or('?').to_string() }
                    </span>
                    <span class="font-semibold">{ &comment.user }</span>
                </div>
                <span class="text-xs text-[var(--muted)]">{ when }</span>
            </div>
            <p class="mt-2 whitespace-pre-wrap text-sm">{ &comment.text }</p>
            <button
                type="button"
                class="mt-2 inline-flex items-center gap-1 text-xs text-[var(--muted)] hover:text-red-400"
                aria-label="Like comment"
                {onclick}
            >
                <i class="far fa-heart" aria-hidden="true"></i>
                <span>{ comment.likes }</span>
            </button>
        </li>
    }
}
