//! Hooks shared by the pages and components: remote fetches, likes,
//! comments, view tracking and pagination.

use std::{future::Future, rc::Rc};

use folio_shared::{
    comments::{bump_comment_likes, like_comment, submit_comment, SubmitOutcome},
    engagement::{EngagementApi, LikeController, LikeSnapshot},
    pagination::{page_slice, total_pages},
    retry::{retry_with_backoff, RetryPolicy},
    views::ViewTracker,
    AnonymousUserId, ApiError, Comment,
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::api::HttpApi;

/// Paginate an in-memory list inside a component.
///
/// Returns the visible slice, the current page, the page count and a callback
/// that jumps to a page. Out-of-range requests clamp, and the page is pulled
/// back when the list shrinks.
#[hook]
pub fn use_pagination<T>(
    items: Vec<T>,
    items_per_page: usize,
) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let per_page = items_per_page.max(1);
    let pages = total_pages(items.len(), per_page);
    let current_page = use_state(|| 1usize);

    {
        let current_page = current_page.clone();
        use_effect_with(pages, move |pages| {
            let safe_page = (*current_page).clamp(1, *pages);
            if safe_page != *current_page {
                current_page.set(safe_page);
            }
            || ()
        });
    }

    let visible = {
        let page = *current_page;
        use_memo((items, page, per_page), |(items, page, per_page)| {
            page_slice(items, *page, *per_page).to_vec()
        })
    };

    let go_to_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            let next = page.clamp(1, pages);
            if next != *current_page {
                current_page.set(next);
            }
        })
    };

    ((*visible).clone(), (*current_page).clamp(1, pages), pages, go_to_page)
}

/// Scroll the viewport to the top whenever the route changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }
        || ()
    });
}

/// Smooth-scroll to the top of the page.
pub fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

async fn sleep_ms(ms: u64) {
    TimeoutFuture::new(u32::try_from(ms).unwrap_or(u32::MAX)).await;
}

/// Bumped by every reload request.
#[derive(Default, PartialEq)]
struct ReloadCount(u32);

impl Reducible for ReloadCount {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        ReloadCount(self.0.wrapping_add(1)).into()
    }
}

/// Load state of a remote resource.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// First fetch for the current deps is in flight.
    Loading,
    /// Latest successful response.
    Ready(T),
    /// Retries ran out; carries the message to show.
    Failed(String),
}

/// Result of [`use_remote`].
pub struct RemoteHandle<T> {
    /// Where the fetch stands.
    pub state: FetchState<T>,
    /// Run the fetch again.
    pub reload: Callback<()>,
}

/// Fetch a resource whenever `deps` change, retrying transient failures with
/// capped backoff. Responses from superseded fetches are dropped.
///
/// A reload with unchanged deps refreshes in the background: ready data stays
/// on screen and a failed refresh only logs.
#[hook]
pub fn use_remote<T, D, F, Fut>(deps: D, fetch: F) -> RemoteHandle<T>
where
    T: Clone + 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| FetchState::<T>::Loading);
    let attempt = use_reducer(ReloadCount::default);
    let generation = use_mut_ref(|| 0u64);
    let fetched_for = use_mut_ref(|| None::<D>);

    {
        let state = state.clone();
        use_effect_with((deps, attempt.0), move |(deps, _)| {
            let current = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            let same_deps = fetched_for.borrow().as_ref() == Some(deps);
            let background = same_deps && matches!(*state, FetchState::Ready(_));
            *fetched_for.borrow_mut() = Some(deps.clone());
            if !background {
                state.set(FetchState::Loading);
            }

            let deps = deps.clone();
            spawn_local(async move {
                let result =
                    retry_with_backoff(RetryPolicy::default(), || fetch(deps.clone()), sleep_ms)
                        .await;
                if *generation.borrow() != current {
                    return;
                }
                match result {
                    Ok(value) => state.set(FetchState::Ready(value)),
                    Err(err) if background => {
                        web_sys::console::warn_1(&format!("Refresh failed: {err}").into());
                    },
                    Err(err) => {
                        web_sys::console::error_1(&format!("Fetch failed: {err}").into());
                        state.set(FetchState::Failed(err.user_message()));
                    },
                }
            });
            || ()
        });
    }

    let reload = {
        let attempt = attempt.dispatcher();
        Callback::from(move |_| attempt.dispatch(()))
    };

    RemoteHandle {
        state: (*state).clone(),
        reload,
    }
}

/// Like button state for one article.
#[derive(Clone, PartialEq)]
pub struct LikeHandle {
    /// Liked flag and count to render.
    pub snapshot: LikeSnapshot,
    /// A toggle is in flight; the button should be disabled.
    pub pending: bool,
    /// Rollback notice from the last failed toggle.
    pub notice: Option<String>,
    /// Start a toggle.
    pub on_toggle: Callback<()>,
    /// Clear the notice.
    pub on_dismiss: Callback<()>,
}

/// Drive a [`LikeController`] from a component.
///
/// The optimistic update renders before the request is sent; clicks while a
/// toggle is pending do nothing. `on_settled` fires once per settled toggle;
/// the latest callback passed in is the one used.
#[hook]
pub fn use_like_toggle(
    article_id: String,
    user: AnonymousUserId,
    initial: LikeSnapshot,
    on_settled: Callback<()>,
) -> LikeHandle {
    let latest_settled = use_mut_ref(Callback::noop);
    *latest_settled.borrow_mut() = on_settled;

    let controller = use_memo(article_id, move |id| {
        LikeController::new(id.clone(), user, initial).on_settled(move |_| {
            let callback = latest_settled.borrow().clone();
            callback.emit(());
        })
    });
    let trigger = use_force_update();

    {
        let controller = controller.clone();
        let trigger = trigger.clone();
        use_effect_with(controller.article_id().to_string(), move |_| {
            spawn_local(async move {
                if controller.refresh(&HttpApi).await {
                    trigger.force_update();
                }
            });
            || ()
        });
    }

    let on_toggle = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |_| {
            let Some(pending) = controller.begin() else {
                return;
            };
            trigger.force_update();
            let controller = controller.clone();
            let trigger = trigger.clone();
            spawn_local(async move {
                controller.complete(&HttpApi, pending).await;
                trigger.force_update();
            });
        })
    };

    let on_dismiss = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |_| {
            controller.dismiss_notice();
            trigger.force_update();
        })
    };

    LikeHandle {
        snapshot: controller.snapshot(),
        pending: controller.is_pending(),
        notice: controller.notice(),
        on_toggle,
        on_dismiss,
    }
}

/// Count one view for `article_id` per mount of the calling component.
#[hook]
pub fn use_view_tracker(article_id: Option<String>) {
    let tracker = use_memo((), |_| ViewTracker::new());

    use_effect_with(article_id, move |article_id| {
        if let Some(id) = article_id.clone() {
            let tracker = Rc::clone(&tracker);
            spawn_local(async move {
                tracker.track(&HttpApi, &id).await;
            });
        }
        || ()
    });
}

/// Comment list plus submit and like actions for one article.
#[derive(Clone, PartialEq)]
pub struct CommentsHandle {
    /// Comments as last fetched.
    pub comments: Vec<Comment>,
    /// The first fetch has not finished.
    pub loading: bool,
    /// A post is in flight.
    pub submitting: bool,
    /// Submit the draft; the callback receives whether the input should be
    /// cleared.
    pub on_submit: Callback<(String, Callback<bool>)>,
    /// Like the comment with this id.
    pub on_like: Callback<String>,
    /// Post failure to show above the form.
    pub error: Option<String>,
    /// Clear `error`.
    pub on_dismiss: Callback<()>,
}

/// Load the comments of `article_id` and expose the post and like actions.
/// A successful post or like refetches the list.
#[hook]
pub fn use_comments(article_id: String) -> CommentsHandle {
    let comments = use_state(Vec::<Comment>::new);
    let loading = use_state(|| true);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    {
        let comments = comments.clone();
        let loading = loading.clone();
        use_effect_with((article_id.clone(), *reload), move |(id, _)| {
            let id = id.clone();
            spawn_local(async move {
                match HttpApi.list_comments(&id).await {
                    Ok(list) => comments.set(list),
                    Err(err) => web_sys::console::error_1(
                        &format!("Failed to fetch comments: {err}").into(),
                    ),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_submit = {
        let article_id = article_id.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let reload = reload.clone();
        Callback::from(move |(draft, done): (String, Callback<bool>)| {
            if *submitting {
                return;
            }
            let article_id = article_id.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let reload = reload.clone();
            submitting.set(true);
            spawn_local(async move {
                let outcome = submit_comment(&HttpApi, &article_id, &draft).await;
                match &outcome {
                    SubmitOutcome::Posted(_) => reload.set(reload.wrapping_add(1)),
                    SubmitOutcome::Failed(_) => {
                        error.set(Some("Failed to post comment. Please try again.".to_string()));
                    },
                    SubmitOutcome::Rejected => {},
                }
                submitting.set(false);
                done.emit(outcome.clears_draft());
            });
        })
    };

    let on_like = {
        let comments = comments.clone();
        let reload = reload.clone();
        Callback::from(move |comment_id: String| {
            let comments = comments.clone();
            let reload = reload.clone();
            spawn_local(async move {
                if like_comment(&HttpApi, &comment_id).await.is_ok() {
                    let mut updated = (*comments).clone();
                    bump_comment_likes(&mut updated, &comment_id);
                    comments.set(updated);
                    reload.set(reload.wrapping_add(1));
                }
            });
        })
    };

    let on_dismiss = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    CommentsHandle {
        comments: (*comments).clone(),
        loading: *loading,
        submitting: *submitting,
        on_submit,
        on_like,
        error: (*error).clone(),
        on_dismiss,
    }
}
