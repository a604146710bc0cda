//! Optimistic like/unlike handling for one article and one anonymous user.
//!
//! The displayed state moves through an explicit phase machine:
//!
//! ```text
//! Idle -> Pending -> Succeeded
//!                 \-> RolledBack
//! ```
//!
//! [`LikeMachine`] holds the pure transitions. [`LikeController`] drives them
//! against an [`EngagementApi`]: optimistic update first, then the request,
//! then reconciliation with the server's like status.

use std::{cell::RefCell, fmt};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    error::ApiError,
    identity::AnonymousUserId,
    models::{Article, Comment, LikeStatus, NewComment},
};

/// Article-engagement endpoints the client talks to.
///
/// Futures are `?Send`: the browser runtime is single threaded.
#[async_trait(?Send)]
pub trait EngagementApi {
    /// `GET /api/articles/:id/like-status?userId=`
    async fn like_status(
        &self,
        article_id: &str,
        user: &AnonymousUserId,
    ) -> Result<LikeStatus, ApiError>;

    /// `POST /api/articles/:id/like` or `/unlike`; returns the updated article.
    async fn set_like(
        &self,
        article_id: &str,
        user: &AnonymousUserId,
        action: LikeAction,
    ) -> Result<Article, ApiError>;

    /// `POST /api/articles/:id/view`
    async fn track_view(&self, article_id: &str) -> Result<(), ApiError>;

    /// `GET /api/articles/:id/comments`
    async fn list_comments(&self, article_id: &str) -> Result<Vec<Comment>, ApiError>;

    /// `POST /api/articles/:id/comments`
    async fn post_comment(
        &self,
        article_id: &str,
        comment: &NewComment,
    ) -> Result<Comment, ApiError>;

    /// `POST /api/comments/:id/like`
    async fn like_comment(&self, comment_id: &str) -> Result<(), ApiError>;
}

/// Direction of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikeAction {
    /// Add the user's like.
    Like,
    /// Remove it.
    Unlike,
}

impl LikeAction {
    /// The action a click performs given the current liked flag.
    pub fn for_state(is_liked: bool) -> Self {
        if is_liked {
            LikeAction::Unlike
        } else {
            LikeAction::Like
        }
    }

    /// Final path segment of the endpoint.
    pub fn path_segment(self) -> &'static str {
        match self {
            LikeAction::Like => "like",
            LikeAction::Unlike => "unlike",
        }
    }
}

/// What the UI shows: liked flag and count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikeSnapshot {
    /// Whether this user has liked the article.
    pub is_liked: bool,
    /// Total likes across all users.
    pub like_count: u64,
}

impl LikeSnapshot {
    /// Optimistic result of `action`. Unliking never goes below zero.
    pub fn apply(self, action: LikeAction) -> Self {
        match action {
            LikeAction::Like => Self {
                is_liked: true,
                like_count: self.like_count.saturating_add(1),
            },
            LikeAction::Unlike => Self {
                is_liked: false,
                like_count: self.like_count.saturating_sub(1),
            },
        }
    }
}

impl From<&LikeStatus> for LikeSnapshot {
    fn from(status: &LikeStatus) -> Self {
        Self {
            is_liked: status.is_liked,
            like_count: status.like_count,
        }
    }
}

/// Phase of the most recent toggle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LikePhase {
    /// No toggle yet, or the last notice was dismissed.
    #[default]
    Idle,
    /// Request in flight.
    Pending {
        /// Direction being sent.
        action: LikeAction,
        /// State before the optimistic update.
        rollback: LikeSnapshot,
    },
    /// Server accepted the toggle.
    Succeeded,
    /// Server or transport failed and the state was restored.
    RolledBack {
        /// Notice to show.
        message: String,
    },
}

/// Pure like/unlike state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LikeMachine {
    shown: LikeSnapshot,
    phase: LikePhase,
}

impl LikeMachine {
    /// Machine showing `baseline`.
    pub fn new(baseline: LikeSnapshot) -> Self {
        Self {
            shown: baseline,
            phase: LikePhase::Idle,
        }
    }

    /// Currently displayed state.
    pub fn shown(&self) -> LikeSnapshot {
        self.shown
    }

    /// Current phase.
    pub fn phase(&self) -> &LikePhase {
        &self.phase
    }

    /// Whether a toggle is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, LikePhase::Pending { .. })
    }

    /// Notice text after a rollback.
    pub fn notice(&self) -> Option<&str> {
        match &self.phase {
            LikePhase::RolledBack {
                message,
            } => Some(message),
            _ => None,
        }
    }

    /// Apply the optimistic update and enter `Pending`.
    ///
    /// Returns `None`, changing nothing, while another toggle is pending.
    pub fn begin(&mut self) -> Option<LikeAction> {
        if self.is_pending() {
            return None;
        }
        let action = LikeAction::for_state(self.shown.is_liked);
        let rollback = self.shown;
        self.shown = rollback.apply(action);
        self.phase = LikePhase::Pending {
            action,
            rollback,
        };
        Some(action)
    }

    /// Settle a pending toggle with the server's like count.
    pub fn succeed(&mut self, server_like_count: u64) -> bool {
        let LikePhase::Pending {
            action, ..
        } = self.phase
        else {
            return false;
        };
        self.shown = LikeSnapshot {
            is_liked: action == LikeAction::Like,
            like_count: server_like_count,
        };
        self.phase = LikePhase::Succeeded;
        true
    }

    /// Settle a pending toggle as failed, restoring the pre-click state.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        let LikePhase::Pending {
            rollback, ..
        } = self.phase
        else {
            return false;
        };
        self.shown = rollback;
        self.phase = LikePhase::RolledBack {
            message: message.into(),
        };
        true
    }

    /// Adopt the server's like status.
    ///
    /// Ignored while a toggle is pending so a stale refetch cannot overwrite
    /// the optimistic value.
    pub fn reconcile(&mut self, server: LikeSnapshot) -> bool {
        if self.is_pending() {
            return false;
        }
        self.shown = server;
        true
    }

    /// Clear a rollback notice.
    pub fn dismiss_notice(&mut self) {
        if matches!(self.phase, LikePhase::RolledBack { .. }) {
            self.phase = LikePhase::Idle;
        }
    }
}

/// Proof that [`LikeController::begin`] started a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a started toggle stays pending until completed"]
pub struct PendingToggle {
    action: LikeAction,
}

impl PendingToggle {
    /// Direction of the started toggle.
    pub fn action(&self) -> LikeAction {
        self.action
    }
}

/// Result of one toggle attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Another toggle was in flight; nothing happened.
    Ignored,
    /// Server accepted; carries the reconciled state.
    Applied(LikeSnapshot),
    /// Request failed and the optimistic update was undone.
    RolledBack(ApiError),
}

/// Callback run once per settled toggle.
type SettleHook = Box<dyn Fn(&ToggleOutcome)>;

/// Like/unlike driver for one (article, user) pair.
///
/// Holds its machine behind a `RefCell`; borrows never span an `.await`.
pub struct LikeController {
    article_id: String,
    user: AnonymousUserId,
    machine: RefCell<LikeMachine>,
    on_settled: Option<SettleHook>,
}

impl fmt::Debug for LikeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LikeController")
            .field("article_id", &self.article_id)
            .field("user", &self.user)
            .field("machine", &self.machine)
            .finish_non_exhaustive()
    }
}

impl LikeController {
    /// Controller starting from `baseline`; call [`Self::refresh`] to load
    /// the server's status.
    pub fn new(article_id: impl Into<String>, user: AnonymousUserId, baseline: LikeSnapshot) -> Self {
        Self {
            article_id: article_id.into(),
            user,
            machine: RefCell::new(LikeMachine::new(baseline)),
            on_settled: None,
        }
    }

    /// Run `hook` after every settled toggle, success or rollback, once the
    /// like status has been refetched. The article page uses it to reload the
    /// article itself.
    pub fn on_settled(mut self, hook: impl Fn(&ToggleOutcome) + 'static) -> Self {
        self.on_settled = Some(Box::new(hook));
        self
    }

    /// Article this controller toggles.
    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    /// Currently displayed state.
    pub fn snapshot(&self) -> LikeSnapshot {
        self.machine.borrow().shown()
    }

    /// Current phase.
    pub fn phase(&self) -> LikePhase {
        self.machine.borrow().phase().clone()
    }

    /// Whether the control should be disabled.
    pub fn is_pending(&self) -> bool {
        self.machine.borrow().is_pending()
    }

    /// Rollback notice, if any.
    pub fn notice(&self) -> Option<String> {
        self.machine.borrow().notice().map(str::to_string)
    }

    /// Clear the rollback notice.
    pub fn dismiss_notice(&self) {
        self.machine.borrow_mut().dismiss_notice();
    }

    /// Synchronous half of a toggle: the optimistic update.
    ///
    /// Lets the UI re-render before the request is issued.
    pub fn begin(&self) -> Option<PendingToggle> {
        self.machine
            .borrow_mut()
            .begin()
            .map(|action| PendingToggle {
                action,
            })
    }

    /// Asynchronous half of a toggle: send, settle, then refetch the like
    /// status whatever the result and fire the settle hook.
    pub async fn complete<A>(&self, api: &A, pending: PendingToggle) -> ToggleOutcome
    where
        A: EngagementApi + ?Sized,
    {
        let result = api
            .set_like(&self.article_id, &self.user, pending.action)
            .await;

        let outcome = match result {
            Ok(article) => {
                self.machine.borrow_mut().succeed(article.likes);
                ToggleOutcome::Applied(self.snapshot())
            },
            Err(err) => {
                warn!(
                    article_id = %self.article_id,
                    action = pending.action.path_segment(),
                    error = %err,
                    "like toggle failed, rolling back"
                );
                self.machine.borrow_mut().fail(err.user_message());
                ToggleOutcome::RolledBack(err)
            },
        };

        self.refresh(api).await;

        let outcome = match outcome {
            ToggleOutcome::Applied(_) => ToggleOutcome::Applied(self.snapshot()),
            other => other,
        };
        if let Some(hook) = &self.on_settled {
            hook(&outcome);
        }
        outcome
    }

    /// Full toggle. Returns [`ToggleOutcome::Ignored`] without a request if one
    /// is already pending.
    pub async fn toggle<A>(&self, api: &A) -> ToggleOutcome
    where
        A: EngagementApi + ?Sized,
    {
        match self.begin() {
            Some(pending) => self.complete(api, pending).await,
            None => ToggleOutcome::Ignored,
        }
    }

    /// Load the server's like status into the displayed state.
    pub async fn refresh<A>(&self, api: &A) -> bool
    where
        A: EngagementApi + ?Sized,
    {
        match api.like_status(&self.article_id, &self.user).await {
            Ok(status) => self
                .machine
                .borrow_mut()
                .reconcile(LikeSnapshot::from(&status)),
            Err(err) => {
                debug!(article_id = %self.article_id, error = %err, "like status refresh failed");
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;

    fn user() -> AnonymousUserId {
        AnonymousUserId::new("user_1_abcdefghi")
    }

    #[test]
    fn begin_applies_optimistic_like() {
        let mut machine = LikeMachine::new(LikeSnapshot {
            is_liked: false,
            like_count: 4,
        });
        assert_eq!(machine.begin(), Some(LikeAction::Like));
        assert_eq!(
            machine.shown(),
            LikeSnapshot {
                is_liked: true,
                like_count: 5
            }
        );
        assert!(machine.is_pending());
    }

    #[test]
    fn unlike_at_zero_stays_at_zero() {
        let mut machine = LikeMachine::new(LikeSnapshot {
            is_liked: true,
            like_count: 0,
        });
        assert_eq!(machine.begin(), Some(LikeAction::Unlike));
        assert_eq!(machine.shown().like_count, 0);
        assert!(!machine.shown().is_liked);
    }

    #[test]
    fn second_begin_while_pending_is_ignored() {
        let mut machine = LikeMachine::default();
        assert!(machine.begin().is_some());
        let during = machine.clone();
        assert_eq!(machine.begin(), None);
        assert_eq!(machine, during);
    }

    #[test]
    fn failure_restores_exact_snapshot() {
        let before = LikeSnapshot {
            is_liked: false,
            like_count: 9,
        };
        let mut machine = LikeMachine::new(before);
        machine.begin();
        assert!(machine.fail("Network error"));
        assert_eq!(machine.shown(), before);
        assert_eq!(machine.notice(), Some("Network error"));

        machine.dismiss_notice();
        assert_eq!(machine.phase(), &LikePhase::Idle);
    }

    #[test]
    fn success_adopts_server_count() {
        let mut machine = LikeMachine::new(LikeSnapshot {
            is_liked: false,
            like_count: 2,
        });
        machine.begin();
        assert!(machine.succeed(10));
        assert_eq!(
            machine.shown(),
            LikeSnapshot {
                is_liked: true,
                like_count: 10
            }
        );
        assert_eq!(machine.phase(), &LikePhase::Succeeded);
    }

    #[test]
    fn settle_without_pending_is_a_no_op() {
        let mut machine = LikeMachine::default();
        assert!(!machine.succeed(3));
        assert!(!machine.fail("boom"));
        assert_eq!(machine, LikeMachine::default());
    }

    #[test]
    fn reconcile_is_deferred_while_pending() {
        let mut machine = LikeMachine::default();
        machine.begin();
        let stale = LikeSnapshot {
            is_liked: false,
            like_count: 0,
        };
        assert!(!machine.reconcile(stale));
        assert!(machine.shown().is_liked);
    }

    #[tokio::test]
    async fn controller_refresh_sets_baseline() {
        let api = FakeApi::with_likes("a1", 7, &["user_1_abcdefghi"]);
        let controller = LikeController::new("a1", user(), LikeSnapshot::default());
        assert!(controller.refresh(&api).await);
        assert_eq!(
            controller.snapshot(),
            LikeSnapshot {
                is_liked: true,
                like_count: 7
            }
        );
    }

    #[tokio::test]
    async fn controller_failure_rolls_back_and_refetches() {
        let api = FakeApi::with_likes("a1", 3, &[]);
        api.fail_next_like(ApiError::Network("offline".to_string()));
        let controller = LikeController::new(
            "a1",
            user(),
            LikeSnapshot {
                is_liked: false,
                like_count: 3,
            },
        );

        let outcome = controller.toggle(&api).await;
        assert_eq!(outcome, ToggleOutcome::RolledBack(ApiError::Network("offline".to_string())));
        assert_eq!(
            controller.snapshot(),
            LikeSnapshot {
                is_liked: false,
                like_count: 3
            }
        );
        assert!(controller.notice().is_some());
        assert_eq!(api.status_calls(), 1);
    }

    #[tokio::test]
    async fn business_error_takes_the_same_path() {
        let api = FakeApi::with_likes("a1", 1, &["user_1_abcdefghi"]);
        api.fail_next_like(ApiError::Business("Article already liked".to_string()));
        let controller = LikeController::new(
            "a1",
            user(),
            LikeSnapshot {
                is_liked: false,
                like_count: 1,
            },
        );

        let outcome = controller.toggle(&api).await;
        assert!(matches!(outcome, ToggleOutcome::RolledBack(ApiError::Business(_))));
        assert_eq!(controller.notice().as_deref(), Some("Article already liked"));
        // The refetch after settling corrects the stale baseline.
        assert_eq!(
            controller.snapshot(),
            LikeSnapshot {
                is_liked: true,
                like_count: 1
            }
        );
    }

    #[tokio::test]
    async fn clicks_during_flight_issue_no_request() {
        let api = FakeApi::with_likes("a1", 0, &[]);
        let release = api.gate_next_like();
        let controller = LikeController::new("a1", user(), LikeSnapshot::default());

        let first = controller.toggle(&api);
        let extra_clicks = async {
            while !controller.is_pending() {
                tokio::task::yield_now().await;
            }
            let mut outcomes = Vec::new();
            for _ in 0..3 {
                outcomes.push(controller.toggle(&api).await);
            }
            let _ = release.send(());
            outcomes
        };

        let (first, extra) = tokio::join!(first, extra_clicks);
        assert_eq!(extra, vec![ToggleOutcome::Ignored; 3]);
        assert_eq!(
            first,
            ToggleOutcome::Applied(LikeSnapshot {
                is_liked: true,
                like_count: 1
            })
        );
        assert_eq!(api.like_calls(), 1);
    }

    #[tokio::test]
    async fn every_settled_toggle_reloads_the_article_once() {
        use std::{cell::Cell, rc::Rc};

        let api = FakeApi::with_likes("a1", 2, &[]);
        let reloads = Rc::new(Cell::new(0usize));
        let controller = LikeController::new(
            "a1",
            user(),
            LikeSnapshot {
                is_liked: false,
                like_count: 2,
            },
        )
        .on_settled({
            let reloads = Rc::clone(&reloads);
            move |_| reloads.set(reloads.get() + 1)
        });

        assert!(matches!(controller.toggle(&api).await, ToggleOutcome::Applied(_)));
        assert_eq!(reloads.get(), 1);

        api.fail_next_like(ApiError::http(500));
        assert!(matches!(controller.toggle(&api).await, ToggleOutcome::RolledBack(_)));
        assert_eq!(reloads.get(), 2);
        assert_eq!(api.status_calls(), 2);
    }

    #[tokio::test]
    async fn ignored_click_does_not_reload_the_article() {
        use std::{cell::Cell, rc::Rc};

        let api = FakeApi::with_likes("a1", 0, &[]);
        let reloads = Rc::new(Cell::new(0usize));
        let controller = LikeController::new("a1", user(), LikeSnapshot::default()).on_settled({
            let reloads = Rc::clone(&reloads);
            move |_| reloads.set(reloads.get() + 1)
        });

        let pending = controller.begin().expect("toggle starts");
        assert_eq!(controller.toggle(&api).await, ToggleOutcome::Ignored);
        assert_eq!(reloads.get(), 0);

        controller.complete(&api, pending).await;
        assert_eq!(reloads.get(), 1);
    }

    #[tokio::test]
    async fn split_begin_and_complete_render_optimistic_state_first() {
        let api = FakeApi::with_likes("a1", 5, &[]);
        let controller = LikeController::new(
            "a1",
            user(),
            LikeSnapshot {
                is_liked: false,
                like_count: 5,
            },
        );

        let pending = controller.begin().expect("toggle starts");
        assert_eq!(pending.action(), LikeAction::Like);
        assert_eq!(controller.snapshot().like_count, 6);
        assert_eq!(api.like_calls(), 0);
        assert!(controller.begin().is_none());

        let outcome = controller.complete(&api, pending).await;
        assert_eq!(
            outcome,
            ToggleOutcome::Applied(LikeSnapshot {
                is_liked: true,
                like_count: 6
            })
        );
        assert_eq!(controller.phase(), LikePhase::Succeeded);
    }
}
