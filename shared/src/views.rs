use std::cell::Cell;

use tracing::debug;

use crate::engagement::EngagementApi;

/// One-shot view counter for an article detail page.
///
/// Create one per page mount. The first [`ViewTracker::track`] sends the
/// request; later calls, including ones made while that request is still in
/// flight, do nothing. Failures are logged and not retried.
#[derive(Debug, Default)]
pub struct ViewTracker {
    tracked: Cell<bool>,
}

impl ViewTracker {
    /// Fresh tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the view was already claimed.
    pub fn has_tracked(&self) -> bool {
        self.tracked.get()
    }

    /// Claim the single view slot. `true` only for the first caller.
    pub fn claim(&self) -> bool {
        !self.tracked.replace(true)
    }

    /// Send the view increment once. Returns whether a request was issued.
    pub async fn track<A>(&self, api: &A, article_id: &str) -> bool
    where
        A: EngagementApi + ?Sized,
    {
        if !self.claim() {
            return false;
        }
        if let Err(err) = api.track_view(article_id).await {
            debug!(article_id, error = %err, "view tracking failed");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::ViewTracker;
    use crate::{error::ApiError, fake::FakeApi};

    #[tokio::test]
    async fn repeated_renders_send_one_request() {
        let api = FakeApi::default();
        let tracker = ViewTracker::new();

        assert!(tracker.track(&api, "a1").await);
        for _ in 0..5 {
            assert!(!tracker.track(&api, "a1").await);
        }
        assert_eq!(api.view_calls(), 1);
    }

    #[tokio::test]
    async fn overlapping_calls_before_resolution_send_one_request() {
        let api = FakeApi::default();
        let tracker = ViewTracker::new();

        let (first, second) = tokio::join!(tracker.track(&api, "a1"), tracker.track(&api, "a1"));
        assert!(first ^ second);
        assert_eq!(api.view_calls(), 1);
    }

    #[tokio::test]
    async fn failure_is_silent_and_not_retried() {
        let api = FakeApi::default();
        api.fail_next_view(ApiError::Network("offline".to_string()));
        let tracker = ViewTracker::new();

        assert!(tracker.track(&api, "a1").await);
        assert!(!tracker.track(&api, "a1").await);
        assert_eq!(api.view_calls(), 1);
        assert!(tracker.has_tracked());
    }
}
