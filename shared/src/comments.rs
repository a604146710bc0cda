//! Comment submission and comment likes for an article page.

use tracing::warn;

use crate::{
    engagement::EngagementApi,
    error::ApiError,
    models::{Comment, NewComment},
};

/// Author name attached to every anonymous comment.
pub const GUEST_AUTHOR: &str = "Guest User";

/// Turn a draft into a request body. Blank drafts produce nothing.
pub fn prepare_comment(draft: &str) -> Option<NewComment> {
    let text = draft.trim();
    if text.is_empty() {
        return None;
    }
    Some(NewComment {
        user: GUEST_AUTHOR.to_string(),
        text: text.to_string(),
    })
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Draft was blank; no request was sent.
    Rejected,
    /// Server accepted the comment.
    Posted(Comment),
    /// Request failed; the draft should stay in the input.
    Failed(ApiError),
}

impl SubmitOutcome {
    /// Only a successful post clears the input.
    pub fn clears_draft(&self) -> bool {
        matches!(self, SubmitOutcome::Posted(_))
    }
}

/// Post `draft` on `article_id` unless it is blank.
pub async fn submit_comment<A>(api: &A, article_id: &str, draft: &str) -> SubmitOutcome
where
    A: EngagementApi + ?Sized,
{
    let Some(body) = prepare_comment(draft) else {
        return SubmitOutcome::Rejected;
    };
    match api.post_comment(article_id, &body).await {
        Ok(comment) => SubmitOutcome::Posted(comment),
        Err(err) => {
            warn!(article_id, error = %err, "comment submission failed");
            SubmitOutcome::Failed(err)
        },
    }
}

/// Like a single comment. Errors are logged and returned for display.
pub async fn like_comment<A>(api: &A, comment_id: &str) -> Result<(), ApiError>
where
    A: EngagementApi + ?Sized,
{
    api.like_comment(comment_id).await.inspect_err(|err| {
        warn!(comment_id, error = %err, "comment like failed");
    })
}

/// Bump the local copy of a liked comment so the list updates without a
/// refetch.
pub fn bump_comment_likes(comments: &mut [Comment], comment_id: &str) {
    if let Some(comment) = comments.iter_mut().find(|comment| comment.id == comment_id) {
        comment.likes = comment.likes.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;

    #[test]
    fn blank_drafts_are_rejected() {
        assert!(prepare_comment("").is_none());
        assert!(prepare_comment("   \n\t ").is_none());
        let body = prepare_comment("  nice post ").expect("body");
        assert_eq!(body.text, "nice post");
        assert_eq!(body.user, GUEST_AUTHOR);
    }

    #[tokio::test]
    async fn whitespace_submit_issues_no_request() {
        let api = FakeApi::default();
        let outcome = submit_comment(&api, "a1", "    ").await;
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(!outcome.clears_draft());
        assert_eq!(api.comment_posts(), 0);
    }

    #[tokio::test]
    async fn valid_submit_posts_exactly_once() {
        let api = FakeApi::default();
        let outcome = submit_comment(&api, "a1", "Great read").await;
        assert_eq!(api.comment_posts(), 1);
        assert!(outcome.clears_draft());
        match outcome {
            SubmitOutcome::Posted(comment) => {
                assert_eq!(comment.text, "Great read");
                assert_eq!(comment.user, GUEST_AUTHOR);
            },
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(api.list_comments("a1").await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn failed_submit_keeps_the_draft() {
        let api = FakeApi::default();
        api.fail_next_comment(ApiError::http(500));
        let outcome = submit_comment(&api, "a1", "hello").await;
        assert!(!outcome.clears_draft());
        assert!(matches!(outcome, SubmitOutcome::Failed(ApiError::Http { status: 500, .. })));
    }

    #[tokio::test]
    async fn liking_a_comment_updates_local_copy() {
        let api = FakeApi::default();
        let SubmitOutcome::Posted(posted) = submit_comment(&api, "a1", "first").await else {
            panic!("post failed");
        };
        let mut local = vec![posted.clone()];

        like_comment(&api, &posted.id).await.expect("like");
        bump_comment_likes(&mut local, &posted.id);

        assert_eq!(api.comment_likes(), 1);
        assert_eq!(local[0].likes, 1);
        assert_eq!(like_comment(&api, "missing").await, Err(ApiError::NotFound));
    }
}
