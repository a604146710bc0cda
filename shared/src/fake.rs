//! In-memory [`EngagementApi`] used by unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeSet, HashMap},
};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::{
    engagement::{EngagementApi, LikeAction},
    error::ApiError,
    identity::AnonymousUserId,
    models::{Article, Comment, LikeStatus, NewComment},
};

#[derive(Default)]
struct ArticleLikes {
    count: u64,
    users: BTreeSet<String>,
}

#[derive(Default)]
pub(crate) struct FakeApi {
    likes: RefCell<HashMap<String, ArticleLikes>>,
    comments: RefCell<Vec<Comment>>,
    like_failure: RefCell<Option<ApiError>>,
    view_failure: RefCell<Option<ApiError>>,
    comment_failure: RefCell<Option<ApiError>>,
    like_gate: RefCell<Option<oneshot::Receiver<()>>>,
    like_calls: Cell<usize>,
    status_calls: Cell<usize>,
    view_calls: Cell<usize>,
    comment_posts: Cell<usize>,
    comment_likes: Cell<usize>,
}

impl FakeApi {
    pub(crate) fn with_likes(article_id: &str, count: u64, users: &[&str]) -> Self {
        let api = Self::default();
        api.likes.borrow_mut().insert(
            article_id.to_string(),
            ArticleLikes {
                count,
                users: users.iter().map(|user| user.to_string()).collect(),
            },
        );
        api
    }

    pub(crate) fn fail_next_like(&self, err: ApiError) {
        *self.like_failure.borrow_mut() = Some(err);
    }

    pub(crate) fn fail_next_view(&self, err: ApiError) {
        *self.view_failure.borrow_mut() = Some(err);
    }

    pub(crate) fn fail_next_comment(&self, err: ApiError) {
        *self.comment_failure.borrow_mut() = Some(err);
    }

    /// Hold the next like request until the returned sender fires.
    pub(crate) fn gate_next_like(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.like_gate.borrow_mut() = Some(rx);
        tx
    }

    pub(crate) fn like_calls(&self) -> usize {
        self.like_calls.get()
    }

    pub(crate) fn status_calls(&self) -> usize {
        self.status_calls.get()
    }

    pub(crate) fn view_calls(&self) -> usize {
        self.view_calls.get()
    }

    pub(crate) fn comment_posts(&self) -> usize {
        self.comment_posts.get()
    }

    pub(crate) fn comment_likes(&self) -> usize {
        self.comment_likes.get()
    }

    fn article(article_id: &str, likes: u64) -> Article {
        Article {
            id: article_id.to_string(),
            category: "General".to_string(),
            avatar: String::new(),
            img: String::new(),
            title: "Fake".to_string(),
            description: String::new(),
            code: String::new(),
            slug: format!("fake-{article_id}"),
            views: 0,
            likes,
            liked_by: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

#[async_trait(?Send)]
impl EngagementApi for FakeApi {
    async fn like_status(
        &self,
        article_id: &str,
        user: &AnonymousUserId,
    ) -> Result<LikeStatus, ApiError> {
        self.status_calls.set(self.status_calls.get() + 1);
        let likes = self.likes.borrow();
        let entry = likes.get(article_id).ok_or(ApiError::NotFound)?;
        Ok(LikeStatus {
            is_liked: entry.users.contains(user.as_str()),
            like_count: entry.count,
            article_id: article_id.to_string(),
        })
    }

    async fn set_like(
        &self,
        article_id: &str,
        user: &AnonymousUserId,
        action: LikeAction,
    ) -> Result<Article, ApiError> {
        self.like_calls.set(self.like_calls.get() + 1);
        let gate = self.like_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if let Some(err) = self.like_failure.borrow_mut().take() {
            return Err(err);
        }

        let mut likes = self.likes.borrow_mut();
        let entry = likes.entry(article_id.to_string()).or_default();
        match action {
            LikeAction::Like => {
                if !entry.users.insert(user.as_str().to_string()) {
                    return Err(ApiError::Business("Article already liked".to_string()));
                }
                entry.count += 1;
            },
            LikeAction::Unlike => {
                if !entry.users.remove(user.as_str()) {
                    return Err(ApiError::Business("Article not liked yet".to_string()));
                }
                entry.count = entry.count.saturating_sub(1);
            },
        }
        Ok(Self::article(article_id, entry.count))
    }

    async fn track_view(&self, _article_id: &str) -> Result<(), ApiError> {
        self.view_calls.set(self.view_calls.get() + 1);
        match self.view_failure.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn list_comments(&self, _article_id: &str) -> Result<Vec<Comment>, ApiError> {
        Ok(self.comments.borrow().clone())
    }

    async fn post_comment(
        &self,
        _article_id: &str,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        self.comment_posts.set(self.comment_posts.get() + 1);
        if let Some(err) = self.comment_failure.borrow_mut().take() {
            return Err(err);
        }
        let created = Comment {
            id: format!("c{}", self.comment_posts.get()),
            user: comment.user.clone(),
            text: comment.text.clone(),
            likes: 0,
            time: "just now".to_string(),
            created_at: None,
        };
        self.comments.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn like_comment(&self, comment_id: &str) -> Result<(), ApiError> {
        self.comment_likes.set(self.comment_likes.get() + 1);
        let mut comments = self.comments.borrow_mut();
        let comment = comments
            .iter_mut()
            .find(|comment| comment.id == comment_id)
            .ok_or(ApiError::NotFound)?;
        comment.likes += 1;
        Ok(())
    }
}
