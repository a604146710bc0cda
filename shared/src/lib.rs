//! Folio shared crate: data models and client-side logic used by the
//! frontend.
//!
//! Everything here compiles for both `wasm32` and native targets. Browser
//! access (HTTP, local storage, timers) is reached only through the traits in
//! [`engagement`] and [`storage`], so the logic is testable off the browser.

pub mod articles;
pub mod comments;
pub mod engagement;
pub mod envelope;
pub mod error;
pub mod identity;
pub mod models;
pub mod pagination;
pub mod retry;
pub mod storage;
pub mod theme;
pub mod typewriter;
pub mod validation;
pub mod views;

#[cfg(test)]
pub(crate) mod fake;

pub use engagement::{EngagementApi, LikeAction, LikeController, LikePhase, LikeSnapshot};
pub use envelope::{ApiEnvelope, Paged};
pub use error::ApiError;
pub use identity::AnonymousUserId;
pub use models::{Article, Category, Comment, LikeStatus, NewCategory, NewComment, Project};
pub use theme::Theme;
