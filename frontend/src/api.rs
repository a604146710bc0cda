//! REST client. Every endpoint answers with an [`ApiEnvelope`]; this module
//! turns transport failures, non-2xx statuses and `success: false` bodies
//! into [`ApiError`].

use async_trait::async_trait;
use folio_shared::{
    engagement::{EngagementApi, LikeAction},
    models::LikeRequest,
    pagination::{collect_pages, ListQuery, BULK_PAGE_SIZE},
    AnonymousUserId, ApiEnvelope, ApiError, Article, Category, Comment, LikeStatus, NewCategory,
    NewComment, Paged, Project,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::FormData;

use crate::config::api_url;

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder.send().await.map_err(network_error)
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    builder
        .json(body)
        .map_err(|err| ApiError::Decode(format!("Serialize error: {err}")))?
        .send()
        .await
        .map_err(network_error)
}

/// Read the body as an envelope.
///
/// A non-2xx response may still carry an envelope (`"Article already liked"`);
/// its message is kept for the notice while the status stays in charge of
/// retrying.
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiEnvelope<T>, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;

    if response.ok() {
        return serde_json::from_str::<ApiEnvelope<T>>(&body)
            .map_err(|err| ApiError::Decode(err.to_string()));
    }
    let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
        .ok()
        .and_then(|envelope| envelope.message);
    Err(ApiError::from_status(status, message))
}

/// Browser implementation of the engagement endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpApi;

#[async_trait(?Send)]
impl EngagementApi for HttpApi {
    async fn like_status(
        &self,
        article_id: &str,
        user: &AnonymousUserId,
    ) -> Result<LikeStatus, ApiError> {
        let url = api_url(&format!(
            "articles/{}/like-status?userId={}",
            urlencoding::encode(article_id),
            urlencoding::encode(user.as_str())
        ));
        read_envelope(send(Request::get(&url)).await?).await?.into_data()
    }

    async fn set_like(
        &self,
        article_id: &str,
        user: &AnonymousUserId,
        action: LikeAction,
    ) -> Result<Article, ApiError> {
        let url = api_url(&format!(
            "articles/{}/{}",
            urlencoding::encode(article_id),
            action.path_segment()
        ));
        let body = LikeRequest {
            user_id: user.as_str().to_string(),
        };
        read_envelope(send_json(Request::post(&url), &body).await?)
            .await?
            .into_data()
    }

    async fn track_view(&self, article_id: &str) -> Result<(), ApiError> {
        let url = api_url(&format!("articles/{}/view", urlencoding::encode(article_id)));
        read_envelope::<serde_json::Value>(send(Request::post(&url)).await?)
            .await?
            .into_ack()
            .map(|_| ())
    }

    async fn list_comments(&self, article_id: &str) -> Result<Vec<Comment>, ApiError> {
        let url = api_url(&format!("articles/{}/comments", urlencoding::encode(article_id)));
        let envelope = read_envelope::<Vec<Comment>>(send(Request::get(&url)).await?).await?;
        envelope.into_paged().map(|page| page.items)
    }

    async fn post_comment(
        &self,
        article_id: &str,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        let url = api_url(&format!("articles/{}/comments", urlencoding::encode(article_id)));
        read_envelope(send_json(Request::post(&url), comment).await?)
            .await?
            .into_data()
    }

    async fn like_comment(&self, comment_id: &str) -> Result<(), ApiError> {
        let url = api_url(&format!("comments/{}/like", urlencoding::encode(comment_id)));
        read_envelope::<serde_json::Value>(send(Request::post(&url)).await?)
            .await?
            .into_ack()
            .map(|_| ())
    }
}

/// `GET /articles` with paging and an optional category filter.
pub async fn fetch_articles(query: &ListQuery) -> Result<Paged<Article>, ApiError> {
    let url = api_url(&format!("articles?{}", query.to_query_string()));
    read_envelope::<Vec<Article>>(send(Request::get(&url)).await?)
        .await?
        .into_paged()
}

/// Every article, walking `GET /articles` page by page. Feeds the category
/// overview and the admin table, which search and page on the client.
pub async fn fetch_all_articles() -> Result<Vec<Article>, ApiError> {
    collect_pages(ListQuery::default().with_limit(BULK_PAGE_SIZE), |query| async move {
        fetch_articles(&query).await
    })
    .await
}

/// `GET /articles/slug/:slug`
pub async fn fetch_article_by_slug(slug: &str) -> Result<Article, ApiError> {
    let url = api_url(&format!("articles/slug/{}", urlencoding::encode(slug)));
    read_envelope(send(Request::get(&url)).await?).await?.into_data()
}

/// `GET /categories`
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let url = api_url("categories");
    read_envelope(send(Request::get(&url)).await?).await?.into_data()
}

/// `POST /categories`; yields the server's confirmation text.
pub async fn create_category(category: &NewCategory) -> Result<Option<String>, ApiError> {
    let url = api_url("categories");
    read_envelope::<serde_json::Value>(send_json(Request::post(&url), category).await?)
        .await?
        .into_ack()
}

/// `POST /articles` as multipart form data.
pub async fn create_article(form: FormData) -> Result<Option<String>, ApiError> {
    let url = api_url("articles");
    let request = Request::post(&url)
        .body(form)
        .map_err(|err| ApiError::Decode(format!("Body error: {err}")))?;
    let response = request.send().await.map_err(network_error)?;
    read_envelope::<serde_json::Value>(response).await?.into_ack()
}

/// `DELETE /articles/:id`
pub async fn delete_article(article_id: &str) -> Result<Option<String>, ApiError> {
    let url = api_url(&format!("articles/{}", urlencoding::encode(article_id)));
    read_envelope::<serde_json::Value>(send(Request::delete(&url)).await?)
        .await?
        .into_ack()
}

/// `GET /projects` for the home carousel.
pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    let url = api_url("projects");
    read_envelope(send(Request::get(&url)).await?).await?.into_data()
}
