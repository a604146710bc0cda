use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Response wrapper used by every REST endpoint:
/// `{ success, data, message?, count?, total?, page?, totalPages? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    /// `false` marks a business failure.
    pub success: bool,
    /// Payload.
    pub data: Option<T>,
    /// Server explanation, mostly on failures.
    #[serde(default)]
    pub message: Option<String>,
    /// Items in this page.
    #[serde(default)]
    pub count: Option<u64>,
    /// Items across all pages.
    #[serde(default)]
    pub total: Option<u64>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u64>,
    /// Page count.
    #[serde(default)]
    pub total_pages: Option<u64>,
}

/// One page of a listing together with the server's paging counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    /// Items of this page.
    pub items: Vec<T>,
    /// Items across all pages.
    pub total: u64,
    /// 1-based page number.
    pub page: u64,
    /// Page count.
    pub total_pages: u64,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            total_pages: 0,
        }
    }
}

impl<T> ApiEnvelope<T> {
    fn business_error(message: Option<String>) -> ApiError {
        ApiError::Business(
            message
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| "Request failed".to_string()),
        )
    }

    /// Unwrap `data`, turning `success: false` into [`ApiError::Business`].
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(Self::business_error(self.message));
        }
        self.data
            .ok_or_else(|| ApiError::Decode("missing `data` in response".to_string()))
    }

    /// For endpoints whose payload is irrelevant (delete, view tracking).
    /// Yields the server's message on success.
    pub fn into_ack(self) -> Result<Option<String>, ApiError> {
        if !self.success {
            return Err(Self::business_error(self.message));
        }
        Ok(self.message)
    }
}

impl<T> ApiEnvelope<Vec<T>> {
    /// Unwrap a paginated listing. Missing counters fall back to values
    /// derived from the page itself.
    pub fn into_paged(self) -> Result<Paged<T>, ApiError> {
        if !self.success {
            return Err(Self::business_error(self.message));
        }
        let items = self.data.unwrap_or_default();
        let total = self.total.or(self.count).unwrap_or(items.len() as u64);
        Ok(Paged {
            total,
            page: self.page.unwrap_or(1).max(1),
            total_pages: self.total_pages.unwrap_or(u64::from(!items.is_empty())),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ApiEnvelope;
    use crate::{error::ApiError, models::Article};

    #[test]
    fn failed_envelope_becomes_business_error() {
        let envelope: ApiEnvelope<Article> =
            serde_json::from_str(r#"{"success":false,"message":"Article already liked"}"#)
                .expect("decode envelope");
        assert_eq!(
            envelope.into_data(),
            Err(ApiError::Business("Article already liked".to_string()))
        );
    }

    #[test]
    fn failed_envelope_without_message_gets_generic_text() {
        let envelope: ApiEnvelope<Article> =
            serde_json::from_str(r#"{"success":false,"message":"  "}"#).expect("decode envelope");
        assert_eq!(envelope.into_ack(), Err(ApiError::Business("Request failed".to_string())));
    }

    #[test]
    fn successful_envelope_without_data_is_a_decode_error() {
        let envelope: ApiEnvelope<Article> =
            serde_json::from_str(r#"{"success":true}"#).expect("decode envelope");
        assert!(matches!(envelope.into_data(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn paged_listing_reads_counters() {
        let envelope: ApiEnvelope<Vec<Article>> = serde_json::from_str(
            r#"{
                "success": true,
                "data": [{"_id":"1","category":"Web","title":"A","slug":"a"}],
                "count": 1,
                "total": 13,
                "page": 3,
                "totalPages": 3
            }"#,
        )
        .expect("decode envelope");

        let page = envelope.into_paged().expect("paged");
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 13);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn paged_listing_without_counters_falls_back() {
        let envelope: ApiEnvelope<Vec<Article>> = serde_json::from_str(
            r#"{"success":true,"data":[{"_id":"1","category":"Web","title":"A","slug":"a"}]}"#,
        )
        .expect("decode envelope");

        let page = envelope.into_paged().expect("paged");
        assert_eq!(page.total, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }
}
