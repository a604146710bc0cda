//! Page arithmetic shared by every paged list on the site.

use std::{future::Future, ops::RangeInclusive};

use tracing::{debug, warn};

use crate::{envelope::Paged, error::ApiError};

/// Page size of the public article listings.
pub const PUBLIC_PAGE_SIZE: usize = 6;
/// Page size of the admin article table.
pub const ADMIN_PAGE_SIZE: usize = 10;
/// Page size used when walking a whole listing.
pub const BULK_PAGE_SIZE: usize = 50;
/// Upper bound on pages [`collect_pages`] will request.
pub const MAX_BULK_PAGES: usize = 200;

/// Number of pages needed for `len` items. Never less than one.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    if len == 0 {
        1
    } else {
        len.div_ceil(per_page).max(1)
    }
}

/// Clamp a requested page into `1..=total_pages`.
///
/// The request is signed so that values parsed from user input (`0`, `-3`)
/// clamp instead of wrapping.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let total = total_pages.max(1);
    if requested < 1 {
        return 1;
    }
    usize::try_from(requested).map_or(total, |page| page.min(total))
}

/// Page to show after the server reports a new `totalPages`.
///
/// A current page beyond the reported total starts over at page 1. A total of
/// zero means the server has nothing to page, so the current page is kept.
pub fn page_after_refresh(current: usize, server_total_pages: usize) -> usize {
    if server_total_pages > 0 && current > server_total_pages {
        1
    } else {
        current.max(1)
    }
}

/// Which side of the current page an ellipsis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    /// Between page 1 and the window.
    Left,
    /// Between the window and the last page.
    Right,
}

impl Gap {
    /// Stable key fragment for rendering.
    pub fn as_str(self) -> &'static str {
        match self {
            Gap::Left => "left",
            Gap::Right => "right",
        }
    }
}

/// One entry of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A clickable page number.
    Page(usize),
    /// Skipped pages.
    Ellipsis(Gap),
}

/// Shape of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    /// First and last page always shown, `siblings` pages on each side of the
    /// current one, ellipses in the gaps.
    Ellipsis { siblings: usize },
    /// A fixed window of `width` consecutive pages that slides with the
    /// current page.
    Sliding { width: usize },
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout::Ellipsis {
            siblings: 1,
        }
    }
}

/// Slots to render for `current` out of `total` pages.
///
/// Empty when there is at most one page.
pub fn page_slots(current: usize, total: usize, layout: PageLayout) -> Vec<PageSlot> {
    if total <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    match layout {
        PageLayout::Ellipsis {
            siblings,
        } => {
            let start = current.saturating_sub(siblings).max(2);
            let end = current.saturating_add(siblings).min(total - 1);

            let mut slots = vec![PageSlot::Page(1)];
            if start > 2 {
                slots.push(PageSlot::Ellipsis(Gap::Left));
            }
            slots.extend((start..=end).map(PageSlot::Page));
            if end < total - 1 {
                slots.push(PageSlot::Ellipsis(Gap::Right));
            }
            slots.push(PageSlot::Page(total));
            slots
        },
        PageLayout::Sliding {
            width,
        } => {
            let width = width.clamp(1, total);
            let last_start = total - width + 1;
            let start = current.saturating_sub(width / 2).clamp(1, last_start);
            (start..start + width).map(PageSlot::Page).collect()
        },
    }
}

/// 1-based `first..=last` item numbers shown on `page`, for "Showing a to b of
/// n" captions. `None` when there are no items.
pub fn visible_range(
    page: usize,
    per_page: usize,
    total_items: usize,
) -> Option<RangeInclusive<usize>> {
    if total_items == 0 {
        return None;
    }
    let per_page = per_page.max(1);
    let page = page.clamp(1, total_pages(total_items, per_page));
    let first = (page - 1) * per_page + 1;
    let last = (page * per_page).min(total_items);
    Some(first..=last)
}

/// Items of `page` from an in-memory list.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if items.is_empty() {
        return items;
    }
    let per_page = per_page.max(1);
    let page = page.clamp(1, total_pages(items.len(), per_page));
    let start = (page - 1).saturating_mul(per_page);
    let end = usize::min(start + per_page, items.len());
    &items[start..end]
}

/// Query parameters for `GET /articles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page.
    pub page: usize,
    /// Items per page.
    pub limit: usize,
    /// Category name filter.
    pub category: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PUBLIC_PAGE_SIZE,
            category: None,
        }
    }
}

impl ListQuery {
    /// Public listing page.
    pub fn page(page: usize) -> Self {
        Self {
            page: page.max(1),
            ..Self::default()
        }
    }

    /// Restrict to one category.
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Override the page size.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        if let Some(category) = self.category.as_deref() {
            query.push_str("category=");
            query.push_str(&urlencoding::encode(category));
            query.push('&');
        }
        query.push_str(&format!("page={}&limit={}", self.page.max(1), self.limit.max(1)));
        query
    }
}

/// Walk a paged listing from page 1 until the server's `totalPages` and
/// return every item in order. `query` supplies the filter and page size; its
/// page is ignored. The first failing page fails the whole walk.
pub async fn collect_pages<T, F, Fut>(query: ListQuery, mut fetch: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(ListQuery) -> Fut,
    Fut: Future<Output = Result<Paged<T>, ApiError>>,
{
    let mut items = Vec::new();
    let mut page = 1usize;
    loop {
        let batch = fetch(ListQuery {
            page,
            ..query.clone()
        })
        .await?;
        let last_page = usize::try_from(batch.total_pages).unwrap_or(usize::MAX);
        let empty = batch.items.is_empty();
        items.extend(batch.items);

        if empty || page >= last_page {
            debug!(pages = page, items = items.len(), "collected paged listing");
            return Ok(items);
        }
        if page >= MAX_BULK_PAGES {
            warn!(pages = page, total_pages = last_page, "paged listing truncated");
            return Ok(items);
        }
        page += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn listing(total: usize, query: &ListQuery) -> Paged<usize> {
        let all: Vec<usize> = (1..=total).collect();
        Paged {
            items: page_slice(&all, query.page, query.limit).to_vec(),
            total: total as u64,
            page: query.page as u64,
            total_pages: total_pages(total, query.limit) as u64,
        }
    }

    #[test]
    fn total_pages_has_a_floor_of_one() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        assert_eq!(clamp_page(5, 4), 4);
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(-7, 4), 1);
        assert_eq!(clamp_page(3, 4), 3);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn shrinking_result_set_resets_to_first_page() {
        assert_eq!(page_after_refresh(5, 3), 1);
        assert_eq!(page_after_refresh(3, 3), 3);
        assert_eq!(page_after_refresh(4, 0), 4);
    }

    #[test]
    fn ellipsis_layout_marks_both_gaps() {
        let slots = page_slots(5, 10, PageLayout::default());
        assert_eq!(slots, vec![
            PageSlot::Page(1),
            PageSlot::Ellipsis(Gap::Left),
            PageSlot::Page(4),
            PageSlot::Page(5),
            PageSlot::Page(6),
            PageSlot::Ellipsis(Gap::Right),
            PageSlot::Page(10),
        ]);
    }

    #[test]
    fn ellipsis_layout_near_edges() {
        assert_eq!(page_slots(1, 3, PageLayout::default()), vec![
            PageSlot::Page(1),
            PageSlot::Page(2),
            PageSlot::Page(3),
        ]);
        assert_eq!(page_slots(9, 10, PageLayout::default()), vec![
            PageSlot::Page(1),
            PageSlot::Ellipsis(Gap::Left),
            PageSlot::Page(8),
            PageSlot::Page(9),
            PageSlot::Page(10),
        ]);
        assert!(page_slots(1, 1, PageLayout::default()).is_empty());
    }

    #[test]
    fn sliding_layout_keeps_fixed_width() {
        let layout = PageLayout::Sliding {
            width: 5,
        };
        let pages = |current| {
            page_slots(current, 9, layout)
                .into_iter()
                .map(|slot| match slot {
                    PageSlot::Page(page) => page,
                    PageSlot::Ellipsis(_) => 0,
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(pages(1), vec![1, 2, 3, 4, 5]);
        assert_eq!(pages(5), vec![3, 4, 5, 6, 7]);
        assert_eq!(pages(9), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_slots(2, 3, layout).len(), 3);
    }

    #[test]
    fn visible_range_covers_partial_last_page() {
        assert_eq!(visible_range(1, 6, 14), Some(1..=6));
        assert_eq!(visible_range(3, 6, 14), Some(13..=14));
        assert_eq!(visible_range(9, 6, 14), Some(13..=14));
        assert_eq!(visible_range(1, 6, 0), None);
    }

    #[test]
    fn page_slice_clamps_page() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(page_slice(&items, 2, 3), &[4, 5, 6]);
        assert_eq!(page_slice(&items, 99, 3), &[7]);
        assert!(page_slice::<u32>(&[], 1, 3).is_empty());
    }

    #[test]
    fn list_query_encodes_category() {
        let query = ListQuery::page(2).in_category("Web Dev");
        assert_eq!(query.to_query_string(), "category=Web%20Dev&page=2&limit=6");
        assert_eq!(
            ListQuery::page(0).with_limit(ADMIN_PAGE_SIZE).to_query_string(),
            "page=1&limit=10"
        );
    }
    #[tokio::test]
    async fn collects_every_page_in_order() {
        let requested = RefCell::new(Vec::new());
        let items = collect_pages(ListQuery::default().with_limit(ADMIN_PAGE_SIZE), |query| {
            requested.borrow_mut().push(query.page);
            let page = listing(23, &query);
            async move { Ok(page) }
        })
        .await
        .expect("listing collected");

        assert_eq!(items, (1..=23).collect::<Vec<_>>());
        assert_eq!(*requested.borrow(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn empty_listing_takes_one_request() {
        let calls = RefCell::new(0);
        let items = collect_pages(ListQuery::default(), |query| {
            *calls.borrow_mut() += 1;
            let page = listing(0, &query);
            async move { Ok(page) }
        })
        .await
        .expect("listing collected");

        assert!(items.is_empty());
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test]
    async fn failing_page_fails_the_walk() {
        let result = collect_pages(ListQuery::default().with_limit(5), |query| {
            let page = listing(12, &query);
            async move {
                if query.page == 2 {
                    Err(ApiError::http(502))
                } else {
                    Ok(page)
                }
            }
        })
        .await;

        assert_eq!(result, Err(ApiError::http(502)));
    }

    #[tokio::test]
    async fn filter_is_kept_on_every_page() {
        let categories = RefCell::new(Vec::new());
        collect_pages(ListQuery::default().in_category("Rust").with_limit(4), |query| {
            categories.borrow_mut().push(query.category.clone());
            let page = listing(9, &query);
            async move { Ok(page) }
        })
        .await
        .expect("listing collected");

        assert_eq!(*categories.borrow(), vec![Some("Rust".to_string()); 3]);
    }
}
