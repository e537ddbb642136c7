//! Page-by-page traversal of GitHub list endpoints.
//!
//! GitHub list endpoints return a bounded page of results and advertise the
//! following page through the `Link` header. [`PageSource`] abstracts a single
//! endpoint, [`PageCursor`] walks it lazily one page at a time, and
//! [`fetch_all_pages`] applies the policy used by queries: fetch every page
//! before returning, and abandon everything on the first error.

use async_trait::async_trait;

use super::error::QueryError;

/// Number of items requested per page from every list endpoint.
pub const PER_PAGE: u8 = 30;

/// Items returned by one page request plus the advertised next page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse<T> {
    /// Items on this page, in the order GitHub returned them.
    pub items: Vec<T>,
    /// Page to request next, or `None` when this is the last page.
    pub next_page: Option<u32>,
}

impl<T> PageResponse<T> {
    /// Creates a page response.
    ///
    /// A next page of `0` is the "no more pages" sentinel and is normalised
    /// to `None`.
    #[must_use]
    pub fn new(items: Vec<T>, next_page: Option<u32>) -> Self {
        Self {
            items,
            next_page: next_page.filter(|page| *page != 0),
        }
    }

    /// Creates a response for the final page of a listing.
    #[must_use]
    pub const fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page: None,
        }
    }

    /// Returns true when no further page is advertised.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.next_page.is_none()
    }
}

/// A paginated list endpoint.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Item type produced by the endpoint.
    type Item: Send;

    /// Fetches a single page (1-based).
    async fn fetch_page(
        &self,
        page: u32,
        per_page: u8,
    ) -> Result<PageResponse<Self::Item>, QueryError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    Pending(u32),
    Exhausted,
}

/// Lazy, finite cursor over the pages of a [`PageSource`].
///
/// Each call to [`PageCursor::next_page`] performs at most one request. The
/// cursor ends after the last advertised page or after the first error, and
/// can be rewound with [`PageCursor::restart`].
pub struct PageCursor<'source, Source>
where
    Source: PageSource,
{
    source: &'source Source,
    per_page: u8,
    state: CursorState,
}

impl<'source, Source> PageCursor<'source, Source>
where
    Source: PageSource,
{
    /// Creates a cursor positioned before the first page.
    #[must_use]
    pub const fn new(source: &'source Source, per_page: u8) -> Self {
        Self {
            source,
            per_page,
            state: CursorState::Pending(1),
        }
    }

    /// Rewinds the cursor to the first page.
    pub const fn restart(&mut self) {
        self.state = CursorState::Pending(1);
    }

    /// Returns true once the cursor has yielded its final page or an error.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.state, CursorState::Exhausted)
    }

    /// Fetches the next page, or returns `None` when the listing is complete.
    pub async fn next_page(&mut self) -> Option<Result<Vec<Source::Item>, QueryError>> {
        let CursorState::Pending(page) = self.state else {
            return None;
        };

        match self.source.fetch_page(page, self.per_page).await {
            Ok(response) => {
                self.state = match response.next_page {
                    Some(next) if next > page => CursorState::Pending(next),
                    Some(next) => {
                        tracing::warn!(page, next, "next page does not advance; stopping");
                        CursorState::Exhausted
                    }
                    None => CursorState::Exhausted,
                };
                tracing::trace!(page, items = response.items.len(), "fetched page");
                Some(Ok(response.items))
            }
            Err(error) => {
                self.state = CursorState::Exhausted;
                Some(Err(error))
            }
        }
    }
}

/// Fetches every page of `source` and concatenates the items in page order.
///
/// # Errors
///
/// Returns the first error raised by any page request. Items accumulated from
/// earlier pages are discarded.
pub async fn fetch_all_pages<Source>(
    source: &Source,
    per_page: u8,
) -> Result<Vec<Source::Item>, QueryError>
where
    Source: PageSource,
{
    let mut cursor = PageCursor::new(source, per_page);
    let mut items = Vec::new();
    while let Some(page) = cursor.next_page().await {
        items.extend(page?);
    }
    Ok(items)
}
