// src/api/pagination.rs
//! Cursor-following pagination over Notion list endpoints.

use super::responses::PaginatedResponse;
use crate::error::AppError;

/// Items collected across one or more result pages.
#[derive(Debug)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
}

/// Follows `next_cursor` until the listing is exhausted or `max_items` is reached.
///
/// `fetch_fn` receives the cursor for the page to fetch (`None` for the first).
pub async fn fetch_all_pages<T, F, Fut>(
    mut fetch_fn: F,
    max_items: Option<usize>,
) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        let response = fetch_fn(cursor).await?;
        pages_fetched += 1;

        let has_more = response.has_more;
        cursor = response.next_cursor;
        items.extend(response.results);

        if let Some(max) = max_items {
            if items.len() >= max {
                items.truncate(max);
                break;
            }
        }

        if !has_more || cursor.is_none() {
            break;
        }
    }

    log::debug!(
        "Pagination finished: {} items over {} page(s)",
        items.len(),
        pages_fetched
    );

    Ok(PaginationResult {
        items,
        pages_fetched,
    })
}
