//! Index-based cursor pagination
//!
//! The cursor is not a pointer to a page but the index of the last item of the
//! previously served page. With a cursor of 50 and a limit of 20 the caller
//! receives items 50..=69 and the next cursor 70, which behaves like offset
//! pagination. Cursors are indexes into the caller's ordering, so callers must
//! restart from an absent cursor whenever the underlying collection changes.
//!
//! When neither a cursor nor a limit is given the whole collection is returned
//! together with the index of its last element. That value is terminal and must
//! not be used to resume.

use serde::{Deserialize, Serialize};

use crate::query::InfiniteQuery;

/// Limit used when a cursor is given without a limit
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// One page of a cursor-paginated collection, borrowed from the source slice
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage<'a, T> {
    pub items: &'a [T],
    pub next_cursor: i64,
}

impl<'a, T> CursorPage<'a, T> {
    fn empty(next_cursor: i64) -> Self {
        Self {
            items: &[],
            next_cursor,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Map every item of the page into an owned value
    pub fn map<U, F>(&self, f: F) -> OwnedPage<U>
    where
        F: FnMut(&'a T) -> U,
    {
        OwnedPage {
            items: self.items.iter().map(f).collect(),
            next_cursor: self.next_cursor,
        }
    }
}

impl<T: Clone> CursorPage<'_, T> {
    pub fn into_owned(self) -> OwnedPage<T> {
        OwnedPage {
            items: self.items.to_vec(),
            next_cursor: self.next_cursor,
        }
    }
}

/// Owned counterpart of [`CursorPage`], for responses that outlive the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedPage<T> {
    pub items: Vec<T>,
    pub next_cursor: i64,
}

/// Return the sub-range of `items` selected by `cursor` and `limit`.
///
/// - No cursor and no limit: the whole slice and `len - 1`.
/// - Otherwise cursor defaults to 0 and limit to [`DEFAULT_PAGE_LIMIT`].
/// - A cursor at or past `len - 1` yields an empty page and echoes the cursor.
///   The final index can therefore never start a page.
/// - Otherwise up to `limit` items from the cursor, with the next cursor
///   `min(cursor + limit, len - 1)`.
///
/// Negative cursors are treated as 0 and non-positive limits as the default.
/// Never panics.
pub fn paginate<T>(items: &[T], cursor: Option<i64>, limit: Option<i64>) -> CursorPage<'_, T> {
    let len = i64::try_from(items.len()).unwrap_or(i64::MAX);
    let last_index = len - 1;

    if cursor.is_none() && limit.is_none() {
        return CursorPage {
            items,
            next_cursor: last_index,
        };
    }

    let start_index = cursor.unwrap_or(0).max(0);
    let limit = limit
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_PAGE_LIMIT);

    if start_index >= last_index {
        return CursorPage::empty(start_index);
    }

    // 0 <= start_index < last_index, so both bounds fit in usize
    let end_index = start_index.saturating_add(limit).min(len);
    CursorPage {
        items: &items[start_index as usize..end_index as usize],
        next_cursor: start_index.saturating_add(limit).min(last_index),
    }
}

/// [`paginate`] driven by a deserialized infinite query
pub fn paginate_query<'a, T>(items: &'a [T], query: &InfiniteQuery) -> CursorPage<'a, T> {
    paginate(items, query.cursor, query.limit)
}

/// Walks a collection page by page the way an infinite-query client does:
/// start without a cursor, feed every `next_cursor` back, stop at the first
/// empty page.
#[derive(Debug)]
pub struct Pages<'a, T> {
    items: &'a [T],
    query: InfiniteQuery,
    done: bool,
}

impl<'a, T> Pages<'a, T> {
    pub fn new(items: &'a [T], limit: i64) -> Self {
        Self {
            items,
            query: InfiniteQuery::first_page(limit),
            done: false,
        }
    }

    /// Cursor the next request will be issued with
    pub fn cursor(&self) -> Option<i64> {
        self.query.cursor
    }
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = CursorPage<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let page = paginate_query(self.items, &self.query);
        if page.is_empty() {
            self.done = true;
            return None;
        }

        self.query = self.query.next(page.next_cursor);
        Some(page)
    }
}
