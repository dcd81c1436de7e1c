//! Client-side pagination
//!
//! The demo API returns whole collections, so paging is done here over the
//! fully fetched list. Pages are 1-indexed.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound accepted by [`PageRequest::validated`].
pub const MAX_PAGE_SIZE: usize = 100;

/// A page request.
///
/// Both values are always positive once constructed through
/// [`new`](Self::new) or [`validated`](Self::validated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Page number (1-indexed).
    pub page_number: usize,
    /// Number of items per page.
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Create a request, clamping zero values to 1.
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Clamp values to valid ranges.
    ///
    /// - `page_number` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    #[must_use]
    pub fn validated(&self, max_page_size: usize) -> Self {
        Self {
            page_number: self.page_number.max(1),
            page_size: self.page_size.clamp(1, max_page_size.max(1)),
        }
    }

    /// Index of the first item on this page within the full collection.
    pub fn start_index(&self) -> usize {
        (self.page_number.max(1) - 1).saturating_mul(self.page_size)
    }
}

/// One page of a collection plus the metadata needed to draw page controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// Items on this page, at most `page_size` of them.
    pub data: Vec<T>,
    /// Number of items in the whole collection.
    pub total: usize,
    /// Page this result was computed for.
    pub current_page: usize,
    /// `ceil(total / page_size)`.
    pub total_pages: usize,
    /// Page size used for this result.
    pub page_size: usize,
}

impl<T> PageResult<T> {
    /// Result with no data and no totals, used before anything is loaded.
    pub fn empty(page_number: usize, page_size: usize) -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            current_page: page_number.max(1),
            total_pages: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Pages a control strip should offer: `1..=total_pages`.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// Display serial number of the row at `index_within_page`.
    pub fn serial_number(&self, index_within_page: usize) -> usize {
        serial_number(index_within_page, self.current_page, self.page_size)
    }
}

/// Slice `all` into the requested page.
///
/// Pure and infallible: out-of-range pages yield empty `data` while still
/// reporting the correct `total` and `total_pages`. Zero inputs are clamped
/// to 1.
pub fn paginate<T: Clone>(all: &[T], page_number: usize, page_size: usize) -> PageResult<T> {
    let request = PageRequest::new(page_number, page_size);
    let total = all.len();

    let data = all
        .iter()
        .skip(request.start_index())
        .take(request.page_size)
        .cloned()
        .collect();

    PageResult {
        data,
        total,
        current_page: request.page_number,
        total_pages: total.div_ceil(request.page_size),
        page_size: request.page_size,
    }
}

/// Serial number shown in the leading table column.
///
/// Continuous across pages: row 1 of page 2 with page size 10 is 11.
pub fn serial_number(index_within_page: usize, page_number: usize, page_size: usize) -> usize {
    (page_number.max(1) - 1) * page_size.max(1) + index_within_page + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn twenty_five_users_in_pages_of_ten() {
        let users = items(25);

        let first = paginate(&users, 1, 10);
        assert_eq!(first.data.len(), 10);
        assert_eq!(first.total, 25);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.data.first(), Some(&1));

        let last = paginate(&users, 3, 10);
        assert_eq!(last.data.len(), 5);
        assert_eq!(last.data, vec![21, 22, 23, 24, 25]);
        assert!(!last.has_next());
        assert!(last.has_previous());
    }

    #[test]
    fn pages_cover_every_item_exactly_once() {
        for n in [0, 1, 9, 10, 11, 25, 100, 101] {
            for size in [1, 3, 10, 12, 100] {
                let all = items(n);
                let pages = n.div_ceil(size);
                let mut seen = Vec::new();
                for page in 1..=pages {
                    seen.extend(paginate(&all, page, size).data);
                }
                assert_eq!(seen, all, "n={n} size={size}");
            }
        }
    }

    #[test]
    fn page_beyond_total_is_empty_with_metadata() {
        let result = paginate(&items(25), 7, 10);
        assert!(result.data.is_empty());
        assert_eq!(result.total, 25);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.current_page, 7);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let result = paginate::<usize>(&[], 1, 10);
        assert!(result.is_empty());
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.page_numbers().count(), 0);
    }

    #[test]
    fn zero_inputs_are_clamped() {
        let result = paginate(&items(5), 0, 0);
        assert_eq!(result.current_page, 1);
        assert_eq!(result.page_size, 1);
        assert_eq!(result.data, vec![1]);
        assert_eq!(result.total_pages, 5);
    }

    #[test]
    fn validated_clamps_both_fields() {
        let request = PageRequest {
            page_number: 0,
            page_size: 500,
        }
        .validated(MAX_PAGE_SIZE);
        assert_eq!(request, PageRequest::new(1, MAX_PAGE_SIZE));

        let tiny = PageRequest {
            page_number: 4,
            page_size: 0,
        }
        .validated(MAX_PAGE_SIZE);
        assert_eq!(tiny.page_size, 1);
        assert_eq!(tiny.start_index(), 3);
    }

    #[test]
    fn serial_numbers_continue_across_pages() {
        assert_eq!(serial_number(0, 1, 10), 1);
        assert_eq!(serial_number(0, 2, 10), 11);
        assert_eq!(serial_number(4, 3, 10), 25);
    }

    #[test]
    fn serial_numbers_strictly_increase_without_gaps() {
        let all = items(37);
        let size = 8;
        let mut expected = 1;
        for page in 1..=all.len().div_ceil(size) {
            let result = paginate(&all, page, size);
            for index in 0..result.data.len() {
                assert_eq!(result.serial_number(index), expected);
                expected += 1;
            }
        }
        assert_eq!(expected, all.len() + 1);
    }
}
