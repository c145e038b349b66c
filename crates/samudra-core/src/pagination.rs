//! 1-indexed page slicing for the gallery.
//!
//! An empty list has zero pages. Asking for a page past the end is not an
//! error; it yields an empty page so links to stale page numbers still work.

use serde::Serialize;

use crate::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// `ceil(len / page_size)`; zero when `len` is zero.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` when `page_size` is zero.
pub fn total_pages(len: usize, page_size: usize) -> Result<usize, CoreError> {
    if page_size == 0 {
        return Err(CoreError::InvalidInput(
            "page size must be greater than zero".to_string(),
        ));
    }
    Ok(len.div_ceil(page_size))
}

/// Return page `page` (1-indexed) of `items`.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` when `page` or `page_size` is zero.
pub fn paginate<T>(
    items: &[T],
    page: usize,
    page_size: usize,
) -> Result<Page<'_, T>, CoreError> {
    if page == 0 {
        return Err(CoreError::InvalidInput(
            "page numbers start at 1".to_string(),
        ));
    }
    let total_pages = total_pages(items.len(), page_size)?;

    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());

    Ok(Page {
        items: &items[start..end],
        page,
        page_size,
        total_items: items.len(),
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_items_six_per_page() {
        let items: Vec<u32> = (1..=8).collect();

        let first = paginate(&items, 1, 6).unwrap();
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items, &items[0..6]);
        assert!(!first.has_previous);
        assert!(first.has_next);

        let second = paginate(&items, 2, 6).unwrap();
        assert_eq!(second.items, &items[6..8]);
        assert!(second.has_previous);
        assert!(!second.has_next);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, 1, 6).unwrap().total_pages, 2);
    }

    #[test]
    fn empty_list_has_zero_pages() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 6).unwrap();
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_next);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (1..=8).collect();
        let page = paginate(&items, 5, 6).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
        assert!(page.has_previous);
    }

    #[test]
    fn page_zero_is_rejected() {
        let items = [1, 2, 3];
        assert!(matches!(
            paginate(&items, 0, 6),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn page_size_zero_is_rejected() {
        let items = [1, 2, 3];
        assert!(matches!(
            paginate(&items, 1, 0),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(total_pages(3, 0).is_err());
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let items = [1, 2, 3];
        let page = paginate(&items, usize::MAX, 2).unwrap();
        assert!(page.items.is_empty());
    }
}
