/// Default roster page size
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 || page_size == 0 {
        1
    } else {
        (len + page_size - 1) / page_size
    }
}

/// True when the active set no longer reaches the current page's start
/// offset. The list re-checks this on every change of the filtered set,
/// not just on explicit page changes, so a shrinking filter can never
/// leave the view on an empty page.
pub fn needs_reset(len: usize, page: usize, page_size: usize) -> bool {
    page > 0 && len <= page * page_size
}

pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page * page_size;
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn test_needs_reset_when_set_shrinks_under_offset() {
        // page 2 starts at offset 20
        assert!(needs_reset(20, 2, 10));
        assert!(needs_reset(7, 2, 10));
        assert!(!needs_reset(21, 2, 10));
        // page 0 never needs a reset
        assert!(!needs_reset(0, 0, 10));
        assert!(!needs_reset(100, 0, 10));
    }

    #[test]
    fn test_reset_invariant_holds_after_reset() {
        // after any filter change: page * size < len, or len == 0
        for len in 0..40usize {
            for page in 0..5usize {
                let effective = if needs_reset(len, page, 10) { 0 } else { page };
                assert!(effective * 10 < len || len == 0, "len={len} page={page}");
            }
        }
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(page_slice(&items, 0, 10), (0..10).collect::<Vec<_>>());
        assert_eq!(page_slice(&items, 2, 10), (20..25).collect::<Vec<_>>());
        assert!(page_slice(&items, 3, 10).is_empty());
        assert!(page_slice::<usize>(&[], 0, 10).is_empty());
    }
}
