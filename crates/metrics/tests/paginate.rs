// File: crates/metrics/tests/paginate.rs
// Purpose: Page windows and page counts.

use fintrack_metrics::paginate::total_pages;
use fintrack_metrics::{paginate, MetricsError};

#[test]
fn page_count_is_ceiling() {
    assert_eq!(total_pages(0, 10), Ok(0));
    assert_eq!(total_pages(10, 10), Ok(1));
    assert_eq!(total_pages(11, 10), Ok(2));
    assert_eq!(total_pages(23, 5), Ok(5));
}

#[test]
fn last_page_holds_remainder() {
    let items: Vec<u32> = (0..23).collect();
    let last = paginate(&items, 5, 5).unwrap();
    assert_eq!(last.total_pages, 5);
    assert_eq!(last.items, &[20, 21, 22]);
    assert_eq!(last.items.len(), 23 - (last.total_pages - 1) * 5);
    assert!(!last.has_next());
    assert!(last.has_previous());

    let first = paginate(&items, 1, 5).unwrap();
    assert_eq!(first.items, &[0, 1, 2, 3, 4]);
    assert!(first.has_next());
    assert!(!first.has_previous());
}

#[test]
fn exact_multiple_fills_last_page() {
    let items: Vec<u32> = (0..20).collect();
    let last = paginate(&items, 4, 5).unwrap();
    assert_eq!(last.items.len(), 5);
}

#[test]
fn rejects_bad_arguments() {
    let items = [1, 2, 3];
    assert_eq!(paginate(&items, 1, 0).unwrap_err(), MetricsError::ZeroPageSize);
    assert_eq!(paginate(&items, 0, 2).unwrap_err(), MetricsError::InvalidPage { page: 0, total_pages: 2 });
    assert_eq!(paginate(&items, 3, 2).unwrap_err(), MetricsError::InvalidPage { page: 3, total_pages: 2 });
}

#[test]
fn empty_list_has_an_empty_first_page() {
    let items: [u8; 0] = [];
    let page = paginate(&items, 1, 10).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
    assert!(!page.has_next());
}
