// File: crates/metrics/src/paginate.rs
// Summary: 1-based page windows over a flat list.

use crate::error::{MetricsError, Result};

#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number.
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

pub fn total_pages(len: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(MetricsError::ZeroPageSize);
    }
    Ok(len.div_ceil(page_size))
}

/// Slice for `page` (1-based). An empty list has zero pages and still answers page 1 with no items.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Result<Page<'_, T>> {
    let total_pages = total_pages(items.len(), page_size)?;
    if page == 0 || (page > total_pages && !(items.is_empty() && page == 1)) {
        return Err(MetricsError::InvalidPage { page, total_pages });
    }
    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    Ok(Page { items: &items[start..end], page, total_pages })
}
