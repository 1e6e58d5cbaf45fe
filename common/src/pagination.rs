//! Page windowing over the filtered view

/// Rows-per-page choices offered by the pagination bar
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Visible slice plus the bookkeeping the pagination bar needs
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow<'a, T> {
    pub rows: &'a [T],
    pub page: usize,
    pub rows_per_page: usize,
    pub total: usize,
}

impl<'a, T> PageWindow<'a, T> {
    pub fn page_count(&self) -> usize {
        page_count(self.total, self.rows_per_page)
    }

    /// 1-based index of the first visible row, 0 when empty
    pub fn from(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.page * self.rows_per_page + 1
        }
    }

    /// 1-based index of the last visible row
    pub fn to(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.page * self.rows_per_page + self.rows.len()
        }
    }

    /// "1–10 de 42"
    pub fn label(&self) -> String {
        format!("{}–{} de {}", self.from(), self.to(), self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }
}

pub fn page_count(total: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 0;
    }
    total.div_ceil(rows_per_page)
}

/// True when `page` addresses at least one row, or is page 0
pub fn page_in_bounds(total: usize, page: usize, rows_per_page: usize) -> bool {
    page == 0 || page.saturating_mul(rows_per_page) < total
}

/// `ordered[page*rows_per_page .. +rows_per_page]`, clamped to the input
pub fn paginate<T>(ordered: &[T], page: usize, rows_per_page: usize) -> PageWindow<'_, T> {
    let total = ordered.len();
    let start = page.saturating_mul(rows_per_page).min(total);
    let end = start.saturating_add(rows_per_page).min(total);
    PageWindow {
        rows: &ordered[start..end],
        page,
        rows_per_page,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (1..=23).collect();

        let first = paginate(&items, 0, 10);
        assert_eq!(first.rows, &items[0..10]);
        assert_eq!(first.total, 23);
        assert_eq!(first.page_count(), 3);
        assert_eq!(first.label(), "1–10 de 23");
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&items, 2, 10);
        assert_eq!(last.rows, &[21, 22, 23]);
        assert_eq!(last.label(), "21–23 de 23");
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let window = paginate(&items, 7, 10);
        assert!(window.rows.is_empty());
        assert_eq!(window.total, 5);
        assert_eq!(window.label(), "0–0 de 5");
    }

    #[test]
    fn test_paginate_empty() {
        let items: Vec<u32> = Vec::new();
        let window = paginate(&items, 0, 10);
        assert!(window.rows.is_empty());
        assert_eq!(window.page_count(), 0);
        assert!(!window.has_next());
    }

    #[test]
    fn test_page_in_bounds() {
        assert!(page_in_bounds(0, 0, 10));
        assert!(page_in_bounds(11, 1, 10));
        assert!(!page_in_bounds(10, 1, 10));
        assert!(!page_in_bounds(3, 5, 5));
    }

    #[test]
    fn test_zero_rows_per_page() {
        assert_eq!(page_count(10, 0), 0);
        let items = [1, 2, 3];
        assert!(paginate(&items, 0, 0).rows.is_empty());
    }
}
