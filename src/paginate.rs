//! Fixed-size pagination over filtered article lists.

/// Articles shown per list page.
pub const PAGE_SIZE: usize = 3;

/// One page of records plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// True when a later page exists.
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// True when an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

/// Decodes a raw page parameter, failing closed to page 1.
///
/// Non-numeric, absent, and zero values all mean the first page. Clamping
/// to the last page happens in [`paginate`] once the total is known.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|p| p.parse::<usize>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

/// Slices `items` into the requested 1-based page of [`PAGE_SIZE`] records.
///
/// Page numbers beyond the last page clamp to the last page rather than
/// erroring. An empty input yields a single empty page so templates always
/// have valid navigation metadata.
pub fn paginate<T>(items: Vec<T>, requested: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE).max(1);
    let number = requested.clamp(1, total_pages);

    let start = (number - 1) * PAGE_SIZE;
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect();

    Page {
        items,
        number,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_rejects_garbage() {
        // Arrange & Act & Assert
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("-2")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("7")), 7);
    }

    #[test]
    fn test_paginate_slices_fixed_size_pages() {
        // Arrange
        let items: Vec<i32> = (1..=7).collect();

        // Act
        let first = paginate(items.clone(), 1);
        let second = paginate(items.clone(), 2);
        let third = paginate(items, 3);

        // Assert
        assert_eq!(first.items, vec![1, 2, 3]);
        assert_eq!(second.items, vec![4, 5, 6]);
        assert_eq!(third.items, vec![7]);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_items, 7);
    }

    #[test]
    fn test_paginate_adjacent_pages_are_disjoint_and_covering() {
        // Arrange
        let items: Vec<i32> = (1..=10).collect();

        // Act: reassemble the sequence from its pages
        let mut reassembled = Vec::new();
        for page_number in 1..=4 {
            reassembled.extend(paginate(items.clone(), page_number).items);
        }

        // Assert
        assert_eq!(reassembled, items);
    }

    #[test]
    fn test_paginate_clamps_past_the_end() {
        // Arrange
        let items: Vec<i32> = (1..=4).collect();

        // Act
        let page = paginate(items, 99);

        // Assert: lands on the last page, no error
        assert_eq!(page.number, 2);
        assert_eq!(page.items, vec![4]);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_paginate_empty_input_yields_one_empty_page() {
        // Act
        let page = paginate(Vec::<i32>::new(), 1);

        // Assert
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_navigation_metadata_middle_page() {
        // Arrange
        let items: Vec<i32> = (1..=9).collect();

        // Act
        let page = paginate(items, 2);

        // Assert
        assert!(page.has_next());
        assert!(page.has_previous());
        assert_eq!(page.total_pages, 3);
    }
}
