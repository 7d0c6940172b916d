//! The list-view pipeline shared by every table page: free-text filter,
//! then fixed-size pagination, derived fresh on every render. Pure and
//! O(n) per call; the collections involved are small enough that no
//! indexing is warranted.

/// Page size used by every list page unless it states otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Records that can be matched against a free-text query.
///
/// The match is case-insensitive substring containment over the record's
/// haystack, applied independently per item.
pub trait Searchable {
    /// The concatenated text the query is matched against.
    fn haystack(&self) -> String;

    /// `query` must already be normalized (see [`normalize`]).
    fn matches(&self, query: &str) -> bool {
        self.haystack().to_lowercase().contains(query)
    }
}

/// Lowercase and trim a query before matching.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// The visible slice of a filtered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<T> {
    pub rows: Vec<T>,
    /// Clamped to `[1, total_pages]`, so a stale page number after a
    /// filter change can never leave the view permanently blank.
    pub page: usize,
    /// At least 1, even for an empty collection.
    pub total_pages: usize,
    /// Matching rows across all pages.
    pub total_rows: usize,
}

impl<T> PageView<T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Filter `items` by `query` under `matches`, then return page `page` of
/// the result.
pub fn page_view<T: Clone>(
    items: &[T],
    query: &str,
    page: usize,
    page_size: usize,
    matches: impl Fn(&T, &str) -> bool,
) -> PageView<T> {
    let page_size = page_size.max(1);
    let query = normalize(query);

    let filtered: Vec<&T> = if query.is_empty() {
        items.iter().collect()
    } else {
        items.iter().filter(|item| matches(item, &query)).collect()
    };

    let total_rows = filtered.len();
    let total_pages = total_rows.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let rows = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    PageView {
        rows,
        page,
        total_pages,
        total_rows,
    }
}

/// [`page_view`] with the record's own haystack as the predicate.
pub fn search<T: Searchable + Clone>(
    items: &[T],
    query: &str,
    page: usize,
    page_size: usize,
) -> PageView<T> {
    page_view(items, query, page, page_size, T::matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        name: &'static str,
        email: &'static str,
    }

    impl Searchable for Row {
        fn haystack(&self) -> String {
            format!("{} {}", self.name, self.email)
        }
    }

    fn row(name: &'static str, email: &'static str) -> Row {
        Row { name, email }
    }

    fn numbered(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let items = vec![row("John Doe", "john@example.com"), row("Jane", "j@x.com")];
        let view = search(&items, "", 1, DEFAULT_PAGE_SIZE);
        assert_eq!(view.rows, items);
        assert_eq!(view.total_rows, 2);

        // Whitespace-only normalizes to empty.
        let view = search(&items, "   ", 1, DEFAULT_PAGE_SIZE);
        assert_eq!(view.rows, items);
    }

    #[test]
    fn filter_is_case_insensitive_subset() {
        let items = vec![
            row("John Doe", "john@example.com"),
            row("Jane Smith", "jane@example.com"),
            row("Alice Brown", "alice@example.com"),
        ];
        let view = search(&items, "JOHN", 1, DEFAULT_PAGE_SIZE);
        assert_eq!(view.rows, vec![items[0].clone()]);
        for r in &view.rows {
            assert!(items.contains(r));
            assert!(r.haystack().to_lowercase().contains("john"));
        }
    }

    #[test]
    fn john_matches_exactly_john_doe() {
        let items = vec![row("John Doe", "jd@example.com"), row("Sara Lee", "s@x.com")];
        let view = search(&items, "john", 1, DEFAULT_PAGE_SIZE);
        assert_eq!(view.total_rows, 1);
        assert_eq!(view.rows[0].name, "John Doe");
    }

    #[test]
    fn pages_partition_the_filtered_set() {
        let items = numbered(23);
        let first = page_view(&items, "", 1, 10, |_, _| true);
        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let view = page_view(&items, "", page, 10, |_, _| true);
            assert!(view.rows.len() <= 10);
            seen.extend(view.rows);
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn twelve_rows_split_across_two_pages_of_ten() {
        let items = numbered(12);
        let page1 = page_view(&items, "", 1, 10, |_, _| true);
        assert_eq!(page1.rows.len(), 10);
        assert_eq!(page1.total_pages, 2);

        let page2 = page_view(&items, "", 2, 10, |_, _| true);
        assert_eq!(page2.rows, vec![10, 11]);
        assert_eq!(page2.page, 2);
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let items: Vec<usize> = Vec::new();
        let view = page_view(&items, "", 1, 10, |_, _| true);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert!(view.is_empty());
        assert_eq!(view.total_rows, 0);
    }

    #[test]
    fn query_matching_nothing_behaves_like_empty_collection() {
        let items = vec![row("John Doe", "jd@example.com")];
        let view = search(&items, "zzz", 1, DEFAULT_PAGE_SIZE);
        assert_eq!(view.total_pages, 1);
        assert!(view.is_empty());
    }

    // Regression for the blank-page defect: narrowing the filter while on a
    // late page must land on a page that still shows rows.
    #[test]
    fn stale_page_is_clamped_after_filter_change() {
        let items = vec![
            row("John Doe", "jd@example.com"),
            row("Jane Smith", "js@example.com"),
            row("Alice Brown", "ab@example.com"),
        ];
        // User was on page 3 of the unfiltered list (page size 1), then
        // searched for something matching a single row.
        let view = search(&items, "alice", 3, 1);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].name, "Alice Brown");
    }

    #[test]
    fn page_zero_and_overlarge_pages_clamp() {
        let items = numbered(5);
        let view = page_view(&items, "", 0, 2, |_, _| true);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows, vec![0, 1]);

        let view = page_view(&items, "", 99, 2, |_, _| true);
        assert_eq!(view.page, 3);
        assert_eq!(view.rows, vec![4]);
    }
}
