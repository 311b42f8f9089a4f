//! Title search for the list screen.

use crate::core::book::Book;

/// Keep the books whose title contains `query`, ignoring case.
///
/// An empty query returns the list unchanged.
pub fn filter_books(books: &[Book], query: &str) -> Vec<Book> {
    if query.is_empty() {
        return books.to_vec();
    }
    let needle = query.to_lowercase();
    books
        .iter()
        .filter(|book| book.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;

    fn titles(books: &[Book]) -> Vec<String> {
        books.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn test_empty_query_passes_through() {
        let catalog = Catalog::generate(12);
        assert_eq!(filter_books(catalog.books(), ""), catalog.books().to_vec());
    }

    #[test]
    fn test_title_5_over_full_catalog() {
        let catalog = Catalog::default();
        let hits = filter_books(catalog.books(), "Title 5");
        let mut expected = vec!["Book Title 5".to_string()];
        expected.extend((50..=59).map(|i| format!("Book Title {i}")));
        assert_eq!(titles(&hits), expected);
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = Catalog::generate(20);
        let upper = filter_books(catalog.books(), "BOOK TITLE 1");
        let lower = filter_books(catalog.books(), "book title 1");
        assert_eq!(upper, lower);
        // 1 and 10..=19
        assert_eq!(upper.len(), 11);
    }

    #[test]
    fn test_matches_only_titles() {
        let catalog = Catalog::generate(10);
        assert!(filter_books(catalog.books(), "Author").is_empty());
        assert!(filter_books(catalog.books(), "description").is_empty());
    }

    #[test]
    fn test_filter_keeps_order() {
        let catalog = Catalog::generate(30);
        let hits = filter_books(catalog.books(), "2");
        let ids: Vec<u32> = hits.iter().map(|b| b.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.first(), Some(&2));
    }

    #[test]
    fn test_no_match() {
        let catalog = Catalog::default();
        assert!(filter_books(catalog.books(), "zzz").is_empty());
    }
}
