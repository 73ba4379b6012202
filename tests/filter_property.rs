//! Property tests for the catalog filter

use proptest::prelude::*;

use librovia::app::catalog::filter_books;
use librovia::app::types::Book;

fn book_strategy() -> impl Strategy<Value = Book> {
    ("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}").prop_map(|(title, author)| Book {
        title,
        author,
        ..Book::default()
    })
}

proptest! {
    #[test]
    fn empty_query_is_identity(books in prop::collection::vec(book_strategy(), 0..20)) {
        prop_assert_eq!(filter_books(&books, "").len(), books.len());
        prop_assert_eq!(filter_books(&books, "   ").len(), books.len());
    }

    #[test]
    fn every_result_matches_the_query(
        books in prop::collection::vec(book_strategy(), 0..20),
        query in "[a-zA-Z]{1,6}",
    ) {
        let filtered = filter_books(&books, &query);
        let needle = query.to_lowercase();
        prop_assert!(filtered.len() <= books.len());
        for book in &filtered {
            prop_assert!(
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            );
        }
    }

    #[test]
    fn every_excluded_book_really_does_not_match(
        books in prop::collection::vec(book_strategy(), 0..20),
        query in "[a-zA-Z]{1,6}",
    ) {
        let filtered = filter_books(&books, &query);
        let needle = query.to_lowercase();
        let kept = filtered.len();
        let matching = books
            .iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            })
            .count();
        prop_assert_eq!(kept, matching);
    }

    #[test]
    fn query_case_does_not_change_the_result(
        books in prop::collection::vec(book_strategy(), 0..20),
        query in "[a-zA-Z]{1,6}",
    ) {
        let lower = filter_books(&books, &query.to_lowercase()).len();
        let upper = filter_books(&books, &query.to_uppercase()).len();
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn filtering_leaves_the_list_untouched(
        books in prop::collection::vec(book_strategy(), 0..20),
        query in "[a-zA-Z]{0,6}",
    ) {
        let before: Vec<String> = books.iter().map(|b| b.title.clone()).collect();
        let _ = filter_books(&books, &query);
        let after: Vec<String> = books.iter().map(|b| b.title.clone()).collect();
        prop_assert_eq!(before, after);
    }
}
