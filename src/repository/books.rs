//! In-memory book collection

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use tokio::sync::RwLock;

use crate::models::book::{Book, BookFilter, BookPayload, BookSummary, BOOK_ID_LEN};

/// Ordered collection of books, shared between clones
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new book and return its generated id
    pub async fn create(&self, data: &BookPayload, now: DateTime<Utc>) -> String {
        let mut books = self.books.write().await;

        let id = loop {
            let candidate = generate_id();
            if !books.iter().any(|b| b.id == candidate) {
                break candidate;
            }
        };

        books.push(Book::new(id.clone(), data, now));
        id
    }

    /// Summaries of matching books, in insertion order
    pub async fn list(&self, filter: &BookFilter) -> Vec<BookSummary> {
        self.books
            .read()
            .await
            .iter()
            .filter(|b| filter.matches(b))
            .map(BookSummary::from)
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Book> {
        self.books.read().await.iter().find(|b| b.id == id).cloned()
    }

    /// Replace the mutable fields of a book. Returns `None` if the id is unknown.
    pub async fn update(&self, id: &str, data: &BookPayload, now: DateTime<Utc>) -> Option<Book> {
        let mut books = self.books.write().await;
        let book = books.iter_mut().find(|b| b.id == id)?;
        book.apply(data, now);
        Some(book.clone())
    }

    /// Remove a book. Returns `false` if the id is unknown.
    pub async fn delete(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        match books.iter().position(|b| b.id == id) {
            Some(idx) => {
                books.remove(idx);
                true
            }
            None => false,
        }
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }
}

fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BOOK_ID_LEN)
        .map(char::from)
        .collect()
}
