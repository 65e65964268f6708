//! Book service: validation, timestamps and lookups

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, BookPayload, BookQuery, BookSummary},
    repository::Repository,
};

/// Write operation a payload is validated for; selects the failure wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteAction {
    Create,
    Update,
}

impl WriteAction {
    fn failure_prefix(self) -> &'static str {
        match self {
            WriteAction::Create => "Gagal menambahkan buku",
            WriteAction::Update => "Gagal memperbarui buku",
        }
    }
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book and return its id
    pub async fn create(&self, data: &BookPayload) -> AppResult<String> {
        validate(WriteAction::Create, data)?;

        let id = self.repository.books.create(data, Utc::now()).await;
        tracing::info!(book_id = %id, "Book created");
        Ok(id)
    }

    pub async fn list(&self, query: &BookQuery) -> Vec<BookSummary> {
        self.repository.books.list(&BookFilter::from(query)).await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound("Buku tidak ditemukan".to_string()))
    }

    /// Replace a book's mutable fields. The payload is validated before the id is looked up.
    pub async fn update(&self, id: &str, data: &BookPayload) -> AppResult<Book> {
        validate(WriteAction::Update, data)?;

        let book = self
            .repository
            .books
            .update(id, data, Utc::now())
            .await
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "{}. Id tidak ditemukan",
                    WriteAction::Update.failure_prefix()
                ))
            })?;
        tracing::info!(book_id = %id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.repository.books.delete(id).await {
            return Err(AppError::NotFound(
                "Buku gagal dihapus. Id tidak ditemukan".to_string(),
            ));
        }
        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }

    /// Number of stored books (for readiness)
    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }
}

fn validate(action: WriteAction, data: &BookPayload) -> AppResult<()> {
    if !data.has_name() {
        return Err(AppError::Validation(format!(
            "{}. Mohon isi nama buku",
            action.failure_prefix()
        )));
    }
    if !data.read_page_in_range() {
        return Err(AppError::Validation(format!(
            "{}. readPage tidak boleh lebih besar dari pageCount",
            action.failure_prefix()
        )));
    }
    Ok(())
}
