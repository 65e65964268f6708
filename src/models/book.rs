//! Book model and request/query types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Length of generated book identifiers
pub const BOOK_ID_LEN: usize = 16;

/// Book record as stored in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// 16-character alphanumeric identifier
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    /// Whether the book is currently being read
    pub reading: bool,
    /// Derived: `read_page == page_count`
    pub finished: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a new record from a validated payload, stamped at `now`
    pub fn new(id: String, data: &BookPayload, now: DateTime<Utc>) -> Self {
        let mut book = Self {
            id,
            name: String::new(),
            year: 0,
            author: String::new(),
            summary: String::new(),
            publisher: String::new(),
            page_count: 0,
            read_page: 0,
            reading: false,
            finished: false,
            inserted_at: now,
            updated_at: now,
        };
        book.apply(data, now);
        book
    }

    /// Overwrite every mutable field from `data`. `id` and `inserted_at` stay untouched.
    pub fn apply(&mut self, data: &BookPayload, now: DateTime<Utc>) {
        self.name = data.name.clone().unwrap_or_default();
        self.year = data.year;
        self.author = data.author.clone();
        self.summary = data.summary.clone();
        self.publisher = data.publisher.clone();
        self.page_count = data.page_count;
        self.read_page = data.read_page;
        self.reading = data.reading;
        self.finished = self.page_count == self.read_page;
        self.updated_at = now;
    }
}

/// Short book representation for lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Create / update book request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    /// Required, must not be empty
    pub name: Option<String>,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub page_count: u32,
    /// Must not exceed `pageCount`
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

impl BookPayload {
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    pub fn read_page_in_range(&self) -> bool {
        self.read_page <= self.page_count
    }
}

/// Query parameters for book listing
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    /// `1` lists books being read, any other value lists the others
    pub reading: Option<String>,
    /// `1` lists finished books, any other value lists the others
    pub finished: Option<String>,
}

impl FromIterator<(String, String)> for BookQuery {
    /// Build from raw query pairs. Unknown keys are ignored and a repeated key keeps its last value.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => query.name = Some(value),
                "reading" => query.reading = Some(value),
                "finished" => query.finished = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// Parsed list filters. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    name: Option<String>,
    reading: Option<bool>,
    finished: Option<bool>,
}

impl From<&BookQuery> for BookFilter {
    fn from(query: &BookQuery) -> Self {
        Self {
            name: query.name.as_ref().map(|name| name.to_lowercase()),
            reading: query.reading.as_deref().map(flag_value),
            finished: query.finished.as_deref().map(flag_value),
        }
    }
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(ref name) = self.name {
            if !book.name.to_lowercase().contains(name.as_str()) {
                return false;
            }
        }
        if self.reading.is_some_and(|reading| reading != book.reading) {
            return false;
        }
        if self.finished.is_some_and(|finished| finished != book.finished) {
            return false;
        }
        true
    }
}

/// Query-string boolean: only `"1"` is true
fn flag_value(raw: &str) -> bool {
    raw == "1"
}
