//! Book request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::book::Book;

/// Text of a body field. Absent and `null` read as empty; a non-string
/// value reads as its JSON rendering, so `123` becomes `"123"`.
fn field_text(field: Option<&Value>) -> String {
    match field {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// POST /api/books body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub title: Option<Value>,
}

impl CreateBookRequest {
    pub fn title(&self) -> String {
        field_text(self.title.as_ref())
    }
}

/// POST /api/books/{id} body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub comment: Option<Value>,
}

impl AddCommentRequest {
    pub fn comment(&self) -> String {
        field_text(self.comment.as_ref())
    }
}

/// Entry of the book list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub commentcount: usize,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().to_string(),
            title: book.title().to_string(),
            commentcount: book.comment_count(),
        }
    }
}

/// Response to a successful create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedBook {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
}

impl From<&Book> for CreatedBook {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().to_string(),
            title: book.title().to_string(),
        }
    }
}

/// A single book with its comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub comments: Vec<String>,
}

impl From<&Book> for BookDetail {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().to_string(),
            title: book.title().to_string(),
            comments: book.comments().to_vec(),
        }
    }
}

/// A book after a comment was appended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentedBook {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub comments: Vec<String>,
    pub commentcount: usize,
}

impl From<&Book> for CommentedBook {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().to_string(),
            title: book.title().to_string(),
            comments: book.comments().to_vec(),
            commentcount: book.comment_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn commented_book() -> Book {
        let mut book = Book::new("Zen").unwrap();
        book.add_comment("great read").unwrap();
        book
    }

    #[test]
    fn test_summary_shape() {
        let book = commented_book();
        let value = serde_json::to_value(BookSummary::from(&book)).unwrap();

        assert_eq!(
            value,
            json!({ "_id": book.id().as_str(), "title": "Zen", "commentcount": 1 })
        );
    }

    #[test]
    fn test_created_shape() {
        let book = Book::new("Zen").unwrap();
        let value = serde_json::to_value(CreatedBook::from(&book)).unwrap();

        assert_eq!(value, json!({ "_id": book.id().as_str(), "title": "Zen" }));
    }

    #[test]
    fn test_commented_shape() {
        let book = commented_book();
        let value = serde_json::to_value(CommentedBook::from(&book)).unwrap();

        assert_eq!(value["comments"], json!(["great read"]));
        assert_eq!(value["commentcount"], json!(1));
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_request_fields_optional() {
        let req: CreateBookRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.title(), "");

        let req: CreateBookRequest = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert_eq!(req.title(), "");

        let req: AddCommentRequest = serde_json::from_str(r#"{"comment":"hi"}"#).unwrap();
        assert_eq!(req.comment(), "hi");
    }

    #[test]
    fn test_non_string_fields_rendered_as_text() {
        let req: CreateBookRequest = serde_json::from_str(r#"{"title":123}"#).unwrap();
        assert_eq!(req.title(), "123");

        let req: AddCommentRequest = serde_json::from_str(r#"{"comment":true}"#).unwrap();
        assert_eq!(req.comment(), "true");

        let req: AddCommentRequest = serde_json::from_str(r#"{"comment":4.5}"#).unwrap();
        assert_eq!(req.comment(), "4.5");
    }
}
