//! Lenient request body extractor

use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use tracing::debug;

/// Body extractor accepting JSON or url-encoded forms.
///
/// Never rejects: a missing body, an unsupported content type or a body that
/// fails to parse all yield `T::default()`. Handlers then answer the absent
/// field with their own plain-text message instead of an extractor error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Payload<T>(pub T);

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(content_type: Option<&str>) -> BodyKind {
    let Some(content_type) = content_type else {
        return BodyKind::Other;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );

        let value = match kind {
            BodyKind::Json => match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => value,
                Err(rejection) => {
                    debug!(error = %rejection.body_text(), "Unreadable JSON body");
                    T::default()
                }
            },
            BodyKind::Form => match Form::<T>::from_request(req, state).await {
                Ok(Form(value)) => value,
                Err(rejection) => {
                    debug!(error = %rejection.body_text(), "Unreadable form body");
                    T::default()
                }
            },
            BodyKind::Other => T::default(),
        };

        Ok(Payload(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct TitleBody {
        #[serde(default)]
        title: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> TitleBody {
        let mut builder = HttpRequest::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body)).unwrap();

        Payload::<TitleBody>::from_request(req, &())
            .await
            .unwrap()
            .into_inner()
    }

    #[test]
    fn test_body_kind() {
        assert_eq!(body_kind(Some("application/json")), BodyKind::Json);
        assert_eq!(body_kind(Some("application/json; charset=utf-8")), BodyKind::Json);
        assert_eq!(body_kind(Some("application/merge-patch+json")), BodyKind::Json);
        assert_eq!(
            body_kind(Some("application/x-www-form-urlencoded")),
            BodyKind::Form
        );
        assert_eq!(body_kind(Some("text/plain")), BodyKind::Other);
        assert_eq!(body_kind(None), BodyKind::Other);
    }

    #[tokio::test]
    async fn test_json_body() {
        let body = extract(Some("application/json"), r#"{"title":"Zen"}"#).await;
        assert_eq!(body.title.as_deref(), Some("Zen"));
    }

    #[tokio::test]
    async fn test_form_body() {
        let body = extract(Some("application/x-www-form-urlencoded"), "title=Zen+Mind").await;
        assert_eq!(body.title.as_deref(), Some("Zen Mind"));
    }

    #[tokio::test]
    async fn test_malformed_json_defaults() {
        let body = extract(Some("application/json"), "{title").await;
        assert_eq!(body, TitleBody::default());
    }

    #[tokio::test]
    async fn test_missing_body_defaults() {
        let body = extract(None, "").await;
        assert_eq!(body, TitleBody::default());
    }

    #[test]
    fn test_into_inner() {
        assert_eq!(Payload(7).into_inner(), 7);
    }
}
