use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use shared::errors::HttpError;
use std::marker::PhantomData;
use tracing::warn;
use validator::{Validate, ValidationError, ValidationErrors};

/// Order in which fields are checked; the first failing one is reported
/// as the error message.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Names the resource in id-parsing errors.
pub trait Resource {
    const NAME: &'static str;
}

/// JSON body decoded regardless of content type, then validated.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + FieldOrder + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            warn!("⚠️ Failed to read request body: {}", rejection.body_text());
            invalid_body()
        })?;

        let value: T = serde_json::from_slice(&bytes).map_err(|e| {
            warn!("⚠️ Invalid JSON body: {e}");
            invalid_body()
        })?;

        value
            .validate()
            .map_err(|errors| validation_error::<T>(&errors))?;

        Ok(Self(value))
    }
}

fn invalid_body() -> HttpError {
    HttpError::InvalidRequest("invalid request body".to_string())
}

fn validation_error<T: FieldOrder>(errors: &ValidationErrors) -> HttpError {
    let field_errors = errors.field_errors();

    let mut ordered: Vec<&str> = T::FIELDS
        .iter()
        .copied()
        .filter(|f| field_errors.contains_key(*f))
        .collect();
    let mut rest: Vec<&str> = field_errors
        .keys()
        .map(|k| &**k)
        .filter(|k| !T::FIELDS.iter().any(|f| f == k))
        .collect();
    rest.sort_unstable();
    ordered.extend(rest);

    let mut details = Map::new();
    let mut first = None;

    for field in ordered {
        let messages: Vec<String> = field_errors
            .get(field)
            .map(|errs| errs.iter().map(|e| message_for(field, e)).collect())
            .unwrap_or_default();

        if first.is_none() {
            first = messages.first().cloned();
        }
        details.insert(field.to_string(), json!(messages));
    }

    HttpError::Validation {
        message: first.unwrap_or_else(|| "Validation failed".to_string()),
        details: Some(Value::Object(details)),
    }
}

fn message_for(field: &str, error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match &*error.code {
            "length" => "Invalid length".to_string(),
            "range" => "Value out of range".to_string(),
            _ => format!("Invalid {field}"),
        })
}

/// Positive integer id from the `{id}` path segment.
pub struct PathId<R>(pub i32, pub PhantomData<R>);

impl<S, R> FromRequestParts<S> for PathId<R>
where
    S: Send + Sync,
    R: Resource + Send,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || HttpError::InvalidId(format!("invalid {} ID format", R::NAME));

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(Self(id, PhantomData)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::{CategoryRequest, ProductRequest};
    use axum::body::Body;

    async fn extract<T>(body: &str) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Validate + FieldOrder + Send,
    {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body.to_string()))
            .unwrap();
        ValidatedJson::<T>::from_request(req, &()).await.map(|v| v.0)
    }

    fn message(err: HttpError) -> (String, Value) {
        match err {
            HttpError::Validation { message, details } => (message, details.unwrap()),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let req: ProductRequest =
            extract(r#"{"name":"Nasi Goreng","category_id":1,"price":15000,"stock":10}"#)
                .await
                .unwrap();
        assert_eq!(req.name, "Nasi Goreng");
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_request() {
        let err = extract::<ProductRequest>(r#"{"name": "#).await.unwrap_err();
        assert!(matches!(err, HttpError::InvalidRequest(_)));

        let err = extract::<ProductRequest>(r#"{"stock": "ten"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn reports_first_failing_field_in_order() {
        let err = extract::<ProductRequest>(r#"{"name":"","category_id":0,"price":0,"stock":0}"#)
            .await
            .unwrap_err();
        let (msg, details) = message(err);

        assert_eq!(msg, "Product name is required");
        let fields: Vec<&String> = details.as_object().unwrap().keys().collect();
        assert_eq!(fields.len(), 4);
    }

    #[tokio::test]
    async fn category_checked_before_price_and_stock() {
        let err = extract::<ProductRequest>(r#"{"name":"Risol","price":-1,"stock":0}"#)
            .await
            .unwrap_err();
        assert_eq!(message(err).0, "Category ID is required");

        let err = extract::<ProductRequest>(r#"{"name":"Risol","category_id":2,"stock":0}"#)
            .await
            .unwrap_err();
        assert_eq!(message(err).0, "Product price must be greater than 0");

        let err = extract::<ProductRequest>(r#"{"name":"Risol","category_id":2,"price":1}"#)
            .await
            .unwrap_err();
        assert_eq!(message(err).0, "Product stock must be greater than 0");
    }

    #[tokio::test]
    async fn category_name_is_required() {
        let err = extract::<CategoryRequest>(r#"{"description":"x"}"#)
            .await
            .unwrap_err();
        assert_eq!(message(err).0, "Category name is required");
    }

    struct Widget;

    impl Resource for Widget {
        const NAME: &'static str = "widget";
    }

    #[tokio::test]
    async fn path_id_rejects_non_positive_and_non_numeric() {
        use axum::{Router, routing::get};
        use http_body_util::BodyExt;
        use tower::ServiceExt;

        let app = Router::new().route(
            "/widgets/{id}",
            get(|PathId(id, ..): PathId<Widget>| async move { id.to_string() }),
        );

        for (uri, ok) in [
            ("/widgets/12", true),
            ("/widgets/abc", false),
            ("/widgets/0", false),
            ("/widgets/-3", false),
        ] {
            let res = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(res.status().is_success(), ok, "{uri}");

            if !ok {
                let bytes = res.into_body().collect().await.unwrap().to_bytes();
                let body: Value = serde_json::from_slice(&bytes).unwrap();
                assert_eq!(body["error"]["code"], "INVALID_ID");
                assert_eq!(body["error"]["message"], "invalid widget ID format");
            }
        }
    }
}
