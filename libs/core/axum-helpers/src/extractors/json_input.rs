//! JSON body extractor with a stable rejection message.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that rejects with the shared [`AppError`] body.
///
/// `axum::Json`'s own rejection leaks serde's parse diagnostics into the
/// response; this wrapper maps any rejection to the fixed invalid-JSON
/// message so clients see one stable text for every malformed body.
///
/// Field-level validation stays with the service layer, which knows the
/// domain rules.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonInput;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateTask {
///     title: String,
///     description: String,
/// }
///
/// async fn create_task(JsonInput(payload): JsonInput<CreateTask>) -> String {
///     format!("Creating task: {}", payload.title)
/// }
///
/// let app = Router::new().route("/tasks", post(create_task));
/// ```
pub struct JsonInput<T>(pub T);

impl<T, S> FromRequest<S> for JsonInput<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(JsonInput(data))
    }
}
