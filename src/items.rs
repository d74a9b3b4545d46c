//! JSON handlers for the `/items` routes.
//!
//! Each handler decodes the request, calls one [`ItemStore`] operation and
//! encodes the outcome. A body that does not decode is answered with `422`
//! before the store is touched.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};
use crate::status::Status;
use crate::store::{Item, ItemStore, ItemUpdate, NewItem, StoreError};

/// Why an items request failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("payload did not decode: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            Self::Decode(_) => Status::UnprocessableContent,
            Self::Store(StoreError::InvalidRequest) => Status::UnprocessableContent,
            Self::Store(StoreError::NotFound(_)) => Status::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == Status::UnprocessableContent {
            warn!("rejected items request: {self}");
        }
        Response::status(status)
    }
}

fn decode<T: DeserializeOwned>(req: &Request) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(req.body())?)
}

/// The identifier captured from the route, empty when the route had none.
fn item_id(req: &Request) -> &str {
    req.capture(0).unwrap_or_default()
}

/// `GET /items`
pub async fn list(store: Arc<ItemStore>, _req: Request) -> Json<Vec<Item>> {
    Json(store.list())
}

/// `POST /items/create`
pub async fn create(store: Arc<ItemStore>, req: Request) -> Result<Json<Item>, ApiError> {
    let candidate: NewItem = decode(&req)?;
    Ok(Json(store.create(candidate)))
}

/// `PUT /items/update/{id}`
pub async fn update(store: Arc<ItemStore>, req: Request) -> Result<Json<Vec<Item>>, ApiError> {
    let replacement: ItemUpdate = decode(&req)?;
    Ok(Json(store.update(item_id(&req), replacement)?))
}

/// `DELETE /items/delete/{id}`
pub async fn delete(store: Arc<ItemStore>, req: Request) -> Result<Status, ApiError> {
    store.delete(item_id(&req))?;
    Ok(Status::NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Arc<ItemStore> {
        Arc::new(ItemStore::with_generator(|| "fixed".to_owned()))
    }

    fn with_id(method: &str, id: &str) -> Request {
        Request::new(method, "/").with_captures(vec![id.to_owned()])
    }

    #[tokio::test]
    async fn create_rejects_malformed_json_without_mutation() {
        let store = store();
        let req = Request::new("POST", "/items/create").with_body("{not json");
        let res = create(Arc::clone(&store), req).await.into_response();
        assert_eq!(res.status_code(), Status::UnprocessableContent);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_empty_body() {
        let res = create(store(), Request::new("POST", "/")).await.into_response();
        assert_eq!(res.status_code(), Status::UnprocessableContent);
    }

    #[tokio::test]
    async fn create_returns_the_item() {
        let req = Request::new("POST", "/").with_body(r#"{"Name":"tea","Done":false}"#);
        let res = create(store(), req).await.into_response();
        assert_eq!(res.status_code(), Status::Ok);
        assert_eq!(res.body(), br#"{"UUID":"fixed","Name":"tea","Done":false}"#);
    }

    #[tokio::test]
    async fn update_decode_failure_is_422_and_leaves_item() {
        let store = store();
        store.create(NewItem { name: "tea".to_owned(), done: false });
        let req = with_id("PUT", "fixed").with_body(r#"{"Done":"yes"}"#);
        let res = update(Arc::clone(&store), req).await.into_response();
        assert_eq!(res.status_code(), Status::UnprocessableContent);
        assert!(!store.list()[0].done);
    }

    #[tokio::test]
    async fn update_unknown_id_is_404() {
        let req = with_id("PUT", "ghost").with_body(r#"{"Done":true}"#);
        let res = update(store(), req).await.into_response();
        assert_eq!(res.status_code(), Status::NotFound);
    }

    #[tokio::test]
    async fn missing_id_is_422() {
        let req = Request::new("DELETE", "/");
        let res = delete(store(), req).await.into_response();
        assert_eq!(res.status_code(), Status::UnprocessableContent);
    }

    #[tokio::test]
    async fn delete_is_204_with_empty_body() {
        let store = store();
        store.create(NewItem::default());
        let res = delete(Arc::clone(&store), with_id("DELETE", "fixed")).await.into_response();
        assert_eq!(res.status_code(), Status::NoContent);
        assert!(res.body().is_empty());
        assert!(store.is_empty());
    }
}
