//! Liveness probe.
//!
//! If the process can answer HTTP at all, it is alive, so the handler has no
//! dependencies and never fails.

use crate::{Request, Response};

/// `GET /alive` → `200 OK` with `{"alive": true}`.
pub async fn alive(_req: Request) -> Response {
    Response::json(br#"{"alive": true}"#.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_alive_as_json() {
        let res = alive(Request::new("GET", "/alive")).await;
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body, serde_json::json!({ "alive": true }));
        assert_eq!(res.header("content-type"), Some("application/json"));
    }
}
