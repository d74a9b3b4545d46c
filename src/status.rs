//! HTTP status codes as a typed enum.
//!
//! Only the codes this service can emit are listed. Use [`Status`] anywhere a
//! status code is accepted: `Response::status()`, `Response::builder().status()`,
//! or as a bare handler return value.
//!
//! ```rust
//! use listd::{Response, Status};
//!
//! Response::status(Status::NoContent);
//!
//! async fn delete_item(_req: listd::Request) -> Status {
//!     Status::NoContent
//! }
//! ```

/// A status code the service responds with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                   // 200
    NoContent,            // 204

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,           // 400
    Forbidden,            // 403
    NotFound,             // 404
    MethodNotAllowed,     // 405
    UnprocessableContent, // 422

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,  // 500
}

impl Status {
    /// The numeric code.
    pub fn code(self) -> u16 {
        self.into()
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                   => 200,
            Status::NoContent            => 204,
            Status::BadRequest           => 400,
            Status::Forbidden            => 403,
            Status::NotFound             => 404,
            Status::MethodNotAllowed     => 405,
            Status::UnprocessableContent => 422,
            Status::InternalServerError  => 500,
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        // Every variant above is a registered code.
        http::StatusCode::from_u16(s.code()).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(Status::NoContent.code(), 204);
        assert_eq!(Status::MethodNotAllowed.code(), 405);
        assert_eq!(Status::UnprocessableContent.code(), 422);
    }

    #[test]
    fn converts_to_http_status_code() {
        let code: http::StatusCode = Status::UnprocessableContent.into();
        assert_eq!(code, http::StatusCode::UNPROCESSABLE_ENTITY);
    }
}
