//! Ordered, regex-based request router.
//!
//! Routes are a flat table of `(method, pattern, handler)` triples checked in
//! declaration order. Each pattern is implicitly anchored, so it must match
//! the whole path. Parenthesised groups become the request's captures.
//!
//! The path is matched first, independent of the method. The first route
//! whose pattern matches decides the outcome: its handler runs if the method
//! agrees, otherwise the request gets `405` with an `Allow` header naming
//! the route's method. Later routes are never consulted once a path matched.

use std::sync::Arc;

use regex::Regex;

use crate::error::Error;
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// A compiled path template.
#[derive(Clone, Debug)]
pub struct RoutePattern {
    source: String,
    regex: Regex,
}

/// The captures of a successful [`RoutePattern::matches`], left to right.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PathMatch {
    pub captures: Vec<String>,
}

impl RoutePattern {
    /// Compiles `template` anchored at both ends.
    pub fn new(template: &str) -> Result<Self, Error> {
        let regex = Regex::new(&format!("^(?:{template})$")).map_err(|source| {
            Error::InvalidRoute { pattern: template.to_owned(), source }
        })?;
        Ok(Self { source: template.to_owned(), regex })
    }

    pub fn as_str(&self) -> &str { &self.source }

    /// Number of capture groups in the template.
    pub fn capture_count(&self) -> usize {
        // Group 0 is the whole match.
        self.regex.captures_len() - 1
    }

    /// Matches the whole `path`. Groups that did not participate in the match
    /// capture the empty string, so the result always has
    /// [`capture_count`](Self::capture_count) entries.
    pub fn matches(&self, path: &str) -> Option<PathMatch> {
        let caps = self.regex.captures(path)?;
        let captures = caps.iter()
            .skip(1)
            .map(|m| m.map_or_else(String::new, |m| m.as_str().to_owned()))
            .collect();
        Some(PathMatch { captures })
    }
}

struct Route {
    method: Method,
    pattern: RoutePattern,
    handler: BoxedHandler,
}

/// What the route table says about one `(method, path)` pair.
pub enum Resolution {
    /// A route matched path and method.
    Matched { handler: BoxedHandler, captures: Vec<String> },
    /// The first path match was declared for a different method.
    MethodNotAllowed { allow: Method },
    /// No pattern matched the path.
    NotFound,
}

/// The application router.
///
/// Build it once at startup and hand it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a handler for a method + path template. Returns `self` for chaining.
    ///
    /// ```rust
    /// # use listd::{Method, Request, Router, Status};
    /// # async fn list(_: Request) -> Status { Status::Ok }
    /// # async fn update(_: Request) -> Status { Status::Ok }
    /// Router::new()
    ///     .on(Method::Get, "/items",                list)
    ///     .on(Method::Put, "/items/update/([^/]+)", update);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `template` is not a valid regular expression. A broken route
    /// table must stop the process at startup; use [`Router::try_on`] to get
    /// the error instead.
    pub fn on(self, method: Method, template: &str, handler: impl Handler) -> Self {
        self.try_on(method, template, handler)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Like [`Router::on`], but reports a malformed template as
    /// [`Error::InvalidRoute`].
    pub fn try_on(
        mut self,
        method: Method,
        template: &str,
        handler: impl Handler,
    ) -> Result<Self, Error> {
        let pattern = RoutePattern::new(template)?;
        self.routes.push(Route { method, pattern, handler: handler.into_boxed_handler() });
        Ok(self)
    }

    pub fn len(&self) -> usize { self.routes.len() }
    pub fn is_empty(&self) -> bool { self.routes.is_empty() }

    /// Looks up `(method, path)`.
    ///
    /// `method` is the raw request token; one that is not a known [`Method`]
    /// never matches, so it resolves to `MethodNotAllowed` on a known path.
    pub fn resolve(&self, method: &str, path: &str) -> Resolution {
        let method = method.parse::<Method>().ok();
        for route in &self.routes {
            let Some(matched) = route.pattern.matches(path) else {
                continue;
            };
            if method != Some(route.method) {
                return Resolution::MethodNotAllowed { allow: route.method };
            }
            return Resolution::Matched {
                handler: Arc::clone(&route.handler),
                captures: matched.captures,
            };
        }
        Resolution::NotFound
    }

    /// Routes one request and produces its response.
    pub async fn handle(&self, req: Request) -> Response {
        match self.resolve(req.method(), req.path()) {
            Resolution::Matched { handler, captures } => {
                handler.call(req.with_captures(captures)).await
            }
            Resolution::MethodNotAllowed { allow } => Response::builder()
                .status(Status::MethodNotAllowed)
                .header("allow", allow.as_str())
                .text("405 method not allowed\n"),
            Resolution::NotFound => Response::builder()
                .status(Status::NotFound)
                .text("404 page not found\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn echo(req: Request) -> String {
        req.captures().join(",")
    }

    async fn first(_req: Request) -> &'static str { "first" }
    async fn second(_req: Request) -> &'static str { "second" }

    fn captured(res: Resolution) -> Option<Vec<String>> {
        match res {
            Resolution::Matched { captures, .. } => Some(captures),
            _ => None,
        }
    }

    #[test]
    fn pattern_is_anchored() {
        let p = RoutePattern::new("/items").unwrap();
        assert!(p.matches("/items").is_some());
        assert!(p.matches("/items/").is_none());
        assert!(p.matches("/api/items").is_none());
    }

    #[test]
    fn anchoring_wraps_alternation() {
        let p = RoutePattern::new("/a|/b").unwrap();
        assert!(p.matches("/a").is_some());
        assert!(p.matches("/b").is_some());
        assert!(p.matches("/a/b").is_none());
    }

    #[test]
    fn pattern_captures_left_to_right() {
        let p = RoutePattern::new("/([^/]+)/x/([^/]+)").unwrap();
        assert_eq!(p.capture_count(), 2);
        let m = p.matches("/one/x/two").unwrap();
        assert_eq!(m.captures, vec!["one", "two"]);
    }

    #[test]
    fn non_participating_group_captures_empty() {
        let p = RoutePattern::new("/f(oo)?").unwrap();
        assert_eq!(p.matches("/f").unwrap().captures, vec![""]);
    }

    #[test]
    fn malformed_template_is_an_error() {
        let err = RoutePattern::new("/items/(").unwrap_err();
        assert!(matches!(err, Error::InvalidRoute { ref pattern, .. } if pattern == "/items/("));
        assert!(Router::new().try_on(Method::Get, "/[", echo).is_err());
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn on_panics_on_malformed_template() {
        let _ = Router::new().on(Method::Get, "/(", echo);
    }

    #[test]
    fn put_dispatches_with_capture() {
        let router = Router::new().on(Method::Put, "/items/update/([^/]+)", echo);
        let caps = captured(router.resolve("PUT", "/items/update/abc123"));
        assert_eq!(caps, Some(vec!["abc123".to_owned()]));
    }

    #[test]
    fn wrong_method_on_known_path_is_405_not_404() {
        let router = Router::new().on(Method::Put, "/items/update/([^/]+)", echo);
        match router.resolve("GET", "/items/update/abc123") {
            Resolution::MethodNotAllowed { allow } => assert_eq!(allow, Method::Put),
            _ => panic!("expected MethodNotAllowed"),
        }
    }

    #[test]
    fn first_path_match_wins_even_when_method_differs() {
        let router = Router::new()
            .on(Method::Get, "/thing", first)
            .on(Method::Post, "/thing", second);
        assert!(matches!(
            router.resolve("POST", "/thing"),
            Resolution::MethodNotAllowed { allow: Method::Get }
        ));
    }

    #[test]
    fn unknown_method_token_is_405_on_known_path() {
        let router = Router::new().on(Method::Get, "/items", echo);
        assert!(matches!(router.resolve("BREW", "/items"), Resolution::MethodNotAllowed { .. }));
        assert!(matches!(router.resolve("BREW", "/nope"), Resolution::NotFound));
    }

    #[test]
    fn unmatched_path_is_not_found() {
        let router = Router::new().on(Method::Get, "/items", echo);
        assert!(matches!(router.resolve("GET", "/missing"), Resolution::NotFound));
        assert!(matches!(Router::new().resolve("GET", "/"), Resolution::NotFound));
    }

    #[tokio::test]
    async fn handle_runs_the_first_matching_route() {
        let router = Router::new()
            .on(Method::Get, "/x", first)
            .on(Method::Get, "/(x)", second);
        let res = router.handle(Request::new("GET", "/x")).await;
        assert_eq!(res.body(), b"first");
    }

    #[tokio::test]
    async fn handle_binds_captures_before_calling() {
        let router = Router::new().on(Method::Delete, "/items/delete/([^/]+)", echo);
        let res = router.handle(Request::new("DELETE", "/items/delete/u-1")).await;
        assert_eq!(res.status_code(), Status::Ok);
        assert_eq!(res.body(), b"u-1");
    }

    #[tokio::test]
    async fn handle_advertises_allowed_method() {
        let router = Router::new().on(Method::Post, "/items/create", echo);
        let res = router.handle(Request::new("GET", "/items/create")).await;
        assert_eq!(res.status_code(), Status::MethodNotAllowed);
        assert_eq!(res.header("allow"), Some("POST"));
    }

    #[tokio::test]
    async fn handle_falls_back_to_404() {
        let res = Router::new().handle(Request::new("GET", "/nowhere")).await;
        assert_eq!(res.status_code(), Status::NotFound);
    }
}
