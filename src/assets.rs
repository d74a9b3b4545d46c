//! Static files and the index page.
//!
//! Files are served straight from one directory. The router's pattern already
//! restricts names to a single path segment; [`Assets::resolve`] additionally
//! refuses dot-dot and hidden names so nothing outside the directory leaks.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::error;

use crate::request::Request;
use crate::response::{ContentType, Response};
use crate::status::Status;

const INDEX: &str = "index.html";

/// The directory static files come from.
#[derive(Clone, Debug)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path { &self.root }

    /// Maps a requested file name to a path inside the root, or `None` if the
    /// name could escape it.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let forbidden = name.is_empty()
            || name.starts_with('.')
            || name.contains(['/', '\\'])
            || name.contains("..");
        (!forbidden).then(|| self.root.join(name))
    }

    /// Reads `name` from the root and answers with a typed body.
    pub async fn serve(&self, name: &str) -> Response {
        let Some(path) = self.resolve(name) else {
            return Response::status(Status::Forbidden);
        };
        match tokio::fs::read(&path).await {
            Ok(body) => {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
                Response::builder().bytes(ContentType::from_extension(ext), body)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Response::status(Status::NotFound)
            }
            Err(e) => {
                error!(path = %path.display(), "failed to read asset: {e}");
                Response::status(Status::InternalServerError)
            }
        }
    }
}

/// `GET /static/{file}`
pub async fn file(assets: Arc<Assets>, req: Request) -> Response {
    assets.serve(req.capture(0).unwrap_or_default()).await
}

/// `GET /`
pub async fn index(assets: Arc<Assets>, _req: Request) -> Response {
    assets.serve(INDEX).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (tempfile::TempDir, Assets) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<ul id=\"items\"></ul>").unwrap();
        std::fs::write(dir.path().join("app.js"), "fetchItems();").unwrap();
        let assets = Assets::new(dir.path());
        (dir, assets)
    }

    #[test]
    fn resolve_refuses_escapes() {
        let assets = Assets::new("/srv/static");
        assert!(assets.resolve("..").is_none());
        assert!(assets.resolve("a/../b.js").is_none());
        assert!(assets.resolve(".env").is_none());
        assert!(assets.resolve("").is_none());
        assert_eq!(assets.resolve("app.css"), Some(PathBuf::from("/srv/static/app.css")));
    }

    #[tokio::test]
    async fn serves_file_with_content_type() {
        let (_dir, assets) = fixture();
        let res = assets.serve("app.js").await;
        assert_eq!(res.status_code(), Status::Ok);
        assert_eq!(res.header("content-type"), Some("text/javascript; charset=utf-8"));
        assert_eq!(res.body(), b"fetchItems();");
    }

    #[tokio::test]
    async fn missing_file_is_404() {
        let (_dir, assets) = fixture();
        assert_eq!(assets.serve("gone.css").await.status_code(), Status::NotFound);
    }

    #[tokio::test]
    async fn index_serves_index_html() {
        let (_dir, assets) = fixture();
        let res = index(Arc::new(assets), Request::new("GET", "/")).await;
        assert_eq!(res.header("content-type"), Some("text/html; charset=utf-8"));
    }
}
