//! # listd
//!
//! A tiny checklist service: one in-memory list of items behind a handful of
//! JSON endpoints, plus the static page that drives them.
//!
//! | Method | Path | Outcome |
//! |---|---|---|
//! | `GET` | `/items` | all items, in insertion order |
//! | `POST` | `/items/create` | the created item |
//! | `PUT` | `/items/update/{id}` | the whole list after the update |
//! | `DELETE` | `/items/delete/{id}` | `204 No Content` |
//! | `GET` | `/alive` | `{"alive": true}` |
//! | `GET` | `/`, `/static/{file}` | the browser front-end |
//!
//! Routing is a flat, ordered table of regex patterns. A path that matches a
//! route registered for another method is answered with `405` and an `Allow`
//! header rather than `404`.
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use listd::{Assets, Config, ItemStore, Server, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), listd::Error> {
//!     let config = Config::default();
//!     let store = Arc::new(ItemStore::new());
//!     let assets = Arc::new(Assets::new(&config.asset_dir));
//!
//!     Server::bind(config.addr).serve(app::routes(store, assets)).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod app;
pub mod assets;
pub mod config;
pub mod health;
pub mod items;
pub mod store;

pub use assets::Assets;
pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use method::{Method, UnknownMethod};
pub use request::Request;
pub use response::{ContentType, IntoResponse, Json, Response, ResponseBuilder};
pub use router::{PathMatch, Resolution, RoutePattern, Router};
pub use server::Server;
pub use status::Status;
pub use store::{IdGenerator, Item, ItemStore, ItemUpdate, NewItem, StoreError, UuidV4};
