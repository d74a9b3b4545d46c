//! The service's route table.

use std::sync::Arc;

use crate::assets::{self, Assets};
use crate::health;
use crate::items;
use crate::method::Method;
use crate::request::Request;
use crate::router::Router;
use crate::store::ItemStore;

/// Builds the router for `store` and the asset directory `assets`.
///
/// Declaration order matters: the first pattern matching the path decides
/// between dispatch and `405`.
pub fn routes(store: Arc<ItemStore>, assets: Arc<Assets>) -> Router {
    let files = Arc::clone(&assets);
    let list = Arc::clone(&store);
    let create = Arc::clone(&store);
    let update = Arc::clone(&store);
    let delete = store;

    Router::new()
        .on(Method::Get,    r"/static/([^/]+\.(?:css|js))", move |req: Request| assets::file(Arc::clone(&files), req))
        .on(Method::Get,    "/alive",                       health::alive)
        .on(Method::Get,    "/",                            move |req: Request| assets::index(Arc::clone(&assets), req))
        .on(Method::Get,    "/items",                       move |req: Request| items::list(Arc::clone(&list), req))
        .on(Method::Post,   "/items/create",                move |req: Request| items::create(Arc::clone(&create), req))
        .on(Method::Put,    "/items/update/([^/]+)",        move |req: Request| items::update(Arc::clone(&update), req))
        .on(Method::Delete, "/items/delete/([^/]+)",        move |req: Request| items::delete(Arc::clone(&delete), req))
}
