use std::sync::Arc;

use gallery_core::GalleryPage;
use warp::{Filter, Rejection, Reply};

use crate::config::ServerConfig;

/// `GET /api/hello`: the development stand-in for the Imgur gallery API.
/// Query parameters are ignored, every call returns the same page.
pub fn api_routes(
    fixture: Arc<GalleryPage>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "hello")
        .and(warp::get())
        .map(move || {
            log::debug!("serving fixture page with {} items", fixture.data.len());
            warp::reply::json(&*fixture)
        })
}

pub fn routes(
    config: &ServerConfig,
    fixture: Arc<GalleryPage>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let index_file = config.cdn_dir.join("index.html");

    // Serve index.html at `/`
    let index_route = warp::path::end().and(warp::fs::file(index_file.clone()));

    // Serve the trunk bundle (.wasm, .js, .css)
    let static_files = warp::fs::dir(config.cdn_dir.clone());

    // Fallback route for SPA: serve index.html for unmatched frontend routes
    let fallback_route = warp::any().and(warp::get()).and(warp::fs::file(index_file));

    let cors = warp::cors()
        .allow_origin(config.origin.as_str())
        .allow_methods(vec!["GET"])
        .allow_headers(vec!["Content-Type", "Authorization"]);

    api_routes(fixture)
        .or(index_route)
        .or(static_files)
        .or(fallback_route)
        .with(warp::log("gallery_backend::request"))
        .with(cors)
}
