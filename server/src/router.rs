use std::path::Path;

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, Response},
    middleware::{self, Next},
    routing::{get, get_service},
    Router,
};
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::about;

const IMAGE_CACHE: &str = "public, max-age=2592000";
const ASSET_CACHE: &str = "public, max-age=0";

fn cache_policy(path: &str) -> Option<&'static str> {
    let (_, extension) = path.rsplit_once('.')?;

    match extension {
        "jpg" | "png" | "svg" => Some(IMAGE_CACHE),
        "wasm" | "js" | "css" => Some(ASSET_CACHE),
        _ => None,
    }
}

async fn set_static_cache_control(request: Request, next: Next) -> Response<Body> {
    let policy = cache_policy(request.uri().path());
    let mut response = next.run(request).await;

    if let Some(policy) = policy {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static(policy));
    }

    response
}

pub fn router(public_dir: &Path) -> Router {
    Router::new()
        .fallback(
            get_service(
                ServeDir::new(public_dir)
                    .precompressed_br()
                    .precompressed_gzip(),
            )
            .layer(middleware::from_fn(set_static_cache_control)),
        )
        .route("/about", get(about::get_about))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
}
