use futures_util::future::BoxFuture;

use super::surface::Surface;

/// Asynchronously decodes a texture resource identified by URI.
///
/// Loading is the single suspension point of effect setup: callers await
/// the returned future to completion before assembling any graph that
/// references the surface. Failures propagate unchanged; there is no
/// retry and no fallback texture.
pub trait SurfaceLoader: Send + Sync {
    fn load_from_uri<'a>(
        &'a self,
        uri: &'a str,
    ) -> BoxFuture<'a, Result<Surface, Box<dyn std::error::Error + Send + Sync>>>;
}
