use std::collections::HashMap;

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::assets::domain::surface::Surface;
use crate::assets::domain::surface_loader::SurfaceLoader;

#[derive(Error, Debug)]
#[error("no surface registered for uri {0:?}")]
pub struct UnknownAssetError(pub String);

/// Serves surfaces registered up front, keyed by URI.
///
/// Backs hosts that embed their textures (e.g. via `include_bytes!` plus a
/// one-time decode) and tests that need a loader without filesystem access.
#[derive(Default)]
pub struct StaticSurfaceLoader {
    surfaces: HashMap<String, Surface>,
}

impl StaticSurfaceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surface(mut self, uri: &str, surface: Surface) -> Self {
        self.surfaces.insert(uri.to_string(), surface);
        self
    }
}

impl SurfaceLoader for StaticSurfaceLoader {
    fn load_from_uri<'a>(
        &'a self,
        uri: &'a str,
    ) -> BoxFuture<'a, Result<Surface, Box<dyn std::error::Error + Send + Sync>>> {
        Box::pin(async move {
            self.surfaces.get(uri).cloned().ok_or_else(|| {
                Box::new(UnknownAssetError(uri.to_string()))
                    as Box<dyn std::error::Error + Send + Sync>
            })
        })
    }
}
