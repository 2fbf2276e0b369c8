use std::path::{Component, Path, PathBuf};

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::assets::domain::surface::Surface;
use crate::assets::domain::surface_loader::SurfaceLoader;

#[derive(Error, Debug)]
pub enum SurfaceLoadError {
    #[error("unsupported asset uri {0:?}: expected the app:/// scheme")]
    UnsupportedScheme(String),
    #[error("asset uri {0:?} resolves outside the asset root")]
    OutsideAssetRoot(String),
    #[error("failed to read asset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode asset {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

const APP_SCHEME: &str = "app:///";

/// Loads packaged textures from an asset directory, decoding with the
/// `image` crate into RGBA8.
///
/// URIs use the `app:///` scheme and resolve relative to the asset root,
/// e.g. `app:///assets/noise.png`. Decoding is synchronous; the returned
/// future resolves once the pixels are in memory.
pub struct ImageSurfaceLoader {
    asset_root: PathBuf,
}

impl ImageSurfaceLoader {
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
        }
    }

    fn resolve(&self, uri: &str) -> Result<PathBuf, SurfaceLoadError> {
        let relative = uri
            .strip_prefix(APP_SCHEME)
            .ok_or_else(|| SurfaceLoadError::UnsupportedScheme(uri.to_string()))?;
        let relative = Path::new(relative);
        // Packaged URIs must stay inside the asset root.
        let escapes = relative.components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(SurfaceLoadError::OutsideAssetRoot(uri.to_string()));
        }
        Ok(self.asset_root.join(relative))
    }

    fn load_sync(&self, uri: &str) -> Result<Surface, SurfaceLoadError> {
        let path = self.resolve(uri)?;
        let bytes = std::fs::read(&path).map_err(|source| SurfaceLoadError::Read {
            path: path.clone(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|source| SurfaceLoadError::Decode {
                path: path.clone(),
                source,
            })?
            .into_rgba8();
        let (width, height) = decoded.dimensions();
        log::debug!("Decoded asset {} ({width}x{height})", path.display());
        Ok(Surface::new(decoded.into_raw(), width, height))
    }
}

impl SurfaceLoader for ImageSurfaceLoader {
    fn load_from_uri<'a>(
        &'a self,
        uri: &'a str,
    ) -> BoxFuture<'a, Result<Surface, Box<dyn std::error::Error + Send + Sync>>> {
        Box::pin(async move {
            self.load_sync(uri)
                .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
        })
    }
}
