pub mod image_surface_loader;
pub mod static_surface_loader;
