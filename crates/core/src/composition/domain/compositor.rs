use super::brush::{BackdropBrush, EffectFactory, SurfaceBrush};
use super::effect_graph::EffectNode;
use super::error::CompositionError;

/// Factory surface of the host compositor.
///
/// Injected into every adapter rather than reached through a global, so a
/// substitute implementation can stand in for the platform compositor
/// under test. Implementations create handles; rendering them stays on
/// the host side.
pub trait Compositor: Send + Sync {
    /// Creates an empty surface brush (no surface, `Stretch::Fill`).
    fn create_surface_brush(&self) -> SurfaceBrush;

    /// Creates a live capture of the window backdrop.
    fn create_backdrop_brush(&self) -> BackdropBrush;

    /// Compiles `graph` into a factory, declaring `animatable_properties`
    /// as the only parameters timeline animations may target.
    fn create_effect_factory(
        &self,
        graph: EffectNode,
        animatable_properties: Vec<String>,
    ) -> Result<EffectFactory, CompositionError>;
}
