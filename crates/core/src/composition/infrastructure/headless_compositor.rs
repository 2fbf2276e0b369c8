use crate::composition::domain::brush::{BackdropBrush, EffectFactory, SurfaceBrush};
use crate::composition::domain::compositor::Compositor;
use crate::composition::domain::effect_graph::EffectNode;
use crate::composition::domain::error::CompositionError;

/// In-memory compositor for headless hosts and tests.
///
/// Produces the domain brush handles directly; a platform compositor
/// would mirror them into device resources.
#[derive(Default)]
pub struct HeadlessCompositor;

impl HeadlessCompositor {
    pub fn new() -> Self {
        Self
    }
}

impl Compositor for HeadlessCompositor {
    fn create_surface_brush(&self) -> SurfaceBrush {
        SurfaceBrush::new()
    }

    fn create_backdrop_brush(&self) -> BackdropBrush {
        BackdropBrush::new()
    }

    fn create_effect_factory(
        &self,
        graph: EffectNode,
        animatable_properties: Vec<String>,
    ) -> Result<EffectFactory, CompositionError> {
        let factory = EffectFactory::compile(graph, animatable_properties)?;
        log::debug!(
            "Compiled effect factory (animatable: {})",
            factory.animatable_properties().join(", ")
        );
        Ok(factory)
    }
}
