use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::composition::domain::brush::{EffectBrush, SourceBinding};
use crate::composition::domain::compositor::Compositor;
use crate::composition::domain::effect_graph::{EffectNode, SaturationEffect, SourceParameter};
use crate::shared::capability::CapabilityQuery;
use crate::shared::constants::{
    BACKDROP_PARAMETER, GRAPHICS_COMPOSITION_CONTRACT, GRAPHICS_COMPOSITION_MIN_VERSION,
};

use super::animation_effect::{AnimationEffect, EffectError};

const EFFECT_NAME: &str = "Saturation";

/// Saturation adjustment of the window backdrop.
///
/// No scoped resources; `on_create` only marks the adapter ready. The
/// single animatable parameter is `"Saturation.Saturation"`, from 0.0
/// (desaturated) to 1.0 (unchanged).
pub struct Saturation {
    compositor: Arc<dyn Compositor>,
    capabilities: Arc<dyn CapabilityQuery>,
    created: bool,
    effect_brush: Option<EffectBrush>,
}

impl Saturation {
    pub fn new(compositor: Arc<dyn Compositor>, capabilities: Arc<dyn CapabilityQuery>) -> Self {
        Self {
            compositor,
            capabilities,
            created: false,
            effect_brush: None,
        }
    }
}

impl AnimationEffect for Saturation {
    fn is_supported(&self) -> bool {
        self.capabilities.is_api_contract_present(
            GRAPHICS_COMPOSITION_CONTRACT,
            GRAPHICS_COMPOSITION_MIN_VERSION,
        )
    }

    fn effect_name(&self) -> &str {
        EFFECT_NAME
    }

    fn on_create(&mut self) -> BoxFuture<'_, Result<(), EffectError>> {
        Box::pin(async move {
            self.created = true;
            Ok(())
        })
    }

    fn apply_effect(&mut self) -> Result<Vec<String>, EffectError> {
        if !self.created {
            return Err(EffectError::NotReady);
        }

        let saturation = EffectNode::Saturation(SaturationEffect {
            name: self.effect_name().to_string(),
            saturation: 1.0,
            source: Box::new(EffectNode::SourceParameter(SourceParameter::new(
                BACKDROP_PARAMETER,
            ))),
        });

        let property_to_change = format!("{}.Saturation", self.effect_name());
        let properties_to_animate = vec![property_to_change];

        let effect_brush = self
            .compositor
            .create_effect_factory(saturation, properties_to_animate.clone())?
            .create_brush();
        effect_brush.set_source_parameter(
            BACKDROP_PARAMETER,
            SourceBinding::Backdrop(self.compositor.create_backdrop_brush()),
        )?;
        self.effect_brush = Some(effect_brush);

        Ok(properties_to_animate)
    }

    fn effect_brush(&self) -> Option<&EffectBrush> {
        self.effect_brush.as_ref()
    }
}
