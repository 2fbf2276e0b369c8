use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::assets::domain::surface_loader::SurfaceLoader;
use crate::composition::domain::brush::{EffectBrush, SourceBinding, Stretch, SurfaceBrush};
use crate::composition::domain::compositor::Compositor;
use crate::composition::domain::effect_graph::{
    BlendEffect, BlendMode, BorderMode, EffectNode, EffectOptimization, GaussianBlurEffect,
    SourceParameter,
};
use crate::shared::capability::CapabilityQuery;
use crate::shared::constants::{
    BACKDROP_PARAMETER, GRAPHICS_COMPOSITION_CONTRACT, GRAPHICS_COMPOSITION_MIN_VERSION,
    NOISE_PARAMETER, NOISE_TEXTURE_URI,
};

use super::animation_effect::{AnimationEffect, EffectError};

const EFFECT_NAME: &str = "Blur";

/// Gaussian blur of the window backdrop with a noise texture screened on
/// top to mask banding.
///
/// `on_create` decodes the packaged noise texture once per instance;
/// `apply_effect` assembles the blur-under-noise graph and exposes
/// `"Blur.BlurAmount"` to the host timeline.
pub struct Blur {
    compositor: Arc<dyn Compositor>,
    loader: Arc<dyn SurfaceLoader>,
    capabilities: Arc<dyn CapabilityQuery>,
    noise_brush: Option<SurfaceBrush>,
    effect_brush: Option<EffectBrush>,
}

impl Blur {
    pub fn new(
        compositor: Arc<dyn Compositor>,
        loader: Arc<dyn SurfaceLoader>,
        capabilities: Arc<dyn CapabilityQuery>,
    ) -> Self {
        Self {
            compositor,
            loader,
            capabilities,
            noise_brush: None,
            effect_brush: None,
        }
    }

    /// The loaded noise brush, once `on_create` has completed.
    pub fn noise_brush(&self) -> Option<&SurfaceBrush> {
        self.noise_brush.as_ref()
    }
}

impl AnimationEffect for Blur {
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
            // The noise texture is acquired once per instance.
            if self.noise_brush.is_some() {
                return Ok(());
            }

            let brush = self.compositor.create_surface_brush();
            let surface = self
                .loader
                .load_from_uri(NOISE_TEXTURE_URI)
                .await
                .map_err(|source| EffectError::AssetLoad {
                    uri: NOISE_TEXTURE_URI.to_string(),
                    source,
                })?;
            brush.set_surface(surface);
            // Native resolution; the compositor tiles or clips the noise.
            brush.set_stretch(Stretch::None);
            self.noise_brush = Some(brush);
            Ok(())
        })
    }

    fn apply_effect(&mut self) -> Result<Vec<String>, EffectError> {
        let noise_brush = self.noise_brush.as_ref().ok_or(EffectError::NotReady)?;

        let gaussian_blur = EffectNode::GaussianBlur(GaussianBlurEffect {
            name: self.effect_name().to_string(),
            blur_amount: 0.0,
            optimization: EffectOptimization::Balanced,
            border_mode: BorderMode::Hard,
            source: Box::new(EffectNode::SourceParameter(SourceParameter::new(
                BACKDROP_PARAMETER,
            ))),
        });

        let final_effect = EffectNode::Blend(BlendEffect {
            foreground: Box::new(EffectNode::SourceParameter(SourceParameter::new(
                NOISE_PARAMETER,
            ))),
            background: Box::new(gaussian_blur),
            mode: BlendMode::Screen,
        });

        let property_to_change = format!("{}.BlurAmount", self.effect_name());
        let properties_to_animate = vec![property_to_change];

        let effect_brush = self
            .compositor
            .create_effect_factory(final_effect, properties_to_animate.clone())?
            .create_brush();
        effect_brush.set_source_parameter(
            NOISE_PARAMETER,
            SourceBinding::Surface(noise_brush.clone()),
        )?;
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
