pub mod animation_effect;
pub mod blur_effect;
pub mod effect_registry;
pub mod saturation_effect;
