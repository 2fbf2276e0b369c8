use std::collections::HashMap;

use super::animation_effect::{AnimationEffect, EffectError};

/// Host-side collection of animation effects, keyed by effect name.
///
/// Registration is capability-dispatched: effects the platform cannot
/// support are refused up front, so the host never sequences setup for
/// them.
#[derive(Default)]
pub struct EffectRegistry {
    effects: HashMap<String, Box<dyn AnimationEffect>>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `effect` under its own name, replacing any previous entry.
    pub fn register(&mut self, effect: Box<dyn AnimationEffect>) -> Result<(), EffectError> {
        let name = effect.effect_name().to_string();
        if !effect.is_supported() {
            log::info!("Skipping effect {name}: not supported on this platform");
            return Err(EffectError::Unsupported { name });
        }
        log::info!("Registered effect {name}");
        self.effects.insert(name, effect);
        Ok(())
    }

    /// Runs `on_create` for every registered effect, stopping at the
    /// first failure.
    pub async fn create_all(&mut self) -> Result<(), EffectError> {
        for effect in self.effects.values_mut() {
            effect.on_create().await?;
        }
        Ok(())
    }

    /// Dispatches `apply_effect` to the named effect.
    pub fn apply(&mut self, name: &str) -> Result<Vec<String>, EffectError> {
        let effect = self
            .effects
            .get_mut(name)
            .ok_or_else(|| EffectError::UnknownEffect {
                name: name.to_string(),
            })?;
        effect.apply_effect()
    }

    pub fn get(&self, name: &str) -> Option<&dyn AnimationEffect> {
        self.effects.get(name).map(|effect| effect.as_ref())
    }

    /// Registered effect names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.effects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::domain::brush::EffectBrush;
    use futures_util::future::BoxFuture;

    // --- Stubs ---

    struct StubEffect {
        name: &'static str,
        supported: bool,
        created: bool,
    }

    impl StubEffect {
        fn new(name: &'static str, supported: bool) -> Self {
            Self {
                name,
                supported,
                created: false,
            }
        }
    }

    impl AnimationEffect for StubEffect {
        fn is_supported(&self) -> bool {
            self.supported
        }

        fn effect_name(&self) -> &str {
            self.name
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
            Ok(vec![format!("{}.Amount", self.name)])
        }

        fn effect_brush(&self) -> Option<&EffectBrush> {
            None
        }
    }

    #[test]
    fn test_register_refuses_unsupported_effect() {
        let mut registry = EffectRegistry::new();
        let result = registry.register(Box::new(StubEffect::new("Frost", false)));

        assert!(matches!(
            result,
            Err(EffectError::Unsupported { name }) if name == "Frost"
        ));
        assert!(registry.get("Frost").is_none());
    }

    #[test]
    fn test_register_keys_by_effect_name() {
        let mut registry = EffectRegistry::new();
        registry
            .register(Box::new(StubEffect::new("Frost", true)))
            .unwrap();
        registry
            .register(Box::new(StubEffect::new("Tint", true)))
            .unwrap();

        assert_eq!(registry.names(), vec!["Frost", "Tint"]);
        assert_eq!(registry.get("Frost").unwrap().effect_name(), "Frost");
    }

    #[test]
    fn test_create_all_prepares_every_effect() {
        let mut registry = EffectRegistry::new();
        registry
            .register(Box::new(StubEffect::new("Frost", true)))
            .unwrap();
        registry
            .register(Box::new(StubEffect::new("Tint", true)))
            .unwrap();

        pollster::block_on(registry.create_all()).unwrap();

        assert_eq!(registry.apply("Frost").unwrap(), vec!["Frost.Amount"]);
        assert_eq!(registry.apply("Tint").unwrap(), vec!["Tint.Amount"]);
    }

    #[test]
    fn test_apply_before_create_surfaces_not_ready() {
        let mut registry = EffectRegistry::new();
        registry
            .register(Box::new(StubEffect::new("Frost", true)))
            .unwrap();

        assert!(matches!(registry.apply("Frost"), Err(EffectError::NotReady)));
    }

    #[test]
    fn test_apply_unknown_name_is_error() {
        let mut registry = EffectRegistry::new();
        assert!(matches!(
            registry.apply("Missing"),
            Err(EffectError::UnknownEffect { name }) if name == "Missing"
        ));
    }
}
