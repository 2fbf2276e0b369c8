use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::composition::domain::brush::EffectBrush;
use crate::composition::domain::error::CompositionError;

/// Failures in the effect lifecycle.
#[derive(Error, Debug)]
pub enum EffectError {
    /// `apply_effect` ran before a successful `on_create`.
    #[error("effect setup has not completed; await on_create before apply_effect")]
    NotReady,
    #[error("failed to load effect asset {uri}: {source}")]
    AssetLoad {
        uri: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("effect graph construction failed: {0}")]
    Composition(#[from] CompositionError),
    #[error("effect {name:?} is not supported on this platform")]
    Unsupported { name: String },
    #[error("no effect named {name:?} is registered")]
    UnknownEffect { name: String },
}

/// A visual effect adapter: builds a composition effect graph over the
/// window backdrop and reports which graph properties the host timeline
/// may animate.
///
/// Lifecycle: `on_create` runs to completion exactly once before the
/// first `apply_effect`; `apply_effect` may then run repeatedly, each
/// call wiring a fresh brush. Hosts hold adapters as
/// `Box<dyn AnimationEffect>` keyed by `effect_name` and are expected to
/// serialize calls on one instance.
pub trait AnimationEffect: Send {
    /// Whether the platform's composition feature set supports this
    /// effect. Pure query, independent of lifecycle state.
    fn is_supported(&self) -> bool;

    /// Constant identifier, also the namespace of the effect's animatable
    /// property paths.
    fn effect_name(&self) -> &str;

    /// Acquires the effect's scoped resources. The returned future must
    /// complete successfully before `apply_effect` is invoked; a second
    /// call after success is a no-op.
    fn on_create(&mut self) -> BoxFuture<'_, Result<(), EffectError>>;

    /// Builds and stores a fresh effect brush, returning the ordered
    /// animatable property paths.
    fn apply_effect(&mut self) -> Result<Vec<String>, EffectError>;

    /// The brush produced by the last successful `apply_effect`.
    fn effect_brush(&self) -> Option<&EffectBrush>;
}
