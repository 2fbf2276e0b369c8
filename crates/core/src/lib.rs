//! Composition effect-graph adapters for backdrop animation.
//!
//! Models the declarative side of a compositor effect pipeline: effect
//! graphs (blur, blend, saturation nodes), the brush handles a compositor
//! realizes them into, and the animation-effect adapters that wire a graph
//! over the live window backdrop and expose its animatable parameters to a
//! host timeline. Rendering stays with the host compositor; every
//! collaborator (compositor, asset loader, capability query) is an
//! injected trait so hosts and tests can substitute their own.

pub mod assets;
pub mod composition;
pub mod effects;
pub mod shared;
