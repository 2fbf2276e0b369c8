use thiserror::Error;

/// Failures raised while compiling an effect graph into a factory or
/// binding sources on an instantiated brush.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    #[error("malformed animatable property path {0:?}: expected \"Node.Property\"")]
    MalformedPropertyPath(String),
    #[error("animatable property path {path:?} references unknown effect node {node:?}")]
    UnknownEffectNode { path: String, node: String },
    #[error("property {property:?} of effect node {node:?} is not animatable")]
    NotAnimatable { node: String, property: String },
    #[error("effect node name {0:?} appears more than once in the graph")]
    DuplicateNodeName(String),
    #[error("effect graph declares no source parameter named {0:?}")]
    UnknownSourceParameter(String),
}
