use super::error::CompositionError;

/// Quality/performance hint for blur evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectOptimization {
    Speed,
    Balanced,
    Quality,
}

/// How a blur treats pixels at the edge of its input. `Hard` leaves edges
/// unextended; `Soft` feathers them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderMode {
    Soft,
    Hard,
}

/// Compositing formula for a blend node. Evaluation belongs to the
/// compositor; the crate only names the formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Multiply,
    Screen,
    Darken,
    Lighten,
    Overlay,
}

/// Named placeholder for an input bound after factory compilation.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceParameter {
    pub name: String,
}

impl SourceParameter {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GaussianBlurEffect {
    pub name: String,
    pub blur_amount: f32,
    pub optimization: EffectOptimization,
    pub border_mode: BorderMode,
    pub source: Box<EffectNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlendEffect {
    pub foreground: Box<EffectNode>,
    pub background: Box<EffectNode>,
    pub mode: BlendMode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SaturationEffect {
    pub name: String,
    pub saturation: f32,
    pub source: Box<EffectNode>,
}

/// One node of a composition effect graph.
///
/// A graph is a tree of processing nodes with `SourceParameter` leaves;
/// the compositor evaluates it into a rendered brush. Only named nodes
/// expose animatable properties.
#[derive(Clone, Debug, PartialEq)]
pub enum EffectNode {
    GaussianBlur(GaussianBlurEffect),
    Blend(BlendEffect),
    Saturation(SaturationEffect),
    SourceParameter(SourceParameter),
}

impl EffectNode {
    /// The node's name, if its kind carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            EffectNode::GaussianBlur(e) => Some(&e.name),
            EffectNode::Saturation(e) => Some(&e.name),
            EffectNode::Blend(_) | EffectNode::SourceParameter(_) => None,
        }
    }

    /// True when `property` of this node kind may be driven by a timeline
    /// animation.
    pub fn is_animatable(&self, property: &str) -> bool {
        match self {
            EffectNode::GaussianBlur(_) => property == "BlurAmount",
            EffectNode::Saturation(_) => property == "Saturation",
            EffectNode::Blend(_) | EffectNode::SourceParameter(_) => false,
        }
    }

    fn children(&self) -> Vec<&EffectNode> {
        match self {
            EffectNode::GaussianBlur(e) => vec![&e.source],
            EffectNode::Blend(e) => vec![&e.foreground, &e.background],
            EffectNode::Saturation(e) => vec![&e.source],
            EffectNode::SourceParameter(_) => Vec::new(),
        }
    }

    /// Names of every `SourceParameter` leaf, in graph order.
    pub fn source_parameters(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_source_parameters(&mut names);
        names
    }

    fn collect_source_parameters<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let EffectNode::SourceParameter(parameter) = self {
            names.push(&parameter.name);
        }
        for child in self.children() {
            child.collect_source_parameters(names);
        }
    }

    fn find_named(&self, name: &str) -> Vec<&EffectNode> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a EffectNode>) {
        if self.name() == Some(name) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_named(name, found);
        }
    }
}

/// Parsed `"Node.Property"` animatable path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyPath {
    pub node: String,
    pub property: String,
}

impl PropertyPath {
    /// Splits `"Node.Property"`; both halves must be non-empty and the
    /// property half must not contain further dots.
    pub fn parse(path: &str) -> Result<Self, CompositionError> {
        match path.split_once('.') {
            Some((node, property))
                if !node.is_empty() && !property.is_empty() && !property.contains('.') =>
            {
                Ok(Self {
                    node: node.to_string(),
                    property: property.to_string(),
                })
            }
            _ => Err(CompositionError::MalformedPropertyPath(path.to_string())),
        }
    }
}

/// Checks every declared animatable path against the graph.
///
/// Rejects malformed paths, references to unknown or duplicated node
/// names, and properties the referenced node kind cannot animate. The
/// real compositor fails factory compilation the same way.
pub fn validate_animatable_paths(
    graph: &EffectNode,
    paths: &[String],
) -> Result<(), CompositionError> {
    for path in paths {
        let parsed = PropertyPath::parse(path)?;
        let nodes = graph.find_named(&parsed.node);
        match nodes.as_slice() {
            [] => {
                return Err(CompositionError::UnknownEffectNode {
                    path: path.clone(),
                    node: parsed.node,
                })
            }
            [node] => {
                if !node.is_animatable(&parsed.property) {
                    return Err(CompositionError::NotAnimatable {
                        node: parsed.node,
                        property: parsed.property,
                    });
                }
            }
            _ => return Err(CompositionError::DuplicateNodeName(parsed.node)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn backdrop_parameter() -> EffectNode {
        EffectNode::SourceParameter(SourceParameter::new("source"))
    }

    fn blur_node(name: &str) -> EffectNode {
        EffectNode::GaussianBlur(GaussianBlurEffect {
            name: name.to_string(),
            blur_amount: 0.0,
            optimization: EffectOptimization::Balanced,
            border_mode: BorderMode::Hard,
            source: Box::new(backdrop_parameter()),
        })
    }

    fn blur_under_noise() -> EffectNode {
        EffectNode::Blend(BlendEffect {
            foreground: Box::new(EffectNode::SourceParameter(SourceParameter::new(
                "NoiseImage",
            ))),
            background: Box::new(blur_node("Blur")),
            mode: BlendMode::Screen,
        })
    }

    // ── Graph queries ────────────────────────────────────────────────

    #[test]
    fn test_source_parameters_in_graph_order() {
        assert_eq!(
            blur_under_noise().source_parameters(),
            vec!["NoiseImage", "source"]
        );
    }

    #[test]
    fn test_name_only_on_named_kinds() {
        assert_eq!(blur_node("Blur").name(), Some("Blur"));
        assert_eq!(blur_under_noise().name(), None);
        assert_eq!(backdrop_parameter().name(), None);
    }

    #[test]
    fn test_animatable_properties_per_kind() {
        assert!(blur_node("Blur").is_animatable("BlurAmount"));
        assert!(!blur_node("Blur").is_animatable("Optimization"));
        assert!(!blur_under_noise().is_animatable("Mode"));
        let saturation = EffectNode::Saturation(SaturationEffect {
            name: "Saturation".to_string(),
            saturation: 1.0,
            source: Box::new(backdrop_parameter()),
        });
        assert!(saturation.is_animatable("Saturation"));
        assert!(!saturation.is_animatable("BlurAmount"));
    }

    // ── Property paths ───────────────────────────────────────────────

    #[test]
    fn test_parse_valid_path() {
        let parsed = PropertyPath::parse("Blur.BlurAmount").unwrap();
        assert_eq!(parsed.node, "Blur");
        assert_eq!(parsed.property, "BlurAmount");
    }

    #[rstest]
    #[case::no_dot("Blur")]
    #[case::empty("")]
    #[case::empty_node(".BlurAmount")]
    #[case::empty_property("Blur.")]
    #[case::nested_property("Blur.Amount.Value")]
    fn test_parse_malformed_path(#[case] path: &str) {
        assert_eq!(
            PropertyPath::parse(path),
            Err(CompositionError::MalformedPropertyPath(path.to_string()))
        );
    }

    // ── Validation ───────────────────────────────────────────────────

    #[test]
    fn test_validate_accepts_declared_path() {
        let graph = blur_under_noise();
        let paths = vec!["Blur.BlurAmount".to_string()];
        assert!(validate_animatable_paths(&graph, &paths).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_node() {
        let graph = blur_under_noise();
        let paths = vec!["Frost.BlurAmount".to_string()];
        assert_eq!(
            validate_animatable_paths(&graph, &paths),
            Err(CompositionError::UnknownEffectNode {
                path: "Frost.BlurAmount".to_string(),
                node: "Frost".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_animatable_property() {
        let graph = blur_under_noise();
        let paths = vec!["Blur.BorderMode".to_string()];
        assert_eq!(
            validate_animatable_paths(&graph, &paths),
            Err(CompositionError::NotAnimatable {
                node: "Blur".to_string(),
                property: "BorderMode".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_node_names() {
        let graph = EffectNode::Blend(BlendEffect {
            foreground: Box::new(blur_node("Blur")),
            background: Box::new(blur_node("Blur")),
            mode: BlendMode::Screen,
        });
        let paths = vec!["Blur.BlurAmount".to_string()];
        assert_eq!(
            validate_animatable_paths(&graph, &paths),
            Err(CompositionError::DuplicateNodeName("Blur".to_string()))
        );
    }

    #[test]
    fn test_validate_empty_declaration_is_ok() {
        let graph = blur_under_noise();
        assert!(validate_animatable_paths(&graph, &[]).is_ok());
    }
}
