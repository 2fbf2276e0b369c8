use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::assets::domain::surface::Surface;

use super::effect_graph::{validate_animatable_paths, EffectNode};
use super::error::CompositionError;

/// How a surface brush maps its surface onto the area it paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stretch {
    /// Native resolution; the compositor tiles or clips as needed.
    None,
    Fill,
    Uniform,
    UniformToFill,
}

struct SurfaceBrushState {
    surface: Option<Arc<Surface>>,
    stretch: Stretch,
}

/// Shared handle to a surface-backed brush.
///
/// Clones refer to the same underlying brush, matching the refcounted
/// handle semantics of compositor resources. Created empty with
/// `Stretch::Fill`, usually through a [`Compositor`](super::compositor::Compositor).
#[derive(Clone)]
pub struct SurfaceBrush {
    state: Arc<Mutex<SurfaceBrushState>>,
}

impl SurfaceBrush {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SurfaceBrushState {
                surface: None,
                stretch: Stretch::Fill,
            })),
        }
    }

    pub fn set_surface(&self, surface: Surface) {
        self.lock().surface = Some(Arc::new(surface));
    }

    pub fn surface(&self) -> Option<Arc<Surface>> {
        self.lock().surface.clone()
    }

    pub fn set_stretch(&self, stretch: Stretch) {
        self.lock().stretch = stretch;
    }

    pub fn stretch(&self) -> Stretch {
        self.lock().stretch
    }

    /// True when `self` and `other` are handles to the same brush.
    pub fn ptr_eq(&self, other: &SurfaceBrush) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SurfaceBrushState> {
        self.state.lock().expect("surface brush state lock poisoned")
    }
}

impl Default for SurfaceBrush {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque handle to a live capture of the window backdrop.
///
/// The content behind it updates continuously; the crate never samples
/// it, only routes it into effect-brush bindings.
#[derive(Clone, Debug)]
pub struct BackdropBrush {
    identity: Arc<()>,
}

impl BackdropBrush {
    pub fn new() -> Self {
        Self {
            identity: Arc::new(()),
        }
    }

    /// True when `self` and `other` are handles to the same capture.
    pub fn ptr_eq(&self, other: &BackdropBrush) -> bool {
        Arc::ptr_eq(&self.identity, &other.identity)
    }
}

impl Default for BackdropBrush {
    fn default() -> Self {
        Self::new()
    }
}

/// A brush routed into a named effect input.
#[derive(Clone)]
pub enum SourceBinding {
    Surface(SurfaceBrush),
    Backdrop(BackdropBrush),
}

/// Compiled effect graph plus its declared animatable property paths.
///
/// Compilation validates the declarations against the graph once; every
/// brush the factory creates shares the compiled form.
pub struct EffectFactory {
    graph: Arc<EffectNode>,
    animatable_properties: Arc<[String]>,
    parameter_names: Arc<HashSet<String>>,
}

impl EffectFactory {
    pub fn compile(
        graph: EffectNode,
        animatable_properties: Vec<String>,
    ) -> Result<Self, CompositionError> {
        validate_animatable_paths(&graph, &animatable_properties)?;
        let parameter_names = graph
            .source_parameters()
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok(Self {
            graph: Arc::new(graph),
            animatable_properties: animatable_properties.into(),
            parameter_names: Arc::new(parameter_names),
        })
    }

    /// Instantiates a new brush from the compiled graph. Each call
    /// produces a distinct instance with an empty binding table.
    pub fn create_brush(&self) -> EffectBrush {
        EffectBrush {
            graph: Arc::clone(&self.graph),
            animatable_properties: Arc::clone(&self.animatable_properties),
            parameter_names: Arc::clone(&self.parameter_names),
            bindings: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn animatable_properties(&self) -> &[String] {
        &self.animatable_properties
    }
}

/// Instantiated effect graph with a named-input binding table.
///
/// Clones refer to the same instance; distinct `create_brush` calls
/// produce distinct instances over the same compiled graph.
#[derive(Clone)]
pub struct EffectBrush {
    graph: Arc<EffectNode>,
    animatable_properties: Arc<[String]>,
    parameter_names: Arc<HashSet<String>>,
    bindings: Arc<Mutex<HashMap<String, SourceBinding>>>,
}

impl EffectBrush {
    /// Routes `binding` into the graph's `name` placeholder.
    pub fn set_source_parameter(
        &self,
        name: &str,
        binding: SourceBinding,
    ) -> Result<(), CompositionError> {
        if !self.parameter_names.contains(name) {
            return Err(CompositionError::UnknownSourceParameter(name.to_string()));
        }
        self.lock_bindings().insert(name.to_string(), binding);
        Ok(())
    }

    pub fn source_parameter(&self, name: &str) -> Option<SourceBinding> {
        self.lock_bindings().get(name).cloned()
    }

    pub fn graph(&self) -> &EffectNode {
        &self.graph
    }

    pub fn animatable_properties(&self) -> &[String] {
        &self.animatable_properties
    }

    /// True when `self` and `other` are handles to the same instance.
    pub fn ptr_eq(&self, other: &EffectBrush) -> bool {
        Arc::ptr_eq(&self.bindings, &other.bindings)
    }

    fn lock_bindings(&self) -> std::sync::MutexGuard<'_, HashMap<String, SourceBinding>> {
        self.bindings.lock().expect("effect brush binding lock poisoned")
    }
}
