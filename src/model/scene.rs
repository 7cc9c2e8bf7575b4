//! Viewer-space value types: vectors, camera poses and element selections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A point or direction in viewer space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }
}

/// Identifier of a model (fragment) loaded in the viewer.
pub type ModelId = String;

/// Index of an element inside a model.
pub type ElementIndex = u32;

/// A set of model elements, keyed by model.
///
/// A selection counts as empty only when it has no model keys at all; a
/// model listed with no elements still makes the selection non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    elements: BTreeMap<ModelId, Vec<ElementIndex>>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elements of a model. Indices already present are not repeated.
    pub fn insert(
        &mut self,
        model: impl Into<ModelId>,
        indices: impl IntoIterator<Item = ElementIndex>,
    ) {
        let entry = self.elements.entry(model.into()).or_default();
        for index in indices {
            if !entry.contains(&index) {
                entry.push(index);
            }
        }
    }

    /// Builder form of [`Selection::insert`].
    pub fn with(
        mut self,
        model: impl Into<ModelId>,
        indices: impl IntoIterator<Item = ElementIndex>,
    ) -> Self {
        self.insert(model, indices);
        self
    }

    /// Whether no model is referenced.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of models referenced.
    pub fn model_count(&self) -> usize {
        self.elements.len()
    }

    /// Total number of elements across all models.
    pub fn element_count(&self) -> usize {
        self.elements.values().map(Vec::len).sum()
    }

    /// Elements selected in a model.
    pub fn get(&self, model: &str) -> Option<&[ElementIndex]> {
        self.elements.get(model).map(Vec::as_slice)
    }

    /// Whether a specific element is selected.
    pub fn contains(&self, model: &str, index: ElementIndex) -> bool {
        self.get(model).is_some_and(|indices| indices.contains(&index))
    }

    /// Iterate over models and their elements in model order.
    pub fn iter(&self) -> impl Iterator<Item = (&ModelId, &[ElementIndex])> {
        self.elements.iter().map(|(model, indices)| (model, indices.as_slice()))
    }
}
