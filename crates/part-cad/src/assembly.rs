//! Named placement trees of solids.
//!
//! truck has no assembly type, so this is the thinnest tree that can hold
//! located solids and hand them back positioned.

use std::collections::BTreeMap;

use truck_modeling::topology::Solid;
use truck_modeling::{Matrix4, SquareMatrix};

use crate::transform::{Location, Placeable};
use crate::types::CadError;

/// A named node holding an optional solid, its location relative to its
/// parent, and child nodes.
#[derive(Debug, Clone)]
pub struct Assembly {
    name: String,
    shape: Option<Solid>,
    location: Location,
    children: Vec<Assembly>,
}

impl Assembly {
    /// An empty node, used to group and position children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: None,
            location: Location::identity(),
            children: Vec::new(),
        }
    }

    pub fn with_shape(name: impl Into<String>, shape: Solid) -> Self {
        Self {
            shape: Some(shape),
            ..Self::new(name)
        }
    }

    pub fn located(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Attach `child`. Names must be unique across the whole tree.
    pub fn add(&mut self, child: Assembly) -> Result<&mut Self, CadError> {
        let existing = self.objects();
        if let Some(name) = child.objects().into_keys().find(|n| existing.contains_key(n)) {
            return Err(CadError::DuplicateComponent {
                name: name.to_string(),
            });
        }
        self.children.push(child);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> Option<&Solid> {
        self.shape.as_ref()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn children(&self) -> &[Assembly] {
        &self.children
    }

    /// Every node in this subtree, by name, including this one.
    pub fn objects(&self) -> BTreeMap<&str, &Assembly> {
        let mut out = BTreeMap::new();
        self.collect_objects(&mut out);
        out
    }

    fn collect_objects<'a>(&'a self, out: &mut BTreeMap<&'a str, &'a Assembly>) {
        out.insert(self.name.as_str(), self);
        for child in &self.children {
            child.collect_objects(out);
        }
    }

    /// The solids of this subtree, with this node's location applied and each
    /// child's location composed under its parent's. Depth-first, own shape first.
    pub fn to_compound(&self) -> Vec<Solid> {
        let mut out = Vec::new();
        self.collect_solids(&Matrix4::identity(), &mut out);
        out
    }

    fn collect_solids(&self, parent: &Matrix4, out: &mut Vec<Solid>) {
        let placed = *parent * self.location.matrix();
        if let Some(shape) = &self.shape {
            out.push(shape.transformed_by(&placed));
        }
        for child in &self.children {
            child.collect_solids(&placed, out);
        }
    }
}

/// Get a named component out of an assembly, positioned.
///
/// Useful when the assembly is used to place components and a later step of
/// the model needs the placed geometry. Returns the first solid of the named
/// node's compound.
pub fn get_positioned_component(assembly: &Assembly, name: &str) -> Result<Solid, CadError> {
    let objects = assembly.objects();
    let node = objects.get(name).ok_or_else(|| CadError::ComponentNotFound {
        name: name.to_string(),
    })?;
    node.to_compound()
        .into_iter()
        .next()
        .ok_or_else(|| CadError::EmptyComponent {
            name: name.to_string(),
        })
}
