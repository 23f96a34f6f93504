//! Layout Catalog
//!
//! Named mounting layouts (one per motherboard form factor). Each layout has a
//! footprint size and a list of hole positions measured from the footprint's
//! rear-panel corner.
//!
//! The catalog is populated once from a record set of the form
//! `{ "<name>": { "size": [w, h], "holes": [[x, y], ...] } }` and is read-only
//! afterwards.

use crate::error::{LayoutError, Result};
use crate::types::Point2D;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Form factors shipped with the crate.
const BUILTIN_LAYOUTS: &str = include_str!("../layouts/motherboard_layouts.json");

/// Footprint and mounting holes for one mounting standard.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Footprint width and height (mm)
    pub size: Point2D,
    /// Hole positions relative to the rear-panel corner (mm)
    pub holes: Vec<Point2D>,
}

impl Layout {
    pub fn new(size: Point2D, holes: Vec<Point2D>) -> Self {
        Self { size, holes }
    }

    /// Parse one catalog record.
    ///
    /// The record must be an object with a two-number `size` array and a
    /// `holes` array of two-number arrays. Nothing else is checked.
    pub fn from_record(name: &str, record: &Value) -> Result<Self> {
        let fields = record
            .as_object()
            .ok_or_else(|| LayoutError::malformed(name, "record must be an object"))?;

        let size = fields
            .get("size")
            .ok_or_else(|| LayoutError::malformed(name, "missing 'size'"))?;
        let size = parse_pair(name, "size", size)?;

        let holes = fields
            .get("holes")
            .ok_or_else(|| LayoutError::malformed(name, "missing 'holes'"))?
            .as_array()
            .ok_or_else(|| LayoutError::malformed(name, "'holes' must be an array"))?
            .iter()
            .enumerate()
            .map(|(i, hole)| parse_pair(name, &format!("holes[{}]", i), hole))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { size, holes })
    }
}

fn parse_pair(name: &str, field: &str, value: &Value) -> Result<Point2D> {
    let items = value
        .as_array()
        .ok_or_else(|| LayoutError::malformed(name, format!("'{}' must be an array", field)))?;

    if items.len() != 2 {
        return Err(LayoutError::malformed(
            name,
            format!(
                "'{}' must have exactly two components, found {}",
                field,
                items.len()
            ),
        ));
    }

    let component = |i: usize| {
        items[i].as_f64().ok_or_else(|| {
            LayoutError::malformed(name, format!("'{}' component {} is not a number", field, i))
        })
    };

    Ok(Point2D::new(component(0)?, component(1)?))
}

/// Name to layout mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    layouts: BTreeMap<String, Layout>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from raw records. Fails on the first malformed record.
    pub fn from_records(records: &Map<String, Value>) -> Result<Self> {
        let mut catalog = Self::new();
        for (name, record) in records {
            let layout = Layout::from_record(name, record)?;
            debug!(
                "Loaded layout {} ({} holes, size {})",
                name,
                layout.holes.len(),
                layout.size
            );
            catalog.insert(name.clone(), layout);
        }
        Ok(catalog)
    }

    /// Parse a JSON document holding the record set.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let records = value.as_object().ok_or_else(|| {
            LayoutError::malformed("<root>", "expected an object of named layouts")
        })?;
        Self::from_records(records)
    }

    /// Load layout definitions from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading layout definitions from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        info!("Loaded {} layouts", catalog.len());
        Ok(catalog)
    }

    /// Catalog of the layouts bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_LAYOUTS)
    }

    /// Add or replace a layout.
    pub fn insert(&mut self, name: impl Into<String>, layout: Layout) {
        self.layouts.insert(name.into(), layout);
    }

    pub fn get(&self, name: &str) -> Option<&Layout> {
        self.layouts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.layouts.contains_key(name)
    }

    /// Layout names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.layouts.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Layout)> {
        self.layouts.iter().map(|(name, layout)| (name.as_str(), layout))
    }
}
