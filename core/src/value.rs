//! Runtime value model for structural comparison.
//!
//! This module defines the intermediate representation (IR) handed to the
//! equivalency engine:
//! - [`Value`]: A tagged runtime value (scalar, sequence, map, or N-rank array)
//! - [`NdArray`]: A rectangular multi-dimensional array stored in row-major order
//! - [`ValueKind`]: The runtime-type tag used in failure reports

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A runtime-typed value under comparison.
///
/// Comparands enter the engine as `Value`s; the step pipeline dispatches on
/// the variant tag rather than on static types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// A rank-1 linear collection.
    Seq(Vec<Value>),
    /// An object with named members, keyed deterministically.
    Map(BTreeMap<String, Value>),
    /// A rectangular N-rank array.
    Array(NdArray),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Seq(_) => ValueKind::Seq,
            Value::Map(_) => ValueKind::Map,
            Value::Array(_) => ValueKind::Array,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "<absent>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Seq(items) => write!(f, "a sequence of {} item(s)", items.len()),
            Value::Map(members) => write!(f, "a map of {} member(s)", members.len()),
            Value::Array(array) => write!(f, "a {} array", format_shape(array.shape())),
        }
    }
}

/// The runtime-type tag of a [`Value`], used in failure reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Text,
    Seq,
    Map,
    Array,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Seq => "sequence",
            ValueKind::Map => "map",
            ValueKind::Array => "array",
        };
        write!(f, "{name}")
    }
}

/// A rectangular multi-dimensional array.
///
/// # Invariants
///
/// `elements.len()` equals the product of `shape`; elements are stored in
/// row-major order (last dimension varies fastest). Both are enforced by
/// [`NdArray::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdArray {
    shape: Vec<usize>,
    elements: Vec<Value>,
}

impl NdArray {
    /// Build an array from per-dimension lengths and row-major elements.
    pub fn new(shape: Vec<usize>, elements: Vec<Value>) -> Result<NdArray, ArrayShapeError> {
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &len| acc.checked_mul(len))
            .ok_or_else(|| ArrayShapeError::ShapeOverflow {
                shape: shape.clone(),
            })?;
        if elements.len() != expected {
            return Err(ArrayShapeError::ElementCountMismatch {
                shape,
                expected,
                actual: elements.len(),
            });
        }
        Ok(NdArray { shape, elements })
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Per-dimension lengths, outermost first.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total number of elements (the product of the shape).
    pub fn total_len(&self) -> usize {
        self.elements.len()
    }

    /// The elements in row-major order.
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Fetch the element at an index tuple.
    ///
    /// Returns `None` when the tuple's arity differs from the rank or any
    /// coordinate is out of bounds.
    pub fn get(&self, indices: &[usize]) -> Option<&Value> {
        if indices.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0usize;
        for (&idx, &len) in indices.iter().zip(&self.shape) {
            if idx >= len {
                return None;
            }
            offset = offset * len + idx;
        }
        self.elements.get(offset)
    }
}

fn format_shape(shape: &[usize]) -> String {
    if shape.is_empty() {
        return "0-dimensional".to_string();
    }
    shape
        .iter()
        .map(|len| len.to_string())
        .collect::<Vec<_>>()
        .join("x")
}

/// Errors from [`NdArray`] construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayShapeError {
    #[error("element count {actual} does not match shape {shape:?} (expected {expected})")]
    ElementCountMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },
    #[error("shape {shape:?} overflows the addressable element count")]
    ShapeOverflow { shape: Vec<usize> },
}
