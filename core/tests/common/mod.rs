#![allow(dead_code)]

use deep_equiv::{NdArray, Value};
use std::collections::BTreeMap;

pub fn num(v: f64) -> Value {
    Value::Number(v)
}

pub fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

/// Build an N-rank array of numbers from a shape and row-major values.
pub fn nd(shape: &[usize], values: &[f64]) -> Value {
    Value::Array(
        NdArray::new(
            shape.to_vec(),
            values.iter().copied().map(Value::Number).collect(),
        )
        .expect("shape matches element count"),
    )
}

/// Build an N-rank array holding arbitrary values.
pub fn nd_values(shape: &[usize], values: Vec<Value>) -> Value {
    Value::Array(NdArray::new(shape.to_vec(), values).expect("shape matches element count"))
}

pub fn seq(values: &[f64]) -> Value {
    Value::Seq(values.iter().copied().map(Value::Number).collect())
}

pub fn map(entries: Vec<(&str, Value)>) -> Value {
    Value::Map(
        entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect::<BTreeMap<_, _>>(),
    )
}
