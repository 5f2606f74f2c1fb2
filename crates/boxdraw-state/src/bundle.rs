// Author: Dustin Pilgrim
// License: MIT

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Saved state as handed between a component and the host's state container.
///
/// Only `Bundle` is understood by the box view; anything else belongs to
/// whoever produced it and is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Parcel {
    #[default]
    Empty,
    Raw(Vec<u8>),
    Bundle(Bundle),
}

impl Parcel {
    pub fn as_bundle(&self) -> Option<&Bundle> {
        match self {
            Parcel::Bundle(b) => Some(b),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    FloatArray(Vec<f32>),
    Int(i32),
    Parcel(Box<Parcel>),
}

/// Flat string-keyed map. Keys are kept sorted so encoded state is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    entries: BTreeMap<String, Value>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn put(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn put_float_array(&mut self, key: impl Into<String>, values: Vec<f32>) {
        self.put(key, Value::FloatArray(values));
    }

    pub fn get_float_array(&self, key: &str) -> Option<&[f32]> {
        match self.get(key) {
            Some(Value::FloatArray(v)) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn put_int(&mut self, key: impl Into<String>, value: i32) {
        self.put(key, Value::Int(value));
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.get(key) {
            Some(Value::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn put_parcel(&mut self, key: impl Into<String>, parcel: Parcel) {
        self.put(key, Value::Parcel(Box::new(parcel)));
    }

    pub fn get_parcel(&self, key: &str) -> Option<&Parcel> {
        match self.get(key) {
            Some(Value::Parcel(p)) => Some(p.as_ref()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_getters_ignore_other_types() {
        let mut b = Bundle::new();
        b.put_int("n", 3);
        b.put_float_array("pts", vec![1.0, 2.0]);

        assert_eq!(b.get_int("n"), Some(3));
        assert_eq!(b.get_float_array("n"), None);
        assert_eq!(b.get_float_array("pts"), Some(&[1.0, 2.0][..]));
        assert_eq!(b.get_parcel("pts"), None);
        assert!(!b.contains_key("missing"));
    }

    #[test]
    fn nested_parcel_is_kept_as_is() {
        let mut b = Bundle::new();
        b.put_parcel("parent", Parcel::Raw(vec![1, 2, 3]));
        assert_eq!(b.get_parcel("parent"), Some(&Parcel::Raw(vec![1, 2, 3])));
    }

    #[test]
    fn put_overwrites() {
        let mut b = Bundle::new();
        b.put_int("k", 1);
        b.put_int("k", 2);
        assert_eq!(b.len(), 1);
        assert_eq!(b.get_int("k"), Some(2));
    }
}
