use crate::error_handling::*;

use std::collections::HashMap;

/// Values assigned during a session, by case-sensitive name.
#[derive(Debug, Default, Clone)]
pub struct Variables {
    values: HashMap<String, f64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn lookup(&self, name: &str) -> Result<f64> {
        self.get(name).ok_or_else(|| CalcError::undefined(name.into()))
    }
}
