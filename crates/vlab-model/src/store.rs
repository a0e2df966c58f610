//! Parameter Store: current slider values for one experiment page.

use tracing::debug;

use crate::{ModelError, ParamSpec, Result};

/// Mutable parameter values, always inside their declared ranges.
///
/// Values are kept in the same order as the parameter table. There is no history
/// and no undo; `reset` goes back to the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamStore {
    specs: &'static [ParamSpec],
    values: Vec<f64>,
}

impl ParamStore {
    /// Store initialised to each parameter's default.
    pub fn new(specs: &'static [ParamSpec]) -> Self {
        Self {
            specs,
            values: specs.iter().map(|s| s.clamp(s.default)).collect(),
        }
    }

    pub fn specs(&self) -> &'static [ParamSpec] {
        self.specs
    }

    fn position(&self, key: &str) -> Result<usize> {
        self.specs
            .iter()
            .position(|s| s.key == key)
            .ok_or_else(|| ModelError::UnknownParameter(key.to_string()))
    }

    pub fn spec(&self, key: &str) -> Result<&'static ParamSpec> {
        let specs = self.specs;
        self.position(key).map(|i| &specs[i])
    }

    /// Current value of `key`.
    pub fn get(&self, key: &str) -> Result<f64> {
        self.position(key).map(|i| self.values[i])
    }

    /// Current value of `key`, `0.0` for an unknown key.
    ///
    /// Experiments read their own keys through this, so the key always exists.
    pub fn value(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    /// Set `key`, clamping into range. Returns the value actually stored.
    ///
    /// Non-finite input is rejected and the previous value kept.
    pub fn set(&mut self, key: &str, value: f64) -> Result<f64> {
        let i = self.position(key)?;
        if !value.is_finite() {
            return Err(ModelError::NonFinite {
                key: key.to_string(),
                value,
            });
        }
        let clamped = self.specs[i].clamp(value);
        if clamped != value {
            debug!(key, value, clamped, "parameter clamped");
        }
        self.values[i] = clamped;
        Ok(clamped)
    }

    /// Restore every parameter to its default.
    pub fn reset(&mut self) {
        for (v, s) in self.values.iter_mut().zip(self.specs) {
            *v = s.clamp(s.default);
        }
    }

    /// `(spec, value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static ParamSpec, f64)> + '_ {
        self.specs.iter().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueFormat;

    static SPECS: [ParamSpec; 2] = [
        ParamSpec {
            key: "length",
            label: "Length",
            unit: "m",
            min: 2.0,
            max: 8.0,
            step: 1.0,
            default: 4.0,
            value_format: ValueFormat::Stepped,
        },
        ParamSpec {
            key: "amplitude",
            label: "Amplitude",
            unit: "rad",
            min: 0.05,
            max: 0.8,
            step: 0.01,
            default: 0.3,
            value_format: ValueFormat::Stepped,
        },
    ];

    #[test]
    fn test_defaults() {
        let store = ParamStore::new(&SPECS);
        assert_eq!(store.get("length").unwrap(), 4.0);
        assert_eq!(store.get("amplitude").unwrap(), 0.3);
    }

    #[test]
    fn test_set_clamps_into_range() {
        let mut store = ParamStore::new(&SPECS);
        assert_eq!(store.set("length", 100.0).unwrap(), 8.0);
        assert_eq!(store.set("length", -3.0).unwrap(), 2.0);
        assert_eq!(store.set("amplitude", 0.5).unwrap(), 0.5);
        for (spec, v) in store.iter() {
            assert!(spec.contains(v));
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut store = ParamStore::new(&SPECS);
        store.set("length", 6.0).unwrap();
        let err = store.set("length", f64::NAN).unwrap_err();
        assert!(matches!(err, ModelError::NonFinite { .. }));
        assert_eq!(store.get("length").unwrap(), 6.0);
    }

    #[test]
    fn test_unknown_key() {
        let mut store = ParamStore::new(&SPECS);
        assert_eq!(
            store.set("mass", 1.0),
            Err(ModelError::UnknownParameter("mass".into()))
        );
        assert!(store.get("mass").is_err());
    }

    #[test]
    fn test_reset() {
        let mut store = ParamStore::new(&SPECS);
        store.set("length", 7.0).unwrap();
        store.reset();
        assert_eq!(store.get("length").unwrap(), 4.0);
    }
}
