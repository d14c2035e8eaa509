//! Fraction bindings for Python.

use pyo3::prelude::*;

use crate::fraction::{parse_fraction, Fraction};

/// Python wrapper for Fraction.
#[pyclass(name = "Fraction")]
#[derive(Clone, Debug)]
pub struct PyFraction(pub Fraction);

#[pymethods]
impl PyFraction {
    /// Create a fraction. Raises ValueError on a zero denominator.
    #[new]
    #[pyo3(signature = (numerator, denominator = 1))]
    fn new(numerator: u64, denominator: u64) -> PyResult<Self> {
        Fraction::new(numerator, denominator)
            .map(Self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// Parse "N/D" or "N".
    #[staticmethod]
    fn parse(text: &str) -> PyResult<Self> {
        parse_fraction(text)
            .map(Self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    #[getter]
    fn numerator(&self) -> u64 {
        self.0.numerator()
    }

    #[getter]
    fn denominator(&self) -> u64 {
        self.0.denominator()
    }

    fn simplify(&self) -> Self {
        Self(self.0.simplify())
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.0.equivalent(other.0)
    }

    fn __add__(&self, other: &Self) -> PyResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyOverflowError, _>(e.to_string()))
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Fraction({}, {})", self.0.numerator(), self.0.denominator())
    }

    /// Structural equality: Fraction(2, 4) != Fraction(1, 2).
    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
