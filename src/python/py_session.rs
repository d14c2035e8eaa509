//! Session bindings for Python.

use pyo3::prelude::*;

use crate::core::{KitchenConfig, KitchenError};
use crate::session::{EvaluationResult, ItemStatus, OrderSession};

use super::py_fraction::PyFraction;

fn to_py_err(e: KitchenError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// Python wrapper for an evaluation verdict.
#[pyclass(name = "Evaluation")]
#[derive(Clone, Debug)]
pub struct PyEvaluation(pub EvaluationResult);

#[pymethods]
impl PyEvaluation {
    #[getter]
    fn success(&self) -> bool {
        self.0.is_success()
    }

    /// Items the customer ordered but were not served.
    #[getter]
    fn missing(&self) -> Vec<String> {
        self.0.missing().map(|o| o.item.to_string()).collect()
    }

    /// (item, expected, served) for every wrong portion.
    #[getter]
    fn mismatched(&self) -> Vec<(String, PyFraction, PyFraction)> {
        self.0
            .outcomes
            .iter()
            .filter_map(|o| match o.status {
                ItemStatus::Mismatched { served } => {
                    Some((o.item.to_string(), PyFraction(o.expected), PyFraction(served)))
                }
                _ => None,
            })
            .collect()
    }

    /// Items served that were never ordered.
    #[getter]
    fn extras(&self) -> Vec<String> {
        self.0.extras.iter().map(|p| p.item.to_string()).collect()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Evaluation(success={})", self.0.is_success())
    }
}

/// Python wrapper for OrderSession.
///
/// The front end decides when to start the next round after a success;
/// `success_delay_ms` is the suggested pause.
#[pyclass(name = "KitchenSession")]
pub struct PyKitchenSession {
    session: OrderSession,
}

#[pymethods]
impl PyKitchenSession {
    /// Create a session.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible customers
    /// - config_toml: optional TOML config text; defaults otherwise
    #[new]
    #[pyo3(signature = (seed = 42, config_toml = None))]
    fn new(seed: u64, config_toml: Option<&str>) -> PyResult<Self> {
        let config = match config_toml {
            Some(source) => KitchenConfig::from_toml_str(source)
                .map_err(|e| to_py_err(e.into()))?,
            None => KitchenConfig::default(),
        };
        let session = OrderSession::new(config, seed).map_err(|e| to_py_err(e.into()))?;
        Ok(Self { session })
    }

    /// Start the next customer. Returns the order text.
    fn new_round(&mut self) -> String {
        self.session.new_round().to_string()
    }

    /// Apply a named cut preset. Returns the confirmation text.
    fn cut(&mut self, item: &str, preset: &str) -> PyResult<String> {
        self.session
            .apply_preset(item, preset)
            .map(|receipt| receipt.to_string())
            .map_err(to_py_err)
    }

    /// Add a typed fraction such as "3/8". Returns the confirmation text.
    fn add(&mut self, item: &str, text: &str) -> PyResult<String> {
        self.session
            .record_cut_text(item, text)
            .map(|receipt| receipt.to_string())
            .map_err(to_py_err)
    }

    /// Judge the serving.
    fn serve(&mut self) -> PyEvaluation {
        PyEvaluation(self.session.evaluate())
    }

    /// Empty the serving.
    fn clear(&mut self) {
        self.session.reset_serving();
    }

    /// Ordered items and their fractions.
    fn order(&self) -> Vec<(String, PyFraction)> {
        self.session
            .order()
            .iter()
            .map(|p| (p.item.to_string(), PyFraction(p.amount)))
            .collect()
    }

    #[getter]
    fn order_text(&self) -> String {
        self.session.order().to_string()
    }

    #[getter]
    fn serving_text(&self) -> String {
        self.session.serving().to_string()
    }

    #[getter]
    fn round(&self) -> u64 {
        self.session.round()
    }

    #[getter]
    fn success_delay_ms(&self) -> u64 {
        self.session.config().success_delay_ms
    }

    fn __repr__(&self) -> String {
        format!(
            "KitchenSession(round={}, phase={:?})",
            self.session.round(),
            self.session.phase()
        )
    }
}
