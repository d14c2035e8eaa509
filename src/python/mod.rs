//! Python bindings for the fraction-kitchen engine.
//!
//! Lets a Python front end (a notebook, a web handler) drive the game.
//!
//! # Quick Start
//!
//! ```python
//! import fraction_kitchen as fk
//!
//! session = fk.KitchenSession(seed=42)
//! print(session.order_text)          # Customer wants: 3/8 of a cake.
//!
//! session.add("cake", "3/8")
//! verdict = session.serve()
//! print(verdict.success, verdict)
//! ```

use pyo3::prelude::*;

mod py_fraction;
mod py_session;

pub use py_fraction::*;
pub use py_session::*;

/// fraction_kitchen: fraction arithmetic and order matching.
#[pymodule]
fn fraction_kitchen(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFraction>()?;
    m.add_class::<PyEvaluation>()?;
    m.add_class::<PyKitchenSession>()?;

    Ok(())
}
