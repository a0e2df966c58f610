//! Parameter model for the virtual lab experiments.
//!
//! `ParamSpec` is the static description of one slider (range, step, default).
//! `ParamStore` is the mutable set of current values for one experiment page.
//! `ExperimentKind` ties each experiment to its parameter table, and
//! `Readout` is how derived quantities are presented.

pub mod error;
pub mod experiment;
pub mod param;
pub mod readout;
pub mod store;

pub use error::{ModelError, Result};
pub use experiment::ExperimentKind;
pub use param::{ParamSpec, ValueFormat};
pub use readout::{Quantity, Readout};
pub use store::ParamStore;
