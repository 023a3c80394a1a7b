//! Batch plotting of GROMACS `.xvg` time series.
//!
//! ```text
//!  directory ─► driver::discover ─► data::loader ─► labels ─► render / app
//! ```

pub mod app;
pub mod color;
pub mod data;
pub mod driver;
pub mod error;
pub mod labels;
pub mod render;
pub mod rng;
pub mod ui;
