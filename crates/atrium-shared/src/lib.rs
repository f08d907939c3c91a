//! # atrium-shared
//!
//! Domain vocabulary shared by every Atrium crate: fixed application
//! constants, the role model, and the label/icon lookup tables used by all
//! renderers.  This crate deliberately has no I/O.

pub mod constants;
pub mod labels;
pub mod types;

pub use types::{DoubtStatus, Role};
