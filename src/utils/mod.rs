//! Utility modules shared by the preview pipeline.
//!
//! `date` and `html` make up the formatter stage: pure functions that turn
//! extracted feed values into display-ready text.

pub mod date;
pub mod html;
pub mod mime;
pub mod url;
