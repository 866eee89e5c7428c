//! Output generation for harvested articles.
//!
//! The only output at the moment is the aggregate JSON index ([`json`]),
//! written once at the end of a run.

pub mod json;
