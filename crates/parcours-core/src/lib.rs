//! Parcours Core Library
//!
//! Graph model, traversal and path-finding engines for the parcours
//! toolkit.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
