//! Tree Collector
//!
//! Directory traversal, README loading, and ordered section-map
//! construction. See [`TreeCollector`] for the entry point.

pub mod diagnostics;
pub mod readme;
pub mod tree;
pub mod walker;

pub use diagnostics::Warning;
pub use tree::TreeCollector;
pub use walker::DirWalker;
