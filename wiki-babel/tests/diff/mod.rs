//! Diff extraction tests
//!
//! Revision comparisons over lines, and properties of the edit scripts.

mod extract;
mod properties;
