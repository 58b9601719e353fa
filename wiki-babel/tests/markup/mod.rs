//! Markup formatting tests
//!
//! Whole documents through the default block registry, plus properties
//! that must hold for any input.

mod documents;
mod links;
mod properties;
