//! Languages offered by the translator UI.
//!
//! - `registry`: the fixed list of language codes and display names

mod registry;

pub use registry::{LanguageConfig, LanguageRegistry};
