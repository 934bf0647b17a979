//! HTTP backend that translates text through an external provider and
//! truncates text into short word-limited summaries.

pub mod config;
pub mod i18n;
pub mod page;
pub mod routes;
pub mod state;
pub mod summary;
pub mod translation;
