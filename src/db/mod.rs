//! Template storage
//!
//! This module holds the in-process template store and its repositories.

pub mod repositories;
pub mod store;

pub use store::TemplateStore;
