//! Repositories
//!
//! Repositories handle all direct store interactions.

pub mod template_repo;

pub use template_repo::TemplateRepository;
