//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, db::TemplateStore, services::EmailSender};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Template store
    pub store: TemplateStore,

    /// Transport for outgoing notifications
    pub email: Arc<dyn EmailSender>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: TemplateStore, email: Arc<dyn EmailSender>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                email,
                config,
            }),
        }
    }

    /// Get a reference to the template store
    pub fn store(&self) -> &TemplateStore {
        &self.inner.store
    }

    /// Get a reference to the email sender
    pub fn email(&self) -> &dyn EmailSender {
        self.inner.email.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
