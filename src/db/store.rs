//! In-process template store

use std::collections::BTreeMap;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::NotificationTemplate;

/// Templates keyed by id, plus the id sequences for templates and their
/// child entries. Ids are never reused.
#[derive(Debug, Default)]
pub struct TemplateStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
pub(crate) struct StoreInner {
    pub templates: BTreeMap<i64, NotificationTemplate>,
    template_seq: i64,
    recipient_seq: i64,
    rule_seq: i64,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().await
    }
}

impl StoreInner {
    pub fn next_template_id(&mut self) -> i64 {
        self.template_seq += 1;
        self.template_seq
    }

    pub fn next_recipient_id(&mut self) -> i64 {
        self.recipient_seq += 1;
        self.recipient_seq
    }

    pub fn next_rule_id(&mut self) -> i64 {
        self.rule_seq += 1;
        self.rule_seq
    }
}
