//! Template repository

use std::collections::HashSet;

use crate::{
    db::{store::StoreInner, TemplateStore},
    models::{NotificationTemplate, Recipient, RecipientDraft, RuleDraft, TemplateDraft, TemplateRule},
};

/// Repository for template store operations
pub struct TemplateRepository;

impl TemplateRepository {
    /// Create a new template; every child entry gets a fresh id
    pub async fn create(store: &TemplateStore, draft: TemplateDraft) -> NotificationTemplate {
        let mut inner = store.write().await;

        let id = inner.next_template_id();
        let recipients = assign_recipient_ids(&mut inner, draft.recipients, &HashSet::new());
        let rules = assign_rule_ids(&mut inner, draft.rules, &HashSet::new());

        let template = NotificationTemplate {
            id,
            title: draft.title,
            content: draft.content,
            recipients,
            rules,
        };
        inner.templates.insert(id, template.clone());

        template
    }

    /// Find template by ID
    pub async fn find_by_id(store: &TemplateStore, id: i64) -> Option<NotificationTemplate> {
        store.read().await.templates.get(&id).cloned()
    }

    /// Number of stored templates
    pub async fn count(store: &TemplateStore) -> usize {
        store.read().await.templates.len()
    }

    /// List templates ordered by id, optionally filtered by a case-insensitive
    /// title substring
    pub async fn list(store: &TemplateStore, search: Option<&str>) -> Vec<NotificationTemplate> {
        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        store
            .read()
            .await
            .templates
            .values()
            .filter(|t| match &needle {
                Some(needle) => t.title.to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Replace a template's contents.
    ///
    /// Child entries keep their id only if it already belongs to this
    /// template; anything else is treated as new. Returns `None` when the
    /// template does not exist.
    pub async fn update(
        store: &TemplateStore,
        id: i64,
        draft: TemplateDraft,
    ) -> Option<NotificationTemplate> {
        let mut inner = store.write().await;

        let existing = inner.templates.get(&id)?;
        let known_recipients: HashSet<i64> = existing.recipients.iter().map(|r| r.id).collect();
        let known_rules: HashSet<i64> = existing.rules.iter().map(|r| r.id).collect();

        let recipients = assign_recipient_ids(&mut inner, draft.recipients, &known_recipients);
        let rules = assign_rule_ids(&mut inner, draft.rules, &known_rules);

        let template = NotificationTemplate {
            id,
            title: draft.title,
            content: draft.content,
            recipients,
            rules,
        };
        inner.templates.insert(id, template.clone());

        Some(template)
    }

    /// Delete a template; returns whether it existed
    pub async fn delete(store: &TemplateStore, id: i64) -> bool {
        store.write().await.templates.remove(&id).is_some()
    }
}

fn assign_recipient_ids(
    inner: &mut StoreInner,
    drafts: Vec<RecipientDraft>,
    known: &HashSet<i64>,
) -> Vec<Recipient> {
    let mut seen = HashSet::new();
    drafts
        .into_iter()
        .map(|draft| {
            let id = match draft.id {
                Some(id) if known.contains(&id) && seen.insert(id) => id,
                _ => inner.next_recipient_id(),
            };
            Recipient {
                id,
                email: draft.email,
            }
        })
        .collect()
}

fn assign_rule_ids(
    inner: &mut StoreInner,
    drafts: Vec<RuleDraft>,
    known: &HashSet<i64>,
) -> Vec<TemplateRule> {
    let mut seen = HashSet::new();
    drafts
        .into_iter()
        .map(|draft| {
            let id = match draft.id {
                Some(id) if known.contains(&id) && seen.insert(id) => id,
                _ => inner.next_rule_id(),
            };
            TemplateRule {
                id,
                rule: draft.rule,
            }
        })
        .collect()
}
