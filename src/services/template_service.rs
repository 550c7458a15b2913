//! Template service

use notifier_rules::validate_rule;

use crate::{
    db::{repositories::TemplateRepository, TemplateStore},
    error::{AppError, AppResult},
    handlers::templates::request::TemplateRequest,
    models::{NotificationTemplate, RecipientDraft, RuleDraft, TemplateDraft},
    utils::sanitize_string,
};

/// Template service for business logic
pub struct TemplateService;

impl TemplateService {
    /// Create a new template
    pub async fn create_template(
        store: &TemplateStore,
        payload: TemplateRequest,
    ) -> AppResult<NotificationTemplate> {
        let draft = Self::to_draft(payload)?;
        let template = TemplateRepository::create(store, draft).await;

        tracing::info!(template_id = template.id, "Template created");
        Ok(template)
    }

    /// Get template by ID
    pub async fn get_template(store: &TemplateStore, id: i64) -> AppResult<NotificationTemplate> {
        TemplateRepository::find_by_id(store, id)
            .await
            .ok_or_else(|| AppError::NotFound("Template not found".to_string()))
    }

    /// List templates
    pub async fn list_templates(
        store: &TemplateStore,
        search: Option<&str>,
    ) -> AppResult<Vec<NotificationTemplate>> {
        Ok(TemplateRepository::list(store, search).await)
    }

    /// Replace a template
    pub async fn update_template(
        store: &TemplateStore,
        id: i64,
        payload: TemplateRequest,
    ) -> AppResult<NotificationTemplate> {
        let draft = Self::to_draft(payload)?;
        let template = TemplateRepository::update(store, id, draft)
            .await
            .ok_or_else(|| AppError::NotFound("Template not found".to_string()))?;

        tracing::info!(template_id = id, "Template updated");
        Ok(template)
    }

    /// Delete template
    pub async fn delete_template(store: &TemplateStore, id: i64) -> AppResult<()> {
        if !TemplateRepository::delete(store, id).await {
            return Err(AppError::NotFound("Template not found".to_string()));
        }

        tracing::info!(template_id = id, "Template deleted");
        Ok(())
    }

    /// Convert a request into a draft, validating every rule and storing its
    /// canonical operand
    fn to_draft(payload: TemplateRequest) -> AppResult<TemplateDraft> {
        let rules = payload
            .rules
            .into_iter()
            .enumerate()
            .map(|(index, r)| {
                validate_rule(r.operator, &r.operand)
                    .map(|rule| RuleDraft { id: r.id, rule })
                    .map_err(|e| AppError::Validation(format!("rule {}: {}", index, e)))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let recipients = payload
            .recipients
            .into_iter()
            .map(|r| RecipientDraft {
                id: r.id,
                email: r.email.trim().to_string(),
            })
            .collect();

        let title = sanitize_string(&payload.title);
        if title.is_empty() {
            return Err(AppError::Validation("Title cannot be blank".to_string()));
        }

        Ok(TemplateDraft {
            title,
            content: payload.content.unwrap_or_default(),
            recipients,
            rules,
        })
    }
}
