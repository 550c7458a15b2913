//! Template editing session

use notifier_rules::{validate_rule, Operator};

use crate::{
    constants::NEW_TEMPLATE_TITLE,
    handlers::templates::{RecipientRequest, RuleRequest, TemplateRequest},
    models::NotificationTemplate,
};

use super::{
    api::ApiClient,
    error::{ClientError, ClientResult},
};

/// One template open for editing.
///
/// Every mutation is sent to the server as a full replacement right away and
/// the local snapshot is swapped for the server's answer, so the editor
/// always shows what is persisted (including server-assigned ids and
/// canonical operands).
#[derive(Debug, Clone)]
pub struct TemplateEditor {
    client: ApiClient,
    template: NotificationTemplate,
}

impl TemplateEditor {
    /// Open an existing template
    pub async fn open(client: ApiClient, id: i64) -> ClientResult<Self> {
        let template = client.get_template(id).await?;
        Ok(Self { client, template })
    }

    /// Create an empty template and open it
    pub async fn create_blank(client: ApiClient) -> ClientResult<Self> {
        let request = TemplateRequest {
            title: NEW_TEMPLATE_TITLE.to_string(),
            content: Some(String::new()),
            recipients: Vec::new(),
            rules: Vec::new(),
        };
        let template = client.create_template(&request).await?;
        Ok(Self { client, template })
    }

    /// Current snapshot
    pub fn template(&self) -> &NotificationTemplate {
        &self.template
    }

    pub async fn set_title(&mut self, title: &str) -> ClientResult<&NotificationTemplate> {
        let mut request = self.request();
        request.title = title.to_string();
        self.save(request).await
    }

    pub async fn set_content(&mut self, content: &str) -> ClientResult<&NotificationTemplate> {
        let mut request = self.request();
        request.content = Some(content.to_string());
        self.save(request).await
    }

    pub async fn add_recipient(&mut self, email: &str) -> ClientResult<&NotificationTemplate> {
        let mut request = self.request();
        request.recipients.push(RecipientRequest {
            id: None,
            email: email.trim().to_string(),
        });
        self.save(request).await
    }

    pub async fn remove_recipient(&mut self, id: i64) -> ClientResult<&NotificationTemplate> {
        let mut request = self.request();
        let before = request.recipients.len();
        request.recipients.retain(|r| r.id != Some(id));
        if request.recipients.len() == before {
            return Err(ClientError::UnknownRecipient(id));
        }
        self.save(request).await
    }

    /// Validate a rule locally, then append it. Invalid input never reaches
    /// the server.
    pub async fn add_rule(
        &mut self,
        operator: Operator,
        raw_operand: &str,
    ) -> ClientResult<&NotificationTemplate> {
        let rule = validate_rule(operator, raw_operand)?;

        let mut request = self.request();
        request.rules.push(RuleRequest {
            id: None,
            operator: rule.operator(),
            operand: rule.operand().to_string(),
        });
        self.save(request).await
    }

    pub async fn remove_rule(&mut self, id: i64) -> ClientResult<&NotificationTemplate> {
        let mut request = self.request();
        let before = request.rules.len();
        request.rules.retain(|r| r.id != Some(id));
        if request.rules.len() == before {
            return Err(ClientError::UnknownRule(id));
        }
        self.save(request).await
    }

    /// Re-fetch the template, discarding the local snapshot
    pub async fn reload(&mut self) -> ClientResult<&NotificationTemplate> {
        self.template = self.client.get_template(self.template.id).await?;
        Ok(&self.template)
    }

    /// Delete the template on the server and close the editor
    pub async fn delete(self) -> ClientResult<()> {
        self.client.delete_template(self.template.id).await
    }

    fn request(&self) -> TemplateRequest {
        TemplateRequest::from(&self.template)
    }

    async fn save(&mut self, request: TemplateRequest) -> ClientResult<&NotificationTemplate> {
        self.template = self.client.update_template(self.template.id, &request).await?;
        Ok(&self.template)
    }
}
