//! End-to-end tests: a real server on an ephemeral port driven through the
//! crate's own client.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::net::TcpListener;

use metal_notifier::{
    client::{describe_rule, ApiClient, ClientError, TemplateEditor},
    config::Config,
    create_router,
    db::TemplateStore,
    error::ErrorResponse,
    handlers::{
        prices::MetalPriceRequest,
        templates::{RecipientRequest, RuleRequest, TemplateRequest},
    },
    services::{EmailSender, OutgoingEmail},
    state::AppState,
};
use notifier_rules::{OperandKind, Operator, RuleError};

#[derive(Default)]
struct RecordingSender {
    sent: Mutex<Vec<OutgoingEmail>>,
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

impl RecordingSender {
    fn recipients(&self) -> Vec<String> {
        let mut to: Vec<String> = self.sent.lock().unwrap().iter().map(|e| e.to.clone()).collect();
        to.sort();
        to
    }
}

async fn spawn_app() -> (ApiClient, Arc<RecordingSender>) {
    let sender = Arc::new(RecordingSender::default());
    let state = AppState::new(TemplateStore::new(), sender.clone(), Config::default());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    (ApiClient::new(format!("http://{}/api", addr)), sender)
}

fn template(title: &str, emails: &[&str], rules: &[(Operator, &str)]) -> TemplateRequest {
    TemplateRequest {
        title: title.to_string(),
        content: Some(format!("{} content", title)),
        recipients: emails
            .iter()
            .map(|email| RecipientRequest {
                id: None,
                email: email.to_string(),
            })
            .collect(),
        rules: rules
            .iter()
            .map(|(operator, operand)| RuleRequest {
                id: None,
                operator: *operator,
                operand: operand.to_string(),
            })
            .collect(),
    }
}

fn price(item_type: &str, price: f64) -> MetalPriceRequest {
    MetalPriceRequest {
        item_type: item_type.to_string(),
        price,
    }
}

#[tokio::test]
async fn test_health_and_catalog() {
    let (client, _) = spawn_app().await;

    assert_eq!(client.health().await.unwrap().status, "healthy");

    let catalog = client.operators().await.unwrap();
    assert_eq!(catalog.operators.len(), Operator::ALL.len());
    assert_eq!(catalog.operators[0].label, "Item is");
    assert_eq!(catalog.operators[0].operand_kind, OperandKind::ItemKind);
    assert_eq!(catalog.metal_types.len(), 3);
}

#[tokio::test]
async fn test_template_crud_round_trip() {
    let (client, _) = spawn_app().await;

    let created = client
        .create_template(&template(
            "Gold alert",
            &["a@example.com"],
            &[(Operator::ItemIs, "gold"), (Operator::PriceGte, "10.00")],
        ))
        .await
        .unwrap();
    assert_eq!(created.rules[1].rule.operand(), "10");

    let fetched = client.get_template(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let mut replacement = TemplateRequest::from(&fetched);
    replacement.title = "Gold alert (edited)".to_string();
    let updated = client.update_template(created.id, &replacement).await.unwrap();
    assert_eq!(updated.title, "Gold alert (edited)");
    assert_eq!(updated.rules, created.rules);
    assert_eq!(updated.recipients, created.recipients);

    assert_eq!(client.list_templates().await.unwrap().len(), 1);

    client.delete_template(created.id).await.unwrap();
    let err = client.get_template(created.id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(
        client.delete_template(created.id).await.unwrap_err().status(),
        Some(404)
    );
}

#[tokio::test]
async fn test_search_templates() {
    let (client, _) = spawn_app().await;

    client.create_template(&template("Gold alert", &[], &[])).await.unwrap();
    client.create_template(&template("Silver dip", &[], &[])).await.unwrap();

    let found = client.search_templates("silver").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Silver dip");
}

#[tokio::test]
async fn test_invalid_templates_are_rejected() {
    let (client, _) = spawn_app().await;

    // Blank title
    let err = client
        .create_template(&template("   ", &[], &[]))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));

    // Negative price operand
    let err = client
        .create_template(&template("t", &[], &[(Operator::PriceEq, "-5")]))
        .await
        .unwrap_err();
    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("rule 0"), "{}", message);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // Metal outside the closed set
    let err = client
        .create_template(&template("t", &[], &[(Operator::ItemIs, "copper")]))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));

    assert!(client.list_templates().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_bodies() {
    let (client, _) = spawn_app().await;
    let http = reqwest::Client::new();

    // Unknown operator fails at deserialization
    let response = http
        .post(format!("{}/templates", client.base_url()))
        .json(&serde_json::json!({
            "title": "t",
            "rules": [{"operator": "PRICE_IS_ROUGHLY", "operand": "1"}]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.code, "INVALID_INPUT");

    // Field errors carry per-field details
    let response = http
        .post(format!("{}/templates", client.base_url()))
        .json(&serde_json::json!({
            "title": "t",
            "recipients": [{"email": "not-an-email"}]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert!(body.error.details.is_some());
}

#[tokio::test]
async fn test_editor_session() {
    let (client, _) = spawn_app().await;

    let mut editor = TemplateEditor::create_blank(client.clone()).await.unwrap();
    assert_eq!(editor.template().title, "New template");
    assert!(editor.template().rules.is_empty());

    editor.set_title("Platinum watch").await.unwrap();
    editor.set_content("Platinum moved").await.unwrap();
    editor.add_recipient("ops@example.com").await.unwrap();
    editor.add_recipient("cfo@example.com").await.unwrap();
    editor.add_rule(Operator::ItemIs, "platinum").await.unwrap();
    editor.add_rule(Operator::PriceLte, "950.50").await.unwrap();

    // Rejected locally; nothing is sent
    let err = editor.add_rule(Operator::PriceGt, "-1").await.unwrap_err();
    assert!(matches!(err, ClientError::Rule(RuleError::InvalidOperand { .. })));

    let snapshot = editor.template().clone();
    assert_eq!(snapshot.title, "Platinum watch");
    assert_eq!(snapshot.content, "Platinum moved");
    assert_eq!(snapshot.recipients.len(), 2);
    assert_eq!(
        snapshot.rules.iter().map(describe_rule).collect::<Vec<_>>(),
        vec!["Item is platinum", "Price is less than or equal to 950.5"]
    );
    assert_eq!(client.get_template(snapshot.id).await.unwrap(), snapshot);

    let first_rule = snapshot.rules[0].id;
    let second_rule = snapshot.rules[1].id;
    editor.remove_rule(first_rule).await.unwrap();
    assert_eq!(editor.template().rules.len(), 1);
    assert_eq!(editor.template().rules[0].id, second_rule);

    let ops = snapshot.recipients[0].id;
    editor.remove_recipient(ops).await.unwrap();
    assert_eq!(editor.template().recipients.len(), 1);
    assert!(matches!(
        editor.remove_recipient(ops).await.unwrap_err(),
        ClientError::UnknownRecipient(id) if id == ops
    ));

    let reloaded = editor.reload().await.unwrap().clone();
    assert_eq!(reloaded.recipients[0].email, "cfo@example.com");

    let id = reloaded.id;
    editor.delete().await.unwrap();
    assert_eq!(client.get_template(id).await.unwrap_err().status(), Some(404));
}

#[tokio::test]
async fn test_price_signal_dispatch() {
    let (client, sender) = spawn_app().await;

    client
        .create_template(&template(
            "Cheap gold",
            &["a@example.com", "b@example.com"],
            &[(Operator::ItemIs, "gold"), (Operator::PriceLt, "100")],
        ))
        .await
        .unwrap();
    client
        .create_template(&template(
            "Anything but gold",
            &["c@example.com"],
            &[(Operator::ItemIsNot, "gold")],
        ))
        .await
        .unwrap();
    // No rules: never fires
    client
        .create_template(&template("Catch-all", &["d@example.com"], &[]))
        .await
        .unwrap();

    // Conjunction fails on the price rule
    let response = client.publish_price(&price("gold", 150.0)).await.unwrap();
    assert_eq!(response.message, "Notification processed");
    assert_eq!(response.summary.templates_matched, 0);
    assert!(sender.recipients().is_empty());

    let response = client.publish_price(&price("gold", 99.99)).await.unwrap();
    assert_eq!(response.summary.templates_matched, 1);
    assert_eq!(response.summary.emails_sent, 2);
    assert_eq!(sender.recipients(), vec!["a@example.com", "b@example.com"]);

    let response = client.publish_price(&price("silver", 20.0)).await.unwrap();
    assert_eq!(response.summary.templates_matched, 1);
    assert_eq!(sender.recipients().len(), 3);
}

#[tokio::test]
async fn test_invalid_price_signals() {
    let (client, sender) = spawn_app().await;

    for bad in [price("copper", 1.0), price("gold", -1.0), price("gold", 1.001)] {
        let err = client.publish_price(&bad).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
    }
    assert!(sender.recipients().is_empty());
}
