use webflow_api_models::{CreateWebhookRequest, ListWebhooksResponse, Webhook};

use crate::cli::{
    OutputFormat, WebhookCreateArgs, WebhookDeleteArgs, WebhookGetArgs, WebhookListArgs,
};
use crate::client::{AppContext, CliError, CliResult, decode_body, encode_body};
use crate::output::{render_created_webhook, render_webhook, render_webhook_list};

pub(crate) async fn handle_webhook_list(
    ctx: &AppContext,
    args: WebhookListArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let body = ctx
        .client
        .get(&["sites", args.site_id.as_str(), "webhooks"])
        .await
        .map_err(|err| CliError::api("list webhooks", err))?;

    let list: ListWebhooksResponse = decode_body(&body, "webhook list")?;
    render_webhook_list(&list, output)
}

pub(crate) async fn handle_webhook_get(
    ctx: &AppContext,
    args: WebhookGetArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let body = ctx
        .client
        .get(&["webhooks", args.webhook_id.as_str()])
        .await
        .map_err(|err| CliError::api("get webhook", err))?;

    let webhook: Webhook = decode_body(&body, "webhook")?;
    render_webhook(&webhook, output)
}

pub(crate) async fn handle_webhook_create(
    ctx: &AppContext,
    args: WebhookCreateArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let url = args.url.trim();
    if url.is_empty() {
        return Err(CliError::validation("webhook URL must not be empty"));
    }

    let request = CreateWebhookRequest {
        trigger_type: args.trigger_type,
        url: url.to_string(),
    };
    let payload = encode_body(&request, "webhook request")?;

    let body = ctx
        .client
        .post(&["sites", args.site_id.as_str(), "webhooks"], Some(payload))
        .await
        .map_err(|err| CliError::api("create webhook", err))?;

    let webhook: Webhook = decode_body(&body, "created webhook")?;
    tracing::info!(webhook_id = %webhook.id, trigger_type = %args.trigger_type, "webhook created");
    render_created_webhook(&webhook, output)
}

pub(crate) async fn handle_webhook_delete(
    ctx: &AppContext,
    args: WebhookDeleteArgs,
) -> CliResult<()> {
    ctx.client
        .delete(&["webhooks", args.webhook_id.as_str()])
        .await
        .map_err(|err| CliError::api("delete webhook", err))?;

    println!("Webhook deleted (id: {})", args.webhook_id);
    Ok(())
}
