//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use chrono::{DateTime, SecondsFormat, Utc};
use comfy_table::{Table, presets};
use serde::Serialize;
use webflow_api_models::{
    CollectionDetail, ListCollectionsResponse, ListDomainsResponse, ListSitesResponse,
    ListWebhooksResponse, PublishSiteResponse, Site, Webhook,
};

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

pub(crate) fn render_webhook_list(list: &ListWebhooksResponse, format: OutputFormat) -> CliResult<()> {
    emit(list, format, || format_webhook_list(list))
}

pub(crate) fn render_webhook(webhook: &Webhook, format: OutputFormat) -> CliResult<()> {
    emit(webhook, format, || format_webhook(webhook))
}

pub(crate) fn render_created_webhook(webhook: &Webhook, format: OutputFormat) -> CliResult<()> {
    emit(webhook, format, || webhook.id.clone())
}

pub(crate) fn render_collection_list(
    list: &ListCollectionsResponse,
    format: OutputFormat,
) -> CliResult<()> {
    emit(list, format, || format_collection_list(list))
}

pub(crate) fn render_collection_detail(
    detail: &CollectionDetail,
    format: OutputFormat,
) -> CliResult<()> {
    emit(detail, format, || format_collection_detail(detail))
}

pub(crate) fn render_site_list(list: &ListSitesResponse, format: OutputFormat) -> CliResult<()> {
    emit(list, format, || format_site_list(list))
}

pub(crate) fn render_site(site: &Site, format: OutputFormat) -> CliResult<()> {
    emit(site, format, || format_site(site))
}

pub(crate) fn render_domain_list(list: &ListDomainsResponse, format: OutputFormat) -> CliResult<()> {
    emit(list, format, || format_domain_list(list))
}

pub(crate) fn render_publish_result(
    result: &PublishSiteResponse,
    format: OutputFormat,
) -> CliResult<()> {
    emit(result, format, || format_publish_result(result))
}

fn emit<T: Serialize>(
    value: &T,
    format: OutputFormat,
    table: impl FnOnce() -> String,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(value)
                .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
            println!("{text}");
        }
        OutputFormat::Table => {
            let text = table();
            if !text.is_empty() {
                println!("{text}");
            }
        }
    }
    Ok(())
}

pub(crate) fn format_webhook_list(list: &ListWebhooksResponse) -> String {
    let mut table = plain_table();
    table.set_header(vec!["ID", "TRIGGER TYPE", "URL"]);
    for webhook in &list.webhooks {
        table.add_row(vec![
            webhook.id.as_str(),
            webhook.trigger_type.as_str(),
            webhook.url.as_str(),
        ]);
    }
    table.to_string()
}

pub(crate) fn format_webhook(webhook: &Webhook) -> String {
    key_values(&[
        ("id", webhook.id.clone()),
        ("created on", format_time(webhook.created_on.as_ref())),
        ("last triggered", format_time(webhook.last_triggered.as_ref())),
        ("type", webhook.trigger_type.clone()),
        ("url", webhook.url.clone()),
    ])
}

pub(crate) fn format_collection_list(list: &ListCollectionsResponse) -> String {
    list.collections
        .iter()
        .map(|collection| {
            key_values(&[
                ("id", collection.id.clone()),
                ("name", collection.display_name.clone()),
                ("singular name", collection.singular_name.clone()),
                ("slug", collection.slug.clone()),
                ("created on", format_time(collection.created_on.as_ref())),
                ("last updated", format_time(collection.last_updated.as_ref())),
            ])
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub(crate) fn format_collection_detail(detail: &CollectionDetail) -> String {
    let collection = &detail.collection;
    let mut sections = vec![key_values(&[
        ("id", collection.id.clone()),
        ("name", collection.display_name.clone()),
        ("slug", collection.slug.clone()),
        ("singular name", collection.singular_name.clone()),
        ("created on", format_time(collection.created_on.as_ref())),
        ("last updated", format_time(collection.last_updated.as_ref())),
    ])];

    if !detail.fields.is_empty() {
        let mut fields = plain_table();
        fields.set_header(vec!["ID", "NAME", "SLUG", "TYPE", "EDITABLE", "REQUIRED"]);
        for field in &detail.fields {
            fields.add_row(vec![
                field.id.clone(),
                field.display_name.clone(),
                field.slug.clone(),
                field.field_type.clone(),
                field.is_editable.to_string(),
                field.is_required.to_string(),
            ]);
        }
        sections.push(format!("fields:\n{fields}"));
    }

    sections.join("\n\n")
}

pub(crate) fn format_site_list(list: &ListSitesResponse) -> String {
    let mut table = plain_table();
    table.set_header(vec!["NAME", "ID", "LAST PUBLISHED", "PREVIEW URL"]);
    for site in &list.sites {
        table.add_row(vec![
            site.display_name.clone(),
            site.id.clone(),
            format_time(site.last_published.as_ref()),
            site.preview_url.clone(),
        ]);
    }
    table.to_string()
}

pub(crate) fn format_site(site: &Site) -> String {
    key_values(&[
        ("name", site.display_name.clone()),
        ("id", site.id.clone()),
        ("created on", format_time(site.created_on.as_ref())),
        ("last published", format_time(site.last_published.as_ref())),
        ("preview url", site.preview_url.clone()),
        ("short name", site.short_name.clone()),
        ("timezone", site.time_zone.clone()),
    ])
}

pub(crate) fn format_domain_list(list: &ListDomainsResponse) -> String {
    list.custom_domains
        .iter()
        .map(|domain| domain.url.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn format_publish_result(result: &PublishSiteResponse) -> String {
    let mut lines = vec!["Site publish requested.".to_string()];
    if let Some(queued) = result.queued {
        lines.push(format!("queued: {queued}"));
    }
    if let Some(subdomain) = result.publish_to_webflow_subdomain {
        lines.push(format!("webflow subdomain: {subdomain}"));
    }
    for domain in &result.custom_domains {
        lines.push(format!("domain: {}", domain.url));
    }
    lines.join("\n")
}

#[must_use]
pub(crate) fn format_time(value: Option<&DateTime<Utc>>) -> String {
    value.map_or_else(
        || "-".to_string(),
        |time| time.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

fn plain_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table
}

fn key_values(pairs: &[(&str, String)]) -> String {
    let mut table = plain_table();
    for (key, value) in pairs {
        table.add_row(vec![format!("{key}:"), value.clone()]);
    }
    table.to_string()
}
