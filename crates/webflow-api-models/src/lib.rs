#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Request and response DTOs for the Webflow v2 API.
//!
//! Only the endpoints exercised by `webflowctl` are modelled. Every response
//! type tolerates missing fields so a partial payload still decodes; a few
//! fields also accept the legacy v1 spelling.
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Event that causes Webflow to call a webhook.
///
/// `form_submission` is not accepted for creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    /// A CMS item changed.
    CollectionItemChanged,
    /// A CMS item was created.
    CollectionItemCreated,
    /// A CMS item was deleted.
    CollectionItemDeleted,
    /// A CMS item was unpublished.
    CollectionItemUnpublished,
    /// Ecommerce inventory levels changed.
    EcommInventoryChanged,
    /// A new ecommerce order was placed.
    EcommNewOrder,
    /// An ecommerce order changed.
    EcommOrderChanged,
    /// A memberships account was added.
    MembershipsUserAccountAdded,
    /// A memberships account was deleted.
    MembershipsUserAccountDeleted,
    /// A memberships account was updated.
    MembershipsUserAccountUpdated,
    /// A page was created.
    PageCreated,
    /// A page was deleted.
    PageDeleted,
    /// Page metadata was updated.
    PageMetadataUpdated,
    /// The site was published.
    SitePublish,
    /// A user account was added.
    UserAccountAdded,
    /// A user account was deleted.
    UserAccountDeleted,
    /// A user account was updated.
    UserAccountUpdated,
}

impl TriggerType {
    /// Every trigger type accepted by the CLI, in wire-name order.
    pub const ALL: [Self; 17] = [
        Self::CollectionItemChanged,
        Self::CollectionItemCreated,
        Self::CollectionItemDeleted,
        Self::CollectionItemUnpublished,
        Self::EcommInventoryChanged,
        Self::EcommNewOrder,
        Self::EcommOrderChanged,
        Self::MembershipsUserAccountAdded,
        Self::MembershipsUserAccountDeleted,
        Self::MembershipsUserAccountUpdated,
        Self::PageCreated,
        Self::PageDeleted,
        Self::PageMetadataUpdated,
        Self::SitePublish,
        Self::UserAccountAdded,
        Self::UserAccountDeleted,
        Self::UserAccountUpdated,
    ];

    /// Wire name used by the Webflow API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CollectionItemChanged => "collection_item_changed",
            Self::CollectionItemCreated => "collection_item_created",
            Self::CollectionItemDeleted => "collection_item_deleted",
            Self::CollectionItemUnpublished => "collection_item_unpublished",
            Self::EcommInventoryChanged => "ecomm_inventory_changed",
            Self::EcommNewOrder => "ecomm_new_order",
            Self::EcommOrderChanged => "ecomm_order_changed",
            Self::MembershipsUserAccountAdded => "memberships_user_account_added",
            Self::MembershipsUserAccountDeleted => "memberships_user_account_deleted",
            Self::MembershipsUserAccountUpdated => "memberships_user_account_updated",
            Self::PageCreated => "page_created",
            Self::PageDeleted => "page_deleted",
            Self::PageMetadataUpdated => "page_metadata_updated",
            Self::SitePublish => "site_publish",
            Self::UserAccountAdded => "user_account_added",
            Self::UserAccountDeleted => "user_account_deleted",
            Self::UserAccountUpdated => "user_account_updated",
        }
    }
}

impl Display for TriggerType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TriggerType {
    type Err = UnknownTriggerType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == value)
            .ok_or_else(|| UnknownTriggerType {
                value: value.to_string(),
            })
    }
}

/// Returned when a string does not name a supported [`TriggerType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTriggerType {
    /// Value supplied by the caller.
    pub value: String,
}

impl Display for UnknownTriggerType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unknown trigger type '{}'; expected one of: ",
            self.value
        )?;
        let names: Vec<&str> = TriggerType::ALL.into_iter().map(TriggerType::as_str).collect();
        formatter.write_str(&names.join(", "))
    }
}

impl std::error::Error for UnknownTriggerType {}

/// Parses an RFC 3339 timestamp; anything that does not parse becomes `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
        .map(|time| time.with_timezone(&Utc)))
}

/// Webhook registered on a site.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Webhook {
    /// Webhook identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Event that fires the webhook, as reported by the API.
    pub trigger_type: String,
    /// Destination URL.
    pub url: String,
    /// Owning workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    /// Owning site.
    #[serde(alias = "site", skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    /// Last time the webhook fired.
    #[serde(
        alias = "lastUsed",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub last_triggered: Option<DateTime<Utc>>,
    /// Creation time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub created_on: Option<DateTime<Utc>>,
}

/// Response of `GET sites/{site_id}/webhooks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListWebhooksResponse {
    /// Webhooks registered on the site.
    pub webhooks: Vec<Webhook>,
}

/// Body of `POST sites/{site_id}/webhooks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookRequest {
    /// Event that fires the webhook.
    pub trigger_type: TriggerType,
    /// Destination URL.
    pub url: String,
}

/// CMS collection summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Collection {
    /// Collection identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Plural display name.
    #[serde(alias = "name")]
    pub display_name: String,
    /// Singular display name.
    pub singular_name: String,
    /// URL slug.
    pub slug: String,
    /// Creation time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub created_on: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Response of `GET sites/{site_id}/collections`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListCollectionsResponse {
    /// Collections defined on the site.
    pub collections: Vec<Collection>,
}

/// Field definition inside a collection schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionField {
    /// Field identifier.
    pub id: String,
    /// Field slug.
    pub slug: String,
    /// Display name.
    #[serde(alias = "name")]
    pub display_name: String,
    /// Field type (e.g. `PlainText`, `RichText`).
    #[serde(rename = "type")]
    pub field_type: String,
    /// Whether editors can change the value.
    #[serde(alias = "editable")]
    pub is_editable: bool,
    /// Whether a value is mandatory.
    #[serde(alias = "required")]
    pub is_required: bool,
}

/// Response of `GET collections/{collection_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionDetail {
    /// Summary attributes of the collection.
    #[serde(flatten)]
    pub collection: Collection,
    /// Schema fields.
    #[serde(default)]
    pub fields: Vec<CollectionField>,
}

/// Site summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Site {
    /// Site identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Owning workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    /// Display name.
    #[serde(alias = "name")]
    pub display_name: String,
    /// Short name used in the webflow.io subdomain.
    pub short_name: String,
    /// Creation time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub created_on: Option<DateTime<Utc>>,
    /// Last publish time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub last_published: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub last_updated: Option<DateTime<Utc>>,
    /// Preview image URL.
    pub preview_url: String,
    /// IANA time zone of the site.
    pub time_zone: String,
}

/// Response of `GET sites`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListSitesResponse {
    /// Sites visible to the token.
    pub sites: Vec<Site>,
}

/// Custom domain attached to a site.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Domain {
    /// Domain identifier.
    pub id: String,
    /// Host name.
    pub url: String,
    /// Last publish time on this domain.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub last_published: Option<DateTime<Utc>>,
}

/// Response of `GET sites/{site_id}/custom_domains`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListDomainsResponse {
    /// Custom domains of the site.
    #[serde(alias = "custom_domains")]
    pub custom_domains: Vec<Domain>,
}

/// Body of `POST sites/{site_id}/publish`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublishSiteRequest {
    /// Custom domain identifiers to publish to.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub custom_domains: Vec<String>,
    /// Whether to publish to the webflow.io subdomain.
    pub publish_to_webflow_subdomain: bool,
}

/// Response of `POST sites/{site_id}/publish`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PublishSiteResponse {
    /// Legacy flag reporting that the publish was queued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued: Option<bool>,
    /// Custom domains included in the publish.
    pub custom_domains: Vec<Domain>,
    /// Whether the webflow.io subdomain was included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_to_webflow_subdomain: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn trigger_type_round_trips_through_wire_names() -> TestResult {
        for kind in TriggerType::ALL {
            let parsed: TriggerType = kind.as_str().parse()?;
            assert_eq!(parsed, kind);
            assert_eq!(serde_json::to_value(kind)?, json!(kind.as_str()));
        }
        Ok(())
    }

    #[test]
    fn unknown_trigger_type_lists_choices() {
        let err = "form_submission".parse::<TriggerType>().err();
        let Some(err) = err else {
            panic!("form_submission should be rejected");
        };
        let message = err.to_string();
        assert!(message.contains("'form_submission'"));
        assert!(message.contains("site_publish"));
        assert!(message.contains("collection_item_created"));
    }

    #[test]
    fn create_webhook_request_uses_camel_case() -> TestResult {
        let request = CreateWebhookRequest {
            trigger_type: TriggerType::SitePublish,
            url: "https://example.com/hook".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"triggerType": "site_publish", "url": "https://example.com/hook"})
        );
        Ok(())
    }

    #[test]
    fn webhook_list_decodes_v2_payload() -> TestResult {
        let payload = json!({
            "webhooks": [{
                "id": "wh1",
                "triggerType": "form_submission",
                "url": "https://example.com/hook",
                "workspaceId": "ws1",
                "siteId": "s1",
                "lastTriggered": "2024-01-02T03:04:05.000Z",
                "createdOn": "2023-12-01T00:00:00.000Z"
            }]
        });
        let list: ListWebhooksResponse = serde_json::from_value(payload)?;
        let webhook = &list.webhooks[0];
        assert_eq!(webhook.id, "wh1");
        assert_eq!(webhook.trigger_type, "form_submission");
        assert_eq!(webhook.site_id.as_deref(), Some("s1"));
        assert!(webhook.last_triggered.is_some());
        Ok(())
    }

    #[test]
    fn webhook_accepts_legacy_field_names() -> TestResult {
        let webhook: Webhook = serde_json::from_value(json!({
            "_id": "wh9",
            "triggerType": "site_publish",
            "url": "https://example.com",
            "site": "s9",
            "lastUsed": "2024-01-02T03:04:05Z"
        }))?;
        assert_eq!(webhook.id, "wh9");
        assert_eq!(webhook.site_id.as_deref(), Some("s9"));
        assert!(webhook.last_triggered.is_some());
        Ok(())
    }

    #[test]
    fn collection_detail_flattens_summary_and_fields() -> TestResult {
        let detail: CollectionDetail = serde_json::from_value(json!({
            "id": "c1",
            "displayName": "Blog Posts",
            "singularName": "Blog Post",
            "slug": "post",
            "createdOn": "2024-01-02T03:04:05.000Z",
            "lastUpdated": "2024-02-02T03:04:05.000Z",
            "fields": [{
                "id": "f1",
                "slug": "name",
                "displayName": "Name",
                "type": "PlainText",
                "isEditable": true,
                "isRequired": true
            }]
        }))?;
        assert_eq!(detail.collection.id, "c1");
        assert_eq!(detail.collection.singular_name, "Blog Post");
        assert_eq!(detail.fields.len(), 1);
        assert_eq!(detail.fields[0].field_type, "PlainText");
        assert!(detail.fields[0].is_required);
        Ok(())
    }

    #[test]
    fn webhook_list_survives_blank_and_malformed_timestamps() -> TestResult {
        let list: ListWebhooksResponse = serde_json::from_value(json!({
            "webhooks": [
                {"id": "wh1", "lastTriggered": "", "createdOn": "2024-01-02T03:04:05.000Z"},
                {"id": "wh2", "lastTriggered": "yesterday", "createdOn": null}
            ]
        }))?;
        assert_eq!(list.webhooks.len(), 2);
        assert!(list.webhooks[0].last_triggered.is_none());
        assert!(list.webhooks[0].created_on.is_some());
        assert!(list.webhooks[1].last_triggered.is_none());
        assert!(list.webhooks[1].created_on.is_none());
        Ok(())
    }

    #[test]
    fn site_list_tolerates_missing_fields() -> TestResult {
        let list: ListSitesResponse = serde_json::from_value(json!({
            "sites": [{"id": "s1", "displayName": "Marketing", "lastPublished": null}]
        }))?;
        assert_eq!(list.sites[0].display_name, "Marketing");
        assert!(list.sites[0].last_published.is_none());
        assert!(list.sites[0].preview_url.is_empty());

        let empty: ListSitesResponse = serde_json::from_str(r#"{"sites":[]}"#)?;
        assert!(empty.sites.is_empty());
        Ok(())
    }

    #[test]
    fn domain_list_accepts_both_spellings() -> TestResult {
        let camel: ListDomainsResponse = serde_json::from_value(json!({
            "customDomains": [{"id": "d1", "url": "example.com"}]
        }))?;
        let snake: ListDomainsResponse = serde_json::from_value(json!({
            "custom_domains": [{"id": "d1", "url": "example.com"}]
        }))?;
        assert_eq!(camel, snake);
        assert_eq!(camel.custom_domains[0].url, "example.com");
        Ok(())
    }

    #[test]
    fn publish_request_omits_empty_domains() -> TestResult {
        let request = PublishSiteRequest {
            custom_domains: Vec::new(),
            publish_to_webflow_subdomain: true,
        };
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"publishToWebflowSubdomain": true})
        );
        Ok(())
    }
}
