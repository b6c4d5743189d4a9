use webflow_api_models::{CollectionDetail, ListCollectionsResponse};

use crate::cli::{CollectionGetArgs, CollectionListArgs, OutputFormat};
use crate::client::{AppContext, CliError, CliResult, decode_body};
use crate::output::{render_collection_detail, render_collection_list};

pub(crate) async fn handle_collection_list(
    ctx: &AppContext,
    args: CollectionListArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let body = ctx
        .client
        .get(&["sites", args.site_id.as_str(), "collections"])
        .await
        .map_err(|err| CliError::api("list collections", err))?;

    let list: ListCollectionsResponse = decode_body(&body, "collection list")?;
    render_collection_list(&list, output)
}

pub(crate) async fn handle_collection_get(
    ctx: &AppContext,
    args: CollectionGetArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let body = ctx
        .client
        .get(&["collections", args.collection_id.as_str()])
        .await
        .map_err(|err| CliError::api("get collection", err))?;

    let detail: CollectionDetail = decode_body(&body, "collection")?;
    render_collection_detail(&detail, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use httpmock::prelude::*;
    use serde_json::json;
    use webflow_client::WebflowClient;

    fn context_with(server: &MockServer) -> AppContext {
        AppContext {
            client: WebflowClient::with_base_url("abc123", format!("{}/v2", server.base_url())),
        }
    }

    #[tokio::test]
    async fn collection_list_fetches_site_collections() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/sites/s1/collections")
                .header("authorization", "Bearer abc123")
                .header("accept", "application/json");
            then.status(200).json_body(json!({
                "collections": [{
                    "id": "c1",
                    "displayName": "Blog Posts",
                    "singularName": "Blog Post",
                    "slug": "post"
                }]
            }));
        });

        let ctx = context_with(&server);
        handle_collection_list(
            &ctx,
            CollectionListArgs {
                site_id: "s1".into(),
            },
            OutputFormat::Table,
        )
        .await?;
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn collection_get_fetches_schema() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v2/collections/c1");
            then.status(200).json_body(json!({
                "id": "c1",
                "displayName": "Blog Posts",
                "fields": [{
                    "id": "f1",
                    "slug": "name",
                    "displayName": "Name",
                    "type": "PlainText",
                    "isEditable": true,
                    "isRequired": true
                }]
            }));
        });

        let ctx = context_with(&server);
        handle_collection_get(
            &ctx,
            CollectionGetArgs {
                collection_id: "c1".into(),
            },
            OutputFormat::Table,
        )
        .await?;
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn collection_get_surfaces_api_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/v2/collections/missing");
            then.status(404)
                .json_body(json!({"code": "resource_not_found", "message": "Requested resource not found"}));
        });

        let ctx = context_with(&server);
        let err = handle_collection_get(
            &ctx,
            CollectionGetArgs {
                collection_id: "missing".into(),
            },
            OutputFormat::Table,
        )
        .await
        .err();

        let Some(err) = err else {
            panic!("expected lookup to fail");
        };
        let message = err.to_string();
        assert!(message.contains("unable to get collection"));
        assert!(message.contains("resource_not_found"));
    }
}
