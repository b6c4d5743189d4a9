use webflow_api_models::{
    ListDomainsResponse, ListSitesResponse, PublishSiteRequest, PublishSiteResponse, Site,
};

use crate::cli::{OutputFormat, SiteArgs, SitePublishArgs};
use crate::client::{AppContext, CliError, CliResult, decode_body, encode_body};
use crate::output::{render_domain_list, render_publish_result, render_site, render_site_list};

pub(crate) async fn handle_site_list(ctx: &AppContext, output: OutputFormat) -> CliResult<()> {
    let body = ctx
        .client
        .get(&["sites"])
        .await
        .map_err(|err| CliError::api("list sites", err))?;

    let list: ListSitesResponse = decode_body(&body, "site list")?;
    render_site_list(&list, output)
}

pub(crate) async fn handle_site_get(
    ctx: &AppContext,
    args: SiteArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let body = ctx
        .client
        .get(&["sites", args.site_id.as_str()])
        .await
        .map_err(|err| CliError::api("get site", err))?;

    let site: Site = decode_body(&body, "site")?;
    render_site(&site, output)
}

pub(crate) async fn handle_site_domains(
    ctx: &AppContext,
    args: SiteArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let body = ctx
        .client
        .get(&["sites", args.site_id.as_str(), "custom_domains"])
        .await
        .map_err(|err| CliError::api("list custom domains", err))?;

    let list: ListDomainsResponse = decode_body(&body, "domain list")?;
    render_domain_list(&list, output)
}

pub(crate) async fn handle_site_publish(
    ctx: &AppContext,
    args: SitePublishArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let request = build_publish_request(&args)?;
    let payload = encode_body(&request, "publish request")?;

    let body = ctx
        .client
        .post(&["sites", args.site_id.as_str(), "publish"], Some(payload))
        .await
        .map_err(|err| CliError::api("publish site", err))?;

    let result: PublishSiteResponse = if body.is_empty() {
        PublishSiteResponse::default()
    } else {
        decode_body(&body, "publish response")?
    };
    tracing::info!(site_id = %args.site_id, "site publish requested");
    render_publish_result(&result, output)
}

fn build_publish_request(args: &SitePublishArgs) -> CliResult<PublishSiteRequest> {
    let custom_domains: Vec<String> = args
        .domains
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|domain| !domain.is_empty())
        .map(str::to_string)
        .collect();

    if args.no_subdomain && custom_domains.is_empty() {
        return Err(CliError::validation(
            "nothing to publish: pass --domain or drop --no-subdomain",
        ));
    }

    Ok(PublishSiteRequest {
        custom_domains,
        publish_to_webflow_subdomain: !args.no_subdomain,
    })
}
