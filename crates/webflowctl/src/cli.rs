//! Argument parsing, logging setup, and command dispatch.

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use webflow_api_models::TriggerType;
use webflow_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};

use crate::client::{AppContext, CliError, CliResult};
use crate::commands::collections::{handle_collection_get, handle_collection_list};
use crate::commands::completions::handle_completions;
use crate::commands::sites::{
    handle_site_domains, handle_site_get, handle_site_list, handle_site_publish,
};
use crate::commands::webhooks::{
    handle_webhook_create, handle_webhook_delete, handle_webhook_get, handle_webhook_list,
};

/// Parses CLI arguments, installs logging, and executes the requested command.
/// Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(err) = init_telemetry(&cli) {
        eprintln!("error: {err}");
        return err.exit_code();
    }

    let command = command_label(&cli.command);
    tracing::debug!(command, "dispatching command");

    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            let exit_code = err.exit_code();
            let message = err.to_string();
            tracing::debug!(command, exit_code, "command failed");
            eprintln!("error: {message}");
            exit_code
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let Cli {
        api_token,
        output,
        command,
        ..
    } = cli;

    if let Command::Completions(args) = command {
        return handle_completions(&args);
    }

    let ctx = AppContext::from_token(api_token.as_deref())?;

    match command {
        Command::Webhooks(webhooks) => match webhooks {
            WebhooksCommand::List(args) => handle_webhook_list(&ctx, args, output).await,
            WebhooksCommand::Get(args) => handle_webhook_get(&ctx, args, output).await,
            WebhooksCommand::Create(args) => handle_webhook_create(&ctx, args, output).await,
            WebhooksCommand::Delete(args) => handle_webhook_delete(&ctx, args).await,
        },
        Command::Collections(collections) => match collections {
            CollectionsCommand::List(args) => handle_collection_list(&ctx, args, output).await,
            CollectionsCommand::Get(args) => handle_collection_get(&ctx, args, output).await,
        },
        Command::Sites(sites) => match sites {
            SitesCommand::List => handle_site_list(&ctx, output).await,
            SitesCommand::Get(args) => handle_site_get(&ctx, args, output).await,
            SitesCommand::Domains(args) => handle_site_domains(&ctx, args, output).await,
            SitesCommand::Publish(args) => handle_site_publish(&ctx, args, output).await,
        },
        Command::Completions(_) => Ok(()),
    }
}

fn init_telemetry(cli: &Cli) -> CliResult<()> {
    let config = LoggingConfig {
        level: level_for_verbosity(cli.verbose),
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
    };
    init_logging(&config).map_err(CliError::failure)
}

const fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_LOG_LEVEL,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[derive(Parser)]
#[command(
    name = "webflowctl",
    version,
    about = "A command line tool to interact with the Webflow API",
    long_about = "Manage Webflow webhooks, collections, and sites from the terminal."
)]
pub(crate) struct Cli {
    #[arg(
        short = 'a',
        long,
        global = true,
        env = "WEBFLOW_API_TOKEN",
        hide_env_values = true,
        help = "Webflow API token"
    )]
    pub(crate) api_token: Option<String>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "WEBFLOWCTL_LOG_FORMAT",
        value_parser = parse_log_format,
        help = "Log format written to stderr (pretty or json)"
    )]
    pub(crate) log_format: Option<LogFormat>,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub(crate) verbose: u8,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Manage webhooks
    #[command(subcommand)]
    Webhooks(WebhooksCommand),
    /// Manage collections
    #[command(subcommand)]
    Collections(CollectionsCommand),
    /// Manage sites
    #[command(subcommand)]
    Sites(SitesCommand),
    /// Generate a shell completion script
    Completions(CompletionsArgs),
}

#[derive(Subcommand)]
pub(crate) enum WebhooksCommand {
    /// List webhooks for a site
    List(WebhookListArgs),
    /// Get a webhook
    Get(WebhookGetArgs),
    /// Create a webhook for a site
    Create(WebhookCreateArgs),
    /// Delete a webhook
    Delete(WebhookDeleteArgs),
}

#[derive(Subcommand)]
pub(crate) enum CollectionsCommand {
    /// List collections for a site
    List(CollectionListArgs),
    /// Get detailed information for a collection
    Get(CollectionGetArgs),
}

#[derive(Subcommand)]
pub(crate) enum SitesCommand {
    /// List sites
    List,
    /// Get a site
    Get(SiteArgs),
    /// List a site's custom domains
    Domains(SiteArgs),
    /// Publish a site
    Publish(SitePublishArgs),
}

#[derive(Args)]
pub(crate) struct WebhookListArgs {
    #[arg(help = "Site identifier")]
    pub(crate) site_id: String,
}

#[derive(Args)]
pub(crate) struct WebhookGetArgs {
    #[arg(help = "Webhook identifier")]
    pub(crate) webhook_id: String,
}

#[derive(Args)]
pub(crate) struct WebhookCreateArgs {
    #[arg(help = "Site identifier")]
    pub(crate) site_id: String,
    #[arg(help = "Event that triggers the webhook", value_parser = trigger_type_parser())]
    pub(crate) trigger_type: TriggerType,
    #[arg(help = "Destination URL")]
    pub(crate) url: String,
}

#[derive(Args)]
pub(crate) struct WebhookDeleteArgs {
    #[arg(help = "Webhook identifier")]
    pub(crate) webhook_id: String,
}

#[derive(Args)]
pub(crate) struct CollectionListArgs {
    #[arg(help = "Site identifier")]
    pub(crate) site_id: String,
}

#[derive(Args)]
pub(crate) struct CollectionGetArgs {
    #[arg(help = "Collection identifier")]
    pub(crate) collection_id: String,
}

#[derive(Args)]
pub(crate) struct SiteArgs {
    #[arg(help = "Site identifier")]
    pub(crate) site_id: String,
}

#[derive(Args)]
pub(crate) struct SitePublishArgs {
    #[arg(help = "Site identifier")]
    pub(crate) site_id: String,
    #[arg(
        long = "domain",
        value_delimiter = ',',
        help = "Custom domain identifiers to publish to"
    )]
    pub(crate) domains: Vec<String>,
    #[arg(long, help = "Skip publishing to the webflow.io subdomain")]
    pub(crate) no_subdomain: bool,
}

#[derive(Args)]
pub(crate) struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub(crate) shell: Shell,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn trigger_type_parser() -> impl TypedValueParser<Value = TriggerType> {
    PossibleValuesParser::new(TriggerType::ALL.map(TriggerType::as_str))
        .try_map(|name| name.parse::<TriggerType>())
}

fn parse_log_format(input: &str) -> Result<LogFormat, String> {
    input.parse::<LogFormat>().map_err(|err| err.to_string())
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Webhooks(WebhooksCommand::List(_)) => "webhooks.list",
        Command::Webhooks(WebhooksCommand::Get(_)) => "webhooks.get",
        Command::Webhooks(WebhooksCommand::Create(_)) => "webhooks.create",
        Command::Webhooks(WebhooksCommand::Delete(_)) => "webhooks.delete",
        Command::Collections(CollectionsCommand::List(_)) => "collections.list",
        Command::Collections(CollectionsCommand::Get(_)) => "collections.get",
        Command::Sites(SitesCommand::List) => "sites.list",
        Command::Sites(SitesCommand::Get(_)) => "sites.get",
        Command::Sites(SitesCommand::Domains(_)) => "sites.domains",
        Command::Sites(SitesCommand::Publish(_)) => "sites.publish",
        Command::Completions(_) => "completions",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("webflowctl").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn webhooks_create_parses_trigger_type() -> Result<(), clap::Error> {
        let cli = parse(&[
            "-a",
            "abc123",
            "webhooks",
            "create",
            "s1",
            "site_publish",
            "https://example.com/hook",
        ])?;
        assert_eq!(cli.api_token.as_deref(), Some("abc123"));
        match cli.command {
            Command::Webhooks(WebhooksCommand::Create(args)) => {
                assert_eq!(args.site_id, "s1");
                assert_eq!(args.trigger_type, TriggerType::SitePublish);
                assert_eq!(args.url, "https://example.com/hook");
            }
            _ => panic!("expected webhooks create"),
        }
        Ok(())
    }

    #[test]
    fn webhooks_create_rejects_unknown_trigger_type() {
        let err = parse(&[
            "webhooks",
            "create",
            "s1",
            "form_submission",
            "https://example.com/hook",
        ])
        .err();
        let Some(err) = err else {
            panic!("form_submission should be rejected");
        };
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
        assert!(err.to_string().contains("site_publish"));
    }

    #[test]
    fn global_flags_follow_subcommands() -> Result<(), clap::Error> {
        let cli = parse(&[
            "sites",
            "list",
            "--output",
            "json",
            "-vv",
            "--log-format",
            "json",
        ])?;
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        Ok(())
    }

    #[test]
    fn log_format_rejects_unknown_names() {
        let err = parse(&["sites", "list", "--log-format", "xml"]).err();
        assert!(err.is_some_and(|err| err.to_string().contains("unknown log format")));
    }

    #[test]
    fn publish_accepts_comma_separated_domains() -> Result<(), clap::Error> {
        let cli = parse(&["sites", "publish", "s1", "--domain", "d1,d2", "--no-subdomain"])?;
        match cli.command {
            Command::Sites(SitesCommand::Publish(args)) => {
                assert_eq!(args.domains, vec!["d1".to_string(), "d2".to_string()]);
                assert!(args.no_subdomain);
            }
            _ => panic!("expected sites publish"),
        }
        Ok(())
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for_verbosity(0), DEFAULT_LOG_LEVEL);
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(7), "trace");
    }

    #[test]
    fn command_label_matches_variants() -> Result<(), clap::Error> {
        let cases = [
            (vec!["webhooks", "list", "s1"], "webhooks.list"),
            (vec!["webhooks", "get", "w1"], "webhooks.get"),
            (vec!["webhooks", "delete", "w1"], "webhooks.delete"),
            (vec!["collections", "list", "s1"], "collections.list"),
            (vec!["collections", "get", "c1"], "collections.get"),
            (vec!["sites", "list"], "sites.list"),
            (vec!["sites", "get", "s1"], "sites.get"),
            (vec!["sites", "domains", "s1"], "sites.domains"),
            (vec!["sites", "publish", "s1"], "sites.publish"),
            (vec!["completions", "bash"], "completions"),
        ];
        for (args, label) in cases {
            let cli = parse(&args)?;
            assert_eq!(command_label(&cli.command), label);
        }
        Ok(())
    }

    #[tokio::test]
    async fn dispatch_requires_api_token() -> Result<(), clap::Error> {
        let mut cli = parse(&["sites", "list"])?;
        cli.api_token = None;
        let err = dispatch(cli).await.err();
        assert!(
            matches!(err, Some(CliError::Validation(ref message)) if message.contains("missing API token"))
        );
        Ok(())
    }
}
