//! Binary entry point for `jira-notifier`.
//!
//! This module provides the command-line interface, sets up logging, and maps
//! failures to exit codes. Every flag can also come from an environment
//! variable; flags win.

use clap::{CommandFactory, Parser};
use jira_notifier::base::{
    config::{Config, Overrides},
    error::NotifierError,
    types::Void,
};
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use tracing::error;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Jira-notifier – post Jira issues matching a JQL query to a Slack channel.
///
/// Each value can be given as a flag or through the environment variable
/// named in its description; the flag takes precedence.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Jira API token (`API_TOKEN`).
    #[arg(long = "api-token")]
    api_token: Option<String>,
    /// Jira user email (`USER_EMAIL`).
    #[arg(long = "user")]
    user: Option<String>,
    /// Jira Query Language (JQL) query (`JQL`).
    #[arg(long)]
    jql: Option<String>,
    /// Jira instance URL (`JIRA_URL`).
    #[arg(long = "jira-url")]
    jira_url: Option<String>,
    /// Slack app token (`SLACK_TOKEN`).
    #[arg(long = "slack-token")]
    slack_token: Option<String>,
    /// Slack channel (`SLACK_CHANNEL`).
    #[arg(long = "slack-channel")]
    slack_channel: Option<String>,
    /// Slack message title (`SLACK_MSG_TITLE`).
    #[arg(long = "slack-msg-title")]
    slack_msg_title: Option<String>,
    /// Override the config file path (optional).
    ///
    /// By default, `.hidden/config.toml` in the current directory is read if
    /// it exists.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            api_token: self.api_token.clone(),
            user_email: self.user.clone(),
            jql: self.jql.clone(),
            jira_url: self.jira_url.clone(),
            slack_token: self.slack_token.clone(),
            slack_channel: self.slack_channel.clone(),
            slack_msg_title: self.slack_msg_title.clone(),
        }
    }
}

/// Main entry point for the jira-notifier binary.
///
/// Sets up logging based on verbosity, loads configuration, and runs once.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.

    let stdout = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    // Prepare the otlp layer, only when a collector is configured.

    let otel = if std::env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_some() {
        let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
        let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("jira-notifier");
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(stdout).init();

    // Load the configuration; missing values print usage and exit 1.

    let config = match Config::load(args.config.as_deref(), args.overrides()) {
        Ok(config) => config,
        Err(e) => match e.downcast_ref::<NotifierError>() {
            Some(err) if err.is_configuration() => {
                println!("{}", err);
                println!("{}", Args::command().render_help());
                std::process::exit(1);
            }
            _ => return Err(e),
        },
    };

    if let Err(e) = jira_notifier::start(config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
