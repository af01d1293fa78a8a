//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};

use crate::audit::{AuditCategory, AuditStatus};
use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_VALIDATION_ENDPOINT};
use crate::config::types::{Config, LogFormat, LogLevel, OutputFormat};

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Validate the JSON-LD of a live page
/// schema_audit validate https://example.com/product/42
///
/// # Audit a saved file as if it were served from its real URL
/// schema_audit audit page.html --base-url https://example.com/page --issues-only
///
/// # Generate a schema and check it against the validation API
/// schema_audit --output json generate https://example.com/recipe --validate
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "schema_audit",
    version,
    about = "Validates, generates and audits Schema.org structured data and on-page SEO."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Result format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    pub output: OutputFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Page to operate on.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// HTML file path or http(s) URL
    pub source: String,

    /// Page URL to assume for a file source (defaults to its file:// URL)
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate every JSON-LD schema on the page (exit code 1 when invalid)
    Validate(SourceArgs),

    /// List the schema types present on the page with documentation links
    Types(SourceArgs),

    /// Detect the page type and inject an auto-generated schema
    Generate {
        /// Page to generate for
        #[command(flatten)]
        page: SourceArgs,

        /// Round-trip the generated schema through the validation API
        #[arg(long)]
        validate: bool,

        /// Validation API endpoint
        #[arg(long, default_value = DEFAULT_VALIDATION_ENDPOINT)]
        validation_url: String,
    },

    /// Run the SEO audit
    Audit {
        /// Page to audit
        #[command(flatten)]
        page: SourceArgs,

        /// Only list items of this category
        #[arg(long, value_enum)]
        category: Option<AuditCategory>,

        /// Only list items with this status
        #[arg(long, value_enum)]
        status: Option<AuditStatus>,

        /// Only list failed and warning items
        #[arg(long)]
        issues_only: bool,
    },

    /// Print links to external testing tools for a URL
    Tools {
        /// Page URL
        url: String,
    },
}

impl Cli {
    /// Library configuration for these options.
    pub fn to_config(&self) -> Config {
        let validation_endpoint = match &self.command {
            Command::Generate { validation_url, .. } => validation_url.clone(),
            _ => DEFAULT_VALIDATION_ENDPOINT.to_string(),
        };
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            output_format: self.output,
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            validation_endpoint,
            ..Default::default()
        }
    }
}
