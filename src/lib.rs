//! schema_audit library: Schema.org structured data and on-page SEO tooling
//!
//! This library works on a [`DocumentSnapshot`] of an HTML page and provides:
//! - validation of every JSON-LD schema against per-type rule sets
//! - detection of the page archetype and generation of a matching schema,
//!   optionally checked against an external validation API
//! - a weighted SEO audit covering meta tags, structured data, headings,
//!   images, links, performance and mobile friendliness
//!
//! # Example
//!
//! ```no_run
//! use schema_audit::{run_audit, validate_all_schemas, DocumentSnapshot};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let html = std::fs::read_to_string("page.html")?;
//! let snapshot = DocumentSnapshot::parse(&html, "https://example.com/page")?;
//!
//! let validation = validate_all_schemas(&snapshot);
//! println!("{} schema(s), valid: {}", validation.schema_results.len(), validation.valid);
//!
//! let report = run_audit(&snapshot);
//! println!("SEO score {}/100 with {} issue(s)", report.score, report.issues().len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Loading remote pages and calling the validation API are async and need a
//! Tokio runtime. Everything else is synchronous.

#![warn(missing_docs)]

pub mod audit;
pub mod config;
pub mod document;
mod error_handling;
pub mod generator;
pub mod initialization;
pub mod output;
mod parse;
pub mod rich_results;
mod utils;
pub mod validator;

// Re-export public API
pub use audit::{run_audit, AuditCategory, AuditItem, AuditReport, AuditStatus, Impact};
pub use config::{Cli, Command, Config, LogFormat, LogLevel, OutputFormat};
pub use document::{load_snapshot, DocumentSnapshot};
pub use error_handling::{InitializationError, SnapshotError, ValidationApiError};
pub use generator::{
    apply_auto_schema, detect_page_type_and_generate_schema, ApplyOptions, GeneratedSchemaInfo,
    HttpValidationApi, ValidationApi,
};
pub use run::{run_command, CommandOutcome};
pub use validator::{validate_all_schemas, validate_schema, AggregateValidation};

// Internal run module (dispatches CLI subcommands)
mod run {
    use anyhow::{Context, Result};
    use log::{info, warn};
    use url::Url;

    use crate::audit::{run_audit, AuditItem};
    use crate::config::{Cli, Command, Config, SourceArgs};
    use crate::document::{load_snapshot, DocumentSnapshot};
    use crate::generator::{apply_auto_schema, ApplyOptions, HttpValidationApi};
    use crate::initialization::init_client;
    use crate::output::{
        render_audit, render_generation, render_tools, render_types, render_validation,
        TypeEntry,
    };
    use crate::rich_results::{extract_schema_types, ToolLinks};
    use crate::validator::{validate_all_schemas, AggregateValidation};

    /// Rendered result of one CLI subcommand.
    #[derive(Debug, Clone)]
    pub struct CommandOutcome {
        /// Text to print on stdout
        pub output: String,
        /// `false` when the command should exit with status 1
        pub success: bool,
    }

    impl CommandOutcome {
        fn ok(output: String) -> Self {
            Self {
                output,
                success: true,
            }
        }
    }

    async fn load(
        page: &SourceArgs,
        client: &reqwest::Client,
    ) -> Result<DocumentSnapshot, crate::SnapshotError> {
        load_snapshot(&page.source, page.base_url.as_deref(), client).await
    }

    /// Runs the subcommand selected in `cli`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the HTTP client
    /// cannot be built, the page cannot be loaded (except for `validate`,
    /// which reports load failures as a system-error result), the `tools` URL
    /// does not parse, or JSON rendering fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clap::Parser;
    /// use schema_audit::{run_command, Cli};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let cli = Cli::parse_from(["schema_audit", "audit", "https://example.com/"]);
    /// let outcome = run_command(&cli).await?;
    /// print!("{}", outcome.output);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_command(cli: &Cli) -> Result<CommandOutcome> {
        let config = cli.to_config();
        config.validate().context("Invalid configuration")?;
        let format = config.output_format;

        match &cli.command {
            Command::Validate(page) => {
                let client = init_client(&config).context("Failed to initialize HTTP client")?;
                let (url, validation) = match load(page, &client).await {
                    Ok(snapshot) => (snapshot.url().to_string(), validate_all_schemas(&snapshot)),
                    Err(e) => {
                        warn!("Could not scan {}: {}", page.source, e);
                        (page.source.clone(), AggregateValidation::system_error(e.to_string()))
                    }
                };
                info!(
                    "Validated {} schema(s) on {} (valid={})",
                    validation.schema_results.len(),
                    url,
                    validation.valid
                );
                Ok(CommandOutcome {
                    output: render_validation(&url, &validation, format)?,
                    success: validation.valid,
                })
            }
            Command::Types(page) => {
                let client = init_client(&config).context("Failed to initialize HTTP client")?;
                let snapshot = load(page, &client)
                    .await
                    .with_context(|| format!("Failed to load {}", page.source))?;
                let entries = TypeEntry::from_types(&extract_schema_types(&snapshot));
                Ok(CommandOutcome::ok(render_types(
                    snapshot.url().as_str(),
                    &entries,
                    format,
                )?))
            }
            Command::Generate { page, validate, .. } => generate(&config, page, *validate).await,
            Command::Audit {
                page,
                category,
                status,
                issues_only,
            } => {
                let client = init_client(&config).context("Failed to initialize HTTP client")?;
                let snapshot = load(page, &client)
                    .await
                    .with_context(|| format!("Failed to load {}", page.source))?;
                let report = run_audit(&snapshot);
                let items: Vec<&AuditItem> = report
                    .filter(*category, *status)
                    .into_iter()
                    .filter(|item| !*issues_only || item.status.is_issue())
                    .collect();
                info!("Audit score for {}: {}/100", report.url, report.score);
                Ok(CommandOutcome::ok(render_audit(&report, &items, format)?))
            }
            Command::Tools { url } => {
                let parsed =
                    Url::parse(url).with_context(|| format!("'{}' is not an absolute URL", url))?;
                let links = ToolLinks::for_url(parsed.as_str());
                Ok(CommandOutcome::ok(render_tools(&links, format)?))
            }
        }
    }

    async fn generate(config: &Config, page: &SourceArgs, validate: bool) -> Result<CommandOutcome> {
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let mut snapshot = load(page, &client)
            .await
            .with_context(|| format!("Failed to load {}", page.source))?;
        let api = HttpValidationApi::new(client, config.validation_endpoint.clone());
        let options = ApplyOptions {
            validate,
            url: None,
            confidence: config.confidence,
        };

        let generated = apply_auto_schema(&mut snapshot, &api, &options).await;
        let scripts = snapshot.render_injected_scripts();
        Ok(CommandOutcome::ok(render_generation(
            snapshot.url().as_str(),
            generated.as_ref(),
            &scripts,
            config.output_format,
        )?))
    }
}
