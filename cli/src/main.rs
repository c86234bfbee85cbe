//! CLI entrypoint for stylegen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use stylegen_application::{
    NoNotifier, SubmissionNotifier, SubmissionPolicy, SubmitError, SubmitFormUseCase,
};
use stylegen_domain::{AdGraphicsForm, FormField, StyleVariationForm, WebhookForm};
use stylegen_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, ReqwestWebhookGateway, load_image_file,
};
use stylegen_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, SimpleNotifier, SubmissionReport,
    SubmissionReporter,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Exit status when the form did not pass validation
const EXIT_INVALID: u8 = 2;
/// Exit status after Ctrl-C
const EXIT_CANCELLED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    info!("Starting stylegen");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command.as_ref() else {
        bail!("A form is required. Use `stylegen style` or `stylegen ad` (see --help).");
    };

    let config = load_config(&cli)?;
    ConsoleFormatter::set_color(config.output.color);

    let format = cli.output.unwrap_or(match config.output.format {
        Some(FileOutputFormat::Json) => OutputFormat::Json,
        _ => OutputFormat::Text,
    });

    let policy = if cli.no_timeout {
        SubmissionPolicy::without_timeout()
    } else {
        config.submission.to_policy()
    };

    // === Dependency Injection ===
    let kind = command.kind();
    let mut gateway = ReqwestWebhookGateway::new()?.with_config(&config.webhooks)?;
    if let Some(url) = &cli.endpoint {
        gateway = gateway.with_endpoint(kind, url)?;
    }
    if gateway.endpoint(kind).is_none() {
        bail!(
            "No webhook configured for {} submissions. Set it in stylegen.toml or pass --endpoint.",
            kind
        );
    }
    let gateway = Arc::new(gateway);

    let token = CancellationToken::new();
    {
        let token = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, aborting submission");
                token.cancel();
            }
        });
    }

    let session = Session {
        command,
        gateway,
        policy,
        token,
        format,
        quiet: cli.quiet,
    };

    match command {
        Command::Style(_) => session.submit::<StyleVariationForm>().await,
        Command::Ad(_) => session.submit::<AdGraphicsForm>().await,
    }
}

fn init_logging(verbose: u8) {
    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;
    Ok(config)
}

/// Everything one CLI invocation needs to fill and submit a form
struct Session<'a> {
    command: &'a Command,
    gateway: Arc<ReqwestWebhookGateway>,
    policy: SubmissionPolicy,
    token: CancellationToken,
    format: OutputFormat,
    quiet: bool,
}

impl Session<'_> {
    async fn submit<F: WebhookForm>(self) -> Result<ExitCode> {
        let use_case = SubmitFormUseCase::<F, _>::new(self.gateway)
            .with_policy(self.policy)
            .with_cancellation(self.token);

        if let Some(path) = self.command.image_path() {
            let file = load_image_file(path)
                .await
                .with_context(|| format!("Failed to load --image {}", path.display()))?;
            use_case.on_field_change(FormField::Image, file.into())?;
        }
        for (field, value) in self.command.field_values() {
            use_case.on_field_change(field, value)?;
        }

        let notifier: Box<dyn SubmissionNotifier> = match (self.format, self.quiet) {
            (OutputFormat::Json, _) | (_, true) => Box::new(NoNotifier),
            (OutputFormat::Text, false) if verbose_progress() => Box::new(SimpleNotifier),
            (OutputFormat::Text, false) => Box::new(SubmissionReporter::new()),
        };

        let outcome = use_case.on_submit_with_notifier(notifier.as_ref()).await;

        let form = use_case.form();
        let lifecycle = use_case.lifecycle();
        let errors = outcome.as_ref().err().and_then(SubmitError::validation_errors);

        match self.format {
            OutputFormat::Json => {
                let report = SubmissionReport {
                    form: form.kind(),
                    email: form.email(),
                    lifecycle: &lifecycle,
                    errors,
                };
                println!("{}", ConsoleFormatter::format_json(&report));
            }
            OutputFormat::Text => match errors {
                Some(errors) => eprint!("{}", ConsoleFormatter::format_validation(errors)),
                None => print!(
                    "{}",
                    ConsoleFormatter::format(form.kind(), &lifecycle, form.email())
                ),
            },
        }

        Ok(match outcome {
            Ok(_) => ExitCode::SUCCESS,
            Err(SubmitError::Validation(_)) => ExitCode::from(EXIT_INVALID),
            Err(SubmitError::Cancelled) => ExitCode::from(EXIT_CANCELLED),
            Err(e) => {
                info!("Submission ended with error: {}", e);
                ExitCode::FAILURE
            }
        })
    }
}

/// Spinners garble interleaved log lines, so fall back to plain progress
/// when debug logging is on
fn verbose_progress() -> bool {
    tracing::enabled!(tracing::Level::DEBUG)
}
