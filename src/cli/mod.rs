//! Command-line interface.
//!
//! Every command returns a [`CliResult`]; `main` prints the message and
//! exits with its code. JSON output goes to stdout or to `--out`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::backend::{AnalysisBackend, AnalysisClient, AnalysisRequest, ImagePayload, InputValidator};
use crate::config::Config;
use crate::dashboard::{Dashboard, DashboardView};
use crate::demos::{DemoRegistry, DemoRunner};
use crate::error::AppError;
use crate::notice::UserNotice;
use crate::record::load_envelope;
use crate::render::{RenderDispatcher, RenderTargetSet, SectionId};
use crate::viz::build_summary;

/// Misinformation-risk dashboard.
#[derive(Parser, Debug)]
#[command(name = "misinfo-dashboard", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render a saved analysis response or record
    Render {
        /// Path to the JSON file
        path: PathBuf,

        /// Mount point or section name to leave out of the target set (repeatable)
        #[arg(long = "missing", value_name = "TARGET")]
        missing: Vec<String>,

        /// Write the JSON output here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Analyze content with the analysis service
    Analyze {
        #[command(subcommand)]
        input: AnalyzeInput,

        /// Write the JSON output here instead of stdout
        #[arg(long, global = true)]
        out: Option<PathBuf>,
    },

    /// List or run demo scenarios
    Demo {
        #[command(subcommand)]
        command: DemoCommands,
    },

    /// Check that the analysis service is up
    Health,

    /// Show general guidance from the analysis service
    Tips,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AnalyzeInput {
    /// Analyze a piece of text
    Text { text: String },

    /// Analyze a web page
    Url { url: String },

    /// Analyze an image file
    Image {
        path: PathBuf,

        /// MIME type; guessed from the extension when omitted
        #[arg(long)]
        content_type: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum DemoCommands {
    /// List the available scenarios
    List,

    /// Run one scenario against the analysis service
    Run { id: String },
}

/// Result of CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    /// Exit code (0 = success)
    pub exit_code: i32,
    pub message: String,
}

impl CliResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            message: message.into(),
        }
    }
}

/// Services the commands run against.
pub struct CliContext {
    config: Config,
    backend: Arc<dyn AnalysisBackend>,
}

impl CliContext {
    pub fn new(config: Config, backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { config, backend }
    }

    /// Context backed by the HTTP client described by `config`.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let client = AnalysisClient::new(&config.backend, config.request.clone())?;
        Ok(Self::new(config, Arc::new(client)))
    }

    fn dispatcher(&self) -> RenderDispatcher {
        RenderDispatcher::new(self.config.theme.clone())
    }

    fn dashboard(&self) -> Dashboard {
        Dashboard::new(
            Arc::clone(&self.backend),
            InputValidator::new(self.config.limits.clone()),
            self.dispatcher(),
        )
    }
}

/// Execute a CLI command.
pub async fn execute_command(command: Commands, ctx: &CliContext) -> CliResult {
    match command {
        Commands::Render { path, missing, out } => execute_render(ctx, &path, &missing, out).await,
        Commands::Analyze { input, out } => execute_analyze(ctx, input, out).await,
        Commands::Demo { command } => match command {
            DemoCommands::List => execute_demo_list(),
            DemoCommands::Run { id } => execute_demo_run(ctx, &id).await,
        },
        Commands::Health => execute_health(ctx).await,
        Commands::Tips => execute_tips(ctx).await,
    }
}

async fn execute_render(
    ctx: &CliContext,
    path: &Path,
    missing: &[String],
    out: Option<PathBuf>,
) -> CliResult {
    let envelope = match load_envelope(path).await {
        Ok(e) => e,
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to load record");
            return CliResult::error(e.to_string());
        }
    };

    let mut targets = RenderTargetSet::standard();
    for name in missing {
        match missing_target(&targets, name) {
            Some(target) => {
                targets.remove(&target);
            }
            None => {
                warn!(name = %name, "Unknown render target");
                return CliResult::error(format!(
                    "Unknown render target '{}'. Expected one of: {}",
                    name,
                    known_targets()
                ));
            }
        }
    }

    let dispatcher = ctx.dispatcher();
    let view = DashboardView {
        summary: build_summary(&envelope, dispatcher.mapper()),
        sections: Some(dispatcher.render(envelope.record(), &mut targets)),
    };
    emit(&view, out).await
}

/// Mount point named by a `--missing` value: either the mount point itself
/// or a section name such as `timeline`.
fn missing_target(targets: &RenderTargetSet, name: &str) -> Option<String> {
    if targets.contains(name) {
        return Some(name.to_string());
    }
    name.parse::<SectionId>()
        .ok()
        .map(|section| section.default_target().to_string())
}

fn known_targets() -> String {
    SectionId::ALL
        .iter()
        .map(|section| format!("{} ({})", section.default_target(), section))
        .collect::<Vec<_>>()
        .join(", ")
}

async fn execute_analyze(ctx: &CliContext, input: AnalyzeInput, out: Option<PathBuf>) -> CliResult {
    let request = match input {
        AnalyzeInput::Text { text } => AnalysisRequest::Text(text),
        AnalyzeInput::Url { url } => AnalysisRequest::Url(url),
        AnalyzeInput::Image { path, content_type } => match read_image(&path, content_type).await {
            Ok(image) => AnalysisRequest::Image(image),
            Err(message) => return CliResult::error(message),
        },
    };

    let mut targets = RenderTargetSet::standard();
    match ctx.dashboard().analyze(request, &mut targets).await {
        Ok(report) => emit(&report.view, out).await,
        Err(e) => CliResult::error(UserNotice::from_error(&e).message),
    }
}

fn execute_demo_list() -> CliResult {
    let registry = DemoRegistry::new();
    let mut output = String::from("Demo scenarios\n\n");
    for demo in registry.list() {
        output.push_str(&format!(
            "  {:<20} {:>3}%  {:<26} {}\n",
            demo.id, demo.expected_risk, demo.category, demo.preview
        ));
    }
    CliResult::success(output)
}

async fn execute_demo_run(ctx: &CliContext, id: &str) -> CliResult {
    let runner = DemoRunner::new(DemoRegistry::new(), ctx.dashboard());
    let mut targets = RenderTargetSet::standard();

    match runner.run(id, &mut targets).await {
        Ok(run) => {
            let succeeded = run.succeeded();
            let mut result = emit(&run, None).await;
            if !succeeded {
                result.exit_code = 1;
            }
            result
        }
        Err(e) => CliResult::error(e.to_string()),
    }
}

async fn execute_health(ctx: &CliContext) -> CliResult {
    match ctx.backend.health().await {
        Ok(health) if health.is_healthy() => CliResult::success(format!(
            "Analysis service is healthy{}",
            health.message.map(|m| format!(": {}", m)).unwrap_or_default()
        )),
        Ok(health) => CliResult::error(format!("Analysis service reported status '{}'", health.status)),
        Err(e) => CliResult::error(format!("Analysis service unreachable: {}", e)),
    }
}

async fn execute_tips(ctx: &CliContext) -> CliResult {
    let tips = match ctx.backend.educational_tips().await {
        Ok(t) => t,
        Err(e) => return CliResult::error(UserNotice::from_error(&AppError::from(e)).message),
    };

    let mut output = String::new();
    for (title, items) in [
        ("General tips", &tips.general_tips),
        ("Common red flags", &tips.red_flags),
        ("Verification steps", &tips.verification_steps),
    ] {
        if items.is_empty() {
            continue;
        }
        output.push_str(&format!("{}\n", title));
        for item in items {
            output.push_str(&format!("  - {}\n", item));
        }
        output.push('\n');
    }
    CliResult::success(output)
}

async fn read_image(path: &Path, content_type: Option<String>) -> Result<ImagePayload, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read image {}: {}", path.display(), e))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let content_type = content_type.unwrap_or_else(|| guess_image_type(path).to_string());
    Ok(ImagePayload::new(filename, content_type, bytes))
}

/// MIME type for the image extensions the analysis service accepts.
pub fn guess_image_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

async fn emit<T: Serialize>(value: &T, out: Option<PathBuf>) -> CliResult {
    let json = match serde_json::to_string_pretty(value) {
        Ok(j) => j,
        Err(e) => return CliResult::error(format!("Failed to serialize output: {}", e)),
    };

    match out {
        Some(path) => match tokio::fs::write(&path, json).await {
            Ok(()) => {
                info!(path = %path.display(), "Output written");
                CliResult::success(format!("Wrote {}", path.display()))
            }
            Err(e) => CliResult::error(format!("Failed to write {}: {}", path.display(), e)),
        },
        None => CliResult::success(json),
    }
}
