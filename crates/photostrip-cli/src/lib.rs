use anyhow::Context;
use clap::ValueEnum;
use photostrip_core::{LayoutSpec, StripConfig, Theme};
use photostrip_processing::{HeaderSpec, OutputFormat, StripStyle};
use serde::Serialize;
use std::path::Path;

/// Which strip arrangement the `strip` command renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LayoutKind {
    /// Configured single column, no header
    #[default]
    Classic,
    /// Title band on top; six photos go into a two-column grid
    Themed,
}

/// What gets printed after a file is written.
#[derive(Debug, Serialize)]
pub struct WriteSummary {
    pub output: String,
    pub width: u32,
    pub height: u32,
    pub content_type: &'static str,
    pub size_bytes: usize,
}

/// Explicit `--format` wins, otherwise the output file extension decides.
pub fn resolve_format(output: &Path, explicit: Option<&str>) -> anyhow::Result<OutputFormat> {
    if let Some(name) = explicit {
        return OutputFormat::parse(name).map_err(anyhow::Error::from);
    }
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .with_context(|| format!("Cannot infer format from {}; pass --format", output.display()))?;
    OutputFormat::from_extension(ext).map_err(anyhow::Error::from)
}

/// Layout and style for a strip of `count` photos.
pub fn build_strip(
    config: &StripConfig,
    kind: LayoutKind,
    theme: Theme,
    count: usize,
    font_path: Option<&Path>,
    title: Option<&str>,
) -> anyhow::Result<(LayoutSpec, StripStyle)> {
    match kind {
        LayoutKind::Classic => Ok((config.column_layout(), StripStyle::from_theme(theme))),
        LayoutKind::Themed => {
            let mut header = HeaderSpec::new(theme.text_color());
            if let Some(title) = title {
                header = header.with_title(title);
            }
            if let Some(path) = font_path.or(config.font_path.as_deref()) {
                let font = HeaderSpec::load_font_file(path)
                    .with_context(|| format!("Failed to load font {}", path.display()))?;
                header = header.with_font(font);
            }
            Ok((
                LayoutSpec::themed(count, theme),
                StripStyle::from_theme(theme).with_header(header),
            ))
        }
    }
}

pub fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize summary")?;
    println!("{}", out);
    Ok(())
}

/// Initialize tracing for the CLI.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("photostrip=info")),
        )
        .init();
}
