//! Photostrip CLI: crop photos to squares and composite them into strips.
//!
//! Defaults come from PHOTOSTRIP_* environment variables (or a .env file);
//! flags override them.

use anyhow::Context;
use bytes::Bytes;
use clap::{Parser, Subcommand};
use photostrip_cli::{
    build_strip, init_tracing, print_json, resolve_format, LayoutKind, WriteSummary,
};
use photostrip_core::{CropRectangle, StripConfig, Theme};
use photostrip_processing::{
    DecodeOptions, EncodeOptions, EncodedImage, ImageDecoder, SquareCropper, StripCompositor,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "photostrip", about = "Photo booth strip renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crop one photo to a square
    Crop {
        input: PathBuf,
        output: PathBuf,
        /// Output side length in pixels
        #[arg(long)]
        size: Option<u32>,
        /// Manual crop rectangle as x,y,w,h; centered square when omitted
        #[arg(long)]
        rect: Option<String>,
        /// png, jpeg or webp; inferred from OUTPUT when omitted
        #[arg(long)]
        format: Option<String>,
    },
    /// Composite photos into a strip, in the order given
    Strip {
        output: PathBuf,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        #[arg(long)]
        theme: Option<Theme>,
        #[arg(long, value_enum, default_value_t = LayoutKind::Classic)]
        layout: LayoutKind,
        #[arg(long)]
        format: Option<String>,
        /// TTF/OTF used for the header text of themed strips
        #[arg(long)]
        font: Option<PathBuf>,
        #[arg(long)]
        title: Option<String>,
    },
    /// Print dimensions, format and EXIF orientation of a photo
    Inspect { input: PathBuf },
}

async fn read_file(path: &Path) -> anyhow::Result<Bytes> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Bytes::from(data))
}

async fn write_output(path: &Path, encoded: &EncodedImage) -> anyhow::Result<()> {
    tokio::fs::write(path, &encoded.data)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    print_json(&WriteSummary {
        output: path.display().to_string(),
        width: encoded.width,
        height: encoded.height,
        content_type: encoded.content_type,
        size_bytes: encoded.data.len(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = StripConfig::from_env().context("Invalid PHOTOSTRIP_* configuration")?;
    let decode = DecodeOptions {
        autorotate: config.autorotate,
    };

    let cli = Cli::parse();

    match cli.command {
        Commands::Crop {
            input,
            output,
            size,
            rect,
            format,
        } => {
            let size = size.unwrap_or(config.square_size);
            let encode = EncodeOptions::from(resolve_format(&output, format.as_deref())?)
                .with_jpeg_quality(config.jpeg_quality);
            let data = read_file(&input).await?;

            let encoded = match rect {
                Some(rect) => {
                    let rect = CropRectangle::parse(&rect)?;
                    SquareCropper::crop_bytes_to_rectangle(&data, &rect, size, decode, encode)?
                }
                None => SquareCropper::crop_bytes_to_square(&data, size, decode, encode)?,
            };
            write_output(&output, &encoded).await?;
        }
        Commands::Strip {
            output,
            inputs,
            theme,
            layout,
            format,
            font,
            title,
        } => {
            let theme = theme.unwrap_or(config.theme);
            let encode = EncodeOptions::from(resolve_format(&output, format.as_deref())?)
                .with_jpeg_quality(config.jpeg_quality);
            let (layout, style) = build_strip(
                &config,
                layout,
                theme,
                inputs.len(),
                font.as_deref(),
                title.as_deref(),
            )?;

            let mut sources = Vec::with_capacity(inputs.len());
            for path in &inputs {
                sources.push(read_file(path).await?);
            }

            let decoded = ImageDecoder::decode_all_concurrent(sources, decode).await?;
            let squares = decoded
                .iter()
                .map(|img| SquareCropper::crop_to_square(img, config.square_size))
                .collect::<Result<Vec<_>, _>>()?;

            tracing::debug!(count = squares.len(), theme = %theme, "Rendering strip");
            let encoded = StripCompositor::composite(&squares, &layout, &style, encode)?;
            write_output(&output, &encoded).await?;
        }
        Commands::Inspect { input } => {
            let data = read_file(&input).await?;
            let metadata = ImageDecoder::inspect(&data)?;
            print_json(&metadata)?;
        }
    }

    Ok(())
}
