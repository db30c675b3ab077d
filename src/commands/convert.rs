use anyhow::Result;
use clap::{Args, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::converter::ConverterClient;
use crate::libs::config::Config;
use crate::libs::convert::{self, ImageTarget, IMAGE_INPUT_FORMATS};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};

/// Maximum upload size accepted by the conversion service.
const MAX_DOCX_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[command(subcommand)]
    command: ConvertCommand,
}

#[derive(Debug, Subcommand)]
enum ConvertCommand {
    #[command(about = "Render a text file as PDF")]
    TextToPdf {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    #[command(about = "Render a text file as a Word document")]
    TextToWord {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    #[command(about = "Convert an image to another format")]
    Image {
        input: PathBuf,
        /// Target format
        #[arg(long = "to", value_enum)]
        target: ImageTarget,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    #[command(about = "Convert a Word document to PDF via the conversion service")]
    WordToPdf {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn cmd(args: ConvertArgs) -> Result<()> {
    match args.command {
        ConvertCommand::TextToPdf { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("pdf"));
            let title = output.file_stem().and_then(|s| s.to_str()).unwrap_or("document").to_string();
            let text = convert::read_text(&input)?;
            convert::text_to_pdf(&title, &text, &output)?;
            msg_success!(Message::ConversionComplete(output.display().to_string()));
        }
        ConvertCommand::TextToWord { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("docx"));
            let text = convert::read_text(&input)?;
            convert::text_to_docx(&text, &output)?;
            msg_success!(Message::ConversionComplete(output.display().to_string()));
        }
        ConvertCommand::Image { input, target, output } => {
            let ext = extension(&input);
            if !IMAGE_INPUT_FORMATS.contains(&ext.as_str()) {
                msg_bail_anyhow!(Message::UnsupportedImageFormat(ext));
            }
            if target.matches_extension(&ext) {
                msg_bail_anyhow!(Message::SameFormatConversion(ext));
            }
            let output = output.unwrap_or_else(|| input.with_extension(target.extension()));
            convert::convert_image(&input, target, &output)?;
            msg_success!(Message::ConversionComplete(output.display().to_string()));
        }
        ConvertCommand::WordToPdf { input, output } => {
            if extension(&input) != "docx" {
                msg_bail_anyhow!(Message::NotADocxFile(input.display().to_string()));
            }
            let size = fs::metadata(&input)?.len();
            if size > MAX_DOCX_BYTES {
                msg_bail_anyhow!(Message::FileTooLarge(MAX_DOCX_BYTES / (1024 * 1024)));
            }

            let config = Config::read()?;
            let client = ConverterClient::new(&config.converter.unwrap_or_default());

            let file_name = input.file_name().and_then(|s| s.to_str()).unwrap_or("document.docx").to_string();
            let bytes = fs::read(&input)?;
            let pdf = client.docx_to_pdf(&file_name, bytes).await?;

            let output = output.unwrap_or_else(|| input.with_extension("pdf"));
            fs::write(&output, pdf)?;
            msg_success!(Message::ConversionComplete(output.display().to_string()));
        }
    }

    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase()
}
