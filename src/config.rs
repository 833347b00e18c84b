use crate::error::ScanError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "plate-reporter", version, about = "Reads a plate number from a photo and reports it")]
pub struct Args {
    /// Images to scan, processed one at a time
    pub images: Vec<PathBuf>,

    /// Report this plate instead of scanning images
    #[arg(long, conflicts_with = "images")]
    pub plate: Option<String>,

    /// Base URL of the plate API
    #[arg(long, env = "PLATE_API_URL", default_value = "https://your-server.com/api/")]
    pub api_url: String,

    /// OCR command line; `{image}` is replaced by the image path
    #[arg(long, env = "PLATE_OCR_COMMAND", default_value = "tesseract {image} stdout")]
    pub ocr_command: String,

    /// Request timeout in seconds
    #[arg(long, env = "PLATE_API_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub ocr_command: Vec<String>,
    pub timeout: Duration,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, ScanError> {
        let mut api_base = Url::parse(&args.api_url)
            .map_err(|e| ScanError::Config(format!("invalid API URL {:?}: {}", args.api_url, e)))?;
        if api_base.cannot_be_a_base() {
            return Err(ScanError::Config(format!(
                "API URL {:?} cannot be used as a base",
                args.api_url
            )));
        }
        // Relative joins drop the last segment unless the path ends in a slash.
        if !api_base.path().ends_with('/') {
            let path = format!("{}/", api_base.path());
            api_base.set_path(&path);
        }

        let ocr_command = shell_words::split(&args.ocr_command).map_err(|e| {
            ScanError::Config(format!("invalid OCR command {:?}: {}", args.ocr_command, e))
        })?;
        if ocr_command.is_empty() {
            return Err(ScanError::Config("OCR command is empty".to_string()));
        }

        Ok(Config {
            api_base,
            ocr_command,
            timeout: Duration::from_secs(args.timeout),
        })
    }
}
