use crate::error::ScanError;
use async_trait::async_trait;
use image::imageops::FilterType;
use image::ImageFormat;
use log::debug;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::process::Command;

const MAX_DIMENSION: u32 = 2048;
const IMAGE_PLACEHOLDER: &str = "{image}";

/// Turns an image into text blocks, in reading order.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: &Path) -> Result<Vec<String>, ScanError>;
}

/// Runs an external OCR program (tesseract by default) and reads its stdout.
pub struct CommandRecognizer {
    argv: Vec<String>,
}

impl CommandRecognizer {
    pub fn new(argv: Vec<String>) -> Self {
        CommandRecognizer { argv }
    }

    fn command_for(&self, image: &Path) -> Result<Command, ScanError> {
        if self.argv.is_empty() {
            return Err(ScanError::Recognition("OCR command is empty".to_string()));
        }
        let image = image.to_string_lossy();
        let mut parts: Vec<String> = self
            .argv
            .iter()
            .map(|part| part.replace(IMAGE_PLACEHOLDER, &image))
            .collect();
        if !self.argv.iter().any(|part| part.contains(IMAGE_PLACEHOLDER)) {
            parts.push(image.into_owned());
        }
        debug!("Running OCR command {:?}", parts);
        let mut command = Command::new(&parts[0]);
        command.args(&parts[1..]);
        Ok(command)
    }

    async fn run(&self, prepared: &Path) -> Result<Vec<String>, ScanError> {
        let output = self
            .command_for(prepared)?
            .output()
            .await
            .map_err(|e| ScanError::Recognition(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScanError::Recognition(format!(
                "OCR command exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        let text = String::from_utf8(output.stdout)
            .map_err(|_| ScanError::Recognition("OCR output is not UTF-8".to_string()))?;
        let blocks = split_blocks(&text);
        debug!("OCR produced {} text blocks", blocks.len());
        Ok(blocks)
    }
}

#[async_trait]
impl TextRecognizer for CommandRecognizer {
    async fn recognize(&self, image: &Path) -> Result<Vec<String>, ScanError> {
        let source = image.to_path_buf();
        let prepared = tokio::task::spawn_blocking(move || prepare_image(&source))
            .await
            .map_err(|e| ScanError::Image(e.to_string()))??;
        // Dropping `prepared` removes the temporary PNG.
        self.run(prepared.path()).await
    }
}

/// Decodes the image and writes a grayscale PNG copy for the OCR program.
fn prepare_image(source: &Path) -> Result<NamedTempFile, ScanError> {
    let mut img = image::open(source)?;
    if img.width() > MAX_DIMENSION || img.height() > MAX_DIMENSION {
        img = img.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Triangle);
    }
    let mut prepared = tempfile::Builder::new()
        .prefix("plate-")
        .suffix(".png")
        .tempfile()
        .map_err(|e| ScanError::Image(e.to_string()))?;
    let mut writer = BufWriter::new(prepared.as_file_mut());
    img.grayscale().write_to(&mut writer, ImageFormat::Png)?;
    writer
        .flush()
        .map_err(|e| ScanError::Image(e.to_string()))?;
    drop(writer);
    debug!("Prepared OCR image {:?}", prepared.path());
    Ok(prepared)
}

/// Splits OCR output into blocks at blank lines.
pub fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
        .into_iter()
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .collect()
}
