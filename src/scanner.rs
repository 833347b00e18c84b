use crate::api::ApiClient;
use crate::error::ScanError;
use crate::extractor::{clean_plate_text, extract_plate, is_valid_plate};
use crate::recognizer::TextRecognizer;
use crate::types::{Notice, PostOutcome};
use log::{debug, info};
use std::path::Path;

/// Runs one attempt per image: OCR, then extraction, then the POST.
pub struct Scanner<R> {
    recognizer: R,
    api: ApiClient,
}

impl<R: TextRecognizer> Scanner<R> {
    pub fn new(recognizer: R, api: ApiClient) -> Self {
        Scanner { recognizer, api }
    }

    pub async fn scan_image(&self, image: &Path) -> Notice {
        info!("Scanning image {:?}", image);
        let blocks = match self.recognizer.recognize(image).await {
            Ok(blocks) => blocks,
            Err(e) => return Notice::RecognitionFailed(e.to_string()),
        };
        debug!("Recognized blocks: {:?}", blocks);
        match extract_plate(&blocks) {
            Some(plate) => {
                info!("Detected plate {}", plate);
                self.send(&plate.to_string()).await
            }
            None => Notice::NoPlate,
        }
    }

    /// Reports a plate typed in by hand instead of read from an image.
    pub async fn report_plate(&self, text: &str) -> Notice {
        let cleaned = clean_plate_text(text);
        if !is_valid_plate(&cleaned) {
            debug!("Rejected manual plate {:?}", cleaned);
            return Notice::NoPlate;
        }
        match extract_plate(Some(&cleaned)) {
            Some(plate) => self.send(&plate.to_string()).await,
            None => Notice::NoPlate,
        }
    }

    async fn send(&self, plate: &str) -> Notice {
        match self.api.post_plate(plate).await {
            Ok(PostOutcome::Accepted) => Notice::Success,
            Ok(PostOutcome::NotFound) => Notice::NotFound,
            Err(e @ ScanError::Network(_)) => Notice::NetworkError(e.to_string()),
            Err(e) => Notice::ServerError(e.to_string()),
        }
    }
}
