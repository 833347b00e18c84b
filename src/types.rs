use serde::{Deserialize, Serialize};
use std::fmt;

/// A plate read off an image: four digits and three letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateCandidate {
    pub digits: String,
    pub letters: String,
}

impl fmt::Display for PlateCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.digits, self.letters)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateRequest<'a> {
    pub plate_number: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    Accepted,
    NotFound,
}

/// What the user is told at the end of one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success,
    NotFound,
    NoPlate,
    RecognitionFailed(String),
    NetworkError(String),
    ServerError(String),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Success => "Plate number sent successfully",
            Notice::NotFound => "Plate number not found",
            Notice::NoPlate => "No valid plate number detected",
            Notice::RecognitionFailed(_) => "Text recognition failed",
            Notice::NetworkError(_) => "Network error, please try again",
            Notice::ServerError(_) => "Server error, please try again",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::Success | Notice::NotFound)
    }

    /// Underlying reason, if the notice carries one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Notice::RecognitionFailed(r) | Notice::NetworkError(r) | Notice::ServerError(r) => {
                Some(r)
            }
            _ => None,
        }
    }
}
