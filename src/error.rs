use failure::Fail;

#[derive(Debug, Fail)]
pub enum ScanError {
    #[fail(display = "Invalid configuration: {}", _0)]
    Config(String),
    #[fail(display = "Image processing failed: {}", _0)]
    Image(String),
    #[fail(display = "Text recognition failed: {}", _0)]
    Recognition(String),
    #[fail(display = "Network error: {}", _0)]
    Network(String),
    #[fail(display = "{}", _0)]
    Server(String),
}

impl From<reqwest::Error> for ScanError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            ScanError::Config(e.to_string())
        } else {
            ScanError::Network(e.to_string())
        }
    }
}

impl From<image::ImageError> for ScanError {
    fn from(e: image::ImageError) -> Self {
        ScanError::Image(e.to_string())
    }
}
