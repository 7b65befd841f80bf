use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Unknown demo scenario: {id}")]
    UnknownDemo { id: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Analysis backend errors
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Analysis service unavailable: {message}")]
    Unavailable { message: String },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Input rejected before any network call is made
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter some text to analyze.")]
    EmptyText,

    #[error("Text is too long. Please limit to {max} characters.")]
    TextTooLong { length: usize, max: usize },

    #[error("Please enter a URL to analyze.")]
    EmptyUrl,

    #[error("Please enter a valid URL (e.g., https://example.com).")]
    InvalidUrl { url: String },

    #[error("Please select an image to analyze.")]
    MissingImage,

    #[error("Image file is too large. Please select an image smaller than {max_mb}MB.", max_mb = .max / (1024 * 1024))]
    ImageTooLarge { size: u64, max: u64 },

    #[error("Please select a valid image file.")]
    NotAnImage { content_type: String },
}

/// Errors loading an analysis record from outside the process
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to read record: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-section render failures.
///
/// The dispatcher records these in the outcome of a render pass; they
/// never abort the pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Render target '{target}' not found for section {section}")]
    MissingTarget { section: String, target: String },

    #[error("Surface '{target}' rejected primitive: {message}")]
    Surface { target: String, message: String },
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for analysis backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Result type alias for input validation
pub type InputResult<T> = Result<T, InputError>;
