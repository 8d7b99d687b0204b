use std::fmt;

#[derive(Debug)]
pub enum ExtractError {
    /// Input text does not reference the expected form host/path shape
    InvalidInputFormat(String),

    /// No extractable form identifier after exhausting every fallback
    MissingIdentifier(String),

    /// A link or candidate submission URL could not be parsed
    UrlParse {
        context: String,
        source: url::ParseError,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InvalidInputFormat(reason) => {
                write!(f, "Input does not look like a Google Form: {}", reason)
            }
            ExtractError::MissingIdentifier(context) => {
                write!(f, "Could not extract a form identifier: {}", context)
            }
            ExtractError::UrlParse { context, source } => {
                write!(f, "Failed to parse URL ({}): {}", context, source)
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::UrlParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
