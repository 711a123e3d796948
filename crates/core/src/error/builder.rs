use super::Error;

/// Builder for creating errors with a fluent API
pub struct ErrorBuilder;

impl ErrorBuilder {
    /// Local parameter validation errors
    pub fn validation() -> ValidationErrorBuilder {
        ValidationErrorBuilder
    }

    /// Errors describing a server response
    pub fn response() -> ResponseErrorBuilder {
        ResponseErrorBuilder
    }

    /// Local file errors
    pub fn file() -> FileErrorBuilder {
        FileErrorBuilder
    }

    /// Base API error
    pub fn api(message: impl Into<String>) -> Error {
        Error::api(message)
    }
}

pub struct ValidationErrorBuilder;

impl ValidationErrorBuilder {
    pub fn invalid(self, message: impl Into<String>) -> Error {
        Error::parameter(message)
    }

    pub fn required(self, what: &str) -> Error {
        Error::parameter(format!("{what} required"))
    }

    pub fn empty_api_key(self) -> Error {
        Error::EmptyApiKey
    }
}

pub struct ResponseErrorBuilder;

impl ResponseErrorBuilder {
    pub fn status(self, status: u16, body: impl Into<String>) -> Error {
        Error::from_status(status, body)
    }

    pub fn undecodable(self, source: serde_json::Error) -> Error {
        Error::unparsable("Could not parse API response", Some(source))
    }

    pub fn wrong_root(self) -> Error {
        Error::unparsable("Could not find the correct root element", None)
    }
}

pub struct FileErrorBuilder;

impl FileErrorBuilder {
    pub fn cannot_open(self, source: Option<std::io::Error>) -> Error {
        Error::file("Cannot open output file", source)
    }

    pub fn cannot_write(self, source: std::io::Error) -> Error {
        Error::file("Cannot write result to file", Some(source))
    }
}
