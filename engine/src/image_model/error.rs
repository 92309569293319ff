use std::error::Error as StdError;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Everything that can go wrong between sending a generation request and
/// holding the image urls.
///
/// Each variant displays as the bare failure description, on a single line.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{}", with_sources(.0))]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Authentication { message: String },

    #[error("{message}")]
    Service {
        status: StatusCode,
        kind: Option<String>,
        message: String,
    },

    #[error("{message}")]
    MalformedResponse { message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl GenerationError {
    /// Builds the error for a non-success response.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let (kind, message) = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error }) => (error.kind, single_line(&error.message)),
            Err(_) if body.trim().is_empty() => (None, status.to_string()),
            Err(_) => (None, single_line(body)),
        };

        if status == StatusCode::UNAUTHORIZED {
            Self::Authentication { message }
        } else {
            Self::Service {
                status,
                kind,
                message,
            }
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }
}

/// Joins all whitespace runs, line breaks included, into single spaces.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `err` followed by each of its causes that adds something new.
fn with_sources(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    single_line(&message)
}

#[cfg(test)]
mod test {
    use std::io;

    use super::*;

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct Outer(#[source] Middle);

    #[derive(Debug, Error)]
    #[error("client error (Connect)")]
    struct Middle(#[source] io::Error);

    #[test]
    fn unauthorized_is_authentication() {
        let body = r#"{"error": {"message": "Incorrect API key provided: sk-xx.", "type": "invalid_request_error", "code": "invalid_api_key"}}"#;
        let err = GenerationError::from_response(StatusCode::UNAUTHORIZED, body);
        assert!(matches!(err, GenerationError::Authentication { .. }));
        assert_eq!(err.to_string(), "Incorrect API key provided: sk-xx.");
    }

    #[test]
    fn error_payload_is_unwrapped() {
        let body = r#"{"error": {"message": "rate limited", "type": "requests", "param": null, "code": null}}"#;
        let err = GenerationError::from_response(StatusCode::TOO_MANY_REQUESTS, body);
        let GenerationError::Service {
            status,
            kind,
            message,
        } = &err
        else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(*status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(kind.as_deref(), Some("requests"));
        assert_eq!(message, "rate limited");
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn unknown_payload_keeps_body() {
        let err = GenerationError::from_response(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(err.to_string(), "upstream down");

        let err = GenerationError::from_response(StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.to_string(), "502 Bad Gateway");
    }

    #[test]
    fn multi_line_body_becomes_one_line() {
        let body = "<html>\n<body>Bad Gateway</body>\n</html>\n";
        let err = GenerationError::from_response(StatusCode::BAD_GATEWAY, body);
        assert_eq!(err.to_string(), "<html> <body>Bad Gateway</body> </html>");

        let body = r#"{"error": {"message": "first line\nsecond line", "type": "server_error"}}"#;
        let err = GenerationError::from_response(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert_eq!(err.to_string(), "first line second line");
    }

    #[test]
    fn causes_are_appended() {
        let err = Outer(Middle(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "tcp connect error: Connection refused (os error 111)",
        )));
        assert_eq!(
            with_sources(&err),
            "error sending request: client error (Connect): tcp connect error: Connection refused (os error 111)"
        );
    }

    #[test]
    fn repeated_causes_are_skipped() {
        let err = Outer(Middle(io::Error::other("client error (Connect)")));
        assert_eq!(
            with_sources(&err),
            "error sending request: client error (Connect)"
        );
    }
}
