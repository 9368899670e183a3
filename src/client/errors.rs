use thiserror::Error;

/// Why a call to the directory API failed
///
/// The Display text is the notification shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The server answered with an error status
    #[error("Error from server: {status} - {message}")]
    Server { status: u16, message: String },

    /// The server reported success with a body that does not decode
    #[error("Unexpected response from the server: {status} - {message}")]
    InvalidResponse { status: u16, message: String },

    /// The request went out but nothing came back
    #[error("No response from the server")]
    NoResponse(String),

    /// The request could not be built
    #[error("Error setting up the request: {0}")]
    Request(String),
}

impl ClientError {
    /// Text for the blocking notification
    pub fn notification(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } | ClientError::InvalidResponse { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return ClientError::Request(err.to_string());
        }

        if let Some(status) = err.status() {
            return ClientError::Server {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown error").to_string(),
            };
        }

        tracing::warn!("Directory API unreachable: {}", err);
        ClientError::NoResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_match_alert_text() {
        let server = ClientError::Server {
            status: 400,
            message: "User with this email already exists.".to_string(),
        };
        assert_eq!(
            server.notification(),
            "Error from server: 400 - User with this email already exists."
        );
        assert_eq!(server.status(), Some(400));

        let garbled = ClientError::InvalidResponse {
            status: 200,
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            garbled.notification(),
            "Unexpected response from the server: 200 - expected value at line 1 column 1"
        );
        assert_eq!(garbled.status(), Some(200));

        let offline = ClientError::NoResponse("connection refused".to_string());
        assert_eq!(offline.notification(), "No response from the server");
        assert_eq!(offline.status(), None);

        let request = ClientError::Request("relative URL without a base".to_string());
        assert_eq!(
            request.notification(),
            "Error setting up the request: relative URL without a base"
        );
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_request_error() {
        let err = reqwest::Client::new()
            .post("not a url")
            .send()
            .await
            .unwrap_err();

        assert!(matches!(ClientError::from(err), ClientError::Request(_)));
    }
}
