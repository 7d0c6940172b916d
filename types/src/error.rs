use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A serializable error for client rendering.
///
/// Server-side failures are collapsed into a message string so they can
/// cross the server-function boundary; the alternate `{:#}` format keeps
/// the source chain readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(report: anyhow::Error) -> Self {
        Self {
            message: format!("{:#}", report),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self {
            message: s.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The whole context chain must land in the message, since that is the
    // only field that survives the trip to the client.
    #[test]
    fn context_chain_flattens_into_the_message() {
        let report = anyhow::anyhow!("connection refused").context("listing users");
        let error = Error::from(report);
        assert_eq!(error.message, "listing users: connection refused");
    }
}
