// src/error.rs
use thiserror::Error;

/// Why a draw-result fetch produced nothing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Round 0, or the URL template didn't yield a valid URL.
    #[error("invalid request for round {round}: {reason}")]
    InvalidRequest { round: u32, reason: String },

    /// Network failure, timeout or non-success HTTP status.
    #[error("transport failure: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// Response body is not valid EUC-KR.
    #[error("round {round}: response is not valid EUC-KR")]
    DecodingFailed { round: u32 },

    /// Decoded page lacks a required marker.
    #[error("round {round}: result page could not be parsed")]
    ParsingFailed { round: u32 },
}

impl FetchError {
    /// One line suitable for a status bar or dialog.
    pub fn user_message(&self) -> String {
        format!("Could not fetch winning numbers: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_names_the_cause() {
        let e = FetchError::ParsingFailed { round: 7 };
        assert_eq!(
            e.user_message(),
            "Could not fetch winning numbers: round 7: result page could not be parsed"
        );
    }
}
