//! Error types and classification for the TVL crate.
//!
//! This module provides:
//! - [`TvlError`]: The main error enum for fetching and aggregating
//! - [`ErrorKind`]: Classification telling which stage failed

mod kind;

pub use kind::ErrorKind;

use thiserror::Error;

/// Errors that can occur while computing TVL.
///
/// Each variant is classified into an [`ErrorKind`] via the [`kind`](Self::kind)
/// method. None of them are recovered from locally.
#[derive(Error, Debug)]
pub enum TvlError {
    /// The request could not be sent or completed (connection refused,
    /// DNS failure, timeout).
    #[error("Transport error: {source_id} - {message}")]
    Transport {
        /// The property source that issued the request
        source_id: String,
        /// Description of the failure
        message: String,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {status} from {source_id}: {body}")]
    HttpStatus {
        /// The property source that issued the request
        source_id: String,
        /// The HTTP status code
        status: u16,
        /// Leading part of the response body
        body: String,
    },

    /// The body was not JSON, lacked `data.PropertyToken`, or carried
    /// GraphQL errors.
    #[error("Response format error: {source_id} - {message}")]
    ResponseFormat {
        /// The property source that returned the body
        source_id: String,
        /// Description of the mismatch
        message: String,
    },

    /// A valuation is missing or not a non-negative base-10 integer.
    #[error(
        "Invalid valuation for property {property_id}: {} ({reason})",
        .value.as_deref().unwrap_or("<missing>")
    )]
    ValueParse {
        /// Id of the offending property record
        property_id: String,
        /// The raw value as received, if any
        value: Option<String>,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// The address book has no entry for the requested asset on the chain.
    #[error("Unknown asset {symbol} on chain {chain}")]
    UnknownAsset {
        /// Chain that was looked up
        chain: String,
        /// Asset symbol that was looked up
        symbol: String,
    },

    /// The adapter does not report TVL for this chain.
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    /// An externally supplied address document could not be read.
    #[error("Invalid address book: {0}")]
    AddressBookFormat(String),
}

impl TvlError {
    /// Returns the classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use blocksquare_tvl::errors::{ErrorKind, TvlError};
    ///
    /// let error = TvlError::UnsupportedChain("polygon".to_string());
    /// assert_eq!(error.kind(), ErrorKind::Configuration);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::HttpStatus { .. } => ErrorKind::Transport,

            Self::ResponseFormat { .. } => ErrorKind::ResponseFormat,

            Self::ValueParse { .. } => ErrorKind::ValueParse,

            Self::UnknownAsset { .. } | Self::UnsupportedChain(_) | Self::AddressBookFormat(_) => {
                ErrorKind::Configuration
            }
        }
    }
}
