/// Coarse classification of a [`TvlError`](super::TvlError).
///
/// Every error is fatal to the invocation that raised it. The kind only
/// tells the caller which stage failed, so a reporting harness can present
/// the outcome without matching on every variant.
///
/// | Kind | Raised by |
/// |------|-----------|
/// | `Transport` | Fetcher: request not sent, timed out, or non-2xx status |
/// | `ResponseFormat` | Fetcher: body missing the expected shape |
/// | `ValueParse` | Aggregator: a valuation is not a non-negative integer |
/// | `Configuration` | Address book or adapter lookups |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The indexing endpoint could not be reached or refused the request.
    Transport,

    /// The endpoint answered, but the body is not the document we asked for.
    ResponseFormat,

    /// A property valuation could not be read as an exact integer.
    ValueParse,

    /// A static lookup failed (unknown chain, unknown asset symbol,
    /// malformed address document).
    Configuration,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "TRANSPORT",
            Self::ResponseFormat => "RESPONSE_FORMAT",
            Self::ValueParse => "VALUE_PARSE",
            Self::Configuration => "CONFIGURATION",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
