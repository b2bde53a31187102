use crate::Error;

/// What a caller may reasonably do after receiving an error.
///
/// The error value itself never retries anything; this classification
/// only tells retry logic which strategy is worth attempting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Not retryable. Abort the operation and surface the error.
    Fatal,
    /// The same request may succeed against a different source
    /// (e.g. a hash mismatch could be a corrupted or stale mirror).
    RetryAlternate,
    /// The same source may succeed after a delay; retry with bounded
    /// attempts and backoff.
    RetryBackoff,
}

impl Error {
    /// Classifies this error for retry logic.
    ///
    /// Structural, signature, and lookup failures are [`Recovery::Fatal`]:
    /// repeating the request cannot change the outcome without new
    /// metadata. Integrity and staleness failures are
    /// [`Recovery::RetryAlternate`]: a different mirror may hold intact or
    /// newer data. Only time-budget violations are
    /// [`Recovery::RetryBackoff`].
    pub fn recovery(&self) -> Recovery {
        match self {
            Error::Format(_)
            | Error::InvalidMetadataJson(_)
            | Error::BadSignature { .. }
            | Error::BadVersionNumber { .. }
            | Error::UnknownRole { .. }
            | Error::UnknownTarget { .. }
            | Error::Crypto { .. }
            | Error::NoWorkingMirror { .. }
            | Error::Io(_) => Recovery::Fatal,

            Error::BadHash { .. }
            | Error::ExpiredMetadata { .. }
            | Error::ReplayedMetadata { .. }
            | Error::DownloadLengthMismatch { .. }
            | Error::Http(_) => Recovery::RetryAlternate,

            Error::SlowRetrieval { .. } => Recovery::RetryBackoff,
        }
    }

    /// Returns `true` unless the error is [`Recovery::Fatal`].
    pub fn is_retryable(&self) -> bool {
        self.recovery() != Recovery::Fatal
    }
}
