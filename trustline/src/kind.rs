use std::fmt;

use crate::Error;

/// Stable, fieldless discriminator for [`Error`].
///
/// Suitable for programmatic branching, structured log fields, and
/// deduplication keys. The string tags returned by [`ErrorKind::as_str`]
/// are part of the public contract and never change for an existing
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// [`Error::Format`]
    Format,
    /// [`Error::InvalidMetadataJson`]
    InvalidMetadataJson,
    /// [`Error::BadSignature`]
    BadSignature,
    /// [`Error::BadHash`]
    BadHash,
    /// [`Error::SlowRetrieval`]
    SlowRetrieval,
    /// [`Error::ExpiredMetadata`]
    ExpiredMetadata,
    /// [`Error::ReplayedMetadata`]
    ReplayedMetadata,
    /// [`Error::BadVersionNumber`]
    BadVersionNumber,
    /// [`Error::DownloadLengthMismatch`]
    DownloadLengthMismatch,
    /// [`Error::UnknownRole`]
    UnknownRole,
    /// [`Error::UnknownTarget`]
    UnknownTarget,
    /// [`Error::Crypto`]
    Crypto,
    /// [`Error::NoWorkingMirror`]
    NoWorkingMirror,
    /// [`Error::Http`]
    Http,
    /// [`Error::Io`]
    Io,
}

impl ErrorKind {
    /// Returns the stable snake_case tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::InvalidMetadataJson => "invalid_metadata_json",
            Self::BadSignature => "bad_signature",
            Self::BadHash => "bad_hash",
            Self::SlowRetrieval => "slow_retrieval",
            Self::ExpiredMetadata => "expired_metadata",
            Self::ReplayedMetadata => "replayed_metadata",
            Self::BadVersionNumber => "bad_version_number",
            Self::DownloadLengthMismatch => "download_length_mismatch",
            Self::UnknownRole => "unknown_role",
            Self::UnknownTarget => "unknown_target",
            Self::Crypto => "crypto",
            Self::NoWorkingMirror => "no_working_mirror",
            Self::Http => "http",
            Self::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Returns the stable discriminator for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format(_) => ErrorKind::Format,
            Error::InvalidMetadataJson(_) => ErrorKind::InvalidMetadataJson,
            Error::BadSignature { .. } => ErrorKind::BadSignature,
            Error::BadHash { .. } => ErrorKind::BadHash,
            Error::SlowRetrieval { .. } => ErrorKind::SlowRetrieval,
            Error::ExpiredMetadata { .. } => ErrorKind::ExpiredMetadata,
            Error::ReplayedMetadata { .. } => ErrorKind::ReplayedMetadata,
            Error::BadVersionNumber { .. } => ErrorKind::BadVersionNumber,
            Error::DownloadLengthMismatch { .. } => ErrorKind::DownloadLengthMismatch,
            Error::UnknownRole { .. } => ErrorKind::UnknownRole,
            Error::UnknownTarget { .. } => ErrorKind::UnknownTarget,
            Error::Crypto { .. } => ErrorKind::Crypto,
            Error::NoWorkingMirror { .. } => ErrorKind::NoWorkingMirror,
            Error::Http(_) => ErrorKind::Http,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatError;

    #[test]
    fn kind_matches_variant() {
        let err = Error::BadSignature {
            role: "root".to_owned(),
        };
        assert_eq!(err.kind(), ErrorKind::BadSignature);

        let err = Error::InvalidMetadataJson(FormatError::new("bad json"));
        assert_eq!(err.kind(), ErrorKind::InvalidMetadataJson);

        let err: Error = FormatError::new("bad field").into();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn tags_are_stable() {
        assert_eq!(ErrorKind::BadSignature.as_str(), "bad_signature");
        assert_eq!(ErrorKind::BadHash.as_str(), "bad_hash");
        assert_eq!(ErrorKind::SlowRetrieval.as_str(), "slow_retrieval");
        assert_eq!(
            ErrorKind::InvalidMetadataJson.as_str(),
            "invalid_metadata_json"
        );
        assert_eq!(ErrorKind::NoWorkingMirror.to_string(), "no_working_mirror");
    }

    #[test]
    fn tags_are_distinct() {
        let kinds = [
            ErrorKind::Format,
            ErrorKind::InvalidMetadataJson,
            ErrorKind::BadSignature,
            ErrorKind::BadHash,
            ErrorKind::SlowRetrieval,
            ErrorKind::ExpiredMetadata,
            ErrorKind::ReplayedMetadata,
            ErrorKind::BadVersionNumber,
            ErrorKind::DownloadLengthMismatch,
            ErrorKind::UnknownRole,
            ErrorKind::UnknownTarget,
            ErrorKind::Crypto,
            ErrorKind::NoWorkingMirror,
            ErrorKind::Http,
            ErrorKind::Io,
        ];
        let mut tags: Vec<_> = kinds.iter().map(|k| k.as_str()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), kinds.len());
    }
}
