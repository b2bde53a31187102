use std::fmt::Write as _;

/// A structural format violation (e.g. malformed JSON metadata).
///
/// This is its own type rather than an [`Error`] variant so that
/// [`Error::InvalidMetadataJson`] can require a format violation as its
/// cause at the type level. The rendered text always contains the
/// original message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("improperly formatted: {message}")]
pub struct FormatError {
    message: String,
}

impl FormatError {
    /// Creates a format violation carrying the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the description this violation was constructed with.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One failed attempt against a single mirror.
///
/// Owned exclusively by [`Error::NoWorkingMirror`]; the inner error is
/// moved in at construction and never shared.
#[derive(Debug)]
pub struct MirrorFailure {
    /// Identifier of the mirror that was tried (usually its base URL).
    pub mirror: String,
    /// The error that mirror produced.
    pub error: Error,
}

impl MirrorFailure {
    /// Pairs a mirror identifier with the error it produced.
    pub fn new(mirror: impl Into<String>, error: Error) -> Self {
        Self {
            mirror: mirror.into(),
            error,
        }
    }
}

/// Errors from trust verification and retrieval of signed update data.
///
/// Every variant carries the full context needed to diagnose the failure
/// from its rendered text alone; construction and rendering have no side
/// effects. Values are immutable once built.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input does not conform to its expected structural format.
    #[error("{0}")]
    Format(#[from] FormatError),

    /// Metadata failed JSON parsing; always wraps the underlying format
    /// violation so the causal chain survives in the rendered text.
    #[error("metadata is not valid JSON: {0}")]
    InvalidMetadataJson(#[source] FormatError),

    /// Signature verification failed for a metadata role.
    #[error("signature verification failed for role '{role}'")]
    BadSignature {
        /// Name of the role whose signature did not verify.
        role: String,
    },

    /// Downloaded content does not match the hash recorded in trusted
    /// metadata.
    #[error("hash mismatch: expected {expected}, observed {observed}")]
    BadHash {
        /// Hex digest recorded in trusted metadata.
        expected: String,
        /// Hex digest computed from the downloaded content.
        observed: String,
    },

    /// Retrieval did not complete within the allowed time or rate budget.
    #[error("retrieval of '{resource}' exceeded the allowed time budget")]
    SlowRetrieval {
        /// Identifier of the resource being fetched.
        resource: String,
    },

    /// Trusted metadata for a role is past its expiration timestamp.
    #[error("metadata for role '{role}' has expired")]
    ExpiredMetadata {
        /// Name of the expired role.
        role: String,
    },

    /// Downloaded metadata is older than the version already trusted
    /// (rollback indicator).
    #[error(
        "replayed metadata for role '{role}': downloaded version \
         {downloaded_version} is older than trusted version {trusted_version}"
    )]
    ReplayedMetadata {
        /// Name of the affected role.
        role: String,
        /// Version number of the downloaded metadata.
        downloaded_version: u64,
        /// Version number the client already trusts.
        trusted_version: u64,
    },

    /// A metadata version number fails a structural requirement.
    #[error("bad version number {version} for role '{role}'")]
    BadVersionNumber {
        /// Name of the affected role.
        role: String,
        /// The offending version number.
        version: u64,
    },

    /// Byte length of a download differs from the length in trusted
    /// metadata.
    #[error("download length mismatch: expected {expected} bytes, observed {observed} bytes")]
    DownloadLengthMismatch {
        /// Length recorded in trusted metadata.
        expected: u64,
        /// Length of the data actually received.
        observed: u64,
    },

    /// A role name was looked up that trusted metadata does not define.
    #[error("unknown role '{role}'")]
    UnknownRole {
        /// The unrecognized role name.
        role: String,
    },

    /// A target path was looked up that trusted metadata does not list.
    #[error("unknown target '{target}'")]
    UnknownTarget {
        /// The unrecognized target path.
        target: String,
    },

    /// A cryptographic routine failed for a reason other than an
    /// outright bad signature (unsupported scheme, undecodable key, ...).
    #[error("cryptographic operation failed: {message}")]
    Crypto {
        /// Description from the cryptographic layer.
        message: String,
    },

    /// Every configured mirror was tried and each produced an error.
    #[error("no mirror supplied trusted data: [{}]", render_failures(.failures))]
    NoWorkingMirror {
        /// One entry per mirror, in the order the mirrors were tried.
        failures: Vec<MirrorFailure>,
    },

    /// An HTTP request failed (network error or non-2xx status).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A filesystem I/O operation failed (local metadata or target store).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Builds [`Error::BadHash`] from raw digest bytes, hex-encoding
    /// both sides so the rendered text is directly comparable.
    pub fn bad_hash_bytes(expected: &[u8], observed: &[u8]) -> Self {
        Error::BadHash {
            expected: hex::encode(expected),
            observed: hex::encode(observed),
        }
    }

    /// Classifies a transport error from the retrieval layer.
    ///
    /// Timeouts become [`Error::SlowRetrieval`] for the named resource;
    /// everything else is surfaced as [`Error::Http`].
    pub fn from_transport(resource: impl Into<String>, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::SlowRetrieval {
                resource: resource.into(),
            }
        } else {
            Error::Http(err)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidMetadataJson(FormatError::new(err.to_string()))
    }
}

fn render_failures(failures: &[MirrorFailure]) -> String {
    let mut out = String::new();
    for (i, failure) in failures.iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}: {}", failure.mirror, failure.error);
    }
    out
}
