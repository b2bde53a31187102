#![warn(missing_docs)]

//! Trust-verification error taxonomy for a secure software-update client.
//!
//! This crate is the leaf dependency every other subsystem of the update
//! client reports failures through. It provides:
//! - A closed set of error kinds covering trust verification and
//!   retrieval, each carrying the context needed to diagnose the failure
//!   from its rendered text alone
//! - Causal wrapping for malformed-metadata failures
//!   ([`Error::InvalidMetadataJson`] owns its [`FormatError`] cause)
//! - A stable [`ErrorKind`] discriminator for log fields and branching
//! - A [`Recovery`] classification telling retry logic which errors are
//!   worth retrying, and how
//!
//! Error values are immutable, hold no external resources, and are safe
//! to pass and render across threads. Construction and rendering never
//! perform I/O; logging is the caller's job.
//!
//! # Example
//!
//! ```
//! use trustline::{Error, ErrorKind, Recovery};
//!
//! let err = Error::BadHash {
//!     expected: "01234".to_owned(),
//!     observed: "56789".to_owned(),
//! };
//!
//! assert_eq!(err.kind(), ErrorKind::BadHash);
//! assert_eq!(err.recovery(), Recovery::RetryAlternate);
//! assert!(err.to_string().contains("01234"));
//! ```

mod error;
mod kind;
mod recovery;

pub use error::{Error, FormatError, MirrorFailure};
pub use kind::ErrorKind;
pub use recovery::Recovery;
