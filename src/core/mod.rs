use thiserror::Error;

use crate::value::Kind;

/// Error types for MPRIS client operations.
///
/// Every core operation hands its error straight back to the caller. Nothing
/// here is retried or replaced with a default value.
#[derive(Error, Debug)]
pub enum MprisError {
    /// Connection, authentication or I/O failure on the bus.
    ///
    /// The `Connection` that produced it should be considered unusable.
    #[error("D-Bus transport failed: {0}")]
    Transport(#[source] zbus::Error),

    /// The remote endpoint answered a call with an error reply.
    ///
    /// The remote message is kept verbatim.
    #[error("{message}")]
    RemoteMethod {
        /// D-Bus error name, e.g. `org.freedesktop.DBus.Error.UnknownMethod`
        name: String,
        /// Error description sent by the remote side
        message: String,
    },

    /// The remote object does not expose the requested property.
    #[error("property '{property}' not found on '{interface}': {message}")]
    PropertyNotFound {
        /// Interface the property was looked up on
        interface: String,
        /// Requested property name
        property: String,
        /// Error description sent by the remote side
        message: String,
    },

    /// A decoded value has a different kind than the caller expected.
    #[error("expected a value of type '{}' ({expected}), got '{actual}'", .expected.signature())]
    KindMismatch {
        /// Kind requested by the caller
        expected: Kind,
        /// Wire signature of the value actually received
        actual: String,
    },

    /// Discovery found no MPRIS service on the bus.
    #[error("No media players found")]
    NoCandidatesFound,

    /// A reply carried a different number or structure of values than expected.
    #[error("unexpected reply shape: {0}")]
    UnexpectedShape(String),

    /// A value cannot be represented on one side of the wire conversion.
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),
}

/// A specialized `Result` type for MPRIS client operations.
pub type Result<T> = std::result::Result<T, MprisError>;

impl MprisError {
    /// Creates a kind mismatch error from the expected kind and received signature.
    pub fn kind_mismatch(expected: Kind, actual: impl Into<String>) -> Self {
        MprisError::KindMismatch {
            expected,
            actual: actual.into(),
        }
    }

    /// Whether the error was produced by the remote endpoint rather than the
    /// transport or local decoding.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            MprisError::RemoteMethod { .. } | MprisError::PropertyNotFound { .. }
        )
    }
}

impl From<zbus::Error> for MprisError {
    fn from(error: zbus::Error) -> Self {
        match error {
            zbus::Error::MethodError(name, description, _) => MprisError::RemoteMethod {
                name: name.to_string(),
                message: description.unwrap_or_default(),
            },
            zbus::Error::FDO(fdo) => MprisError::from(*fdo),
            other => MprisError::Transport(other),
        }
    }
}

impl From<zbus::fdo::Error> for MprisError {
    fn from(error: zbus::fdo::Error) -> Self {
        use zbus::DBusError;

        match error {
            zbus::fdo::Error::ZBus(inner) => MprisError::from(inner),
            other => MprisError::RemoteMethod {
                name: other.name().to_string(),
                message: other.description().unwrap_or_default().to_string(),
            },
        }
    }
}
