//! Bus connection, remote handles and the transport seam they are built on.

mod connection;
mod handle;
mod zbus_bus;

#[cfg(test)]
pub(crate) mod testing;

pub use connection::{BusKind, Connection};
pub use handle::RemoteHandle;
pub use zbus_bus::ZbusBus;

use crate::{core::Result, value::DynamicValue};

/// Well-known name of the bus daemon itself.
pub const DBUS_SERVICE: &str = "org.freedesktop.DBus";
/// Object path of the bus daemon.
pub const DBUS_PATH: &str = "/org/freedesktop/DBus";
/// Interface of the bus daemon.
pub const DBUS_INTERFACE: &str = "org.freedesktop.DBus";
/// Meta-interface every object exposes for property access.
pub const PROPERTIES_INTERFACE: &str = "org.freedesktop.DBus.Properties";
/// Error name a remote returns for a property it does not have.
pub const UNKNOWN_PROPERTY_ERROR: &str = "org.freedesktop.DBus.Error.UnknownProperty";

/// Transport the client is built on.
///
/// Implementations own message framing, authentication and value
/// encoding. Every call blocks until the reply or an error arrives.
pub trait Bus: Send + Sync {
    /// Returns every name currently registered with the bus daemon.
    ///
    /// # Errors
    /// Returns an error if the daemon cannot be reached.
    fn list_names(&self) -> Result<Vec<String>>;

    /// Sends a method call and returns the reply's top-level arguments.
    ///
    /// # Errors
    /// Returns [`MprisError::RemoteMethod`](crate::MprisError::RemoteMethod)
    /// with the remote's message when the remote answers with an error, and
    /// [`MprisError::Transport`](crate::MprisError::Transport) on I/O failure.
    fn call_method(
        &self,
        service: &str,
        path: &str,
        interface: &str,
        method: &str,
        args: &[DynamicValue],
    ) -> Result<Vec<DynamicValue>>;
}
