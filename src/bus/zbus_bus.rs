use zbus::{
    blocking::{self, fdo::DBusProxy},
    zvariant::{Signature, Structure},
};

use crate::{
    core::{MprisError, Result},
    value::{
        DynamicValue,
        wire::{body_from_args, values_from_body},
    },
};

use super::{Bus, BusKind};

/// [`Bus`] implementation over a blocking zbus connection.
#[derive(Debug, Clone)]
pub struct ZbusBus {
    connection: blocking::Connection,
}

impl ZbusBus {
    /// Opens and authenticates a connection to the given bus.
    ///
    /// # Errors
    /// Returns [`MprisError::Transport`] if the bus cannot be reached or the
    /// handshake fails.
    pub fn connect(kind: BusKind) -> Result<Self> {
        let connection = match kind {
            BusKind::Session => blocking::Connection::session(),
            BusKind::System => blocking::Connection::system(),
        }
        .map_err(MprisError::Transport)?;

        Ok(Self { connection })
    }

    /// Wraps an existing zbus connection.
    pub fn from_connection(connection: blocking::Connection) -> Self {
        Self { connection }
    }
}

impl Bus for ZbusBus {
    fn list_names(&self) -> Result<Vec<String>> {
        let proxy = DBusProxy::new(&self.connection)?;
        let names = proxy.list_names()?;

        Ok(names.into_iter().map(|name| name.to_string()).collect())
    }

    fn call_method(
        &self,
        service: &str,
        path: &str,
        interface: &str,
        method: &str,
        args: &[DynamicValue],
    ) -> Result<Vec<DynamicValue>> {
        let reply = match body_from_args(args)? {
            Some(body) => self.connection.call_method(
                Some(service),
                path,
                Some(interface),
                method,
                &body,
            )?,
            None => self.connection.call_method(
                Some(service),
                path,
                Some(interface),
                method,
                &(),
            )?,
        };

        let body = reply.body();
        if matches!(body.signature(), Signature::Unit) {
            return Ok(Vec::new());
        }

        let values: Structure<'_> = body.deserialize()?;
        values_from_body(&values)
    }
}
