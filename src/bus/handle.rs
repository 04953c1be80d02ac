use std::collections::HashMap;

use tracing::debug;

use crate::{
    core::{MprisError, Result},
    value::{DynamicValue, FromDynamic, decode},
};

use super::{Connection, PROPERTIES_INTERFACE, UNKNOWN_PROPERTY_ERROR};

/// One interface of one object on one service.
///
/// Holds nothing but its address and the shared connection; every call goes
/// out to the live bus.
#[derive(Debug, Clone)]
pub struct RemoteHandle {
    connection: Connection,
    service: String,
    path: String,
    interface: String,
}

impl RemoteHandle {
    pub(crate) fn new(
        connection: Connection,
        service: String,
        path: String,
        interface: String,
    ) -> Self {
        Self {
            connection,
            service,
            path,
            interface,
        }
    }

    /// Bus name of the remote service
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Object path within the service
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Interface this handle calls into
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Calls `method` with positional `args` and returns the reply values.
    ///
    /// # Errors
    /// Returns the transport error, or the remote error verbatim if the
    /// remote rejects the call.
    pub fn call(&self, method: &str, args: &[DynamicValue]) -> Result<Vec<DynamicValue>> {
        debug!(
            service = %self.service,
            interface = %self.interface,
            method,
            "Calling remote method"
        );
        self.connection.bus().call_method(
            &self.service,
            &self.path,
            &self.interface,
            method,
            args,
        )
    }

    /// Calls `method` and discards whatever the reply carries.
    ///
    /// # Errors
    /// Same as [`RemoteHandle::call`].
    pub fn call_void(&self, method: &str, args: &[DynamicValue]) -> Result<()> {
        self.call(method, args).map(|_| ())
    }

    /// Reads property `name` of this handle's interface.
    ///
    /// The returned value is the property itself, with the reply's variant
    /// layer already removed.
    ///
    /// # Errors
    /// Returns [`MprisError::PropertyNotFound`] if the remote does not have
    /// the property, [`MprisError::UnexpectedShape`] if the reply is not
    /// exactly one variant, or the transport/remote error otherwise.
    pub fn get_property(&self, name: &str) -> Result<DynamicValue> {
        debug!(
            service = %self.service,
            interface = %self.interface,
            property = name,
            "Reading remote property"
        );
        let reply = self
            .properties_call(
                "Get",
                &[
                    DynamicValue::from(self.interface.as_str()),
                    DynamicValue::from(name),
                ],
            )
            .map_err(|e| self.property_error(name, e))?;

        match single_value(reply, "Get")? {
            DynamicValue::Variant(inner) => Ok(*inner),
            other => Err(MprisError::UnexpectedShape(format!(
                "property '{name}' came back as '{}' instead of a variant",
                other.signature()
            ))),
        }
    }

    /// Reads property `name` and decodes it as `T`.
    ///
    /// # Errors
    /// Everything [`RemoteHandle::get_property`] returns, plus
    /// [`MprisError::KindMismatch`] when the value is not a `T`.
    pub fn get<T: FromDynamic>(&self, name: &str) -> Result<T> {
        decode(self.get_property(name)?)
    }

    /// Writes property `name` of this handle's interface.
    ///
    /// # Errors
    /// Returns [`MprisError::PropertyNotFound`] if the remote does not have
    /// the property, or the transport/remote error otherwise.
    pub fn set_property(&self, name: &str, value: DynamicValue) -> Result<()> {
        debug!(
            service = %self.service,
            interface = %self.interface,
            property = name,
            "Writing remote property"
        );
        self.properties_call(
            "Set",
            &[
                DynamicValue::from(self.interface.as_str()),
                DynamicValue::from(name),
                value.into_variant(),
            ],
        )
        .map(|_| ())
        .map_err(|e| self.property_error(name, e))
    }

    /// Reads every property of this handle's interface in one call.
    ///
    /// # Errors
    /// Returns [`MprisError::UnexpectedShape`] if the reply is not a single
    /// value, [`MprisError::KindMismatch`] if it is not an `a{sv}`
    /// dictionary, or the transport/remote error otherwise.
    pub fn get_all_properties(&self) -> Result<HashMap<String, DynamicValue>> {
        let reply = self.properties_call(
            "GetAll",
            &[DynamicValue::from(self.interface.as_str())],
        )?;
        decode(single_value(reply, "GetAll")?)
    }

    fn properties_call(&self, method: &str, args: &[DynamicValue]) -> Result<Vec<DynamicValue>> {
        self.connection.bus().call_method(
            &self.service,
            &self.path,
            PROPERTIES_INTERFACE,
            method,
            args,
        )
    }

    fn property_error(&self, property: &str, error: MprisError) -> MprisError {
        match error {
            MprisError::RemoteMethod { name, message } if name == UNKNOWN_PROPERTY_ERROR => {
                MprisError::PropertyNotFound {
                    interface: self.interface.clone(),
                    property: property.to_string(),
                    message,
                }
            }
            other => other,
        }
    }
}

fn single_value(mut reply: Vec<DynamicValue>, method: &str) -> Result<DynamicValue> {
    if reply.len() != 1 {
        return Err(MprisError::UnexpectedShape(format!(
            "{PROPERTIES_INTERFACE}.{method} returned {} values, expected 1",
            reply.len()
        )));
    }
    reply.pop().ok_or_else(|| {
        MprisError::UnexpectedShape(format!("{PROPERTIES_INTERFACE}.{method} returned nothing"))
    })
}
