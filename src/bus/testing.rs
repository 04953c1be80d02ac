//! In-memory bus used by unit tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::{
    core::{MprisError, Result},
    value::DynamicValue,
};

use super::{Bus, PROPERTIES_INTERFACE, UNKNOWN_PROPERTY_ERROR};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub service: String,
    pub path: String,
    pub interface: String,
    pub method: String,
    pub args: Vec<DynamicValue>,
}

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Values(Vec<DynamicValue>),
    RemoteError { name: String, message: String },
}

/// Answers property reads from a table and method calls from scripted replies.
#[derive(Default)]
pub(crate) struct ScriptedBus {
    names: Option<Vec<String>>,
    properties: Mutex<HashMap<(String, String), DynamicValue>>,
    replies: HashMap<(String, String), Reply>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedBus {
    pub fn new() -> Self {
        Self {
            names: Some(Vec::new()),
            ..Default::default()
        }
    }

    pub fn with_names(mut self, names: &[&str]) -> Self {
        self.names = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn failing_names(mut self) -> Self {
        self.names = None;
        self
    }

    pub fn with_property(self, interface: &str, name: &str, value: DynamicValue) -> Self {
        if let Ok(mut properties) = self.properties.lock() {
            properties.insert((interface.to_string(), name.to_string()), value);
        }
        self
    }

    pub fn with_reply(mut self, interface: &str, method: &str, reply: Reply) -> Self {
        self.replies
            .insert((interface.to_string(), method.to_string()), reply);
        self
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<RecordedCall>>> {
        Arc::clone(&self.calls)
    }

    fn properties_call(&self, method: &str, args: &[DynamicValue]) -> Result<Vec<DynamicValue>> {
        let mut properties = self
            .properties
            .lock()
            .map_err(|_| MprisError::Transport(zbus::Error::Failure("poisoned".to_string())))?;

        match (method, args) {
            ("Get", [DynamicValue::Str(interface), DynamicValue::Str(name)]) => properties
                .get(&(interface.clone(), name.clone()))
                .map(|value| vec![value.clone().into_variant()])
                .ok_or_else(|| MprisError::RemoteMethod {
                    name: UNKNOWN_PROPERTY_ERROR.to_string(),
                    message: format!("No such property '{name}'"),
                }),
            (
                "Set",
                [
                    DynamicValue::Str(interface),
                    DynamicValue::Str(name),
                    DynamicValue::Variant(value),
                ],
            ) => {
                properties.insert((interface.clone(), name.clone()), (**value).clone());
                Ok(Vec::new())
            }
            ("GetAll", [DynamicValue::Str(interface)]) => {
                let entries = properties
                    .iter()
                    .filter(|((iface, _), _)| iface == interface)
                    .map(|((_, name), value)| (name.clone(), value.clone()));
                Ok(vec![DynamicValue::variant_map(entries)])
            }
            _ => Err(MprisError::RemoteMethod {
                name: "org.freedesktop.DBus.Error.InvalidArgs".to_string(),
                message: format!("Bad arguments for {method}"),
            }),
        }
    }
}

impl Bus for ScriptedBus {
    fn list_names(&self) -> Result<Vec<String>> {
        self.names.clone().ok_or_else(|| {
            MprisError::Transport(zbus::Error::Failure("connection closed".to_string()))
        })
    }

    fn call_method(
        &self,
        service: &str,
        path: &str,
        interface: &str,
        method: &str,
        args: &[DynamicValue],
    ) -> Result<Vec<DynamicValue>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                service: service.to_string(),
                path: path.to_string(),
                interface: interface.to_string(),
                method: method.to_string(),
                args: args.to_vec(),
            });
        }

        match self.replies.get(&(interface.to_string(), method.to_string())) {
            Some(Reply::Values(values)) => Ok(values.clone()),
            Some(Reply::RemoteError { name, message }) => Err(MprisError::RemoteMethod {
                name: name.clone(),
                message: message.clone(),
            }),
            None if interface == PROPERTIES_INTERFACE => self.properties_call(method, args),
            None => Ok(Vec::new()),
        }
    }
}
