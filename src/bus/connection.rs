use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::Result;

use super::{Bus, RemoteHandle, ZbusBus};

/// Which message bus to connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusKind {
    /// Per-login-session bus, where media players live.
    #[default]
    Session,
    /// System-wide bus.
    System,
}

impl fmt::Display for BusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusKind::Session => write!(f, "session"),
            BusKind::System => write!(f, "system"),
        }
    }
}

/// Shared handle to a bus transport.
///
/// Cloning is cheap; every clone and every [`RemoteHandle`] created from it
/// talks over the same transport.
#[derive(Clone)]
pub struct Connection {
    bus: Arc<dyn Bus>,
}

impl Connection {
    /// Connects and authenticates to the given bus.
    ///
    /// # Errors
    /// Returns [`MprisError::Transport`](crate::MprisError::Transport) if the
    /// bus address cannot be resolved or the handshake fails.
    #[instrument]
    pub fn connect(kind: BusKind) -> Result<Self> {
        let bus = ZbusBus::connect(kind)?;
        debug!("Connected to {kind} bus");
        Ok(Self::with_bus(bus))
    }

    /// Wraps an already established transport.
    pub fn with_bus(bus: impl Bus + 'static) -> Self {
        Self { bus: Arc::new(bus) }
    }

    /// Lists every name currently registered on the bus.
    ///
    /// The order is whatever the daemon returns.
    ///
    /// # Errors
    /// Returns an error if the bus daemon cannot be queried.
    pub fn list_names(&self) -> Result<Vec<String>> {
        self.bus.list_names()
    }

    /// Creates a handle for `interface` on `path` of `service`.
    ///
    /// No I/O happens here; a missing service only shows up on first use.
    pub fn handle(
        &self,
        service: impl Into<String>,
        path: impl Into<String>,
        interface: impl Into<String>,
    ) -> RemoteHandle {
        RemoteHandle::new(self.clone(), service.into(), path.into(), interface.into())
    }

    pub(crate) fn bus(&self) -> &dyn Bus {
        self.bus.as_ref()
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection").finish_non_exhaustive()
    }
}
