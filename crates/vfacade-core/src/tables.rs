//! Lookup tables used to talk to the upstream service
//!
//! The tables are plain immutable values built once at startup and handed
//! to the dispatcher, so tests can substitute their own.

use std::collections::HashMap;

use url::Url;

use crate::models::{EngineCommand, EngineStatus, ResourceKind};

/// Default upstream service root
pub const DEFAULT_UPSTREAM_BASE: &str = "http://gmapi.azurewebsites.net/";

/// Command sent upstream when the consumer's command is not in the table
pub const UNKNOWN_COMMAND: &str = "ERROR";

/// Upstream endpoint per resource kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTable {
    vehicles: Url,
    doors: Url,
    fuel: Url,
    battery: Url,
    engine: Url,
}

impl EndpointTable {
    /// Build the table from the upstream service root.
    ///
    /// `fuel` and `battery` share the energy service endpoint.
    pub fn from_base(base: &Url) -> Result<Self, url::ParseError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let energy = base.join("getEnergyService/")?;
        Ok(Self {
            vehicles: base.join("getVehicleInfoService/")?,
            doors: base.join("getSecurityStatusService/")?,
            fuel: energy.clone(),
            battery: energy,
            engine: base.join("actionEngineService/")?,
        })
    }

    /// Replace the endpoint for one resource kind
    pub fn with_endpoint(mut self, kind: ResourceKind, url: Url) -> Self {
        *self.slot_mut(kind) = url;
        self
    }

    /// Endpoint for a resource kind
    pub fn resolve(&self, kind: ResourceKind) -> &Url {
        match kind {
            ResourceKind::Vehicles => &self.vehicles,
            ResourceKind::Doors => &self.doors,
            ResourceKind::Fuel => &self.fuel,
            ResourceKind::Battery => &self.battery,
            ResourceKind::Engine => &self.engine,
        }
    }

    fn slot_mut(&mut self, kind: ResourceKind) -> &mut Url {
        match kind {
            ResourceKind::Vehicles => &mut self.vehicles,
            ResourceKind::Doors => &mut self.doors,
            ResourceKind::Fuel => &mut self.fuel,
            ResourceKind::Battery => &mut self.battery,
            ResourceKind::Engine => &mut self.engine,
        }
    }
}

/// Consumer command → upstream command name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    commands: HashMap<String, String>,
}

impl CommandTable {
    pub fn new(commands: HashMap<String, String>) -> Self {
        Self { commands }
    }

    /// Upstream name for a command, or [`UNKNOWN_COMMAND`]
    pub fn upstream_name(&self, command: &EngineCommand) -> &str {
        self.commands
            .get(command.as_str())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_COMMAND)
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new(HashMap::from([
            ("START".to_string(), "START_VEHICLE".to_string()),
            ("STOP".to_string(), "STOP_VEHICLE".to_string()),
        ]))
    }
}

/// Upstream engine action status → public status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTable {
    statuses: HashMap<String, EngineStatus>,
}

impl StatusTable {
    pub fn new(statuses: HashMap<String, EngineStatus>) -> Self {
        Self { statuses }
    }

    /// Translate an upstream status; `None` if it is not in the table
    pub fn translate(&self, raw: &str) -> Option<EngineStatus> {
        self.statuses.get(raw).copied()
    }
}

impl Default for StatusTable {
    fn default() -> Self {
        Self::new(HashMap::from([
            ("EXECUTED".to_string(), EngineStatus::Success),
            ("FAILED".to_string(), EngineStatus::Error),
        ]))
    }
}
