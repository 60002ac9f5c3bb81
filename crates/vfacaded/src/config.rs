//! Daemon configuration (TOML)
//!
//! Every section and field is optional; an empty file yields a facade on
//! port 5000 in front of the public upstream service.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;
use vfacade_client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};
use vfacade_conv::{Denylist, DEFAULT_DENYLIST};
use vfacade_core::{
    CommandTable, EndpointTable, EngineStatus, ResourceKind, StatusTable, DEFAULT_UPSTREAM_BASE,
};
use vfacade_proxy::FacadeTables;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacadeConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub tables: TablesConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
    /// Per-resource endpoint overrides keyed by resource name; missing
    /// kinds derive from `base_url`
    pub endpoints: HashMap<String, String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE.to_string(),
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT.as_millis() as u64,
            endpoints: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesConfig {
    pub denylist: Vec<String>,
    /// Replaces the built-in command table when set
    pub commands: Option<HashMap<String, String>>,
    /// Replaces the built-in engine status table when set
    pub statuses: Option<HashMap<String, EngineStatus>>,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
            commands: None,
            statuses: None,
        }
    }
}

impl FacadeConfig {
    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            bail!("server.port must be non-zero");
        }
        if self.upstream.timeout_ms == 0 || self.upstream.connect_timeout_ms == 0 {
            bail!("upstream timeouts must be non-zero");
        }
        self.endpoint_table()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.bind, self.server.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.upstream.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream.connect_timeout_ms)
    }

    pub fn endpoint_table(&self) -> anyhow::Result<EndpointTable> {
        let base = Url::parse(&self.upstream.base_url)
            .with_context(|| format!("Invalid upstream.base_url '{}'", self.upstream.base_url))?;
        let mut table = EndpointTable::from_base(&base)
            .with_context(|| format!("Cannot derive endpoints from '{}'", base))?;

        for (name, raw) in &self.upstream.endpoints {
            let kind: ResourceKind = name
                .parse()
                .with_context(|| format!("Unknown key upstream.endpoints.{}", name))?;
            let url = Url::parse(raw)
                .with_context(|| format!("Invalid upstream.endpoints.{} '{}'", name, raw))?;
            table = table.with_endpoint(kind, url);
        }

        Ok(table)
    }

    /// Every lookup table the dispatcher needs
    pub fn facade_tables(&self) -> anyhow::Result<FacadeTables> {
        let mut tables = FacadeTables::new(self.endpoint_table()?)
            .with_denylist(Denylist::new(self.tables.denylist.iter().cloned()));

        if let Some(commands) = &self.tables.commands {
            tables = tables.with_commands(CommandTable::new(commands.clone()));
        }
        if let Some(statuses) = &self.tables.statuses {
            tables = tables.with_statuses(StatusTable::new(statuses.clone()));
        }

        Ok(tables)
    }
}
