//! Lookup tables handed to the dispatcher

use vfacade_conv::Denylist;
use vfacade_core::{CommandTable, EndpointTable, StatusTable};

/// Every table the dispatcher consults, built once at startup
#[derive(Debug, Clone)]
pub struct FacadeTables {
    /// Upstream endpoint per resource kind
    pub endpoints: EndpointTable,
    /// Consumer command → upstream command
    pub commands: CommandTable,
    /// Upstream engine status → public status
    pub statuses: StatusTable,
    /// Fields stripped during decoding
    pub denylist: Denylist,
}

impl FacadeTables {
    /// Tables for the given endpoints with the default command, status and
    /// denylist tables
    pub fn new(endpoints: EndpointTable) -> Self {
        Self {
            endpoints,
            commands: CommandTable::default(),
            statuses: StatusTable::default(),
            denylist: Denylist::default(),
        }
    }

    pub fn with_denylist(mut self, denylist: Denylist) -> Self {
        self.denylist = denylist;
        self
    }

    pub fn with_commands(mut self, commands: CommandTable) -> Self {
        self.commands = commands;
        self
    }

    pub fn with_statuses(mut self, statuses: StatusTable) -> Self {
        self.statuses = statuses;
        self
    }
}
