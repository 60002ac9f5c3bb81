//! Upstream request body construction

use vfacade_core::{
    CommandTable, EngineCommand, ResourceKind, ResponseType, UpstreamRequest, VehicleId,
};

/// Build the body POSTed upstream.
///
/// The command is only forwarded for resources that accept one; for every
/// other resource it is ignored. An empty command counts as no command.
pub fn build_payload(
    kind: ResourceKind,
    vehicle_id: &VehicleId,
    command: Option<&EngineCommand>,
    commands: &CommandTable,
) -> UpstreamRequest {
    let command = command
        .filter(|_| kind.accepts_command())
        .filter(|c| !c.as_str().is_empty())
        .map(|c| commands.upstream_name(c).to_string());

    UpstreamRequest {
        id: vehicle_id.to_string(),
        response_type: ResponseType::Json,
        command,
    }
}
