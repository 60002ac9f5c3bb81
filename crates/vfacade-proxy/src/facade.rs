//! VehicleFacade - one upstream round trip per facade request

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, warn};
use vfacade_conv::decode_root;
use vfacade_core::{
    DispatchError, DispatchResult, EngineCommand, PublicResult, ResourceKind, UpstreamTransport,
    VehicleId,
};

use crate::payload::build_payload;
use crate::tables::FacadeTables;
use crate::transform::transform;

/// Dispatches facade requests to the upstream vehicle service.
///
/// Stateless apart from the read-only tables, so a single instance can be
/// shared across any number of concurrent requests.
pub struct VehicleFacade {
    transport: Arc<dyn UpstreamTransport>,
    tables: FacadeTables,
}

impl VehicleFacade {
    pub fn new(transport: Arc<dyn UpstreamTransport>, tables: FacadeTables) -> Self {
        Self { transport, tables }
    }

    /// Serve one facade request.
    ///
    /// Transport errors, non-200 answers, logical failures and a missing
    /// data container all become [`DispatchError::NotFound`]. Data that
    /// violates the known contract becomes [`DispatchError::DataIntegrity`].
    #[instrument(skip_all, fields(resource = %kind, vehicle = %vehicle_id))]
    pub async fn dispatch(
        &self,
        kind: ResourceKind,
        vehicle_id: &VehicleId,
        command: Option<&EngineCommand>,
    ) -> DispatchResult<PublicResult> {
        let endpoint = self.tables.endpoints.resolve(kind);
        let payload = build_payload(kind, vehicle_id, command, &self.tables.commands);
        debug!(%endpoint, command = ?payload.command, "Calling upstream");

        let reply = match self.transport.post_json(endpoint, &payload).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Upstream call failed");
                return Err(DispatchError::NotFound);
            }
        };

        if !reply.is_success() {
            debug!(status = reply.status, "Upstream reported failure");
            return Err(DispatchError::NotFound);
        }

        let container = reply
            .body
            .and_then(|mut body| body.get_mut(kind.container_field()).map(Value::take))
            .filter(|value| !value.is_null())
            .ok_or_else(|| {
                debug!(field = kind.container_field(), "Upstream answer has no data");
                DispatchError::NotFound
            })?;

        let decoded = decode_root(container, &self.tables.denylist).map_err(|e| {
            warn!(error = %e, "Upstream data could not be decoded");
            DispatchError::DataIntegrity(e.to_string())
        })?;

        transform(kind, decoded, &self.tables.statuses).map_err(|e| {
            warn!(error = %e, "Upstream data does not fit the public shape");
            DispatchError::from(e)
        })
    }
}
