//! Application state for the facade API

use std::sync::Arc;

use vfacade_proxy::VehicleFacade;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    facade: Arc<VehicleFacade>,
}

impl AppState {
    pub fn new(facade: VehicleFacade) -> Self {
        Self::from_arc(Arc::new(facade))
    }

    /// Create state around an already shared facade
    pub fn from_arc(facade: Arc<VehicleFacade>) -> Self {
        Self { facade }
    }

    pub fn facade(&self) -> &VehicleFacade {
        &self.facade
    }
}
