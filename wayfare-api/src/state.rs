use std::sync::Arc;
use wayfare_booking::{BestOptionSelector, BookingService, BookingWorkflow};
use wayfare_core::SimulatedPaymentAdapter;
use wayfare_store::{catalog_from_config, Config, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub booking: Arc<BookingService>,
    pub cors_origins: Vec<String>,
}

impl AppState {
    pub fn new(booking: BookingService, cors_origins: Vec<String>) -> Self {
        Self {
            booking: Arc::new(booking),
            cors_origins,
        }
    }

    /// Wires the catalog, selector and seed named by the configuration.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let catalog = catalog_from_config(&config.catalog)?;
        let workflow = BookingWorkflow::new(
            Arc::new(catalog),
            Arc::new(SimulatedPaymentAdapter),
            BestOptionSelector::new(config.selection.price_ceiling_ratio),
        );
        let booking = BookingService::new(Arc::new(workflow)).with_seed(config.workflow.seed);

        Ok(Self::new(booking, config.server.cors_origins.clone()))
    }
}
