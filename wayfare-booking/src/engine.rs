use std::sync::Arc;
use wayfare_catalog::{CatalogProvider, StaticCatalog};
use wayfare_core::{BookingRequest, CoreError, CoreResult, PaymentAdapter, RandomSource, SimulatedPaymentAdapter};
use crate::selector::BestOptionSelector;
use crate::state::BookingState;
use crate::steps::{BookingStep, StepContext};

/// Runs the booking steps in their fixed order over a single state.
///
/// The workflow holds only read-only collaborators, so one instance serves
/// concurrent requests; each run owns its state and random source.
pub struct BookingWorkflow {
    catalog: Arc<dyn CatalogProvider>,
    payments: Arc<dyn PaymentAdapter>,
    selector: BestOptionSelector,
}

impl BookingWorkflow {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        payments: Arc<dyn PaymentAdapter>,
        selector: BestOptionSelector,
    ) -> Self {
        Self { catalog, payments, selector }
    }

    /// Sample catalog, simulated payments and the default price band.
    pub fn with_sample_catalog() -> Self {
        Self::new(
            Arc::new(StaticCatalog::sample()),
            Arc::new(SimulatedPaymentAdapter),
            BestOptionSelector::default(),
        )
    }

    /// Validates the request, then folds the state through every step.
    ///
    /// Validation is the only failure; unmatched flights or hotels are
    /// carried as placeholders through to the summary.
    pub fn run(&self, request: &BookingRequest, rng: &mut dyn RandomSource) -> CoreResult<BookingState> {
        let initial = BookingState::from_request(request)?;

        let mut ctx = StepContext {
            catalog: self.catalog.as_ref(),
            selector: &self.selector,
            payments: self.payments.as_ref(),
            rng,
        };

        let state = BookingStep::PIPELINE.iter().fold(initial, |state, step| {
            tracing::debug!(step = step.name(), route = %state.route(), "Running booking step");
            step.apply(state, &mut ctx)
        });

        tracing::info!(
            route = %state.route(),
            booked = state.booked,
            transaction_id = state.transaction_id.as_deref().unwrap_or_default(),
            "Booking workflow completed"
        );

        Ok(state)
    }

    /// Runs the workflow and returns only the rendered summary.
    pub fn summarize(&self, request: &BookingRequest, rng: &mut dyn RandomSource) -> CoreResult<String> {
        self.run(request, rng)?
            .summary
            .ok_or_else(|| CoreError::InternalError("Workflow finished without a summary".to_string()))
    }
}
