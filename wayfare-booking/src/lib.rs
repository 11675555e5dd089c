pub mod selector;
pub mod state;
pub mod steps;
pub mod summary;
pub mod engine;
pub mod service;

pub use selector::BestOptionSelector;
pub use state::BookingState;
pub use steps::{BookingStep, StepContext};
pub use summary::{render_summary, PhrasingError, SummaryPhraser};
pub use engine::BookingWorkflow;
pub use service::BookingService;

#[cfg(test)]
mod test_support;
