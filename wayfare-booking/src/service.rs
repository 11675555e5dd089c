use std::sync::Arc;
use std::time::Duration;
use wayfare_core::{BookingRequest, CoreResult, SeededRandom, ThreadRandom};
use crate::engine::BookingWorkflow;
use crate::state::BookingState;
use crate::summary::{PhrasingError, SummaryPhraser};

pub const DEFAULT_PHRASING_TIMEOUT: Duration = Duration::from_secs(5);

/// Entry point used by the request layer.
///
/// Picks the random source for each run, executes the workflow and, when a
/// phraser is configured, swaps in its text for the templated summary.
pub struct BookingService {
    workflow: Arc<BookingWorkflow>,
    phraser: Option<Arc<dyn SummaryPhraser>>,
    phrasing_timeout: Duration,
    seed: Option<u64>,
}

impl BookingService {
    pub fn new(workflow: Arc<BookingWorkflow>) -> Self {
        Self {
            workflow,
            phraser: None,
            phrasing_timeout: DEFAULT_PHRASING_TIMEOUT,
            seed: None,
        }
    }

    /// Every run draws from a generator seeded with `seed`.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_phraser(mut self, phraser: Arc<dyn SummaryPhraser>, timeout: Duration) -> Self {
        self.phraser = Some(phraser);
        self.phrasing_timeout = timeout;
        self
    }

    pub async fn book(&self, request: &BookingRequest) -> CoreResult<BookingState> {
        let mut state = match self.seed {
            Some(seed) => self.workflow.run(request, &mut SeededRandom::new(seed))?,
            None => self.workflow.run(request, &mut ThreadRandom)?,
        };

        if let Some(phraser) = &self.phraser {
            match self.phrase(phraser.as_ref(), &state).await {
                Ok(text) => state.summary = Some(text),
                Err(e) => {
                    tracing::warn!("Keeping templated summary: {}", e);
                }
            }
        }

        Ok(state)
    }

    async fn phrase(&self, phraser: &dyn SummaryPhraser, state: &BookingState) -> Result<String, PhrasingError> {
        let text = tokio::time::timeout(self.phrasing_timeout, phraser.phrase(state))
            .await
            .map_err(|_| PhrasingError::Timeout(self.phrasing_timeout.as_millis() as u64))??;

        if text.trim().is_empty() {
            return Err(PhrasingError::Empty);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wayfare_core::CoreError;

    struct FriendlyPhraser;

    #[async_trait]
    impl SummaryPhraser for FriendlyPhraser {
        async fn phrase(&self, state: &BookingState) -> Result<String, PhrasingError> {
            Ok(format!("Bon voyage! You're off to {}.", state.to_city))
        }
    }

    struct BrokenPhraser;

    #[async_trait]
    impl SummaryPhraser for BrokenPhraser {
        async fn phrase(&self, _state: &BookingState) -> Result<String, PhrasingError> {
            Err(PhrasingError::Unavailable("upstream returned 503".to_string()))
        }
    }

    struct BlankPhraser;

    #[async_trait]
    impl SummaryPhraser for BlankPhraser {
        async fn phrase(&self, _state: &BookingState) -> Result<String, PhrasingError> {
            Ok("   ".to_string())
        }
    }

    struct SlowPhraser;

    #[async_trait]
    impl SummaryPhraser for SlowPhraser {
        async fn phrase(&self, _state: &BookingState) -> Result<String, PhrasingError> {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok("too late".to_string())
        }
    }

    fn service() -> BookingService {
        BookingService::new(Arc::new(BookingWorkflow::with_sample_catalog()))
    }

    fn request() -> BookingRequest {
        BookingRequest::new("Delhi", "Paris", "Window")
    }

    #[tokio::test]
    async fn test_templated_summary_without_phraser() {
        let state = service().book(&request()).await.unwrap();
        assert!(state.summary.unwrap().starts_with("Booking confirmed"));
    }

    #[tokio::test]
    async fn test_phraser_replaces_summary() {
        let service = service().with_phraser(Arc::new(FriendlyPhraser), Duration::from_secs(1));
        let state = service.book(&request()).await.unwrap();
        assert_eq!(state.summary.as_deref(), Some("Bon voyage! You're off to Paris."));
    }

    #[tokio::test]
    async fn test_failing_phraser_falls_back_to_template() {
        let phrasers: Vec<Arc<dyn SummaryPhraser>> = vec![Arc::new(BrokenPhraser), Arc::new(BlankPhraser)];
        for phraser in phrasers {
            let service = service().with_phraser(phraser, Duration::from_secs(1));
            let state = service.book(&request()).await.unwrap();
            let summary = state.summary.unwrap();
            assert!(summary.starts_with("Booking confirmed"));
            assert!(summary.contains("Vistara"));
        }
    }

    #[tokio::test]
    async fn test_slow_phraser_times_out() {
        let service = service().with_phraser(Arc::new(SlowPhraser), Duration::from_millis(20));
        let state = service.book(&request()).await.unwrap();
        assert!(state.summary.unwrap().contains("Transaction ID: TXN-"));
    }

    #[tokio::test]
    async fn test_seeded_service_is_reproducible() {
        let service = service().with_seed(Some(7));
        let first = service.book(&request()).await.unwrap();
        let second = service.book(&request()).await.unwrap();
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.transaction_id, second.transaction_id);
    }

    #[tokio::test]
    async fn test_validation_error_is_surfaced() {
        let result = service().book(&BookingRequest::new("", "Paris", "Window")).await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }
}
