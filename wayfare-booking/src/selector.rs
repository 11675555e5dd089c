use wayfare_catalog::Offering;

pub const DEFAULT_PRICE_CEILING_RATIO: f64 = 1.2;

/// Picks the best offer in the "normal" price band.
///
/// Candidates priced above `median * price_ceiling_ratio` are discarded, then
/// the highest rated survivor wins, cheaper first on equal ratings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestOptionSelector {
    price_ceiling_ratio: f64,
}

impl Default for BestOptionSelector {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_CEILING_RATIO)
    }
}

impl BestOptionSelector {
    pub fn new(price_ceiling_ratio: f64) -> Self {
        Self { price_ceiling_ratio }
    }

    pub fn price_ceiling_ratio(&self) -> f64 {
        self.price_ceiling_ratio
    }

    /// Returns `None` only for an empty candidate list.
    pub fn select<'a, T: Offering>(&self, candidates: &[&'a T]) -> Option<&'a T> {
        let first = *candidates.first()?;
        let median = median(candidates.iter().map(|c| c.price()))?;
        let threshold = median * self.price_ceiling_ratio;

        let mut affordable: Vec<&'a T> = candidates
            .iter()
            .copied()
            .filter(|c| c.price() <= threshold)
            .collect();

        affordable.sort_by(|a, b| {
            b.rating()
                .total_cmp(&a.rating())
                .then_with(|| a.price().total_cmp(&b.price()))
        });

        // Nothing inside the band (non-finite prices, ratio below 1): keep the first listing.
        let chosen = affordable.first().copied().unwrap_or(first);

        tracing::debug!(
            candidates = candidates.len(),
            affordable = affordable.len(),
            median,
            threshold,
            chosen = chosen.name(),
            "Price band computed"
        );

        Some(chosen)
    }
}

/// Median of a set of prices; the mean of the two middle values for even sizes.
pub fn median(prices: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sorted: Vec<f64> = prices.collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
