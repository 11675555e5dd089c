use async_trait::async_trait;
use crate::state::BookingState;

/// Deterministic confirmation text built from every field of the state.
pub fn render_summary(state: &BookingState) -> String {
    let mut lines = Vec::new();

    lines.push(if state.booked {
        "Booking confirmed".to_string()
    } else {
        "Booking not confirmed".to_string()
    });
    lines.push(format!("Route: {}", state.route()));

    if let Some(date) = state.travel_date {
        lines.push(format!("Travel date: {}", date.format("%Y-%m-%d")));
    }

    lines.push(match &state.best_flight {
        Some(flight) if flight.is_placeholder() => {
            format!("Flight: {} for {}", flight.name, state.route())
        }
        Some(flight) => format!(
            "Flight: {} ({} → {}), price {:.2}, rating {:.1}/5",
            flight.name, flight.from, flight.to, flight.price, flight.rating
        ),
        None => "Flight: not selected".to_string(),
    });

    lines.push(match &state.best_hotel {
        Some(hotel) if hotel.is_placeholder() => format!("Hotel: {} in {}", hotel.name, state.to_city),
        Some(hotel) => format!(
            "Hotel: {} in {}, price {:.2}, rating {:.1}/5",
            hotel.name, hotel.city, hotel.price, hotel.rating
        ),
        None => "Hotel: not selected".to_string(),
    });

    lines.push(format!(
        "Seat: {} ({} preference)",
        state.seat_number.as_deref().unwrap_or("unassigned"),
        state.seat_preference
    ));
    lines.push(format!(
        "Transaction ID: {}",
        state.transaction_id.as_deref().unwrap_or("none")
    ));
    lines.push(format!("Total charged: {:.2}", state.total_amount.unwrap_or(0.0)));

    lines.join("\n")
}

#[derive(Debug, thiserror::Error)]
pub enum PhrasingError {
    #[error("Summary phrasing unavailable: {0}")]
    Unavailable(String),

    #[error("Summary phrasing timed out after {0}ms")]
    Timeout(u64),

    #[error("Summary phrasing returned empty text")]
    Empty,
}

/// Optional collaborator that rewrites the templated summary in friendlier prose.
///
/// Called after the pipeline completes. Any failure keeps the templated text.
#[async_trait]
pub trait SummaryPhraser: Send + Sync {
    async fn phrase(&self, state: &BookingState) -> Result<String, PhrasingError>;
}
