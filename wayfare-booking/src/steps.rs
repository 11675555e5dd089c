use chrono::Utc;
use wayfare_catalog::{CatalogProvider, Flight, Hotel};
use wayfare_core::{PaymentAdapter, RandomSource, TransactionRecord, DEFAULT_CURRENCY};
use crate::selector::BestOptionSelector;
use crate::state::BookingState;
use crate::summary::render_summary;

pub const SEAT_ROWS: (u32, u32) = (1, 30);
pub const TRANSACTION_RANGE: (u32, u32) = (100_000, 999_999);

/// Collaborators a step may read from while it runs.
pub struct StepContext<'a> {
    pub catalog: &'a dyn CatalogProvider,
    pub selector: &'a BestOptionSelector,
    pub payments: &'a dyn PaymentAdapter,
    pub rng: &'a mut dyn RandomSource,
}

/// The stages of a booking, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    SelectFlight,
    SelectHotel,
    AssignSeat,
    TakeTransaction,
    AutoBook,
    RenderSummary,
}

impl BookingStep {
    pub const PIPELINE: [BookingStep; 6] = [
        BookingStep::SelectFlight,
        BookingStep::SelectHotel,
        BookingStep::AssignSeat,
        BookingStep::TakeTransaction,
        BookingStep::AutoBook,
        BookingStep::RenderSummary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BookingStep::SelectFlight => "select_flight",
            BookingStep::SelectHotel => "select_hotel",
            BookingStep::AssignSeat => "assign_seat",
            BookingStep::TakeTransaction => "take_transaction",
            BookingStep::AutoBook => "auto_book",
            BookingStep::RenderSummary => "render_summary",
        }
    }

    pub fn apply(self, state: BookingState, ctx: &mut StepContext<'_>) -> BookingState {
        match self {
            BookingStep::SelectFlight => select_flight(state, ctx.catalog, ctx.selector),
            BookingStep::SelectHotel => select_hotel(state, ctx.catalog, ctx.selector),
            BookingStep::AssignSeat => assign_seat(state, ctx.rng),
            BookingStep::TakeTransaction => take_transaction(state, ctx.rng, ctx.payments),
            BookingStep::AutoBook => auto_book(state),
            BookingStep::RenderSummary => render(state),
        }
    }
}

pub fn select_flight(
    state: BookingState,
    catalog: &dyn CatalogProvider,
    selector: &BestOptionSelector,
) -> BookingState {
    let candidates = catalog.flights_between(&state.from_city, &state.to_city);
    let flight = match selector.select(&candidates) {
        Some(flight) => flight.clone(),
        None => {
            tracing::info!(route = %state.route(), "No flights found");
            Flight::not_found(&state.from_city, &state.to_city)
        }
    };

    BookingState { best_flight: Some(flight), ..state }
}

pub fn select_hotel(
    state: BookingState,
    catalog: &dyn CatalogProvider,
    selector: &BestOptionSelector,
) -> BookingState {
    let candidates = catalog.hotels_in(&state.to_city);
    let hotel = match selector.select(&candidates) {
        Some(hotel) => hotel.clone(),
        None => {
            tracing::info!(city = %state.to_city, "No hotels found");
            Hotel::not_found(&state.to_city)
        }
    };

    BookingState { best_hotel: Some(hotel), ..state }
}

/// Row in `[1, 30]` followed by a letter from the preference's letter set.
pub fn assign_seat(state: BookingState, rng: &mut dyn RandomSource) -> BookingState {
    let letters = state.seat_preference.letters();
    let row = rng.next_in_range(SEAT_ROWS.0, SEAT_ROWS.1).clamp(SEAT_ROWS.0, SEAT_ROWS.1);
    let index = rng.next_in_range(0, letters.len() as u32 - 1) as usize;
    let letter = letters.get(index).copied().unwrap_or(letters[0]);

    BookingState {
        seat_number: Some(format!("{}{}", row, letter)),
        ..state
    }
}

pub fn take_transaction(
    state: BookingState,
    rng: &mut dyn RandomSource,
    payments: &dyn PaymentAdapter,
) -> BookingState {
    let flight_price = state.best_flight.as_ref().map_or(0.0, |f| f.price);
    let hotel_price = state.best_hotel.as_ref().map_or(0.0, |h| h.price);
    let amount = flight_price + hotel_price;

    let number = rng
        .next_in_range(TRANSACTION_RANGE.0, TRANSACTION_RANGE.1)
        .clamp(TRANSACTION_RANGE.0, TRANSACTION_RANGE.1);
    let transaction_id = format!("TXN-{}", number);

    payments.record_transaction(&TransactionRecord {
        transaction_id: transaction_id.clone(),
        amount,
        currency: DEFAULT_CURRENCY.to_string(),
        route: state.route(),
        recorded_at: Utc::now(),
    });

    BookingState {
        transaction_id: Some(transaction_id),
        total_amount: Some(amount),
        ..state
    }
}

/// Always confirms, including when neither a flight nor a hotel matched.
pub fn auto_book(state: BookingState) -> BookingState {
    if state.nothing_matched() {
        tracing::warn!(route = %state.route(), "Confirming booking with no matched flight or hotel");
    }

    BookingState { booked: true, ..state }
}

pub fn render(state: BookingState) -> BookingState {
    let summary = render_summary(&state);
    BookingState { summary: Some(summary), ..state }
}
