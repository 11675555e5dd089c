use chrono::NaiveDate;
use wayfare_catalog::{Flight, Hotel};
use wayfare_core::{BookingRequest, CoreResult, SeatPreference};

/// Record threaded through the booking pipeline.
///
/// Each step takes the state by value and hands back an updated copy. Every
/// optional field is written by exactly one step.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingState {
    pub from_city: String,
    pub to_city: String,
    pub seat_preference: SeatPreference,
    pub travel_date: Option<NaiveDate>,
    pub best_flight: Option<Flight>,
    pub best_hotel: Option<Hotel>,
    pub seat_number: Option<String>,
    pub transaction_id: Option<String>,
    pub total_amount: Option<f64>,
    pub booked: bool,
    pub summary: Option<String>,
}

impl BookingState {
    /// Validates the request and builds the state the first step receives.
    pub fn from_request(request: &BookingRequest) -> CoreResult<Self> {
        request.validate()?;

        Ok(Self {
            from_city: request.from_city.trim().to_string(),
            to_city: request.to_city.trim().to_string(),
            seat_preference: SeatPreference::parse_lenient(&request.seat_preference),
            travel_date: request.travel_date,
            best_flight: None,
            best_hotel: None,
            seat_number: None,
            transaction_id: None,
            total_amount: None,
            booked: false,
            summary: None,
        })
    }

    pub fn route(&self) -> String {
        format!("{} → {}", self.from_city, self.to_city)
    }

    /// True when neither a flight nor a hotel matched the request.
    pub fn nothing_matched(&self) -> bool {
        let no_flight = self.best_flight.as_ref().map_or(true, Flight::is_placeholder);
        let no_hotel = self.best_hotel.as_ref().map_or(true, Hotel::is_placeholder);
        no_flight && no_hotel
    }
}
