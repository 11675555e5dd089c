use serde::{Deserialize, Serialize};
use crate::product::{Flight, Hotel};

/// Read-only access to flight and hotel offers.
///
/// The workflow only reads from the provider, so one instance can be shared
/// across any number of concurrent booking runs.
pub trait CatalogProvider: Send + Sync {
    fn flights(&self) -> &[Flight];

    fn hotels(&self) -> &[Hotel];

    /// Flights whose route matches both cities, ignoring case.
    fn flights_between(&self, from: &str, to: &str) -> Vec<&Flight> {
        self.flights().iter().filter(|f| f.serves(from, to)).collect()
    }

    /// Hotels located in `city`, ignoring case.
    fn hotels_in(&self, city: &str) -> Vec<&Hotel> {
        self.hotels().iter().filter(|h| h.located_in(city)).collect()
    }
}

/// In-memory catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
}

impl StaticCatalog {
    pub fn new(flights: Vec<Flight>, hotels: Vec<Hotel>) -> Self {
        Self { flights, hotels }
    }

    /// The built-in demo inventory.
    pub fn sample() -> Self {
        let flights = vec![
            Flight::new(1, "Air India", "Delhi", "Paris", 450.0, 4.5),
            Flight::new(2, "Indigo", "Delhi", "Paris", 400.0, 4.2),
            Flight::new(3, "Vistara", "Delhi", "Paris", 480.0, 4.7),
            Flight::new(4, "SpiceJet", "Delhi", "Paris", 370.0, 3.9),
            Flight::new(5, "Lufthansa", "Mumbai", "Berlin", 500.0, 4.6),
        ];
        let hotels = vec![
            Hotel::new(1, "Hotel Le Grand", "Paris", 150.0, 4.8),
            Hotel::new(2, "Budget Stay", "Paris", 80.0, 3.9),
            Hotel::new(3, "Comfort Inn", "Paris", 120.0, 4.4),
            Hotel::new(4, "Luxury Palace", "Paris", 250.0, 4.9),
            Hotel::new(5, "Downtown Suites", "Berlin", 160.0, 4.3),
        ];
        Self { flights, hotels }
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty() && self.hotels.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn flights(&self) -> &[Flight] {
        &self.flights
    }

    fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }
}
