use serde::{Deserialize, Serialize};

pub const NO_FLIGHTS_FOUND: &str = "No flights found";
pub const NO_HOTELS_FOUND: &str = "No hotels found";

/// City names compare trimmed and with full Unicode case folding.
fn same_place(listed: &str, requested: &str) -> bool {
    listed.trim().to_lowercase() == requested.trim().to_lowercase()
}

/// Anything the selector can weigh: a named offer with a price and a rating.
pub trait Offering {
    fn name(&self) -> &str;
    fn price(&self) -> f64;
    fn rating(&self) -> f64;
}

/// Flight offer on a single origin/destination route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    pub id: u32,
    pub name: String,
    pub from: String,
    pub to: String,
    pub price: f64,
    pub rating: f64,
}

impl Flight {
    pub fn new(id: u32, name: &str, from: &str, to: &str, price: f64, rating: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            price,
            rating,
        }
    }

    /// Placeholder used when no flight serves the requested route.
    pub fn not_found(from: &str, to: &str) -> Self {
        Self::new(0, NO_FLIGHTS_FOUND, from, to, 0.0, 0.0)
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == 0 && self.name == NO_FLIGHTS_FOUND
    }

    pub fn serves(&self, from: &str, to: &str) -> bool {
        same_place(&self.from, from) && same_place(&self.to, to)
    }
}

impl Offering for Flight {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn rating(&self) -> f64 {
        self.rating
    }
}

/// Hotel offer in a single city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub price: f64,
    pub rating: f64,
}

impl Hotel {
    pub fn new(id: u32, name: &str, city: &str, price: f64, rating: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            city: city.to_string(),
            price,
            rating,
        }
    }

    /// Placeholder used when no hotel is listed in the requested city.
    pub fn not_found(city: &str) -> Self {
        Self::new(0, NO_HOTELS_FOUND, city, 0.0, 0.0)
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == 0 && self.name == NO_HOTELS_FOUND
    }

    pub fn located_in(&self, city: &str) -> bool {
        same_place(&self.city, city)
    }
}

impl Offering for Hotel {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn rating(&self) -> f64 {
        self.rating
    }
}
