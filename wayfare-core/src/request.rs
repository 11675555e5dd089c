use serde::{Deserialize, Deserializer, Serialize};
use chrono::NaiveDate;
use crate::{CoreError, CoreResult};

/// Travel request handed to the booking workflow by the request layer.
///
/// Cities and seat preference default to empty strings when absent or `null`
/// so that a missing field surfaces as a validation error rather than a
/// decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub from_city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub to_city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub seat_preference: String,
    #[serde(default)]
    pub travel_date: Option<NaiveDate>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl BookingRequest {
    pub fn new(from_city: &str, to_city: &str, seat_preference: &str) -> Self {
        Self {
            from_city: from_city.to_string(),
            to_city: to_city.to_string(),
            seat_preference: seat_preference.to_string(),
            travel_date: None,
        }
    }

    pub fn with_travel_date(mut self, date: NaiveDate) -> Self {
        self.travel_date = Some(date);
        self
    }

    /// Both cities must be present and non-blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.from_city.trim().is_empty() {
            return Err(CoreError::ValidationError("from_city is required".to_string()));
        }
        if self.to_city.trim().is_empty() {
            return Err(CoreError::ValidationError("to_city is required".to_string()));
        }
        Ok(())
    }
}
