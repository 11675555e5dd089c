use serde::{Deserialize, Serialize};
use std::fmt;

/// Seat position requested by the traveller.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeatPreference {
    #[default]
    Window,
    Aisle,
    Middle,
}

impl SeatPreference {
    /// Case-insensitive parse. Anything unrecognized falls back to `Window`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "aisle" => SeatPreference::Aisle,
            "middle" => SeatPreference::Middle,
            _ => SeatPreference::Window,
        }
    }

    /// Seat letters on a 3-3 cabin layout that satisfy this preference.
    pub fn letters(&self) -> &'static [char] {
        match self {
            SeatPreference::Window => &['A', 'F'],
            SeatPreference::Aisle => &['C', 'D'],
            SeatPreference::Middle => &['B', 'E'],
        }
    }
}

impl fmt::Display for SeatPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeatPreference::Window => "Window",
            SeatPreference::Aisle => "Aisle",
            SeatPreference::Middle => "Middle",
        };
        f.write_str(label)
    }
}
