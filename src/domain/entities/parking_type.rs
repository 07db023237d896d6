//! Vehicle category served by the lot.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::json;

use crate::error::AppError;

/// Category of a vehicle and of the spot pool it parks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParkingType {
    Car,
    Bike,
}

impl ParkingType {
    /// Maps a console menu selection (`1` car, `2` bike) to a category.
    pub fn from_selection(selection: u32) -> Option<Self> {
        match selection {
            1 => Some(ParkingType::Car),
            2 => Some(ParkingType::Bike),
            _ => None,
        }
    }

    /// Database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParkingType::Car => "CAR",
            ParkingType::Bike => "BIKE",
        }
    }
}

impl fmt::Display for ParkingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParkingType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CAR" => Ok(ParkingType::Car),
            "BIKE" => Ok(ParkingType::Bike),
            other => Err(AppError::invalid_category(
                "Unknown parking type",
                json!({ "parking_type": other }),
            )),
        }
    }
}
