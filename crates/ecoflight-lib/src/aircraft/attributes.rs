//! Aircraft performance record.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StructuralError};

/// Cruise performance of an aircraft type.
///
/// Fuel burn is expressed per kilometer flown so that it scales with leg
/// distance independently of cruise speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    #[serde(alias = "name", alias = "aircraft")]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(alias = "fuel_efficiency_kg_per_km", alias = "fuel_burn")]
    pub fuel_burn_kg_per_km: f64,
    #[serde(alias = "cruise_speed")]
    pub cruise_speed_kmh: f64,
    #[serde(default, alias = "range_km")]
    pub max_range_km: Option<f64>,
}

impl Aircraft {
    pub fn new(
        model: impl Into<String>,
        manufacturer: impl Into<String>,
        fuel_burn_kg_per_km: f64,
        cruise_speed_kmh: f64,
    ) -> Self {
        Self {
            model: model.into(),
            manufacturer: manufacturer.into(),
            fuel_burn_kg_per_km,
            cruise_speed_kmh,
            max_range_km: None,
        }
    }

    /// Attach a maximum range; legs longer than this are not flyable.
    pub fn with_max_range(mut self, max_range_km: f64) -> Self {
        self.max_range_km = Some(max_range_km);
        self
    }

    /// Validate aircraft attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(StructuralError::InvalidAircraft {
                message: "aircraft model must not be empty".to_string(),
            }
            .into());
        }

        let fields = [
            (self.fuel_burn_kg_per_km, "fuel_burn_kg_per_km"),
            (self.cruise_speed_kmh, "cruise_speed_kmh"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(StructuralError::InvalidAircraft {
                    message: format!(
                        "{field} for '{}' must be a finite positive number",
                        self.model
                    ),
                }
                .into());
            }
        }

        if let Some(range) = self.max_range_km {
            if !range.is_finite() || range <= 0.0 {
                return Err(StructuralError::InvalidAircraft {
                    message: format!(
                        "max_range_km for '{}' must be a finite positive number",
                        self.model
                    ),
                }
                .into());
            }
        }

        Ok(())
    }
}
