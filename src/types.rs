//! Core types for the vehicle inventory

use serde::{Deserialize, Serialize};

/// A single vehicle record as served by the inventory API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier, assigned by the backend
    pub id: u64,
    /// Manufacturer (e.g., "Toyota", "Ford")
    pub make: String,
    /// Model name (e.g., "Corolla", "Mustang")
    pub model: String,
    /// Model year
    pub year: i32,
    /// Fuel type (free-form: "Petrol", "Diesel", "Electric", ...)
    pub fuel_type: String,
    /// Transmission (free-form: "Manual", "Automatic", ...)
    pub transmission: String,
    /// Odometer reading
    pub mileage: f64,
    /// Asking price
    pub price: f64,
}

impl Vehicle {
    /// Check that numeric fields are in range. Records come from an
    /// external API; a negative mileage or price means the response is
    /// bad data, not a vehicle.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.mileage.is_finite() || self.mileage < 0.0 {
            return Err(format!("vehicle {}: mileage {} out of range", self.id, self.mileage));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("vehicle {}: price {} out of range", self.id, self.price));
        }
        Ok(())
    }
}

/// Search criteria for filtering the inventory.
///
/// Every field is optional; an absent field places no constraint on the
/// matching records. Text criteria match as case-insensitive substrings,
/// `year` matches exactly, `max_mileage` and `max_price` are inclusive
/// upper bounds. A supplied `0.0` bound is a real constraint (only
/// records at exactly zero pass), unlike an absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub max_mileage: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = Some(fuel_type.into());
        self
    }

    pub fn with_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = Some(transmission.into());
        self
    }

    pub fn with_max_mileage(mut self, max_mileage: f64) -> Self {
        self.max_mileage = Some(max_mileage);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// True when no field constrains anything. Empty-string text criteria
    /// count as unconstrained, matching the form behavior where a cleared
    /// input means "any".
    pub fn is_unconstrained(&self) -> bool {
        fn blank(s: &Option<String>) -> bool {
            s.as_deref().map(str::is_empty).unwrap_or(true)
        }
        blank(&self.make)
            && blank(&self.model)
            && blank(&self.fuel_type)
            && blank(&self.transmission)
            && self.year.is_none()
            && self.max_mileage.is_none()
            && self.max_price.is_none()
    }
}
