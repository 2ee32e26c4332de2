//! HTTP client for the vehicle inventory backend
//!
//! The backend exposes two read-only endpoints:
//! - `GET /api/vehicles` - the full collection as a JSON array
//! - `GET /api/vehicles/{id}` - a single record, 404 when absent
//!
//! Responses are validated at this boundary so malformed records surface
//! as `Error::InvalidRecord` instead of faulting downstream.

use crate::error::{Error, Result};
use crate::types::Vehicle;
use std::time::Duration;

/// Client for the inventory backend
pub struct VehicleSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl VehicleSource {
    /// Build a client against the given base URL with a request timeout
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full vehicle collection
    pub fn fetch_all(&self) -> Result<Vec<Vehicle>> {
        let url = format!("{}/api/vehicles", self.base_url);
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Fetch { status: status.as_u16() });
        }

        let body = resp.text()?;
        let vehicles: Vec<Vehicle> = serde_json::from_str(&body)
            .map_err(|e| Error::InvalidRecord(e.to_string()))?;
        for vehicle in &vehicles {
            vehicle.validate().map_err(Error::InvalidRecord)?;
        }
        Ok(vehicles)
    }

    /// Fetch a single vehicle by identifier, `None` when the backend
    /// reports it missing
    pub fn fetch_by_id(&self, id: u64) -> Result<Option<Vehicle>> {
        let url = format!("{}/api/vehicles/{}", self.base_url, id);
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::Fetch { status: status.as_u16() });
        }

        let body = resp.text()?;
        let vehicle: Vehicle = serde_json::from_str(&body)
            .map_err(|e| Error::InvalidRecord(e.to_string()))?;
        vehicle.validate().map_err(Error::InvalidRecord)?;
        Ok(Some(vehicle))
    }
}
