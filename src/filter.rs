//! Filtering of vehicle records against search criteria
//!
//! Pure in-memory transformation: no I/O, no state between calls.

use crate::types::{SearchCriteria, Vehicle};

/// Check whether a single vehicle satisfies every supplied criterion.
///
/// Absent criteria are vacuously true. An empty text criterion counts as
/// absent, so a cleared form field never narrows the result.
pub fn matches(vehicle: &Vehicle, criteria: &SearchCriteria) -> bool {
    text_matches(&criteria.make, &vehicle.make)
        && text_matches(&criteria.model, &vehicle.model)
        && text_matches(&criteria.fuel_type, &vehicle.fuel_type)
        && text_matches(&criteria.transmission, &vehicle.transmission)
        && criteria.year.map(|y| vehicle.year == y).unwrap_or(true)
        && criteria.max_mileage.map(|m| vehicle.mileage <= m).unwrap_or(true)
        && criteria.max_price.map(|p| vehicle.price <= p).unwrap_or(true)
}

/// Case-insensitive substring match; `None` and `""` place no constraint.
fn text_matches(criterion: &Option<String>, value: &str) -> bool {
    match criterion.as_deref() {
        None | Some("") => true,
        Some(c) => value.to_lowercase().contains(&c.to_lowercase()),
    }
}

/// Return the vehicles satisfying all supplied criteria, in their
/// original relative order (stable filter, not a re-sort).
pub fn filter_vehicles(vehicles: &[Vehicle], criteria: &SearchCriteria) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|v| matches(v, criteria))
        .cloned()
        .collect()
}
