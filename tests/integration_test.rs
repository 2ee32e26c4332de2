//! Integration tests for the inventory client and fetch-then-filter flow
//!
//! Each test stands up a one-shot HTTP server on a loopback socket and
//! points a `VehicleSource` at it.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

use vinv::error::Error;
use vinv::filter::filter_vehicles;
use vinv::source::VehicleSource;
use vinv::types::SearchCriteria;

const INVENTORY_JSON: &str = r#"[
    {"id": 1, "make": "Toyota", "model": "Corolla", "year": 2020,
     "fuel_type": "Petrol", "transmission": "Automatic",
     "mileage": 15000, "price": 18000},
    {"id": 2, "make": "Ford", "model": "Mustang", "year": 2022,
     "fuel_type": "Petrol", "transmission": "Manual",
     "mileage": 5000, "price": 35000}
]"#;

/// Serve exactly one canned response, returning the base URL to hit
fn serve_one(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local addr");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

#[test]
fn test_fetch_all() {
    let base_url = serve_one("200 OK", INVENTORY_JSON);
    let source = VehicleSource::new(&base_url, 5_000).expect("Failed to build client");

    let vehicles = source.fetch_all().expect("Fetch should succeed");
    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[0].make, "Toyota");
    assert_eq!(vehicles[1].id, 2);
    assert_eq!(vehicles[1].transmission, "Manual");
}

#[test]
fn test_fetch_by_id_found() {
    let body = r#"{"id": 2, "make": "Ford", "model": "Mustang", "year": 2022,
                   "fuel_type": "Petrol", "transmission": "Manual",
                   "mileage": 5000, "price": 35000}"#;
    let base_url = serve_one("200 OK", body);
    let source = VehicleSource::new(&base_url, 5_000).expect("Failed to build client");

    let vehicle = source.fetch_by_id(2).expect("Fetch should succeed");
    let vehicle = vehicle.expect("Vehicle 2 should exist");
    assert_eq!(vehicle.id, 2);
    assert_eq!(vehicle.model, "Mustang");
}

#[test]
fn test_fetch_by_id_missing_is_none_not_error() {
    let base_url = serve_one("404 Not Found", "");
    let source = VehicleSource::new(&base_url, 5_000).expect("Failed to build client");

    let vehicle = source.fetch_by_id(999).expect("404 should not be an error");
    assert!(vehicle.is_none());
}

#[test]
fn test_fetch_all_server_error() {
    let base_url = serve_one("500 Internal Server Error", "");
    let source = VehicleSource::new(&base_url, 5_000).expect("Failed to build client");

    match source.fetch_all() {
        Err(Error::Fetch { status }) => assert_eq!(status, 500),
        other => panic!("Expected fetch error, got {:?}", other),
    }
}

#[test]
fn test_fetch_all_malformed_body() {
    let base_url = serve_one("200 OK", "not json at all");
    let source = VehicleSource::new(&base_url, 5_000).expect("Failed to build client");

    assert!(matches!(source.fetch_all(), Err(Error::InvalidRecord(_))));
}

#[test]
fn test_fetch_all_rejects_out_of_range_record() {
    let body = r#"[{"id": 1, "make": "Toyota", "model": "Corolla", "year": 2020,
                    "fuel_type": "Petrol", "transmission": "Automatic",
                    "mileage": -15000, "price": 18000}]"#;
    let base_url = serve_one("200 OK", body);
    let source = VehicleSource::new(&base_url, 5_000).expect("Failed to build client");

    assert!(matches!(source.fetch_all(), Err(Error::InvalidRecord(_))));
}

#[test]
fn test_fetch_times_out_instead_of_hanging() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local addr");

    // Accept the connection but never answer; the client timeout must fire
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            thread::sleep(Duration::from_secs(5));
        }
    });

    let source = VehicleSource::new(&format!("http://{}", addr), 200)
        .expect("Failed to build client");

    let started = Instant::now();
    match source.fetch_all() {
        Err(Error::Http(e)) => assert!(e.is_timeout(), "Expected timeout, got {:?}", e),
        other => panic!("Expected transport error, got {:?}", other),
    }
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "Request should fail at the configured timeout, not hang"
    );
}

#[test]
fn test_fetch_then_filter() {
    let base_url = serve_one("200 OK", INVENTORY_JSON);
    let source = VehicleSource::new(&base_url, 5_000).expect("Failed to build client");

    let all = source.fetch_all().expect("Fetch should succeed");
    let criteria = SearchCriteria::new().with_make("ford");
    let filtered = filter_vehicles(&all, &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);

    // Unconstrained criteria leave the collection untouched
    assert_eq!(filter_vehicles(&all, &SearchCriteria::new()), all);
}
