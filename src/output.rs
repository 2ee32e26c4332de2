//! Output formatting module

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::types::Vehicle;

pub fn output_vehicles(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(vehicles)?;
        println!("{}", content);
        return Ok(());
    }

    // Table format: one card per vehicle
    if vehicles.is_empty() {
        println!("No vehicles found.");
        return Ok(());
    }

    for vehicle in vehicles {
        println!("\nVehicle #{}", vehicle.id);
        println!("--------------");
        println!("Make:          {}", vehicle.make);
        println!("Model:         {}", vehicle.model);
        println!("Year:          {}", vehicle.year);
        println!("Fuel type:     {}", vehicle.fuel_type);
        println!("Transmission:  {}", vehicle.transmission);
        println!("Mileage:       {:.0}", vehicle.mileage);
        println!("Price:         {:.2}", vehicle.price);
    }

    println!(
        "\n{} vehicle{} found",
        vehicles.len(),
        if vehicles.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
