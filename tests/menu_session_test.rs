use rental_desk::{FleetConfig, MenuSession, RentalService, ReturnPolicy};
use std::io::Cursor;

fn desk(policy: ReturnPolicy) -> (RentalService, FleetConfig) {
    let mut fleet = FleetConfig::builtin();
    fleet.desk.return_policy = Some(policy);
    (RentalService::from_config(&fleet), fleet)
}

fn run_script(service: &mut RentalService, fleet: &FleetConfig, script: &str) -> String {
    let mut output = Vec::new();
    {
        let mut session =
            MenuSession::with_config(service, Cursor::new(script.as_bytes()), &mut output, fleet);
        session.run().unwrap();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn test_rent_view_and_return_through_menu() {
    let (mut service, fleet) = desk(ReturnPolicy::Simple);

    let script = "1\nAda Lovelace\n555-0101\nV001\n3\ny\n4\n2\nV001\n4\n5\n";
    let output = run_script(&mut service, &fleet, script);

    assert!(output.contains("===== Car Rental Service ====="));
    assert!(output.contains("V001 - Toyota Corolla"));
    assert!(output.contains("Customer ID: CUS1"));
    assert!(output.contains("Vehicle: Toyota Corolla"));
    assert!(output.contains("Rental Days: 3"));
    assert!(output.contains("Total Cost: $150.00"));
    assert!(output.contains("Vehicle rented successfully."));
    assert!(output.contains(
        "Customer: Ada Lovelace | Phone: 555-0101 | Vehicle: Toyota Corolla | Days: 3 | Total: $150.00"
    ));
    assert!(output.contains("Vehicle returned successfully by Ada Lovelace"));
    assert!(output.contains("No active rentals."));
    assert!(output.ends_with("Thank you for using the Car Rental Service!\n"));

    assert!(service.find_vehicle("V001").unwrap().is_available());
    assert_eq!(service.open_rental_count(), 0);
}

#[test]
fn test_renting_a_rented_vehicle_reports_unavailable() {
    let (mut service, fleet) = desk(ReturnPolicy::Simple);

    let script = "1\nAda\n555-0101\nV001\n3\nY\n1\nGrace\n555-0199\nV001\n2\n5\n";
    let output = run_script(&mut service, &fleet, script);

    assert!(output.contains("Sorry, the vehicle is currently unavailable."));
    assert_eq!(service.open_rental_count(), 1);
    // A customer record is still created for the refused attempt
    assert_eq!(service.customers().len(), 2);
    assert_eq!(service.customers()[1].id(), "CUS2");
}

#[test]
fn test_declined_confirmation_cancels_rental() {
    let (mut service, fleet) = desk(ReturnPolicy::Simple);

    let output = run_script(&mut service, &fleet, "1\nAda\n555-0101\nV002\n2\nmaybe\n5\n");

    assert!(output.contains("Total Cost: $130.00"));
    assert!(output.contains("Rental canceled."));
    assert!(service.find_vehicle("V002").unwrap().is_available());
    assert_eq!(service.open_rental_count(), 0);
}

#[test]
fn test_non_numeric_days_is_a_validation_error() {
    let (mut service, fleet) = desk(ReturnPolicy::Simple);

    let output = run_script(&mut service, &fleet, "1\nAda\n555-0101\nV001\nthree\n5\n");

    assert!(output.contains("Invalid rental days: expected a whole number of days."));
    assert_eq!(service.open_rental_count(), 0);
    assert!(service.customers().is_empty());
}

#[test]
fn test_unknown_vehicle_selection() {
    let (mut service, fleet) = desk(ReturnPolicy::Simple);

    let output = run_script(&mut service, &fleet, "1\nAda\n555-0101\nV999\n2\n5\n");

    assert!(output.contains("No vehicle with ID 'V999' exists."));
    assert_eq!(service.open_rental_count(), 0);
}

#[test]
fn test_return_of_vehicle_that_is_not_rented() {
    let (mut service, fleet) = desk(ReturnPolicy::Simple);

    let output = run_script(&mut service, &fleet, "2\nV003\n5\n");

    assert!(output.contains("This vehicle was not rented out."));
    assert!(service.find_vehicle("V003").unwrap().is_available());
}

#[test]
fn test_search_by_brand_output() {
    let (mut service, fleet) = desk(ReturnPolicy::Simple);

    let output = run_script(&mut service, &fleet, "3\nhonda\n3\nFerrari\n5\n");

    assert!(output.contains("Available Vehicles of brand honda:\nV002 - Honda Civic\nV006 - Honda Activa\n"));
    assert!(output.contains("No available vehicles of brand Ferrari."));
}

#[test]
fn test_invalid_selection_redisplays_menu() {
    let (mut service, fleet) = desk(ReturnPolicy::Simple);

    let output = run_script(&mut service, &fleet, "9\nabc\n5\n");

    assert_eq!(output.matches("Invalid option. Please try again.").count(), 2);
    assert_eq!(output.matches("Choose an option: ").count(), 3);
}

#[test]
fn test_end_of_input_exits_gracefully() {
    let (mut service, fleet) = desk(ReturnPolicy::Simple);

    let output = run_script(&mut service, &fleet, "");
    assert!(output.ends_with("Thank you for using the Car Rental Service!\n"));

    // Input ending in the middle of a flow also closes the desk
    let output = run_script(&mut service, &fleet, "1\nAda\n");
    assert!(output.ends_with("Thank you for using the Car Rental Service!\n"));
    assert_eq!(service.open_rental_count(), 0);
}

#[test]
fn test_verified_return_through_menu() {
    let (mut service, fleet) = desk(ReturnPolicy::Verified);

    let script = concat!(
        "1\nAda\n555-0101\nV004\n2\ny\n",
        "2\nV004\nMallory\n555-6666\n",
        "2\nV004\nAda\n555-0101\n",
        "5\n"
    );
    let output = run_script(&mut service, &fleet, script);

    assert!(output.contains(
        "Return rejected: name or phone number does not match the rental record."
    ));
    assert!(output.contains("Vehicle returned successfully by Ada"));
    assert!(service.find_vehicle("V004").unwrap().is_available());
    assert_eq!(service.open_rental_count(), 0);
}

#[test]
fn test_desk_settings_from_fleet_file() {
    let fleet = FleetConfig::from_toml_str(
        r#"
[desk]
name = "Harbour Rentals"
currency_symbol = "€"

[[vehicles]]
id = "B01"
brand = "Gazelle"
model = "Ultimate"
price_per_day = 12.5
"#,
    )
    .unwrap();
    let mut service = RentalService::from_config(&fleet);

    let output = run_script(&mut service, &fleet, "1\nAda\n555-0101\nB01\n3\ny\n5\n");

    assert!(output.contains("===== Harbour Rentals ====="));
    assert!(output.contains("Total Cost: €37.50"));
    assert!(output.ends_with("Thank you for using the Harbour Rentals!\n"));
}

#[test]
fn test_oversized_rental_is_rejected_without_crashing() {
    let fleet = FleetConfig::from_toml_str(
        r#"
[[vehicles]]
id = "Y1"
brand = "Yacht"
model = "Royal"
price_per_day = 1e20
"#,
    )
    .unwrap();
    let mut service = RentalService::from_config(&fleet);

    let script = "1\nA\n1\nY1\n4294967295\nn\n4\n5\n";
    let output = run_script(&mut service, &fleet, script);

    assert!(output.contains("Invalid rental days: value must be between 1 and 3650."));
    assert!(output.contains("No active rentals."));
    assert_eq!(service.open_rental_count(), 0);
    assert!(service.find_vehicle("Y1").unwrap().is_available());
}
