use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Available,
    Rented,
}

/// How returns are accepted at the desk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReturnPolicy {
    /// Any return of a rented vehicle is accepted.
    #[default]
    Simple,
    /// The returning party must give the renter's name and phone number.
    Verified,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: String,
    brand: String,
    model: String,
    price_per_day: Decimal,
    available: bool,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        price_per_day: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            price_per_day,
            available: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price_per_day(&self) -> Decimal {
        self.price_per_day
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn status(&self) -> VehicleStatus {
        if self.available {
            VehicleStatus::Available
        } else {
            VehicleStatus::Rented
        }
    }

    /// Flat rate times duration, exact. Rates and durations that passed
    /// validation never overflow; see [`Vehicle::checked_total_cost`].
    pub fn calculate_total_cost(&self, days: u32) -> Decimal {
        self.price_per_day * Decimal::from(days)
    }

    /// `None` when the product does not fit in a `Decimal`.
    pub fn checked_total_cost(&self, days: u32) -> Option<Decimal> {
        self.price_per_day.checked_mul(Decimal::from(days))
    }

    /// Callers check availability first.
    pub fn rent_out(&mut self) {
        self.available = false;
    }

    pub fn return_vehicle(&mut self) {
        self.available = true;
    }

    /// `"Toyota Corolla"`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: String,
    name: String,
    phone_number: String,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn matches(&self, claimant: &Claimant) -> bool {
        self.name.trim() == claimant.name.trim()
            && self.phone_number.trim() == claimant.phone_number.trim()
    }
}

/// Identity given by whoever brings a vehicle back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claimant {
    pub name: String,
    pub phone_number: String,
}

impl Claimant {
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// An open rental. Dropped from the service once the vehicle comes back.
#[derive(Debug, Clone, PartialEq)]
pub struct Rental {
    vehicle_id: String,
    customer: Customer,
    days: u32,
    rented_at: DateTime<Utc>,
}

impl Rental {
    pub fn new(vehicle_id: impl Into<String>, customer: Customer, days: u32) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            customer,
            days,
            rented_at: Utc::now(),
        }
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn rented_at(&self) -> DateTime<Utc> {
        self.rented_at
    }

    pub fn total_cost(&self, vehicle: &Vehicle) -> Decimal {
        vehicle.calculate_total_cost(self.days)
    }
}

/// An open rental joined with its vehicle, for listings.
#[derive(Debug, Clone, Copy)]
pub struct RentalView<'a> {
    pub rental: &'a Rental,
    pub vehicle: &'a Vehicle,
}

impl RentalView<'_> {
    pub fn total_cost(&self) -> Decimal {
        self.rental.total_cost(self.vehicle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla() -> Vehicle {
        Vehicle::new("V001", "Toyota", "Corolla", Decimal::new(50, 0))
    }

    #[test]
    fn test_vehicle_starts_available() {
        let vehicle = corolla();
        assert!(vehicle.is_available());
        assert_eq!(vehicle.status(), VehicleStatus::Available);
    }

    #[test]
    fn test_rent_out_and_return_toggle_availability() {
        let mut vehicle = corolla();
        vehicle.rent_out();
        assert!(!vehicle.is_available());
        assert_eq!(vehicle.status(), VehicleStatus::Rented);

        vehicle.return_vehicle();
        assert!(vehicle.is_available());
    }

    #[test]
    fn test_total_cost_is_linear() {
        let vehicle = Vehicle::new("V009", "Fiat", "Panda", Decimal::new(3333, 2));

        assert_eq!(vehicle.calculate_total_cost(0), Decimal::ZERO);
        for (d1, d2) in [(1, 2), (3, 4), (7, 0), (10, 25)] {
            assert_eq!(
                vehicle.calculate_total_cost(d1 + d2),
                vehicle.calculate_total_cost(d1) + vehicle.calculate_total_cost(d2)
            );
        }
        assert_eq!(corolla().calculate_total_cost(3), Decimal::new(150, 0));
    }

    #[test]
    fn test_checked_total_cost_reports_overflow() {
        let vehicle = Vehicle::new("V001", "Toyota", "Corolla", Decimal::MAX);
        assert_eq!(vehicle.checked_total_cost(1), Some(Decimal::MAX));
        assert_eq!(vehicle.checked_total_cost(u32::MAX), None);
        assert_eq!(corolla().checked_total_cost(3), Some(Decimal::new(150, 0)));
    }

    #[test]
    fn test_customer_matches_claimant() {
        let customer = Customer::new("CUS1", "Ada Lovelace", "555-0101");

        assert!(customer.matches(&Claimant::new("Ada Lovelace", "555-0101")));
        assert!(customer.matches(&Claimant::new(" Ada Lovelace ", "555-0101\n")));
        assert!(!customer.matches(&Claimant::new("Ada Lovelace", "555-0102")));
        assert!(!customer.matches(&Claimant::new("ada lovelace", "555-0101")));
    }

    #[test]
    fn test_rental_total_cost_uses_vehicle_rate() {
        let vehicle = corolla();
        let rental = Rental::new("V001", Customer::new("CUS1", "Ada", "555"), 4);
        assert_eq!(rental.total_cost(&vehicle), Decimal::new(200, 0));
    }
}
