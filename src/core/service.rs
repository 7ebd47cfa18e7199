use crate::core::{
    Claimant, ConfigProvider, Customer, Rental, RentalView, ReturnPolicy, Vehicle,
};
use crate::utils::error::{RentalError, Result};
use crate::utils::validation::validate_rental_days;
use rust_decimal::Decimal;

/// Owns the fleet, the customers and the open rentals of one desk.
#[derive(Debug, Default)]
pub struct RentalService {
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
    rentals: Vec<Rental>,
    customer_seq: u64,
    policy: ReturnPolicy,
}

impl RentalService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ReturnPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let mut service = Self::with_policy(config.return_policy());
        for vehicle in config.fleet() {
            service.add_vehicle(vehicle);
        }
        tracing::info!(
            vehicles = service.vehicles.len(),
            policy = ?service.policy,
            "Rental desk ready"
        );
        service
    }

    pub fn return_policy(&self) -> ReturnPolicy {
        self.policy
    }

    /// No duplicate-id check; callers keep ids unique.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        tracing::debug!(vehicle_id = vehicle.id(), "Vehicle added to fleet");
        self.vehicles.push(vehicle);
    }

    pub fn add_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Records a new customer under the next `CUS<n>` id.
    pub fn register_customer(&mut self, name: &str, phone_number: &str) -> Customer {
        self.customer_seq += 1;
        let customer = Customer::new(format!("CUS{}", self.customer_seq), name, phone_number);
        tracing::debug!(customer_id = customer.id(), "Customer registered");
        self.add_customer(customer.clone());
        customer
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    pub fn open_rental_count(&self) -> usize {
        self.rentals.len()
    }

    pub fn find_vehicle(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == vehicle_id)
    }

    pub fn available_vehicles(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.iter().filter(|v| v.is_available())
    }

    /// Cost of renting `vehicle_id` for `days`, if it can be rented right now.
    pub fn quote(&self, vehicle_id: &str, days: u32) -> Result<Decimal> {
        validate_rental_days(days)?;
        let vehicle = self
            .find_vehicle(vehicle_id)
            .ok_or_else(|| RentalError::VehicleNotFound {
                vehicle_id: vehicle_id.to_string(),
            })?;
        if !vehicle.is_available() {
            return Err(RentalError::VehicleUnavailable {
                vehicle_id: vehicle_id.to_string(),
            });
        }
        vehicle
            .checked_total_cost(days)
            .ok_or_else(|| cost_overflow(vehicle_id, days))
    }

    pub fn rent_vehicle(&mut self, vehicle_id: &str, customer: Customer, days: u32) -> Result<&Rental> {
        validate_rental_days(days)?;

        // The flag alone is not trusted: an open rental also blocks the vehicle.
        let already_open = self.rentals.iter().any(|r| r.vehicle_id() == vehicle_id);
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id() == vehicle_id)
            .ok_or_else(|| RentalError::VehicleNotFound {
                vehicle_id: vehicle_id.to_string(),
            })?;

        if !vehicle.is_available() || already_open {
            tracing::warn!(vehicle_id, "Rent refused, vehicle unavailable");
            return Err(RentalError::VehicleUnavailable {
                vehicle_id: vehicle_id.to_string(),
            });
        }
        if vehicle.checked_total_cost(days).is_none() {
            return Err(cost_overflow(vehicle_id, days));
        }

        vehicle.rent_out();
        tracing::info!(
            vehicle_id,
            customer_id = customer.id(),
            days,
            "Vehicle rented out"
        );

        let index = self.rentals.len();
        self.rentals.push(Rental::new(vehicle_id, customer, days));
        Ok(&self.rentals[index])
    }

    /// Closes the open rental of `vehicle_id` without an identity check.
    ///
    /// With no open rental the vehicle is left exactly as it was and
    /// `RentalNotFound` is returned.
    pub fn return_vehicle(&mut self, vehicle_id: &str) -> Result<Rental> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id() == vehicle_id)
            .ok_or_else(|| RentalError::VehicleNotFound {
                vehicle_id: vehicle_id.to_string(),
            })?;

        let Some(position) = self.rentals.iter().position(|r| r.vehicle_id() == vehicle_id) else {
            tracing::warn!(vehicle_id, "Return refused, no open rental");
            return Err(RentalError::RentalNotFound {
                vehicle_id: vehicle_id.to_string(),
            });
        };

        let rental = self.rentals.remove(position);
        vehicle.return_vehicle();
        tracing::info!(
            vehicle_id,
            customer_id = rental.customer().id(),
            "Vehicle returned"
        );
        Ok(rental)
    }

    /// Closes the open rental of `vehicle_id` only if `claimant` is the renter.
    ///
    /// Every open rental for the vehicle must match; a single mismatch
    /// rejects the whole return and nothing is changed.
    pub fn return_vehicle_verified(&mut self, vehicle_id: &str, claimant: &Claimant) -> Result<Rental> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id() == vehicle_id)
            .ok_or_else(|| RentalError::VehicleNotFound {
                vehicle_id: vehicle_id.to_string(),
            })?;

        if vehicle.is_available() {
            tracing::warn!(vehicle_id, "Return refused, vehicle is not rented");
            return Err(RentalError::RentalNotFound {
                vehicle_id: vehicle_id.to_string(),
            });
        }

        let mut matched = None;
        for (position, rental) in self.rentals.iter().enumerate() {
            if rental.vehicle_id() != vehicle_id {
                continue;
            }
            if !rental.customer().matches(claimant) {
                tracing::warn!(vehicle_id, "Return refused, identity mismatch");
                return Err(RentalError::IdentityMismatch {
                    vehicle_id: vehicle_id.to_string(),
                });
            }
            matched.get_or_insert(position);
        }

        let Some(position) = matched else {
            tracing::warn!(vehicle_id, "Return refused, rental record missing");
            return Err(RentalError::RentalNotFound {
                vehicle_id: vehicle_id.to_string(),
            });
        };

        let rental = self.rentals.remove(position);
        vehicle.return_vehicle();
        tracing::info!(
            vehicle_id,
            customer_id = rental.customer().id(),
            "Vehicle returned after identity check"
        );
        Ok(rental)
    }

    /// Routes a return through the configured policy.
    pub fn process_return(&mut self, vehicle_id: &str, claimant: Option<&Claimant>) -> Result<Rental> {
        match self.policy {
            ReturnPolicy::Simple => self.return_vehicle(vehicle_id),
            ReturnPolicy::Verified => {
                let claimant = claimant.ok_or_else(|| RentalError::ValidationError {
                    field: "returning customer".to_string(),
                    value: String::new(),
                    reason: "name and phone number are required".to_string(),
                })?;
                self.return_vehicle_verified(vehicle_id, claimant)
            }
        }
    }

    /// Available vehicles of `brand`, compared case-insensitively.
    ///
    /// Nothing is cached: every call walks the fleet again.
    pub fn search_available_by_brand(&self, brand: &str) -> impl Iterator<Item = &Vehicle> + '_ {
        let needle = brand.to_lowercase();
        tracing::debug!(brand = %needle, "Searching available vehicles");
        self.vehicles
            .iter()
            .filter(move |v| v.is_available() && v.brand().to_lowercase() == needle)
    }

    /// Open rentals in the order they were opened.
    pub fn list_all_rentals(&self) -> impl Iterator<Item = RentalView<'_>> + '_ {
        self.rentals.iter().filter_map(move |rental| {
            self.find_vehicle(rental.vehicle_id())
                .map(|vehicle| RentalView { rental, vehicle })
        })
    }
}

fn cost_overflow(vehicle_id: &str, days: u32) -> RentalError {
    RentalError::ValidationError {
        field: "rental days".to_string(),
        value: days.to_string(),
        reason: format!("total cost for vehicle {} is too large", vehicle_id),
    }
}
