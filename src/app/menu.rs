use crate::config::toml_config::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_DESK_NAME};
use crate::core::service::RentalService;
use crate::core::{Claimant, ConfigProvider, ReturnPolicy};
use crate::utils::error::{RentalError, Result};
use crate::utils::format::format_amount;
use crate::utils::validation::parse_days;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Rent,
    Return,
    SearchByBrand,
    ViewRentals,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(MenuChoice::Rent),
            "2" => Ok(MenuChoice::Return),
            "3" => Ok(MenuChoice::SearchByBrand),
            "4" => Ok(MenuChoice::ViewRentals),
            "5" => Ok(MenuChoice::Exit),
            other => Err(RentalError::InvalidSelection {
                input: other.to_string(),
            }),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Console front end of a [`RentalService`].
///
/// Reads one menu choice at a time from `input`, runs it to completion and
/// writes the outcome to `output`. Domain failures are printed and the menu
/// comes back; only I/O failures end the session early. End of input counts
/// as choosing Exit.
pub struct MenuSession<'a, R, W> {
    service: &'a mut RentalService,
    input: R,
    output: W,
    desk_name: String,
    currency_symbol: String,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(service: &'a mut RentalService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            desk_name: DEFAULT_DESK_NAME.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    pub fn with_config<C: ConfigProvider>(
        service: &'a mut RentalService,
        input: R,
        output: W,
        config: &C,
    ) -> Self {
        Self {
            desk_name: config.desk_name().to_string(),
            currency_symbol: config.currency_symbol().to_string(),
            ..Self::new(service, input, output)
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Ok(choice) => self.dispatch(choice)?,
                Err(e) => {
                    self.report(&e)?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.output, "Thank you for using the {}!", self.desk_name)?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        tracing::debug!(?choice, "Menu choice");
        match choice {
            MenuChoice::Rent => self.rent_flow(),
            MenuChoice::Return => self.return_flow(),
            MenuChoice::SearchByBrand => self.search_flow(),
            MenuChoice::ViewRentals => self.view_rentals(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "===== {} =====", self.desk_name)?;
        writeln!(self.output, "1. Rent a Vehicle")?;
        writeln!(self.output, "2. Return a Vehicle")?;
        writeln!(self.output, "3. Search Available Vehicles by Brand")?;
        writeln!(self.output, "4. View All Rentals")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn rent_flow(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n-- Rent a Vehicle --\n")?;
        let Some(name) = self.prompt("Enter your name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self.prompt("Enter your phone number: ")? else {
            return Ok(Flow::Exit);
        };

        let available: Vec<String> = self
            .service
            .available_vehicles()
            .map(|v| format!("{} - {}", v.id(), v.display_name()))
            .collect();
        writeln!(self.output, "\nAvailable Vehicles:")?;
        if available.is_empty() {
            writeln!(self.output, "(none)")?;
        }
        for line in &available {
            writeln!(self.output, "{}", line)?;
        }

        let Some(vehicle_id) = self.prompt("\nEnter the vehicle ID you want to rent: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(days_input) = self.prompt("Enter the number of days for rental: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(days) = self.recover(parse_days(&days_input))? else {
            return Ok(Flow::Continue);
        };

        let customer = self.service.register_customer(&name, &phone);

        let quote = self.service.quote(&vehicle_id, days);
        let Some(total_cost) = self.recover(quote)? else {
            return Ok(Flow::Continue);
        };
        let vehicle_name = self
            .service
            .find_vehicle(&vehicle_id)
            .map(|v| v.display_name())
            .unwrap_or_default();

        writeln!(self.output, "\n== Rental Information ==\n")?;
        writeln!(self.output, "Customer ID: {}", customer.id())?;
        writeln!(self.output, "Customer Name: {}", customer.name())?;
        writeln!(self.output, "Phone Number: {}", customer.phone_number())?;
        writeln!(self.output, "Vehicle: {}", vehicle_name)?;
        writeln!(self.output, "Rental Days: {}", days)?;
        writeln!(
            self.output,
            "Total Cost: {}",
            format_amount(&self.currency_symbol, total_cost)
        )?;

        let Some(confirm) = self.prompt("\nConfirm rental (Y/N): ")? else {
            return Ok(Flow::Exit);
        };

        if confirm.eq_ignore_ascii_case("y") {
            let rented = self.service.rent_vehicle(&vehicle_id, customer, days).map(|_| ());
            if self.recover(rented)?.is_some() {
                writeln!(self.output, "\nVehicle rented successfully.")?;
            }
        } else {
            writeln!(self.output, "\nRental canceled.")?;
        }

        Ok(Flow::Continue)
    }

    fn return_flow(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n-- Return a Vehicle --\n")?;
        let Some(vehicle_id) = self.prompt("Enter the vehicle ID you want to return: ")? else {
            return Ok(Flow::Exit);
        };

        let claimant = match self.service.return_policy() {
            ReturnPolicy::Simple => None,
            ReturnPolicy::Verified => {
                let Some(name) = self.prompt("Enter your name: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(phone) = self.prompt("Enter your phone number: ")? else {
                    return Ok(Flow::Exit);
                };
                Some(Claimant::new(name, phone))
            }
        };

        let returned = self.service.process_return(&vehicle_id, claimant.as_ref());
        if let Some(rental) = self.recover(returned)? {
            writeln!(
                self.output,
                "Vehicle returned successfully by {}",
                rental.customer().name()
            )?;
        }

        Ok(Flow::Continue)
    }

    fn search_flow(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n-- Search Vehicles by Brand --\n")?;
        let Some(brand) = self.prompt("Enter the brand name: ")? else {
            return Ok(Flow::Exit);
        };

        let matches: Vec<String> = self
            .service
            .search_available_by_brand(&brand)
            .map(|v| format!("{} - {}", v.id(), v.display_name()))
            .collect();

        if matches.is_empty() {
            writeln!(self.output, "\nNo available vehicles of brand {}.", brand)?;
        } else {
            writeln!(self.output, "\nAvailable Vehicles of brand {}:", brand)?;
            for line in &matches {
                writeln!(self.output, "{}", line)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn view_rentals(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n-- View All Rentals --\n")?;

        let symbol = &self.currency_symbol;
        let lines: Vec<String> = self
            .service
            .list_all_rentals()
            .map(|view| {
                format!(
                    "Customer: {} | Phone: {} | Vehicle: {} | Days: {} | Total: {} | Since: {}",
                    view.rental.customer().name(),
                    view.rental.customer().phone_number(),
                    view.vehicle.display_name(),
                    view.rental.days(),
                    format_amount(symbol, view.total_cost()),
                    view.rental.rented_at().format("%Y-%m-%d %H:%M UTC"),
                )
            })
            .collect();

        if lines.is_empty() {
            writeln!(self.output, "No active rentals.")?;
        }
        for line in &lines {
            writeln!(self.output, "{}", line)?;
        }

        Ok(Flow::Continue)
    }

    /// Prints recoverable errors and turns them into `None`.
    fn recover<T>(&mut self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_recoverable() => {
                self.report(&e)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn report(&mut self, error: &RentalError) -> Result<()> {
        tracing::debug!("Operation failed: {}", error);
        writeln!(self.output, "\n{}", error.user_friendly_message())?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
