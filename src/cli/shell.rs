//! Interactive console loop for lot attendants.

use anyhow::Result;
use colored::*;

use super::input::{InputError, InputSource};
use crate::application::services::ParkingService;
use crate::domain::entities::ParkingType;
use crate::domain::repositories::{SpotRepository, TicketRepository};
use crate::error::AppError;

/// Menu-driven front end over [`ParkingService`].
///
/// # Menu
///
/// ```text
/// 1 New Vehicle Entering - Allocate Parking Space
/// 2 Vehicle Exiting - Generate Ticket Price
/// 3 Shutdown System
/// ```
///
/// Operation failures are printed and the loop continues; only input stream
/// failures end it with an error.
pub struct ParkingShell<S: SpotRepository, T: TicketRepository, I: InputSource> {
    service: ParkingService<S, T>,
    input: I,
}

impl<S: SpotRepository, T: TicketRepository, I: InputSource> ParkingShell<S, T, I> {
    pub fn new(service: ParkingService<S, T>, input: I) -> Self {
        Self { service, input }
    }

    /// Runs the menu until shutdown or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the input source fails.
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", "Welcome to Parking System!".bright_blue().bold());

        loop {
            print_menu();

            let step = match self.input.read_selection() {
                Ok(Some(1)) => self.process_incoming_vehicle().await,
                Ok(Some(2)) => self.process_exiting_vehicle().await,
                Ok(Some(3)) => {
                    println!("{}", "Exiting from the system!".bright_white());
                    break;
                }
                Ok(_) => {
                    println!(
                        "{}",
                        "Unsupported option. Please enter a number corresponding to the provided menu"
                            .yellow()
                    );
                    Ok(())
                }
                Err(e) => Err(e),
            };

            match step {
                Ok(()) => {}
                Err(InputError::Closed) => {
                    tracing::info!("input closed, shutting down");
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    async fn process_incoming_vehicle(&mut self) -> Result<(), InputError> {
        println!("Please select vehicle type from menu");
        println!("1 CAR");
        println!("2 BIKE");

        let Some(answer) = self.read_or_report(|input| input.read_selection())? else {
            return Ok(());
        };
        let Some(selection) = answer.filter(|s| ParkingType::from_selection(*s).is_some()) else {
            println!("{}", "Incorrect input provided".red());
            return Ok(());
        };

        let spot = match self
            .service
            .get_next_parking_number_if_available(selection)
            .await
        {
            Ok(Some(spot)) => spot,
            Ok(None) => {
                println!(
                    "{}",
                    "Error fetching parking number from DB. Parking slots might be full".red()
                );
                return Ok(());
            }
            Err(e) => {
                report(&e);
                return Ok(());
            }
        };

        println!("Please type the vehicle registration number and press enter key");
        let Some(reg_number) =
            self.read_or_report(|input| input.read_vehicle_registration_number())?
        else {
            return Ok(());
        };

        match self
            .service
            .process_incoming_vehicle(spot.parking_type, &reg_number)
            .await
        {
            Ok(receipt) => {
                if receipt.recurring_user {
                    println!(
                        "{}",
                        "Welcome back! As a recurring user of our parking lot, you'll benefit from a 5% discount."
                            .green()
                    );
                }
                println!("{}", "Generated Ticket and saved in DB".green());
                println!(
                    "Please park your vehicle in spot number: {}",
                    receipt.ticket.parking_spot.id.to_string().bright_yellow().bold()
                );
                println!(
                    "Recorded in-time for vehicle number: {} is: {}",
                    receipt.ticket.vehicle_reg_number.cyan(),
                    receipt.ticket.in_time.format("%Y-%m-%d %H:%M:%S")
                );
            }
            Err(e) => report(&e),
        }

        Ok(())
    }

    async fn process_exiting_vehicle(&mut self) -> Result<(), InputError> {
        println!("Please type the vehicle registration number and press enter key");
        let Some(reg_number) =
            self.read_or_report(|input| input.read_vehicle_registration_number())?
        else {
            return Ok(());
        };

        match self.service.process_exiting_vehicle(&reg_number).await {
            Ok(receipt) => {
                let ticket = &receipt.ticket;
                println!(
                    "Please pay the parking fare: {}",
                    format!("{:.2}", ticket.price).bright_yellow().bold()
                );
                if let Some(out_time) = ticket.out_time {
                    println!(
                        "Recorded out-time for vehicle number: {} is: {}",
                        ticket.vehicle_reg_number.cyan(),
                        out_time.format("%Y-%m-%d %H:%M:%S")
                    );
                }
                if !receipt.spot_released {
                    println!(
                        "{} {}",
                        "Parking spot could not be freed, please release it manually:"
                            .yellow()
                            .bold(),
                        ticket.parking_spot.id
                    );
                }
            }
            Err(e) => report(&e),
        }

        Ok(())
    }

    /// Reads one answer. Invalid input is printed and yields `Ok(None)`;
    /// stream failures propagate.
    fn read_or_report<V>(
        &mut self,
        read: impl FnOnce(&mut I) -> Result<V, InputError>,
    ) -> Result<Option<V>, InputError> {
        match read(&mut self.input) {
            Ok(value) => Ok(Some(value)),
            Err(InputError::Invalid) => {
                println!("{}", "Invalid input provided".red());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

fn print_menu() {
    println!();
    println!(
        "{}",
        "Please select an option. Simply enter the number to choose an action".bright_white()
    );
    println!("1 New Vehicle Entering - Allocate Parking Space");
    println!("2 Vehicle Exiting - Generate Ticket Price");
    println!("3 Shutdown System");
}

fn report(e: &AppError) {
    match e {
        AppError::Database { .. } | AppError::InvalidCategory { .. } => {
            tracing::error!(code = e.code(), details = %e.details(), "{}", e);
            println!("{} {}", "Unable to process vehicle:".red().bold(), e);
        }
        _ => {
            tracing::warn!(code = e.code(), details = %e.details(), "{}", e);
            println!("{}", e.to_string().red());
        }
    }
}
