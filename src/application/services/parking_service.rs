//! Vehicle entry and exit orchestration.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use validator::Validate;

use super::{FareCalculator, SpotAllocator};
use crate::domain::entities::{
    EntryReceipt, ExitReceipt, NewTicket, ParkingSpot, ParkingType, Ticket,
};
use crate::domain::repositories::{SpotRepository, TicketRepository};
use crate::error::AppError;

#[derive(Debug, Validate)]
struct VehicleRegistration {
    #[validate(length(min = 1, max = 32, message = "Invalid input provided"))]
    reg_number: String,
}

/// Trims and validates a vehicle registration number.
///
/// Any non-blank plate up to 32 characters is accepted as typed; only the
/// surrounding whitespace is dropped.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for blank or oversized input.
pub fn normalize_reg_number(raw: &str) -> Result<String, AppError> {
    let registration = VehicleRegistration {
        reg_number: raw.trim().to_string(),
    };

    registration.validate().map_err(|e| {
        AppError::bad_request("Invalid input provided", json!({ "reason": e.to_string() }))
    })?;

    Ok(registration.reg_number)
}

/// Service driving a vehicle through the lot.
///
/// # Lifecycle
///
/// Each registration has at most one open ticket: `absent -> open -> closed`.
/// Failed steps abort the operation; already-committed steps are neither
/// retried nor rolled back.
pub struct ParkingService<S: SpotRepository, T: TicketRepository> {
    spot_allocator: SpotAllocator<S>,
    ticket_repository: Arc<T>,
    fare_calculator: FareCalculator,
}

impl<S: SpotRepository, T: TicketRepository> ParkingService<S, T> {
    /// Creates a new parking service.
    pub fn new(
        spot_repository: Arc<S>,
        ticket_repository: Arc<T>,
        fare_calculator: FareCalculator,
    ) -> Self {
        Self {
            spot_allocator: SpotAllocator::new(spot_repository),
            ticket_repository,
            fare_calculator,
        }
    }

    /// Returns the next free spot for a console selection (`1` car, `2` bike).
    ///
    /// An unknown selection yields `Ok(None)` without querying the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] when the store query fails.
    pub async fn get_next_parking_number_if_available(
        &self,
        selection: u32,
    ) -> Result<Option<ParkingSpot>, AppError> {
        let Some(parking_type) = ParkingType::from_selection(selection) else {
            tracing::warn!(selection, "unsupported vehicle type selection");
            return Ok(None);
        };

        self.spot_allocator.find_available_spot(parking_type).await
    }

    /// Parks a vehicle: allocates a spot and opens a ticket.
    ///
    /// # Flow
    ///
    /// 1. Validate the registration
    /// 2. Find a free spot of the category
    /// 3. Mark it taken
    /// 4. Check whether the vehicle has completed stays before
    /// 5. Save an open ticket stamped with the current time
    ///
    /// If saving the ticket fails, the spot stays allocated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a bad registration.
    /// Returns [`AppError::NoAvailability`] if the category is full.
    /// Returns [`AppError::NotApplied`] if the spot could not be marked taken.
    /// Returns [`AppError::Conflict`] if the vehicle is already parked.
    /// Returns [`AppError::Database`] on store failures.
    pub async fn process_incoming_vehicle(
        &self,
        parking_type: ParkingType,
        vehicle_reg_number: &str,
    ) -> Result<EntryReceipt, AppError> {
        let vehicle_reg_number = normalize_reg_number(vehicle_reg_number)?;

        let Some(spot) = self
            .spot_allocator
            .find_available_spot(parking_type)
            .await?
        else {
            tracing::warn!(%parking_type, "no parking spot available");
            metrics::counter!("parking_entry_rejected_total", "reason" => "no_availability")
                .increment(1);
            return Err(AppError::no_availability(
                "No parking spot available for this vehicle type",
                json!({ "parking_type": parking_type }),
            ));
        };

        if !self.spot_allocator.allocate(&spot).await? {
            metrics::counter!("parking_entry_rejected_total", "reason" => "not_applied")
                .increment(1);
            return Err(AppError::not_applied(
                "Parking spot could not be allocated",
                json!({ "spot_id": spot.id }),
            ));
        }

        let recurring_user = self.is_recurring_user(&vehicle_reg_number).await?;

        let new_ticket = NewTicket {
            parking_spot: ParkingSpot {
                available: false,
                ..spot
            },
            vehicle_reg_number,
            in_time: Utc::now(),
        };

        let ticket = match self.ticket_repository.save_ticket(new_ticket).await {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    spot_id = spot.id,
                    "ticket not saved, spot remains allocated"
                );
                return Err(e);
            }
        };

        tracing::info!(
            ticket_id = ticket.id,
            spot_id = spot.id,
            vehicle = %ticket.vehicle_reg_number,
            recurring_user,
            "vehicle entered"
        );
        metrics::counter!("parking_vehicles_entered_total", "type" => parking_type.as_str())
            .increment(1);

        Ok(EntryReceipt {
            ticket,
            recurring_user,
        })
    }

    /// Lets a vehicle out: closes and prices its ticket, then frees the spot.
    ///
    /// # Flow
    ///
    /// 1. Find the open ticket of the registration
    /// 2. Stamp the exit time
    /// 3. Price the stay, with the recurring-user discount when applicable
    /// 4. Persist the closed ticket
    /// 5. Release the spot, only once the ticket is persisted
    ///
    /// Once the ticket is persisted the stay is closed and priced, so a spot
    /// that fails to release is reported through
    /// [`ExitReceipt::spot_released`] instead of an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a bad registration.
    /// Returns [`AppError::NotFound`] if the vehicle has no open ticket.
    /// Returns [`AppError::NotApplied`] if the ticket update changed nothing.
    /// Returns [`AppError::Database`] on store failures before the ticket is persisted.
    pub async fn process_exiting_vehicle(
        &self,
        vehicle_reg_number: &str,
    ) -> Result<ExitReceipt, AppError> {
        let vehicle_reg_number = normalize_reg_number(vehicle_reg_number)?;

        let mut ticket = self
            .ticket_repository
            .get_open_ticket(&vehicle_reg_number)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "No open ticket for this vehicle",
                    json!({ "vehicle_reg_number": vehicle_reg_number }),
                )
            })?;

        ticket.out_time = Some(Utc::now());

        let discount = self.is_recurring_user(&vehicle_reg_number).await?;
        self.fare_calculator
            .calculate_fare_with_discount(&mut ticket, discount)?;

        if !self.ticket_repository.update_ticket(&ticket).await? {
            tracing::warn!(ticket_id = ticket.id, "ticket update did not apply");
            return Err(AppError::not_applied(
                "Unable to update ticket information",
                json!({ "ticket_id": ticket.id }),
            ));
        }

        let spot_released = match self.spot_allocator.release(&ticket.parking_spot).await {
            Ok(released) => released,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    ticket_id = ticket.id,
                    spot_id = ticket.parking_spot.id,
                    "ticket closed, spot release failed"
                );
                false
            }
        };
        if spot_released {
            ticket.parking_spot.available = true;
        } else {
            tracing::warn!(
                ticket_id = ticket.id,
                spot_id = ticket.parking_spot.id,
                "ticket closed but spot still marked taken"
            );
            metrics::counter!("parking_spot_release_failed_total").increment(1);
        }

        tracing::info!(
            ticket_id = ticket.id,
            spot_id = ticket.parking_spot.id,
            vehicle = %ticket.vehicle_reg_number,
            price = ticket.price,
            discount,
            spot_released,
            "vehicle exited"
        );
        metrics::counter!(
            "parking_vehicles_exited_total",
            "type" => ticket.parking_spot.parking_type.as_str()
        )
        .increment(1);
        metrics::histogram!("parking_fare_amount").record(ticket.price);

        Ok(ExitReceipt {
            ticket,
            spot_released,
        })
    }

    /// A recurring user has at least one completed stay. Open tickets,
    /// including the one being closed, are never counted.
    async fn is_recurring_user(&self, vehicle_reg_number: &str) -> Result<bool, AppError> {
        let completed = self
            .ticket_repository
            .count_completed_tickets(vehicle_reg_number)
            .await?;

        Ok(completed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::FareRates;
    use crate::domain::repositories::{MockSpotRepository, MockTicketRepository};
    use chrono::{DateTime, TimeDelta};
    use mockall::predicate::eq;

    fn service(
        spot_repo: MockSpotRepository,
        ticket_repo: MockTicketRepository,
    ) -> ParkingService<MockSpotRepository, MockTicketRepository> {
        ParkingService::new(
            Arc::new(spot_repo),
            Arc::new(ticket_repo),
            FareCalculator::new(FareRates::default()),
        )
    }

    fn open_ticket(parking_type: ParkingType, parked_for: TimeDelta) -> Ticket {
        Ticket::new(
            42,
            ParkingSpot::new(1, parking_type, false),
            "ABCDEF".to_string(),
            0.0,
            Utc::now() - parked_for,
            None,
        )
    }

    fn saved_ticket(new_ticket: NewTicket) -> Ticket {
        Ticket::new(
            10,
            new_ticket.parking_spot,
            new_ticket.vehicle_reg_number,
            0.0,
            new_ticket.in_time,
            None,
        )
    }

    #[test]
    fn test_normalize_reg_number() {
        assert_eq!(normalize_reg_number("  AB-123 ").unwrap(), "AB-123");
        assert_eq!(normalize_reg_number("ABCDEF").unwrap(), "ABCDEF");
    }

    #[test]
    fn test_normalize_reg_number_accepts_any_plate_characters() {
        for raw in ["AB.123", "AB_12", "ÉCOLE1", "ab/12"] {
            assert_eq!(normalize_reg_number(raw).unwrap(), raw);
        }
    }

    #[test]
    fn test_normalize_reg_number_rejects_blank() {
        for raw in ["", "   ", "\t\n"] {
            let err = normalize_reg_number(raw).unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
            assert_eq!(err.to_string(), "Invalid input provided");
        }
    }

    #[test]
    fn test_normalize_reg_number_rejects_oversized() {
        assert!(normalize_reg_number(&"A".repeat(32)).is_ok());
        assert!(matches!(
            normalize_reg_number(&"A".repeat(33)).unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_process_incoming_vehicle_success() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        spot_repo
            .expect_find_available_spot()
            .with(eq(ParkingType::Car))
            .times(1)
            .returning(|_| Ok(Some(1)));
        spot_repo
            .expect_update_availability()
            .with(eq(1), eq(false))
            .times(1)
            .returning(|_, _| Ok(1));
        ticket_repo
            .expect_count_completed_tickets()
            .withf(|reg| reg == "ABCDEF")
            .times(1)
            .returning(|_| Ok(0));
        ticket_repo
            .expect_save_ticket()
            .withf(|t| {
                t.vehicle_reg_number == "ABCDEF"
                    && t.parking_spot.id == 1
                    && !t.parking_spot.available
            })
            .times(1)
            .returning(|t| Ok(saved_ticket(t)));

        let before = Utc::now();
        let receipt = service(spot_repo, ticket_repo)
            .process_incoming_vehicle(ParkingType::Car, " ABCDEF ")
            .await
            .unwrap();

        assert!(!receipt.recurring_user);
        assert!(receipt.ticket.is_open());
        assert_eq!(receipt.ticket.price, 0.0);
        assert_eq!(receipt.ticket.parking_spot.parking_type, ParkingType::Car);
        assert!(receipt.ticket.in_time >= before);
    }

    #[tokio::test]
    async fn test_process_incoming_vehicle_recurring_user() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        spot_repo
            .expect_find_available_spot()
            .returning(|_| Ok(Some(4)));
        spot_repo
            .expect_update_availability()
            .returning(|_, _| Ok(1));
        ticket_repo
            .expect_count_completed_tickets()
            .times(1)
            .returning(|_| Ok(2));
        ticket_repo
            .expect_save_ticket()
            .times(1)
            .returning(|t| Ok(saved_ticket(t)));

        let receipt = service(spot_repo, ticket_repo)
            .process_incoming_vehicle(ParkingType::Bike, "ABCDEF")
            .await
            .unwrap();

        assert!(receipt.recurring_user);
        assert_eq!(receipt.ticket.price, 0.0);
    }

    #[tokio::test]
    async fn test_process_incoming_vehicle_no_spot_never_saves_ticket() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        spot_repo
            .expect_find_available_spot()
            .times(1)
            .returning(|_| Ok(None));
        spot_repo.expect_update_availability().times(0);
        ticket_repo.expect_count_completed_tickets().times(0);
        ticket_repo.expect_save_ticket().times(0);

        let result = service(spot_repo, ticket_repo)
            .process_incoming_vehicle(ParkingType::Car, "ABCDEF")
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::NoAvailability { .. }
        ));
    }

    #[tokio::test]
    async fn test_process_incoming_vehicle_allocation_failure_aborts() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        spot_repo
            .expect_find_available_spot()
            .returning(|_| Ok(Some(1)));
        spot_repo
            .expect_update_availability()
            .times(1)
            .returning(|_, _| Ok(0));
        ticket_repo.expect_save_ticket().times(0);

        let result = service(spot_repo, ticket_repo)
            .process_incoming_vehicle(ParkingType::Car, "ABCDEF")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotApplied { .. }));
    }

    #[tokio::test]
    async fn test_process_incoming_vehicle_blank_registration_touches_nothing() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        spot_repo.expect_find_available_spot().times(0);
        spot_repo.expect_update_availability().times(0);
        ticket_repo.expect_save_ticket().times(0);

        let result = service(spot_repo, ticket_repo)
            .process_incoming_vehicle(ParkingType::Car, "   ")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_process_incoming_vehicle_save_failure_keeps_allocation() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        spot_repo
            .expect_find_available_spot()
            .returning(|_| Ok(Some(2)));
        spot_repo
            .expect_update_availability()
            .with(eq(2), eq(false))
            .times(1)
            .returning(|_, _| Ok(1));
        ticket_repo
            .expect_count_completed_tickets()
            .returning(|_| Ok(0));
        ticket_repo
            .expect_save_ticket()
            .times(1)
            .returning(|_| Err(AppError::database("Connection failed", json!({}))));

        let result = service(spot_repo, ticket_repo)
            .process_incoming_vehicle(ParkingType::Car, "ABCDEF")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Database { .. }));
    }

    #[tokio::test]
    async fn test_process_exiting_vehicle_success() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        let ticket = open_ticket(ParkingType::Car, TimeDelta::hours(1));
        ticket_repo
            .expect_get_open_ticket()
            .withf(|reg| reg == "ABCDEF")
            .times(1)
            .returning(move |_| Ok(Some(ticket.clone())));
        ticket_repo
            .expect_count_completed_tickets()
            .times(1)
            .returning(|_| Ok(0));
        ticket_repo
            .expect_update_ticket()
            .withf(|t| t.out_time.is_some() && t.price > 0.0)
            .times(1)
            .returning(|_| Ok(true));
        spot_repo
            .expect_update_availability()
            .with(eq(1), eq(true))
            .times(1)
            .returning(|_, _| Ok(1));

        let closed = service(spot_repo, ticket_repo)
            .process_exiting_vehicle("ABCDEF")
            .await
            .unwrap()
            .ticket;

        assert!(!closed.is_open());
        assert!(closed.parking_spot.available);
        assert!((closed.price - 1.5).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_process_exiting_vehicle_recurring_user_discount() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        let ticket = open_ticket(ParkingType::Car, TimeDelta::hours(2));
        ticket_repo
            .expect_get_open_ticket()
            .returning(move |_| Ok(Some(ticket.clone())));
        ticket_repo
            .expect_count_completed_tickets()
            .times(1)
            .returning(|_| Ok(2));
        ticket_repo
            .expect_update_ticket()
            .times(1)
            .returning(|_| Ok(true));
        spot_repo
            .expect_update_availability()
            .times(1)
            .returning(|_, _| Ok(1));

        let closed = service(spot_repo, ticket_repo)
            .process_exiting_vehicle("ABCDEF")
            .await
            .unwrap()
            .ticket;

        // 2h * 1.5 = 3.0, minus 5%
        assert!((closed.price - 2.85).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_process_exiting_vehicle_short_stay_is_free() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        let ticket = open_ticket(ParkingType::Bike, TimeDelta::minutes(20));
        ticket_repo
            .expect_get_open_ticket()
            .returning(move |_| Ok(Some(ticket.clone())));
        ticket_repo
            .expect_count_completed_tickets()
            .returning(|_| Ok(5));
        ticket_repo
            .expect_update_ticket()
            .withf(|t| t.price == 0.0)
            .times(1)
            .returning(|_| Ok(true));
        spot_repo
            .expect_update_availability()
            .times(1)
            .returning(|_, _| Ok(1));

        let closed = service(spot_repo, ticket_repo)
            .process_exiting_vehicle("ABCDEF")
            .await
            .unwrap()
            .ticket;

        assert_eq!(closed.price, 0.0);
    }

    #[tokio::test]
    async fn test_process_exiting_vehicle_release_not_applied_keeps_priced_ticket() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        let ticket = open_ticket(ParkingType::Car, TimeDelta::hours(2));
        ticket_repo
            .expect_get_open_ticket()
            .returning(move |_| Ok(Some(ticket.clone())));
        ticket_repo
            .expect_count_completed_tickets()
            .returning(|_| Ok(0));
        ticket_repo
            .expect_update_ticket()
            .times(1)
            .returning(|_| Ok(true));
        spot_repo
            .expect_update_availability()
            .with(eq(1), eq(true))
            .times(1)
            .returning(|_, _| Ok(0));

        let receipt = service(spot_repo, ticket_repo)
            .process_exiting_vehicle("ABCDEF")
            .await
            .unwrap();

        assert!(!receipt.spot_released);
        assert!(!receipt.ticket.is_open());
        assert!(!receipt.ticket.parking_spot.available);
        assert!((receipt.ticket.price - 3.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_process_exiting_vehicle_release_error_keeps_priced_ticket() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        let ticket = open_ticket(ParkingType::Car, TimeDelta::hours(1));
        ticket_repo
            .expect_get_open_ticket()
            .returning(move |_| Ok(Some(ticket.clone())));
        ticket_repo
            .expect_count_completed_tickets()
            .returning(|_| Ok(0));
        ticket_repo
            .expect_update_ticket()
            .times(1)
            .returning(|_| Ok(true));
        spot_repo
            .expect_update_availability()
            .times(1)
            .returning(|_, _| Err(AppError::database("Connection failed", json!({}))));

        let receipt = service(spot_repo, ticket_repo)
            .process_exiting_vehicle("ABCDEF")
            .await
            .unwrap();

        assert!(!receipt.spot_released);
        assert!((receipt.ticket.price - 1.5).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_process_exiting_vehicle_update_failure_never_releases() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        let ticket = open_ticket(ParkingType::Car, TimeDelta::hours(1));
        ticket_repo
            .expect_get_open_ticket()
            .returning(move |_| Ok(Some(ticket.clone())));
        ticket_repo
            .expect_count_completed_tickets()
            .returning(|_| Ok(0));
        ticket_repo
            .expect_update_ticket()
            .times(1)
            .returning(|_| Ok(false));
        spot_repo.expect_update_availability().times(0);

        let result = service(spot_repo, ticket_repo)
            .process_exiting_vehicle("ABCDEF")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotApplied { .. }));
    }

    #[tokio::test]
    async fn test_process_exiting_vehicle_update_error_never_releases() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        let ticket = open_ticket(ParkingType::Car, TimeDelta::hours(1));
        ticket_repo
            .expect_get_open_ticket()
            .returning(move |_| Ok(Some(ticket.clone())));
        ticket_repo
            .expect_count_completed_tickets()
            .returning(|_| Ok(0));
        ticket_repo
            .expect_update_ticket()
            .times(1)
            .returning(|_| Err(AppError::database("Connection failed", json!({}))));
        spot_repo.expect_update_availability().times(0);

        let result = service(spot_repo, ticket_repo)
            .process_exiting_vehicle("ABCDEF")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Database { .. }));
    }

    #[tokio::test]
    async fn test_process_exiting_vehicle_without_ticket() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        ticket_repo
            .expect_get_open_ticket()
            .times(1)
            .returning(|_| Ok(None));
        ticket_repo.expect_update_ticket().times(0);
        spot_repo.expect_update_availability().times(0);

        let result = service(spot_repo, ticket_repo)
            .process_exiting_vehicle("ABCDEF")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_process_exiting_vehicle_clock_skew_is_rejected() {
        let mut spot_repo = MockSpotRepository::new();
        let mut ticket_repo = MockTicketRepository::new();

        let mut ticket = open_ticket(ParkingType::Car, TimeDelta::zero());
        ticket.in_time = DateTime::<Utc>::MAX_UTC;
        ticket_repo
            .expect_get_open_ticket()
            .returning(move |_| Ok(Some(ticket.clone())));
        ticket_repo
            .expect_count_completed_tickets()
            .returning(|_| Ok(0));
        ticket_repo.expect_update_ticket().times(0);
        spot_repo.expect_update_availability().times(0);

        let result = service(spot_repo, ticket_repo)
            .process_exiting_vehicle("ABCDEF")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_next_parking_number_if_available() {
        let mut spot_repo = MockSpotRepository::new();
        spot_repo
            .expect_find_available_spot()
            .with(eq(ParkingType::Car))
            .times(1)
            .returning(|_| Ok(Some(1)));

        let spot = service(spot_repo, MockTicketRepository::new())
            .get_next_parking_number_if_available(1)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(spot.id, 1);
        assert_eq!(spot.parking_type, ParkingType::Car);
        assert!(spot.available);
    }

    #[tokio::test]
    async fn test_get_next_parking_number_full_lot() {
        let mut spot_repo = MockSpotRepository::new();
        spot_repo
            .expect_find_available_spot()
            .with(eq(ParkingType::Bike))
            .times(1)
            .returning(|_| Ok(None));

        let spot = service(spot_repo, MockTicketRepository::new())
            .get_next_parking_number_if_available(2)
            .await
            .unwrap();

        assert!(spot.is_none());
    }

    #[tokio::test]
    async fn test_get_next_parking_number_invalid_selection_touches_nothing() {
        let mut spot_repo = MockSpotRepository::new();
        spot_repo.expect_find_available_spot().times(0);
        spot_repo.expect_update_availability().times(0);

        let spot = service(spot_repo, MockTicketRepository::new())
            .get_next_parking_number_if_available(3)
            .await
            .unwrap();

        assert!(spot.is_none());
    }
}
