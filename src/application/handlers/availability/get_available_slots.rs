//! GetAvailableSlotsHandler - Query handler for a barbershop's open slots on one day.
//!
//! Runs strictly in order, each step a precondition for the next:
//!
//! 1. Shape validation of the raw payload (every offending field is reported),
//!    including the day range of the date on the shared `TimeReference`
//! 2. Authorization through the `AccessGate`
//! 3. Fetch through the `BookingReader`
//! 4. Reduction of bookings to occupied `HH:MM` labels
//! 5. Diff against the slot template
//!
//! A malformed payload is rejected before the gate is consulted, and no
//! booking data is read without a session.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, error, warn};

use crate::domain::availability::{
    resolve_available_slots, AvailabilityError, AvailableSlots, BookingRecord, DayRange,
    FieldViolation, SlotTemplate, TimeReference,
};
use crate::domain::foundation::BarbershopId;
use crate::ports::{AccessGate, BookingReader, RequestContext};

/// Query for the open slots of one barbershop on one calendar date.
///
/// Fields are the raw request values; the handler validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAvailableSlotsQuery {
    pub barbershop_id: String,
    pub date: String,
}

impl GetAvailableSlotsQuery {
    pub fn new(barbershop_id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            barbershop_id: barbershop_id.into(),
            date: date.into(),
        }
    }
}

/// Open slots of a barbershop for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    pub barbershop_id: BarbershopId,
    pub date: NaiveDate,
    pub slots: AvailableSlots,
}

/// Handler resolving available slots.
pub struct GetAvailableSlotsHandler {
    access_gate: Arc<dyn AccessGate>,
    booking_reader: Arc<dyn BookingReader>,
    template: SlotTemplate,
    time_reference: TimeReference,
}

impl GetAvailableSlotsHandler {
    /// Creates a handler over the standard template, with UTC as time reference.
    pub fn new(access_gate: Arc<dyn AccessGate>, booking_reader: Arc<dyn BookingReader>) -> Self {
        Self {
            access_gate,
            booking_reader,
            template: SlotTemplate::standard(),
            time_reference: TimeReference::utc(),
        }
    }

    /// Uses `time_reference` for day bounds and label formatting.
    ///
    /// Must match the wall clock the booking store's instants are read in.
    pub fn with_time_reference(mut self, time_reference: TimeReference) -> Self {
        self.time_reference = time_reference;
        self
    }

    /// Replaces the slot template.
    pub fn with_template(mut self, template: SlotTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn template(&self) -> &SlotTemplate {
        &self.template
    }

    pub fn time_reference(&self) -> &TimeReference {
        &self.time_reference
    }

    pub async fn handle(
        &self,
        query: GetAvailableSlotsQuery,
        context: &RequestContext,
    ) -> Result<DayAvailability, AvailabilityError> {
        let (barbershop_id, date, range) = self.validate(&query)?;

        let session = self.access_gate.current_session(context).await.map_err(|e| {
            if e.is_transient() {
                error!("Access gate failed: {}", e);
            }
            AvailabilityError::from(e)
        })?;
        let Some(session) = session else {
            debug!(%barbershop_id, "Availability requested without a session");
            return Err(AvailabilityError::Unauthorized);
        };

        debug!(
            %barbershop_id,
            %date,
            user_id = %session.user_id,
            "Fetching bookings between {:?} and {:?}",
            range.start.as_datetime(),
            range.end.as_datetime()
        );

        let fetched = self
            .booking_reader
            .bookings_in_range(&barbershop_id, range.start, range.end)
            .await
            .map_err(|e| {
                error!(%barbershop_id, "Booking lookup failed: {}", e);
                AvailabilityError::from(e)
            })?;

        let fetched_count = fetched.len();
        let bookings: Vec<BookingRecord> = fetched
            .into_iter()
            .filter(|b| b.barbershop_id == barbershop_id && range.contains(&b.date))
            .collect();
        if bookings.len() != fetched_count {
            warn!(
                %barbershop_id,
                dropped = fetched_count - bookings.len(),
                "Booking store returned records outside the requested shop or day"
            );
        }
        if bookings.len() > self.template.len() {
            warn!(
                %barbershop_id,
                bookings = bookings.len(),
                slots = self.template.len(),
                "More bookings than slots for the day"
            );
        }

        let slots = resolve_available_slots(&self.template, &bookings, &self.time_reference);
        debug!(
            %barbershop_id,
            %date,
            bookings = bookings.len(),
            available = slots.len(),
            "Resolved available slots"
        );

        Ok(DayAvailability {
            barbershop_id,
            date,
            slots,
        })
    }

    fn validate(
        &self,
        query: &GetAvailableSlotsQuery,
    ) -> Result<(BarbershopId, NaiveDate, DayRange), AvailabilityError> {
        let barbershop_id = BarbershopId::parse(&query.barbershop_id);
        let window = self
            .time_reference
            .parse_calendar_date(&query.date)
            .and_then(|date| self.time_reference.day_range(date).map(|range| (date, range)));

        match (barbershop_id, window) {
            (Ok(barbershop_id), Ok((date, range))) => Ok((barbershop_id, date, range)),
            (barbershop_id, window) => {
                let violations: Vec<FieldViolation> = [barbershop_id.err(), window.err()]
                    .into_iter()
                    .flatten()
                    .map(FieldViolation::from)
                    .collect();
                Err(AvailabilityError::validation(violations))
            }
        }
    }
}
