use chrono::NaiveDate;
use serde::Serialize;
use turfbook_shared::Turf;
use crate::{CoreError, CoreResult};

/// Bookable start times, one per hour from opening to the last slot
pub const TIME_SLOTS: [&str; 17] = [
    "06:00", "07:00", "08:00", "09:00", "10:00", "11:00",
    "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
    "18:00", "19:00", "20:00", "21:00", "22:00",
];

pub const MISSING_SLOT_NOTICE: &str = "Please select a time slot";
pub const PAST_DATE_NOTICE: &str = "Please select a date from today onwards";
pub const CLOSED_NOTICE: &str = "This booking has already been submitted";

/// The details dialog for one turf: pick a date and a slot, then submit.
///
/// Submitting never creates a booking record. A valid submission only yields
/// a confirmation message and closes the dialog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDialog {
    pub turf_id: String,
    pub turf_name: String,
    pub price_per_hour: u32,
    pub min_date: NaiveDate,
    pub selected_date: NaiveDate,
    pub selected_time: Option<String>,
    pub time_slots: Vec<&'static str>,
    is_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingOutcome {
    /// Nothing changed, the dialog stays open
    Rejected { notice: String },
    #[serde(rename_all = "camelCase")]
    Confirmed {
        message: String,
        date: NaiveDate,
        time_slot: String,
    },
}

impl BookingDialog {
    /// Opens on `today` with no slot selected
    pub fn open(turf: &Turf, today: NaiveDate) -> Self {
        Self {
            turf_id: turf.id.clone(),
            turf_name: turf.name.clone(),
            price_per_hour: turf.price,
            min_date: today,
            selected_date: today,
            selected_time: None,
            time_slots: TIME_SLOTS.to_vec(),
            is_open: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn select_time(&mut self, slot: &str) -> CoreResult<()> {
        if !TIME_SLOTS.contains(&slot) {
            return Err(CoreError::Validation(format!("Unknown time slot: {}", slot)));
        }
        self.selected_time = Some(slot.to_string());
        Ok(())
    }

    pub fn submit(&mut self) -> BookingOutcome {
        if !self.is_open {
            return BookingOutcome::Rejected { notice: CLOSED_NOTICE.to_string() };
        }

        let Some(time_slot) = self.selected_time.clone() else {
            return BookingOutcome::Rejected { notice: MISSING_SLOT_NOTICE.to_string() };
        };

        if self.selected_date < self.min_date {
            return BookingOutcome::Rejected { notice: PAST_DATE_NOTICE.to_string() };
        }

        self.is_open = false;
        tracing::info!(turf_id = %self.turf_id, date = %self.selected_date, time_slot = %time_slot, "Booking confirmed");

        BookingOutcome::Confirmed {
            message: format!(
                "Booking confirmed for {} at {}",
                self.selected_date.format("%Y-%m-%d"),
                time_slot
            ),
            date: self.selected_date,
            time_slot,
        }
    }
}
