use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, Duration};

pub const AVAILABILITY_WINDOW_DAYS: i64 = 7;

/// Seat state for one calendar day. Only one state exists today; richer
/// states (full, closed) slot in as further variants without changing the
/// wire shape.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum SeatStatus {
    #[serde(rename = "〇")]
    Available,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct AvailabilityEntry {
    pub date: String,
    pub status: SeatStatus,
}

/// Rolling availability calendar: one entry per day for the next
/// [`AVAILABILITY_WINDOW_DAYS`] days, starting at `today`.
pub fn seven_day_window(today: Date) -> Vec<AvailabilityEntry> {
    let format = format_description!("[year]-[month]-[day]");

    (0..AVAILABILITY_WINDOW_DAYS)
        .map(|offset| {
            let date = today + Duration::days(offset);
            AvailabilityEntry {
                date: date.format(&format).expect("static date format"),
                status: SeatStatus::Available,
            }
        })
        .collect()
}
