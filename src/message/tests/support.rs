//! Shared fixtures and helpers for message unit tests.

use crate::message::domain::{AsyncMessage, Destination};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[fixture]
pub fn fixed_clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
    )
}

#[fixture]
pub fn destination() -> Destination {
    Destination::new("market-data").expect("valid destination")
}

#[fixture]
pub fn message(destination: Destination, fixed_clock: FixedClock) -> AsyncMessage {
    AsyncMessage::for_destination(destination, &fixed_clock)
}
