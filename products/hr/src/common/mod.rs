//! Helpers shared by every page: badge tones, aggregates, date display and
//! filter predicates.

mod dates;
mod filter;
mod metrics;
mod status;

pub use dates::{
    PLACEHOLDER, days_inclusive, format_date, format_date_range, format_optional_date,
    parse_month_key,
};
pub(crate) use dates::ymd;
pub use filter::{deserialize_flag, matches_choice, matches_search};
pub use metrics::{average, format_cents, percentage, round1};
pub use status::{Badge, StatusTone, Toned};
