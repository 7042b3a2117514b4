//! Derived statistics over a fetched flight board.
//!
//! Every function here is a pure scan over a borrowed slice of records.
//! Country comparisons are case-insensitive; city grouping uses the
//! lower-cased city name.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::flights::record::FlightRecord;
use crate::flights::time::{is_delayed, parse_timestamp};

/// Total number of records on the board.
pub fn count_all(records: &[FlightRecord]) -> usize {
    records.len()
}

/// Number of landed (inbound) flights.
pub fn count_inbound(records: &[FlightRecord]) -> usize {
    records.iter().filter(|r| r.status.is_inbound()).count()
}

/// Number of departed (outbound) flights.
pub fn count_outbound(records: &[FlightRecord]) -> usize {
    records.iter().filter(|r| r.status.is_outbound()).count()
}

pub fn count_by_country(records: &[FlightRecord], country: &str) -> usize {
    let country = country.to_lowercase();
    records.iter().filter(|r| r.is_from_country(&country)).count()
}

pub fn count_outbound_by_country(records: &[FlightRecord], country: &str) -> usize {
    let country = country.to_lowercase();
    records
        .iter()
        .filter(|r| r.status.is_outbound() && r.is_from_country(&country))
        .count()
}

pub fn count_inbound_by_country(records: &[FlightRecord], country: &str) -> usize {
    let country = country.to_lowercase();
    records
        .iter()
        .filter(|r| r.status.is_inbound() && r.is_from_country(&country))
        .count()
}

/// Number of flights whose actual time is ten or more minutes past schedule.
pub fn count_delayed(records: &[FlightRecord]) -> usize {
    records
        .iter()
        .filter(|r| is_delayed(&r.scheduled, &r.actual))
        .count()
}

/// Most frequent destination city among departed flights, lower-cased.
///
/// The running maximum only moves on a strictly greater count, so on a tie the
/// city that reached the top count first wins. Records without a city are
/// skipped. Returns `None` when there are no outbound flights.
pub fn most_popular_destination(records: &[FlightRecord]) -> Option<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut best: Option<(String, usize)> = None;

    for record in records.iter().filter(|r| r.status.is_outbound()) {
        if record.city.is_empty() {
            continue;
        }

        let city = record.city.to_lowercase();
        let count = counts.entry(city.clone()).or_insert(0);
        *count += 1;

        if best.as_ref().map_or(true, |(_, max)| *count > *max) {
            best = Some((city, *count));
        }
    }

    best.map(|(city, _)| city)
}

/// First outbound/inbound pair where the outbound flight's actual time is
/// strictly earlier than the inbound flight's.
///
/// Both sides are sorted ascending by actual time (stable, so equal times keep
/// board order) and scanned outbound-major. This returns the first hit of that
/// double scan, not the pair with the shortest gap. Records whose actual time
/// does not parse are left out.
pub fn quick_getaway(records: &[FlightRecord]) -> Option<(&FlightRecord, &FlightRecord)> {
    let outbound = timed_by_actual(records, |r| r.status.is_outbound());
    let inbound = timed_by_actual(records, |r| r.status.is_inbound());

    for (out_time, out_flight) in &outbound {
        for (in_time, in_flight) in &inbound {
            if out_time < in_time {
                return Some((*out_flight, *in_flight));
            }
        }
    }

    None
}

fn timed_by_actual<F>(records: &[FlightRecord], keep: F) -> Vec<(DateTime<Utc>, &FlightRecord)>
where
    F: Fn(&FlightRecord) -> bool,
{
    let mut timed: Vec<_> = records
        .iter()
        .filter(|r| keep(r))
        .filter_map(|r| parse_timestamp(&r.actual).map(|t| (t, r)))
        .collect();
    timed.sort_by_key(|(t, _)| *t);
    timed
}
