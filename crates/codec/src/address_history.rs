//! Address timeline: eight numbered positions plus an overflow block.
//!
//! Position 0 is the current address and only records when the applicant
//! moved in. Positions 1..=7 are previous addresses, each stored as
//! `line1|line2|town|county|country` with separate postcode, month and year
//! fields. Anything beyond that is packed into one overflow field as
//! em-dash separated records of eight pipe-delimited tokens.

use fostering_protocol::{Address, PreviousAddress};

use crate::bag::FieldBag;
use crate::batch::FieldBatch;
use crate::scalar::{decode_month_year, encode_month_year};

/// Numbered positions, the current address included.
pub const BOUNDED_POSITIONS: usize = 8;

pub const RECORD_SEPARATOR: &str = "—";

const TOKEN_SEPARATOR: char = '|';
const RECORD_TOKENS: usize = 8;

/// Field names for one applicant's address timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLayout {
    pub address_prefix: String,
    pub postcode_prefix: String,
    pub month_prefix: String,
    pub year_prefix: String,
    pub overflow_field: String,
}

impl HistoryLayout {
    fn field(prefix: &str, position: usize) -> String {
        format!("{prefix}{position}")
    }
}

fn split_five_lines(raw: &str) -> Address {
    let mut parts = raw.split(TOKEN_SEPARATOR).map(str::to_string);
    Address {
        address_line_1: parts.next().unwrap_or_default(),
        address_line_2: parts.next().unwrap_or_default(),
        town: parts.next().unwrap_or_default(),
        county: parts.next().unwrap_or_default(),
        country: parts.next().unwrap_or_default(),
        ..Default::default()
    }
}

fn join_five_lines(address: &Address) -> String {
    [
        address.address_line_1.as_str(),
        address.address_line_2.as_str(),
        address.town.as_str(),
        address.county.as_str(),
        address.country.as_str(),
    ]
    .join("|")
}

fn decode_record(record: &str) -> PreviousAddress {
    let tokens: Vec<&str> = record.split(TOKEN_SEPARATOR).collect();
    if tokens.len() < RECORD_TOKENS {
        log::debug!(
            "Overflow address record has {} of {RECORD_TOKENS} tokens",
            tokens.len()
        );
    }
    let token = |pos: usize| tokens.get(pos).copied().unwrap_or_default().to_string();

    PreviousAddress {
        address: Address {
            address_line_1: token(0),
            address_line_2: token(1),
            town: token(2),
            county: token(3),
            country: token(4),
            postcode: token(5),
            ..Default::default()
        },
        date_from: decode_month_year(&token(6), &token(7)),
    }
}

fn encode_record(entry: &PreviousAddress) -> String {
    let (month, year) = encode_month_year(entry.date_from);
    let address = &entry.address;
    [
        address.address_line_1.as_str(),
        address.address_line_2.as_str(),
        address.town.as_str(),
        address.county.as_str(),
        address.country.as_str(),
        address.postcode.as_str(),
        month.as_str(),
        year.as_str(),
    ]
    .join("|")
}

/// Worth keeping: dated, and with either a first line or a postcode.
fn is_usable(entry: &PreviousAddress) -> bool {
    entry.date_from.is_some()
        && (!entry.address.address_line_1.trim().is_empty()
            || !entry.address.postcode.trim().is_empty())
}

/// Current address first, then previous addresses in stored order.
///
/// Previous entries without a date, or without both line 1 and postcode, are
/// dropped. An applicant with no usable data at all gets an empty timeline.
pub fn decode_address_history(bag: &FieldBag, layout: &HistoryLayout) -> Vec<PreviousAddress> {
    let date_at = |position: usize| {
        decode_month_year(
            bag.value(&HistoryLayout::field(&layout.month_prefix, position)),
            bag.value(&HistoryLayout::field(&layout.year_prefix, position)),
        )
    };

    let current = PreviousAddress::current(date_at(0));

    let bounded = (1..BOUNDED_POSITIONS).map(|position| {
        let mut address =
            split_five_lines(bag.value(&HistoryLayout::field(&layout.address_prefix, position)));
        address.postcode = bag.owned(&HistoryLayout::field(&layout.postcode_prefix, position));
        PreviousAddress::new(address, date_at(position))
    });

    let overflow = bag
        .value(&layout.overflow_field)
        .split(RECORD_SEPARATOR)
        .filter(|record| !record.trim().is_empty())
        .map(decode_record);

    let mut previous = Vec::new();
    for entry in bounded.chain(overflow) {
        if is_usable(&entry) {
            previous.push(entry);
        } else if !entry.address.is_empty() || entry.date_from.is_some() {
            log::debug!("Dropping incomplete previous address for {}", layout.overflow_field);
        }
    }

    if current.date_from.is_none() && previous.is_empty() {
        return Vec::new();
    }

    std::iter::once(current).chain(previous).collect()
}

/// Mirror of [`decode_address_history`]. Unused positions are blanked and
/// the overflow field is always written, empty when nothing spills over.
pub fn encode_address_history(
    entries: &[PreviousAddress],
    layout: &HistoryLayout,
    batch: &mut FieldBatch,
) {
    let (month, year) = encode_month_year(entries.first().and_then(|entry| entry.date_from));
    batch
        .add(HistoryLayout::field(&layout.month_prefix, 0), month)
        .add(HistoryLayout::field(&layout.year_prefix, 0), year);

    for position in 1..BOUNDED_POSITIONS {
        let entry = entries.get(position);
        let (address, postcode) = entry
            .map(|entry| (join_five_lines(&entry.address), entry.address.postcode.clone()))
            .unwrap_or_default();
        let (month, year) = encode_month_year(entry.and_then(|entry| entry.date_from));

        batch
            .add(HistoryLayout::field(&layout.address_prefix, position), address)
            .add(HistoryLayout::field(&layout.postcode_prefix, position), postcode)
            .add(HistoryLayout::field(&layout.month_prefix, position), month)
            .add(HistoryLayout::field(&layout.year_prefix, position), year);
    }

    let overflow = entries
        .iter()
        .skip(BOUNDED_POSITIONS)
        .map(encode_record)
        .collect::<Vec<_>>()
        .join(RECORD_SEPARATOR);
    batch.add(&layout.overflow_field, overflow);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fostering_protocol::Field;
    use pretty_assertions::assert_eq;

    fn layout() -> HistoryLayout {
        HistoryLayout {
            address_prefix: "pastaddress_1_address".to_string(),
            postcode_prefix: "pastaddress_1_postcode".to_string(),
            month_prefix: "pastaddress_1_month".to_string(),
            year_prefix: "pastaddress_1_year".to_string(),
            overflow_field: "addressadditionalinformation1".to_string(),
        }
    }

    fn month(year: i32, month: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, 1)
    }

    fn previous(n: usize) -> PreviousAddress {
        PreviousAddress::new(
            Address {
                address_line_1: format!("{n} High Street"),
                address_line_2: String::new(),
                town: "Stockport".to_string(),
                county: "Cheshire".to_string(),
                country: "UK".to_string(),
                postcode: format!("SK{n} 1AA"),
                ..Default::default()
            },
            month(2020 - n as i32, (n % 12) as u32 + 1),
        )
    }

    fn timeline(len: usize) -> Vec<PreviousAddress> {
        std::iter::once(PreviousAddress::current(month(2021, 6)))
            .chain((1..len).map(previous))
            .collect()
    }

    #[test]
    fn ten_entries_spill_two_records() {
        let entries = timeline(10);

        let mut batch = FieldBatch::new();
        encode_address_history(&entries, &layout(), &mut batch);

        let overflow = batch
            .latest("addressadditionalinformation1")
            .flatten()
            .expect("overflow written")
            .to_string();
        let records: Vec<&str> = overflow.split(RECORD_SEPARATOR).collect();
        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|record| record.split('|').count() == RECORD_TOKENS));
        assert_eq!(records[0], "8 High Street||Stockport|Cheshire|UK|SK8 1AA|9|2012");

        let decoded = decode_address_history(&FieldBag::new(batch.build()), &layout());
        assert_eq!(decoded, entries);
    }

    #[test]
    fn short_timeline_blanks_unused_positions() {
        let entries = timeline(2);

        let mut batch = FieldBatch::new();
        encode_address_history(&entries, &layout(), &mut batch);

        assert_eq!(batch.latest("pastaddress_1_month0"), Some(Some("6")));
        assert_eq!(batch.latest("pastaddress_1_address2"), Some(Some("")));
        assert_eq!(batch.latest("pastaddress_1_year7"), Some(Some("")));
        assert_eq!(batch.latest("pastaddress_1_address8"), None);
        assert_eq!(batch.latest("addressadditionalinformation1"), Some(Some("")));

        let decoded = decode_address_history(&FieldBag::new(batch.build()), &layout());
        assert_eq!(decoded, entries);
    }

    #[test]
    fn undated_or_unlocated_entries_are_dropped() {
        let bag = FieldBag::new(vec![
            Field::new("pastaddress_1_month0", "1"),
            Field::new("pastaddress_1_year0", "2020"),
            Field::new("pastaddress_1_address1", "1 Road||Town||UK"),
            Field::new("pastaddress_1_postcode1", "SK1 1AA"),
            // no date
            Field::new("pastaddress_1_address2", "2 Road||Town||UK"),
            // no line 1 or postcode
            Field::new("pastaddress_1_address3", "|Flat|Town||UK"),
            Field::new("pastaddress_1_month3", "3"),
            Field::new("pastaddress_1_year3", "2015"),
            Field::new("pastaddress_1_month1", "4"),
            Field::new("pastaddress_1_year1", "2016"),
            Field::new(
                "addressadditionalinformation1",
                "|||||M1 1AA|5|2010—4 Road|||||||—",
            ),
        ]);

        let decoded = decode_address_history(&bag, &layout());
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0], PreviousAddress::current(month(2020, 1)));
        assert_eq!(decoded[1].address.address_line_1, "1 Road");
        assert_eq!(decoded[1].date_from, month(2016, 4));
        assert_eq!(decoded[2].address.postcode, "M1 1AA");
        assert_eq!(decoded[2].date_from, month(2010, 5));
    }

    #[test]
    fn empty_bag_has_no_timeline() {
        assert!(decode_address_history(&FieldBag::default(), &layout()).is_empty());
    }
}
