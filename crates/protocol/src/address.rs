use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::is_blank;

/// Postal address as the frontend sees it.
///
/// Either the manual lines or `place_ref` + `selected_address` are
/// authoritative. A non-empty `place_ref` means `selected_address` holds the
/// full display string from the place lookup and the lines are ignored on
/// encode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Address {
    #[serde(default)]
    pub address_line_1: String,
    #[serde(default)]
    pub address_line_2: String,
    #[serde(default)]
    pub town: String,
    #[serde(default)]
    pub county: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub place_ref: String,
    #[serde(default)]
    pub selected_address: String,
}

impl Address {
    /// Manual address from its three line fields plus postcode.
    pub fn manual(
        line_1: impl Into<String>,
        line_2: impl Into<String>,
        town: impl Into<String>,
        postcode: impl Into<String>,
    ) -> Self {
        Self {
            address_line_1: line_1.into(),
            address_line_2: line_2.into(),
            town: town.into(),
            postcode: postcode.into(),
            ..Default::default()
        }
    }

    /// Address chosen through the place lookup.
    pub fn from_place(
        place_ref: impl Into<String>,
        selected_address: impl Into<String>,
        postcode: impl Into<String>,
    ) -> Self {
        Self {
            place_ref: place_ref.into(),
            selected_address: selected_address.into(),
            postcode: postcode.into(),
            ..Default::default()
        }
    }

    pub fn has_place_ref(&self) -> bool {
        !is_blank(&self.place_ref)
    }

    /// Valid iff (line 1, town, postcode) or (place ref, postcode) are set.
    /// Anything else counts as no address at all.
    pub fn is_valid(&self) -> bool {
        let manual = !is_blank(&self.address_line_1)
            && !is_blank(&self.town)
            && !is_blank(&self.postcode);
        let looked_up = self.has_place_ref() && !is_blank(&self.postcode);
        manual || looked_up
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.address_line_1,
            &self.address_line_2,
            &self.town,
            &self.county,
            &self.country,
            &self.postcode,
            &self.place_ref,
            &self.selected_address,
        ]
        .iter()
        .all(|value| is_blank(value))
    }
}

/// One entry of an applicant's address timeline.
///
/// The first entry of a timeline is the current address: it carries only the
/// date the applicant moved in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PreviousAddress {
    #[serde(default)]
    pub address: Address,
    /// Month and year only; the day is always the 1st.
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
}

impl PreviousAddress {
    pub fn current(date_from: Option<NaiveDate>) -> Self {
        Self {
            address: Address::default(),
            date_from,
        }
    }

    pub fn new(address: Address, date_from: Option<NaiveDate>) -> Self {
        Self { address, date_from }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_truth_table() {
        let cases = [
            (Address::manual("1 Road", "", "Town", "SK1 1AA"), true),
            (Address::from_place("123", "1 Road, Town", "SK1 1AA"), true),
            (Address::manual("1 Road", "", "Town", ""), false),
            (Address::manual("1 Road", "", "", "SK1 1AA"), false),
            (Address::manual("", "", "Town", "SK1 1AA"), false),
            (Address::from_place("123", "1 Road, Town", ""), false),
            (Address::from_place("", "1 Road, Town", "SK1 1AA"), false),
            (Address::default(), false),
        ];

        for (address, expected) in cases {
            assert_eq!(address.is_valid(), expected, "{address:?}");
        }
    }

    #[test]
    fn whitespace_only_lines_are_blank() {
        let address = Address::manual("  ", "", "Town", "SK1 1AA");
        assert!(!address.is_valid());
        assert!(Address::manual(" ", "", "", "").is_empty());
    }
}
