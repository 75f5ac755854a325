//! Postal address codec.
//!
//! An address is stored either as three pipe-delimited lines in the address
//! field, or as a place reference whose address field holds the lookup's
//! display string.

use fostering_protocol::Address;

use crate::bag::FieldBag;
use crate::batch::FieldBatch;

pub const LINE_SEPARATOR: char = '|';

/// The three fields one stored address occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFieldNames {
    pub address: String,
    pub place_ref: String,
    pub postcode: String,
}

impl AddressFieldNames {
    pub fn new(
        address: impl Into<String>,
        place_ref: impl Into<String>,
        postcode: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            place_ref: place_ref.into(),
            postcode: postcode.into(),
        }
    }
}

/// Assign `line1|line2|town` onto the address, leading fields first. Parts
/// past the third are ignored; an empty value leaves the lines untouched.
pub fn split_address_lines(raw: &str, address: &mut Address) {
    if raw.is_empty() {
        return;
    }

    let mut parts = raw.split(LINE_SEPARATOR);
    address.address_line_1 = parts.next().unwrap_or_default().to_string();
    address.address_line_2 = parts.next().unwrap_or_default().to_string();
    address.town = parts.next().unwrap_or_default().to_string();
}

pub fn join_address_lines(address: &Address) -> String {
    [
        address.address_line_1.as_str(),
        address.address_line_2.as_str(),
        address.town.as_str(),
    ]
    .join("|")
}

pub fn decode_address(bag: &FieldBag, names: &AddressFieldNames) -> Address {
    let mut address = Address {
        postcode: bag.owned(&names.postcode),
        place_ref: bag.owned(&names.place_ref),
        ..Default::default()
    };

    if let Some(raw) = bag.get(&names.address).filter(|raw| !raw.is_empty()) {
        if address.has_place_ref() {
            address.selected_address = raw.to_string();
        } else {
            split_address_lines(raw, &mut address);
        }
    }

    address
}

/// Decode, keeping the address only when it passes validation.
pub fn decode_valid_address(bag: &FieldBag, names: &AddressFieldNames) -> Option<Address> {
    Some(decode_address(bag, names)).filter(Address::is_valid)
}

pub fn encode_address(address: &Address, names: &AddressFieldNames, batch: &mut FieldBatch) {
    batch.add(&names.postcode, &address.postcode);

    if address.has_place_ref() {
        batch
            .add(&names.place_ref, &address.place_ref)
            .add(&names.address, &address.selected_address);
    } else {
        batch
            .add(&names.address, join_address_lines(address))
            .add_null(&names.place_ref);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fostering_protocol::Field;
    use pretty_assertions::assert_eq;

    fn names() -> AddressFieldNames {
        AddressFieldNames::new("gpaddress", "gpplaceref", "gppostcode")
    }

    fn decode(fields: Vec<Field>) -> Address {
        decode_address(&FieldBag::new(fields), &names())
    }

    #[test]
    fn split_boundaries() {
        let lines = |raw: &str| {
            let address = decode(vec![Field::new("gpaddress", raw)]);
            (address.address_line_1, address.address_line_2, address.town)
        };
        let owned = |a: &str, b: &str, c: &str| (a.to_string(), b.to_string(), c.to_string());

        assert_eq!(lines(""), owned("", "", ""));
        assert_eq!(lines("1 Road"), owned("1 Road", "", ""));
        assert_eq!(lines("1 Road|Area"), owned("1 Road", "Area", ""));
        assert_eq!(lines("1 Road|Area|Town"), owned("1 Road", "Area", "Town"));
        assert_eq!(lines("1 Road|Area|Town|Extra"), owned("1 Road", "Area", "Town"));
    }

    #[test]
    fn place_ref_keeps_display_string_verbatim() {
        let address = decode(vec![
            Field::new("gpaddress", "1 Road|Area, Town"),
            Field::new("gpplaceref", "100012345"),
            Field::new("gppostcode", "SK1 1AA"),
        ]);

        assert_eq!(address.selected_address, "1 Road|Area, Town");
        assert_eq!(address.address_line_1, "");
        assert!(address.is_valid());
    }

    #[test]
    fn manual_encode_clears_place_ref() {
        let mut batch = FieldBatch::new();
        encode_address(
            &Address::manual("1 Road", "Area", "Town", "SK1 1AA"),
            &names(),
            &mut batch,
        );

        assert_eq!(
            batch.build(),
            vec![
                Field::new("gppostcode", "SK1 1AA"),
                Field::new("gpaddress", "1 Road|Area|Town"),
                Field::null("gpplaceref"),
            ]
        );
    }

    #[test]
    fn place_encode_ignores_lines() {
        let mut address = Address::from_place("100012345", "1 Road, Town", "SK1 1AA");
        address.address_line_1 = "stale".to_string();

        let mut batch = FieldBatch::new();
        encode_address(&address, &names(), &mut batch);

        assert_eq!(
            batch.build(),
            vec![
                Field::new("gppostcode", "SK1 1AA"),
                Field::new("gpplaceref", "100012345"),
                Field::new("gpaddress", "1 Road, Town"),
            ]
        );
    }

    #[test]
    fn invalid_address_is_absent() {
        let bag = FieldBag::new(vec![Field::new("gpaddress", "1 Road")]);
        assert_eq!(decode_valid_address(&bag, &names()), None);
    }
}
