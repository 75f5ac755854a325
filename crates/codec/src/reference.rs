use fostering_protocol::ReferenceDetails;

use crate::address::{decode_valid_address, encode_address, AddressFieldNames};
use crate::bag::FieldBag;
use crate::batch::FieldBatch;

/// Field names for one referee, all sharing a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFieldNames {
    pub first_name: String,
    pub last_name: String,
    pub relationship_to_you: String,
    pub number_of_years_known: String,
    pub email_address: String,
    pub phone_number: String,
    pub address: AddressFieldNames,
}

impl ReferenceFieldNames {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            first_name: format!("{prefix}firstname"),
            last_name: format!("{prefix}lastname"),
            relationship_to_you: format!("{prefix}relationshiptoyou"),
            number_of_years_known: format!("{prefix}numberofyearsknown"),
            email_address: format!("{prefix}emailaddress"),
            phone_number: format!("{prefix}phonenumber"),
            address: AddressFieldNames::new(
                format!("{prefix}address"),
                format!("{prefix}placeref"),
                format!("{prefix}postcode"),
            ),
        }
    }
}

pub fn decode_reference(bag: &FieldBag, names: &ReferenceFieldNames) -> ReferenceDetails {
    ReferenceDetails {
        first_name: bag.owned(&names.first_name),
        last_name: bag.owned(&names.last_name),
        relationship_to_you: bag.owned(&names.relationship_to_you),
        number_of_years_known: bag.owned(&names.number_of_years_known),
        email_address: bag.owned(&names.email_address),
        phone_number: bag.owned(&names.phone_number),
        address: decode_valid_address(bag, &names.address),
    }
}

/// A missing address is written as a cleared one.
pub fn encode_reference(
    reference: &ReferenceDetails,
    names: &ReferenceFieldNames,
    batch: &mut FieldBatch,
) {
    batch
        .add(&names.first_name, &reference.first_name)
        .add(&names.last_name, &reference.last_name)
        .add(&names.relationship_to_you, &reference.relationship_to_you)
        .add(&names.number_of_years_known, &reference.number_of_years_known)
        .add(&names.email_address, &reference.email_address)
        .add(&names.phone_number, &reference.phone_number);

    let address = reference.address.clone().unwrap_or_default();
    encode_address(&address, &names.address, batch);
}
