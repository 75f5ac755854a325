use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{is_blank, Address};

/// Somebody occupying one slot of a repeated person group
/// (household members, children living away).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OtherPerson {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Only carried by groups that record a relationship.
    #[serde(default)]
    pub relationship_to_you: String,
    /// Only carried by groups that record an address.
    #[serde(default)]
    pub address: Address,
}

impl OtherPerson {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: impl Into<String>,
        date_of_birth: Option<NaiveDate>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: gender.into(),
            date_of_birth,
            ..Default::default()
        }
    }

    /// No role of the slot carries a value.
    pub fn is_blank(&self) -> bool {
        is_blank(&self.first_name)
            && is_blank(&self.last_name)
            && is_blank(&self.gender)
            && self.date_of_birth.is_none()
            && is_blank(&self.relationship_to_you)
            && self.address.is_empty()
    }

    /// Name, gender and date of birth are all present.
    pub fn has_identity(&self) -> bool {
        !is_blank(&self.first_name)
            && !is_blank(&self.last_name)
            && !is_blank(&self.gender)
            && self.date_of_birth.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReferenceDetails {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub relationship_to_you: String,
    #[serde(default)]
    pub number_of_years_known: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub phone_number: String,
    /// Present only when the stored address passes validation.
    #[serde(default)]
    pub address: Option<Address>,
}

impl ReferenceDetails {
    pub fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.relationship_to_you,
            &self.number_of_years_known,
            &self.email_address,
            &self.phone_number,
        ]
        .iter()
        .all(|value| !is_blank(value))
            && self.address.as_ref().is_some_and(Address::is_valid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GpDetails {
    #[serde(default)]
    pub name_of_gp: String,
    #[serde(default)]
    pub name_of_practice: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CouncillorDetails {
    #[serde(default)]
    pub contact_with_councillor: Option<bool>,
    #[serde(default)]
    pub councillor_name: String,
    #[serde(default)]
    pub relationship: String,
}
