//! Well-known custom field names.
//!
//! Applicant 1 fields are unsuffixed. Applicant 2 fields append either `2` or
//! `_2` depending on the field family. Each family also pins the boolean
//! literals its fields use; reader and writer both go through these.

use crate::address::AddressFieldNames;
use crate::address_history::HistoryLayout;
use crate::reference::ReferenceFieldNames;
use crate::scalar::BoolEncoding;
use crate::slotted::SlotLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicantSuffix {
    /// `jobtitle2`
    Digit,
    /// `firstname_2`
    Underscore,
}

pub fn applicant_field(base: &str, applicant: u8, suffix: ApplicantSuffix) -> String {
    match (applicant, suffix) {
        (1, _) => base.to_string(),
        (n, ApplicantSuffix::Digit) => format!("{base}{n}"),
        (n, ApplicantSuffix::Underscore) => format!("{base}_{n}"),
    }
}

/// Case-level fields, shared by both applicants.
pub mod case_fields {
    use crate::scalar::BoolEncoding;

    pub const WITH_PARTNER: &str = "withpartner";
    pub const WITH_PARTNER_ENCODING: BoolEncoding = BoolEncoding::YesNo;

    pub const MARRIED_OR_IN_CIVIL_PARTNERSHIP: &str = "marriedorinacivilpartnership";
    pub const MARRIED_ENCODING: BoolEncoding = BoolEncoding::TrueFalse;
    pub const DATE_OF_MARRIAGE: &str = "dateofmarriage";
    pub const DATE_MOVED_IN_TOGETHER: &str = "datemovedintogether";

    pub const PRIMARY_LANGUAGE: &str = "primarylanguage";
    pub const OTHER_LANGUAGES: &str = "otherlanguages";

    pub const ANY_OTHER_PEOPLE_IN_HOUSEHOLD: &str = "anyotherpeopleinhousehold";
    pub const DO_YOU_HAVE_ANY_PETS: &str = "doyouhaveanypets";
    pub const PETS_DETAILS: &str = "petsdetails";
    pub const HOUSEHOLD_ENCODING: BoolEncoding = BoolEncoding::YesNo;

    pub const TYPES_OF_FOSTERING: &str = "typesoffostering";
    pub const REASONS_FOR_FOSTERING: &str = "reasonsforfostering";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityFields {
    pub first_name: String,
    pub last_name: String,
}

impl IdentityFields {
    pub fn for_applicant(applicant: u8) -> Self {
        let name = |base| applicant_field(base, applicant, ApplicantSuffix::Underscore);
        Self {
            first_name: name("firstname"),
            last_name: name("surname"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutYourselfFields {
    pub has_another_name: String,
    pub another_name: String,
    pub ethnicity: String,
    pub gender: String,
    pub nationality: String,
    pub religion: String,
    pub sexual_orientation: String,
    pub place_of_birth: String,
}

impl AboutYourselfFields {
    pub const HAS_ANOTHER_NAME_ENCODING: BoolEncoding = BoolEncoding::TrueFalse;

    pub fn for_applicant(applicant: u8) -> Self {
        let name = |base| applicant_field(base, applicant, ApplicantSuffix::Underscore);
        Self {
            has_another_name: name("hasanothername"),
            another_name: name("knownbyanothername"),
            ethnicity: name("ethnicity"),
            gender: name("gender"),
            nationality: name("nationality"),
            religion: name("religion"),
            sexual_orientation: name("sexualorientation"),
            place_of_birth: name("placeofbirth"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmploymentFields {
    pub are_you_employed: String,
    pub job_title: String,
    pub current_employer: String,
    pub hours_of_work: String,
}

impl EmploymentFields {
    pub const EMPLOYED_ENCODING: BoolEncoding = BoolEncoding::YesNo;

    pub fn for_applicant(applicant: u8) -> Self {
        let name = |base| applicant_field(base, applicant, ApplicantSuffix::Digit);
        Self {
            are_you_employed: name("areyouemployed"),
            job_title: name("jobtitle"),
            current_employer: name("currentemployer"),
            hours_of_work: name("hoursofwork"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FosteringHistoryFields {
    pub previously_applied: String,
    pub previous_fostering_details: String,
}

impl FosteringHistoryFields {
    pub const PREVIOUSLY_APPLIED_ENCODING: BoolEncoding = BoolEncoding::TrueFalse;

    pub fn for_applicant(applicant: u8) -> Self {
        let name = |base| applicant_field(base, applicant, ApplicantSuffix::Digit);
        Self {
            previously_applied: name("previouslyappliedtofoster"),
            previous_fostering_details: name("previousfosteringdetails"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthFields {
    pub registered_disabled: String,
    pub medical_conditions: String,
    pub health_details: String,
}

impl HealthFields {
    pub const ENCODING: BoolEncoding = BoolEncoding::YesNo;

    pub fn for_applicant(applicant: u8) -> Self {
        let name = |base| applicant_field(base, applicant, ApplicantSuffix::Digit);
        Self {
            registered_disabled: name("registereddisabled"),
            medical_conditions: name("medicalconditions"),
            health_details: name("healthdetails"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpFields {
    pub name_of_gp: String,
    pub name_of_practice: String,
    pub phone_number: String,
    pub address: AddressFieldNames,
}

impl GpFields {
    pub fn for_applicant(applicant: u8) -> Self {
        let name = |base| applicant_field(base, applicant, ApplicantSuffix::Digit);
        Self {
            name_of_gp: name("nameofgp"),
            name_of_practice: name("nameofpractice"),
            phone_number: name("gpphonenumber"),
            address: AddressFieldNames::new(name("gpaddress"), name("gpplaceref"), name("gppostcode")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouncillorFields {
    pub contact_with_councillor: String,
    pub councillor_name: String,
    pub relationship: String,
}

impl CouncillorFields {
    pub const CONTACT_ENCODING: BoolEncoding = BoolEncoding::YesNo;

    pub fn for_applicant(applicant: u8) -> Self {
        let name = |base| applicant_field(base, applicant, ApplicantSuffix::Underscore);
        Self {
            contact_with_councillor: name("contactwithcouncillor"),
            councillor_name: name("councillorname"),
            relationship: name("councillorrelationship"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildrenFields {
    pub any_under_sixteen: String,
    pub any_over_sixteen: String,
    pub under_sixteen: SlotLayout,
    pub over_sixteen: SlotLayout,
}

impl ChildrenFields {
    pub const ENCODING: BoolEncoding = BoolEncoding::YesNo;
    pub const CAPACITY: usize = 4;

    pub fn for_applicant(applicant: u8) -> Self {
        let name = |base| applicant_field(base, applicant, ApplicantSuffix::Digit);
        Self {
            any_under_sixteen: name("anychildrenundersixteen"),
            any_over_sixteen: name("anychildrenoversixteen"),
            under_sixteen: Self::layout("under16", applicant),
            over_sixteen: Self::layout("over16", applicant),
        }
    }

    fn layout(band: &str, applicant: u8) -> SlotLayout {
        let prefix = |role: &str| format!("{band}_{applicant}_{role}");
        SlotLayout {
            group: format!("{band} children of applicant {applicant}"),
            capacity: Self::CAPACITY,
            first_name: prefix("firstname"),
            last_name: prefix("lastname"),
            gender: prefix("gender"),
            date_of_birth: prefix("dateofbirth"),
            relationship_to_you: None,
            address: Some(prefix("address")),
            postcode: Some(prefix("postcode")),
        }
    }
}

pub const HOUSEHOLD_CAPACITY: usize = 8;

pub fn household_layout() -> SlotLayout {
    SlotLayout {
        group: "household".to_string(),
        capacity: HOUSEHOLD_CAPACITY,
        first_name: "hhfirstname".to_string(),
        last_name: "hhlastname".to_string(),
        gender: "hhgender".to_string(),
        date_of_birth: "hhdateofbirth".to_string(),
        relationship_to_you: Some("hhrelationshiptoyou".to_string()),
        address: None,
        postcode: None,
    }
}

pub fn history_layout(applicant: u8) -> HistoryLayout {
    HistoryLayout {
        address_prefix: format!("pastaddress_{applicant}_address"),
        postcode_prefix: format!("pastaddress_{applicant}_postcode"),
        month_prefix: format!("pastaddress_{applicant}_month"),
        year_prefix: format!("pastaddress_{applicant}_year"),
        overflow_field: format!("addressadditionalinformation{applicant}"),
    }
}

pub fn family_reference() -> ReferenceFieldNames {
    ReferenceFieldNames::with_prefix("familyreference")
}

pub fn first_personal_reference() -> ReferenceFieldNames {
    ReferenceFieldNames::with_prefix("firstpersonalreference")
}

pub fn second_personal_reference() -> ReferenceFieldNames {
    ReferenceFieldNames::with_prefix("secondpersonalreference")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn applicant_two_suffixes() {
        assert_eq!(IdentityFields::for_applicant(1).first_name, "firstname");
        assert_eq!(IdentityFields::for_applicant(2).first_name, "firstname_2");
        assert_eq!(EmploymentFields::for_applicant(2).job_title, "jobtitle2");
        assert_eq!(GpFields::for_applicant(2).address.place_ref, "gpplaceref2");
    }

    #[test]
    fn built_in_layouts_are_valid() {
        assert!(household_layout().validate().is_ok());
        for applicant in [1, 2] {
            let children = ChildrenFields::for_applicant(applicant);
            assert!(children.under_sixteen.validate().is_ok());
            assert!(children.over_sixteen.validate().is_ok());
        }
    }
}
