//! Predicates answered once for the whole case.

use fostering_protocol::{
    Household, InterestInFostering, Languages, OtherPerson, PartnershipDetails, References,
};

use crate::filled;

pub fn languages(languages: &Languages) -> bool {
    filled(&languages.primary_language)
}

/// Married or in a civil partnership needs the marriage date; otherwise the
/// date the couple moved in together.
pub fn partnership(partnership: &PartnershipDetails) -> bool {
    match partnership.married_or_in_civil_partnership {
        Some(true) => partnership.date_of_marriage.is_some(),
        Some(false) => partnership.date_moved_in_together.is_some(),
        None => false,
    }
}

pub fn household(household: &Household) -> bool {
    let people = match household.any_other_people_in_household {
        Some(false) => true,
        Some(true) => {
            !household.other_people.is_empty()
                && household.other_people.iter().all(OtherPerson::has_identity)
        }
        None => false,
    };
    let pets = match household.do_you_have_any_pets {
        Some(false) => true,
        Some(true) => filled(&household.pets_details),
        None => false,
    };

    people && pets
}

pub fn interest_in_fostering(interest: &InterestInFostering) -> bool {
    !interest.types_of_fostering.is_empty() && filled(&interest.reason_for_fostering)
}

pub fn references(references: &References) -> bool {
    references.family_reference.is_complete()
        && references.first_personal_reference.is_complete()
        && references.second_personal_reference.is_complete()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fostering_protocol::{Address, FosteringType, ReferenceDetails};

    #[test]
    fn partnership_picks_the_date_for_its_answer() {
        let married = PartnershipDetails {
            married_or_in_civil_partnership: Some(true),
            date_of_marriage: None,
            date_moved_in_together: NaiveDate::from_ymd_opt(2020, 1, 1),
        };
        assert!(!partnership(&married));

        let cohabiting = PartnershipDetails {
            married_or_in_civil_partnership: Some(false),
            ..married.clone()
        };
        assert!(partnership(&cohabiting));
        assert!(!partnership(&PartnershipDetails::default()));
    }

    #[test]
    fn household_members_need_identity() {
        let mut home = Household {
            any_other_people_in_household: Some(true),
            other_people: vec![OtherPerson::new("Pat", "Jones", "", None)],
            do_you_have_any_pets: Some(false),
            pets_details: String::new(),
        };
        assert!(!household(&home));

        home.other_people = vec![OtherPerson::new(
            "Pat",
            "Jones",
            "Male",
            NaiveDate::from_ymd_opt(1990, 2, 3),
        )];
        assert!(household(&home));

        home.do_you_have_any_pets = Some(true);
        assert!(!household(&home));
        home.pets_details = "A dog".to_string();
        assert!(household(&home));

        home.any_other_people_in_household = Some(false);
        home.other_people.clear();
        assert!(household(&home));

        home.any_other_people_in_household = None;
        assert!(!household(&home));
    }

    #[test]
    fn interest_needs_types_and_reason() {
        let mut interest = InterestInFostering {
            types_of_fostering: vec![FosteringType::LongTerm],
            reason_for_fostering: String::new(),
        };
        assert!(!interest_in_fostering(&interest));
        interest.reason_for_fostering = "Space at home".to_string();
        assert!(interest_in_fostering(&interest));
        interest.types_of_fostering.clear();
        assert!(!interest_in_fostering(&interest));
    }

    #[test]
    fn every_reference_must_be_complete() {
        let complete = ReferenceDetails {
            first_name: "Jo".to_string(),
            last_name: "Bloggs".to_string(),
            relationship_to_you: "Friend".to_string(),
            number_of_years_known: "5".to_string(),
            email_address: "jo@example.com".to_string(),
            phone_number: "0161".to_string(),
            address: Some(Address::manual("1 Road", "", "Town", "SK1 1AA")),
        };
        let mut all = References {
            family_reference: complete.clone(),
            first_personal_reference: complete.clone(),
            second_personal_reference: complete.clone(),
        };
        assert!(references(&all));

        all.second_personal_reference.address = Some(Address::manual("1 Road", "", "", ""));
        assert!(!references(&all));
    }
}
