//! Read path: custom fields to [`FosteringCase`].

use fostering_protocol::{
    AboutYourself, Applicant, CaseSubject, ChildrenLivingAway, CouncillorDetails,
    EmploymentDetails, FosteringCase, FosteringHistory, GpDetails, HealthDetails, Household,
    InterestInFostering, Languages, PartnershipDetails, References, Section, SectionStatuses,
    Workflow,
};

use crate::address::decode_valid_address;
use crate::address_history::decode_address_history;
use crate::bag::FieldBag;
use crate::error::Result;
use crate::names::{
    case_fields, family_reference, first_personal_reference, history_layout, household_layout,
    second_personal_reference, AboutYourselfFields, ChildrenFields, CouncillorFields,
    EmploymentFields, FosteringHistoryFields, GpFields, HealthFields, IdentityFields,
};
use crate::reference::decode_reference;
use crate::scalar::{decode_bool, decode_date, decode_fostering_types, decode_hours_of_work};
use crate::slotted::decode_slotted;
use crate::status::read_status;

/// Build the case view from a case's custom fields.
///
/// Fails only on stored enum values the codec does not recognise.
pub fn read_case(
    case_reference: &str,
    subject: CaseSubject,
    bag: &FieldBag,
) -> Result<FosteringCase> {
    let second_applicant = if includes_second_applicant(bag) {
        Some(read_applicant(bag, 2)?)
    } else {
        None
    };

    Ok(FosteringCase {
        case_reference: case_reference.to_string(),
        subject,
        with_partner: decode_bool(
            bag.get(case_fields::WITH_PARTNER),
            case_fields::WITH_PARTNER_ENCODING,
        ),
        first_applicant: read_applicant(bag, 1)?,
        second_applicant,
        languages: read_languages(bag),
        partnership: read_partnership(bag),
        household: read_household(bag)?,
        interest_in_fostering: read_interest_in_fostering(bag)?,
        references: read_references(bag),
        statuses: read_statuses(bag)?,
    })
}

/// A second applicant exists iff the case is "with partner" and applicant 2
/// has a first name. Other applicant 2 fields are not consulted.
pub fn includes_second_applicant(bag: &FieldBag) -> bool {
    let with_partner = bag
        .get(case_fields::WITH_PARTNER)
        .is_some_and(|value| value.trim().eq_ignore_ascii_case("yes"));
    with_partner && bag.has_value(&IdentityFields::for_applicant(2).first_name)
}

fn read_applicant(bag: &FieldBag, applicant: u8) -> Result<Applicant> {
    let identity = IdentityFields::for_applicant(applicant);

    Ok(Applicant {
        first_name: bag.owned(&identity.first_name),
        last_name: bag.owned(&identity.last_name),
        about: read_about_yourself(bag, applicant),
        employment: read_employment(bag, applicant)?,
        fostering_history: read_fostering_history(bag, applicant),
        health: read_health(bag, applicant),
        children_living_away: read_children(bag, applicant)?,
        gp: read_gp(bag, applicant),
        councillor: read_councillor(bag, applicant),
        previous_addresses: decode_address_history(bag, &history_layout(applicant)),
    })
}

fn read_about_yourself(bag: &FieldBag, applicant: u8) -> AboutYourself {
    let names = AboutYourselfFields::for_applicant(applicant);
    AboutYourself {
        ever_been_known_by_another_name: decode_bool(
            bag.get(&names.has_another_name),
            AboutYourselfFields::HAS_ANOTHER_NAME_ENCODING,
        ),
        another_name: bag.owned(&names.another_name),
        ethnicity: bag.owned(&names.ethnicity),
        gender: bag.owned(&names.gender),
        nationality: bag.owned(&names.nationality),
        religion: bag.owned(&names.religion),
        sexual_orientation: bag.owned(&names.sexual_orientation),
        place_of_birth: bag.owned(&names.place_of_birth),
    }
}

fn read_employment(bag: &FieldBag, applicant: u8) -> Result<EmploymentDetails> {
    let names = EmploymentFields::for_applicant(applicant);
    Ok(EmploymentDetails {
        are_you_employed: decode_bool(
            bag.get(&names.are_you_employed),
            EmploymentFields::EMPLOYED_ENCODING,
        ),
        job_title: bag.owned(&names.job_title),
        current_employer: bag.owned(&names.current_employer),
        current_hours_of_work: decode_hours_of_work(
            &names.hours_of_work,
            bag.get(&names.hours_of_work),
        )?,
    })
}

fn read_fostering_history(bag: &FieldBag, applicant: u8) -> FosteringHistory {
    let names = FosteringHistoryFields::for_applicant(applicant);
    FosteringHistory {
        previously_applied: decode_bool(
            bag.get(&names.previously_applied),
            FosteringHistoryFields::PREVIOUSLY_APPLIED_ENCODING,
        ),
        previous_fostering_details: bag.owned(&names.previous_fostering_details),
    }
}

fn read_health(bag: &FieldBag, applicant: u8) -> HealthDetails {
    let names = HealthFields::for_applicant(applicant);
    HealthDetails {
        registered_disabled: decode_bool(bag.get(&names.registered_disabled), HealthFields::ENCODING),
        medical_conditions: decode_bool(bag.get(&names.medical_conditions), HealthFields::ENCODING),
        health_details: bag.owned(&names.health_details),
    }
}

fn read_children(bag: &FieldBag, applicant: u8) -> Result<ChildrenLivingAway> {
    let names = ChildrenFields::for_applicant(applicant);
    Ok(ChildrenLivingAway {
        any_children_under_sixteen: decode_bool(
            bag.get(&names.any_under_sixteen),
            ChildrenFields::ENCODING,
        ),
        children_under_sixteen: decode_slotted(bag, &names.under_sixteen)?,
        any_children_over_sixteen: decode_bool(
            bag.get(&names.any_over_sixteen),
            ChildrenFields::ENCODING,
        ),
        children_over_sixteen: decode_slotted(bag, &names.over_sixteen)?,
    })
}

fn read_gp(bag: &FieldBag, applicant: u8) -> GpDetails {
    let names = GpFields::for_applicant(applicant);
    GpDetails {
        name_of_gp: bag.owned(&names.name_of_gp),
        name_of_practice: bag.owned(&names.name_of_practice),
        phone_number: bag.owned(&names.phone_number),
        address: decode_valid_address(bag, &names.address),
    }
}

fn read_councillor(bag: &FieldBag, applicant: u8) -> CouncillorDetails {
    let names = CouncillorFields::for_applicant(applicant);
    CouncillorDetails {
        contact_with_councillor: decode_bool(
            bag.get(&names.contact_with_councillor),
            CouncillorFields::CONTACT_ENCODING,
        ),
        councillor_name: bag.owned(&names.councillor_name),
        relationship: bag.owned(&names.relationship),
    }
}

fn read_languages(bag: &FieldBag) -> Languages {
    Languages {
        primary_language: bag.owned(case_fields::PRIMARY_LANGUAGE),
        other_languages: bag.owned(case_fields::OTHER_LANGUAGES),
    }
}

fn read_partnership(bag: &FieldBag) -> PartnershipDetails {
    PartnershipDetails {
        married_or_in_civil_partnership: decode_bool(
            bag.get(case_fields::MARRIED_OR_IN_CIVIL_PARTNERSHIP),
            case_fields::MARRIED_ENCODING,
        ),
        date_of_marriage: decode_date(bag.get(case_fields::DATE_OF_MARRIAGE)),
        date_moved_in_together: decode_date(bag.get(case_fields::DATE_MOVED_IN_TOGETHER)),
    }
}

fn read_household(bag: &FieldBag) -> Result<Household> {
    Ok(Household {
        any_other_people_in_household: decode_bool(
            bag.get(case_fields::ANY_OTHER_PEOPLE_IN_HOUSEHOLD),
            case_fields::HOUSEHOLD_ENCODING,
        ),
        other_people: decode_slotted(bag, &household_layout())?,
        do_you_have_any_pets: decode_bool(
            bag.get(case_fields::DO_YOU_HAVE_ANY_PETS),
            case_fields::HOUSEHOLD_ENCODING,
        ),
        pets_details: bag.owned(case_fields::PETS_DETAILS),
    })
}

fn read_interest_in_fostering(bag: &FieldBag) -> Result<InterestInFostering> {
    Ok(InterestInFostering {
        types_of_fostering: decode_fostering_types(
            case_fields::TYPES_OF_FOSTERING,
            bag.get(case_fields::TYPES_OF_FOSTERING),
        )?,
        reason_for_fostering: bag.owned(case_fields::REASONS_FOR_FOSTERING),
    })
}

fn read_references(bag: &FieldBag) -> References {
    References {
        family_reference: decode_reference(bag, &family_reference()),
        first_personal_reference: decode_reference(bag, &first_personal_reference()),
        second_personal_reference: decode_reference(bag, &second_personal_reference()),
    }
}

/// Every status field the workflows define, absent ones as `None`.
fn read_statuses(bag: &FieldBag) -> Result<SectionStatuses> {
    let mut statuses = SectionStatuses::default();
    for workflow in [Workflow::HomeVisit, Workflow::Application] {
        for section in Section::ALL.into_iter().filter(|s| s.belongs_to(workflow)) {
            statuses.set(workflow, section, read_status(bag, section, workflow)?);
        }
    }
    Ok(statuses)
}
