//! Write path: one [`SectionUpdate`] to a [`FieldBatch`].

use fostering_protocol::{
    AboutYourself, ChildrenLivingAway, CouncillorDetails, EmploymentDetails, FosteringHistory,
    GpDetails, HealthDetails, Household, InterestInFostering, Languages, PartnershipDetails,
    PreviousAddress, References, SectionStatus, SectionUpdate, Workflow,
};

use crate::address::encode_address;
use crate::address_history::encode_address_history;
use crate::batch::FieldBatch;
use crate::error::{CodecError, Result};
use crate::names::{
    case_fields, family_reference, first_personal_reference, history_layout, household_layout,
    second_personal_reference, AboutYourselfFields, ChildrenFields, CouncillorFields,
    EmploymentFields, FosteringHistoryFields, GpFields, HealthFields,
};
use crate::reference::encode_reference;
use crate::scalar::{encode_fostering_types, encode_hours_of_work};
use crate::slotted::encode_slotted;
use crate::status::status_field;

/// Fields for `update` followed by the section's status field.
pub fn encode_update(
    update: &SectionUpdate,
    workflow: Workflow,
    status: SectionStatus,
) -> Result<FieldBatch> {
    let field = status_field(update.section(), workflow)?;
    let Some(literal) = status.as_wire() else {
        return Err(CodecError::Other(format!(
            "refusing to write status {status:?} for {}",
            update.section()
        )));
    };

    let mut batch = encode_section(update)?;
    batch.add(field, literal);
    Ok(batch)
}

/// Fields for the section's answers, without any status.
pub fn encode_section(update: &SectionUpdate) -> Result<FieldBatch> {
    let mut batch = FieldBatch::new();

    match update {
        SectionUpdate::TellUsAboutYourself(update) => {
            for (applicant, about) in update.applicants() {
                write_about_yourself(about, applicant, &mut batch);
            }
        }
        SectionUpdate::YourEmploymentDetails(update) => {
            for (applicant, employment) in update.applicants() {
                write_employment(employment, applicant, &mut batch);
            }
        }
        SectionUpdate::LanguagesSpokenInYourHome(update) => {
            write_languages(&update.details, &mut batch);
        }
        SectionUpdate::YourPartnership(update) => {
            write_partnership(&update.details, &mut batch);
        }
        SectionUpdate::YourFosteringHistory(update) => {
            for (applicant, history) in update.applicants() {
                write_fostering_history(history, applicant, &mut batch);
            }
        }
        SectionUpdate::YourHealth(update) => {
            for (applicant, health) in update.applicants() {
                write_health(health, applicant, &mut batch);
            }
        }
        SectionUpdate::TellUsAboutYourInterestInFostering(update) => {
            write_interest_in_fostering(&update.details, &mut batch);
        }
        SectionUpdate::YourHousehold(update) => {
            write_household(&update.details, &mut batch)?;
        }
        SectionUpdate::ChildrenLivingAwayFromYourHome(update) => {
            for (applicant, children) in update.applicants() {
                write_children(children, applicant, &mut batch)?;
            }
        }
        SectionUpdate::References(update) => {
            write_references(&update.details, &mut batch);
        }
        SectionUpdate::GpDetails(update) => {
            for (applicant, gp) in update.applicants() {
                write_gp(gp, applicant, &mut batch);
            }
        }
        SectionUpdate::CouncillorsOrEmployees(update) => {
            for (applicant, councillor) in update.applicants() {
                write_councillor(councillor, applicant, &mut batch);
            }
        }
        SectionUpdate::AddressHistory(update) => {
            for (applicant, history) in update.applicants() {
                write_address_history(history, applicant, &mut batch);
            }
        }
    }

    Ok(batch)
}

fn write_about_yourself(about: &AboutYourself, applicant: u8, batch: &mut FieldBatch) {
    let names = AboutYourselfFields::for_applicant(applicant);
    batch
        .add_bool(
            names.has_another_name,
            about.ever_been_known_by_another_name,
            AboutYourselfFields::HAS_ANOTHER_NAME_ENCODING,
        )
        .add(names.another_name, &about.another_name)
        .add(names.ethnicity, &about.ethnicity)
        .add(names.gender, &about.gender)
        .add(names.nationality, &about.nationality)
        .add(names.religion, &about.religion)
        .add(names.sexual_orientation, &about.sexual_orientation)
        .add(names.place_of_birth, &about.place_of_birth);
}

fn write_employment(employment: &EmploymentDetails, applicant: u8, batch: &mut FieldBatch) {
    let names = EmploymentFields::for_applicant(applicant);
    batch
        .add_bool(
            names.are_you_employed,
            employment.are_you_employed,
            EmploymentFields::EMPLOYED_ENCODING,
        )
        .add(names.job_title, &employment.job_title)
        .add(names.current_employer, &employment.current_employer)
        .add(
            names.hours_of_work,
            encode_hours_of_work(employment.current_hours_of_work),
        );
}

fn write_languages(languages: &Languages, batch: &mut FieldBatch) {
    batch
        .add(case_fields::PRIMARY_LANGUAGE, &languages.primary_language)
        .add(case_fields::OTHER_LANGUAGES, &languages.other_languages);
}

fn write_partnership(partnership: &PartnershipDetails, batch: &mut FieldBatch) {
    batch
        .add_bool(
            case_fields::MARRIED_OR_IN_CIVIL_PARTNERSHIP,
            partnership.married_or_in_civil_partnership,
            case_fields::MARRIED_ENCODING,
        )
        .add_date(case_fields::DATE_OF_MARRIAGE, partnership.date_of_marriage)
        .add_date(
            case_fields::DATE_MOVED_IN_TOGETHER,
            partnership.date_moved_in_together,
        );
}

fn write_fostering_history(history: &FosteringHistory, applicant: u8, batch: &mut FieldBatch) {
    let names = FosteringHistoryFields::for_applicant(applicant);
    batch
        .add_bool(
            names.previously_applied,
            history.previously_applied,
            FosteringHistoryFields::PREVIOUSLY_APPLIED_ENCODING,
        )
        .add(
            names.previous_fostering_details,
            &history.previous_fostering_details,
        );
}

fn write_health(health: &HealthDetails, applicant: u8, batch: &mut FieldBatch) {
    let names = HealthFields::for_applicant(applicant);
    batch
        .add_bool(
            names.registered_disabled,
            health.registered_disabled,
            HealthFields::ENCODING,
        )
        .add_bool(
            names.medical_conditions,
            health.medical_conditions,
            HealthFields::ENCODING,
        )
        .add(names.health_details, &health.health_details);
}

fn write_interest_in_fostering(interest: &InterestInFostering, batch: &mut FieldBatch) {
    batch
        .add(
            case_fields::TYPES_OF_FOSTERING,
            encode_fostering_types(&interest.types_of_fostering),
        )
        .add(
            case_fields::REASONS_FOR_FOSTERING,
            &interest.reason_for_fostering,
        );
}

fn write_household(household: &Household, batch: &mut FieldBatch) -> Result<()> {
    batch
        .add_bool(
            case_fields::ANY_OTHER_PEOPLE_IN_HOUSEHOLD,
            household.any_other_people_in_household,
            case_fields::HOUSEHOLD_ENCODING,
        )
        .add_bool(
            case_fields::DO_YOU_HAVE_ANY_PETS,
            household.do_you_have_any_pets,
            case_fields::HOUSEHOLD_ENCODING,
        )
        .add(case_fields::PETS_DETAILS, &household.pets_details);

    encode_slotted(&household.other_people, &household_layout(), batch)
}

fn write_children(
    children: &ChildrenLivingAway,
    applicant: u8,
    batch: &mut FieldBatch,
) -> Result<()> {
    let names = ChildrenFields::for_applicant(applicant);
    batch
        .add_bool(
            &names.any_under_sixteen,
            children.any_children_under_sixteen,
            ChildrenFields::ENCODING,
        )
        .add_bool(
            &names.any_over_sixteen,
            children.any_children_over_sixteen,
            ChildrenFields::ENCODING,
        );

    encode_slotted(&children.children_under_sixteen, &names.under_sixteen, batch)?;
    encode_slotted(&children.children_over_sixteen, &names.over_sixteen, batch)
}

fn write_references(references: &References, batch: &mut FieldBatch) {
    encode_reference(&references.family_reference, &family_reference(), batch);
    encode_reference(
        &references.first_personal_reference,
        &first_personal_reference(),
        batch,
    );
    encode_reference(
        &references.second_personal_reference,
        &second_personal_reference(),
        batch,
    );
}

fn write_gp(gp: &GpDetails, applicant: u8, batch: &mut FieldBatch) {
    let names = GpFields::for_applicant(applicant);
    batch
        .add(&names.name_of_gp, &gp.name_of_gp)
        .add(&names.name_of_practice, &gp.name_of_practice)
        .add(&names.phone_number, &gp.phone_number);

    let address = gp.address.clone().unwrap_or_default();
    encode_address(&address, &names.address, batch);
}

fn write_councillor(councillor: &CouncillorDetails, applicant: u8, batch: &mut FieldBatch) {
    let names = CouncillorFields::for_applicant(applicant);
    batch
        .add_bool(
            names.contact_with_councillor,
            councillor.contact_with_councillor,
            CouncillorFields::CONTACT_ENCODING,
        )
        .add(names.councillor_name, &councillor.councillor_name)
        .add(names.relationship, &councillor.relationship);
}

fn write_address_history(history: &[PreviousAddress], applicant: u8, batch: &mut FieldBatch) {
    encode_address_history(history, &history_layout(applicant), batch);
}
