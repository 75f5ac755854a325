use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    CouncillorDetails, FosteringType, GpDetails, HoursOfWork, OtherPerson, PreviousAddress,
    ReferenceDetails, Section, SectionStatus, Workflow,
};

/// Structured projection of one CRM case.
///
/// Rebuilt from the field bag on every read and never stored back as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FosteringCase {
    pub case_reference: String,
    #[serde(default)]
    pub subject: CaseSubject,
    #[serde(default)]
    pub with_partner: Option<bool>,
    pub first_applicant: Applicant,
    #[serde(default)]
    pub second_applicant: Option<Applicant>,
    #[serde(default)]
    pub languages: Languages,
    #[serde(default)]
    pub partnership: PartnershipDetails,
    #[serde(default)]
    pub household: Household,
    #[serde(default)]
    pub interest_in_fostering: InterestInFostering,
    #[serde(default)]
    pub references: References,
    #[serde(default)]
    pub statuses: SectionStatuses,
}

/// Case subject metadata returned alongside the field bag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CaseSubject {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub case_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Applicant {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub about: AboutYourself,
    #[serde(default)]
    pub employment: EmploymentDetails,
    #[serde(default)]
    pub fostering_history: FosteringHistory,
    #[serde(default)]
    pub health: HealthDetails,
    #[serde(default)]
    pub children_living_away: ChildrenLivingAway,
    #[serde(default)]
    pub gp: GpDetails,
    #[serde(default)]
    pub councillor: CouncillorDetails,
    /// Address timeline; the first entry is the current address.
    #[serde(default)]
    pub previous_addresses: Vec<PreviousAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AboutYourself {
    #[serde(default)]
    pub ever_been_known_by_another_name: Option<bool>,
    #[serde(default)]
    pub another_name: String,
    #[serde(default)]
    pub ethnicity: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub religion: String,
    #[serde(default)]
    pub sexual_orientation: String,
    #[serde(default)]
    pub place_of_birth: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EmploymentDetails {
    #[serde(default)]
    pub are_you_employed: Option<bool>,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub current_employer: String,
    #[serde(default)]
    pub current_hours_of_work: Option<HoursOfWork>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FosteringHistory {
    #[serde(default)]
    pub previously_applied: Option<bool>,
    #[serde(default)]
    pub previous_fostering_details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HealthDetails {
    #[serde(default)]
    pub registered_disabled: Option<bool>,
    #[serde(default)]
    pub medical_conditions: Option<bool>,
    #[serde(default)]
    pub health_details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChildrenLivingAway {
    #[serde(default)]
    pub any_children_under_sixteen: Option<bool>,
    #[serde(default)]
    pub children_under_sixteen: Vec<OtherPerson>,
    #[serde(default)]
    pub any_children_over_sixteen: Option<bool>,
    #[serde(default)]
    pub children_over_sixteen: Vec<OtherPerson>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Languages {
    #[serde(default)]
    pub primary_language: String,
    #[serde(default)]
    pub other_languages: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PartnershipDetails {
    #[serde(default)]
    pub married_or_in_civil_partnership: Option<bool>,
    #[serde(default)]
    pub date_of_marriage: Option<NaiveDate>,
    #[serde(default)]
    pub date_moved_in_together: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Household {
    #[serde(default)]
    pub any_other_people_in_household: Option<bool>,
    #[serde(default)]
    pub other_people: Vec<OtherPerson>,
    #[serde(default)]
    pub do_you_have_any_pets: Option<bool>,
    #[serde(default)]
    pub pets_details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InterestInFostering {
    #[serde(default)]
    pub types_of_fostering: Vec<FosteringType>,
    #[serde(default)]
    pub reason_for_fostering: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct References {
    #[serde(default)]
    pub family_reference: ReferenceDetails,
    #[serde(default)]
    pub first_personal_reference: ReferenceDetails,
    #[serde(default)]
    pub second_personal_reference: ReferenceDetails,
}

/// Stored section statuses, per workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionStatuses {
    #[serde(default)]
    pub home_visit: BTreeMap<Section, SectionStatus>,
    #[serde(default)]
    pub application: BTreeMap<Section, SectionStatus>,
}

impl SectionStatuses {
    pub fn get(&self, workflow: Workflow, section: Section) -> SectionStatus {
        let statuses = match workflow {
            Workflow::HomeVisit => &self.home_visit,
            Workflow::Application => &self.application,
        };
        statuses.get(&section).copied().unwrap_or_default()
    }

    pub fn set(&mut self, workflow: Workflow, section: Section, status: SectionStatus) {
        let statuses = match workflow {
            Workflow::HomeVisit => &mut self.home_visit,
            Workflow::Application => &mut self.application,
        };
        statuses.insert(section, status);
    }
}

impl FosteringCase {
    /// Applicants present on the case, first applicant first.
    pub fn applicants(&self) -> impl Iterator<Item = &Applicant> {
        std::iter::once(&self.first_applicant).chain(self.second_applicant.as_ref())
    }
}
