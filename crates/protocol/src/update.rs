use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    AboutYourself, ChildrenLivingAway, CouncillorDetails, EmploymentDetails, FosteringHistory,
    GpDetails, HealthDetails, Household, InterestInFostering, Languages, PartnershipDetails,
    PreviousAddress, References, Section,
};

/// Anything addressed to a single CRM case.
pub trait CaseScoped {
    fn case_reference(&self) -> &str;
}

/// Section payload answered separately by each applicant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PerApplicant<T> {
    pub case_reference: String,
    pub first_applicant: T,
    #[serde(default)]
    pub second_applicant: Option<T>,
}

impl<T> PerApplicant<T> {
    pub fn single(case_reference: impl Into<String>, first_applicant: T) -> Self {
        Self {
            case_reference: case_reference.into(),
            first_applicant,
            second_applicant: None,
        }
    }

    pub fn pair(case_reference: impl Into<String>, first_applicant: T, second_applicant: T) -> Self {
        Self {
            case_reference: case_reference.into(),
            first_applicant,
            second_applicant: Some(second_applicant),
        }
    }

    /// `(applicant number, answers)` pairs, applicant 1 first.
    pub fn applicants(&self) -> impl Iterator<Item = (u8, &T)> {
        std::iter::once((1, &self.first_applicant))
            .chain(self.second_applicant.as_ref().map(|second| (2, second)))
    }
}

impl<T> CaseScoped for PerApplicant<T> {
    fn case_reference(&self) -> &str {
        &self.case_reference
    }
}

/// Section payload answered once for the whole case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CaseUpdate<T> {
    pub case_reference: String,
    pub details: T,
}

impl<T> CaseUpdate<T> {
    pub fn new(case_reference: impl Into<String>, details: T) -> Self {
        Self {
            case_reference: case_reference.into(),
            details,
        }
    }
}

impl<T> CaseScoped for CaseUpdate<T> {
    fn case_reference(&self) -> &str {
        &self.case_reference
    }
}

/// One form section submitted by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionUpdate {
    TellUsAboutYourself(PerApplicant<AboutYourself>),
    YourEmploymentDetails(PerApplicant<EmploymentDetails>),
    LanguagesSpokenInYourHome(CaseUpdate<Languages>),
    YourPartnership(CaseUpdate<PartnershipDetails>),
    YourFosteringHistory(PerApplicant<FosteringHistory>),
    YourHealth(PerApplicant<HealthDetails>),
    TellUsAboutYourInterestInFostering(CaseUpdate<InterestInFostering>),
    YourHousehold(CaseUpdate<Household>),
    ChildrenLivingAwayFromYourHome(PerApplicant<ChildrenLivingAway>),
    References(CaseUpdate<References>),
    GpDetails(PerApplicant<GpDetails>),
    CouncillorsOrEmployees(PerApplicant<CouncillorDetails>),
    AddressHistory(PerApplicant<Vec<PreviousAddress>>),
}

impl SectionUpdate {
    pub fn section(&self) -> Section {
        match self {
            SectionUpdate::TellUsAboutYourself(_) => Section::TellUsAboutYourself,
            SectionUpdate::YourEmploymentDetails(_) => Section::YourEmploymentDetails,
            SectionUpdate::LanguagesSpokenInYourHome(_) => Section::LanguagesSpokenInYourHome,
            SectionUpdate::YourPartnership(_) => Section::YourPartnership,
            SectionUpdate::YourFosteringHistory(_) => Section::YourFosteringHistory,
            SectionUpdate::YourHealth(_) => Section::YourHealth,
            SectionUpdate::TellUsAboutYourInterestInFostering(_) => {
                Section::TellUsAboutYourInterestInFostering
            }
            SectionUpdate::YourHousehold(_) => Section::YourHousehold,
            SectionUpdate::ChildrenLivingAwayFromYourHome(_) => {
                Section::ChildrenLivingAwayFromYourHome
            }
            SectionUpdate::References(_) => Section::References,
            SectionUpdate::GpDetails(_) => Section::GpDetails,
            SectionUpdate::CouncillorsOrEmployees(_) => Section::CouncillorsOrEmployees,
            SectionUpdate::AddressHistory(_) => Section::AddressHistory,
        }
    }
}

impl CaseScoped for SectionUpdate {
    fn case_reference(&self) -> &str {
        match self {
            SectionUpdate::TellUsAboutYourself(update) => update.case_reference(),
            SectionUpdate::YourEmploymentDetails(update) => update.case_reference(),
            SectionUpdate::LanguagesSpokenInYourHome(update) => update.case_reference(),
            SectionUpdate::YourPartnership(update) => update.case_reference(),
            SectionUpdate::YourFosteringHistory(update) => update.case_reference(),
            SectionUpdate::YourHealth(update) => update.case_reference(),
            SectionUpdate::TellUsAboutYourInterestInFostering(update) => update.case_reference(),
            SectionUpdate::YourHousehold(update) => update.case_reference(),
            SectionUpdate::ChildrenLivingAwayFromYourHome(update) => update.case_reference(),
            SectionUpdate::References(update) => update.case_reference(),
            SectionUpdate::GpDetails(update) => update.case_reference(),
            SectionUpdate::CouncillorsOrEmployees(update) => update.case_reference(),
            SectionUpdate::AddressHistory(update) => update.case_reference(),
        }
    }
}
