//! # Fostering Completion
//!
//! Decides whether a section update leaves its section complete.
//!
//! ```text
//! SectionUpdate + Workflow + today
//!     │
//!     ├──> per-applicant predicate, ANDed over every applicant present
//!     └──> case-level predicate
//!             │
//!             └──> SectionStatus::Completed | SectionStatus::NotCompleted
//! ```
//!
//! The engine is pure: it never reads stored fields and never looks at the
//! clock. Callers pass `today` so address history checks stay deterministic.

pub mod applicant;
pub mod case_level;
mod error;

use chrono::NaiveDate;
use fostering_protocol::{CaseScoped, PerApplicant, SectionStatus, SectionUpdate, Workflow};
use serde::{Deserialize, Serialize};

pub use error::{CompletionError, Result};

pub const DEFAULT_ADDRESS_HISTORY_YEARS: u32 = 10;

/// Tunable thresholds for the completion predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionRules {
    /// How far back an applicant's address history must reach.
    pub address_history_years: u32,
}

impl Default for CompletionRules {
    fn default() -> Self {
        Self {
            address_history_years: DEFAULT_ADDRESS_HISTORY_YEARS,
        }
    }
}

impl CompletionRules {
    pub fn validate(&self) -> Result<()> {
        if self.address_history_years == 0 {
            return Err(CompletionError::InvalidRules(
                "address_history_years must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Computes the status the section should be left in after `update`.
    pub fn evaluate(
        &self,
        update: &SectionUpdate,
        workflow: Workflow,
        today: NaiveDate,
    ) -> Result<SectionStatus> {
        let section = update.section();
        if !section.belongs_to(workflow) {
            return Err(CompletionError::SectionNotInWorkflow { section, workflow });
        }

        let completed = match update {
            SectionUpdate::TellUsAboutYourself(update) => {
                all_applicants(update, |about| applicant::about_yourself(about, workflow))
            }
            SectionUpdate::YourEmploymentDetails(update) => {
                all_applicants(update, applicant::employment)
            }
            SectionUpdate::LanguagesSpokenInYourHome(update) => {
                case_level::languages(&update.details)
            }
            SectionUpdate::YourPartnership(update) => case_level::partnership(&update.details),
            SectionUpdate::YourFosteringHistory(update) => {
                all_applicants(update, applicant::fostering_history)
            }
            SectionUpdate::YourHealth(update) => all_applicants(update, applicant::health),
            SectionUpdate::TellUsAboutYourInterestInFostering(update) => {
                case_level::interest_in_fostering(&update.details)
            }
            SectionUpdate::YourHousehold(update) => case_level::household(&update.details),
            SectionUpdate::ChildrenLivingAwayFromYourHome(update) => {
                all_applicants(update, applicant::children_living_away)
            }
            SectionUpdate::References(update) => case_level::references(&update.details),
            SectionUpdate::GpDetails(update) => all_applicants(update, applicant::gp_details),
            SectionUpdate::CouncillorsOrEmployees(update) => {
                all_applicants(update, applicant::councillor)
            }
            SectionUpdate::AddressHistory(update) => all_applicants(update, |history| {
                applicant::address_history(history, self.address_history_years, today)
            }),
        };

        let status = SectionStatus::from_completed(completed);
        log::debug!(
            "{} {} for case {} evaluated as {:?}",
            workflow,
            section,
            update.case_reference(),
            status
        );
        Ok(status)
    }
}

/// Evaluates `update` with the default rules.
pub fn evaluate(
    update: &SectionUpdate,
    workflow: Workflow,
    today: NaiveDate,
) -> Result<SectionStatus> {
    CompletionRules::default().evaluate(update, workflow, today)
}

fn all_applicants<T>(update: &PerApplicant<T>, predicate: impl Fn(&T) -> bool) -> bool {
    update.applicants().all(|(_, details)| predicate(details))
}

pub(crate) fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fostering_protocol::{CaseUpdate, EmploymentDetails, GpDetails, Languages, Section};
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
    }

    #[test]
    fn every_applicant_must_pass() {
        let done = EmploymentDetails {
            are_you_employed: Some(false),
            ..Default::default()
        };
        let single = SectionUpdate::YourEmploymentDetails(PerApplicant::single("C1", done.clone()));
        assert_eq!(
            evaluate(&single, Workflow::HomeVisit, today()).expect("evaluates"),
            SectionStatus::Completed
        );

        let pair = SectionUpdate::YourEmploymentDetails(PerApplicant::pair(
            "C1",
            done,
            EmploymentDetails::default(),
        ));
        assert_eq!(
            evaluate(&pair, Workflow::Application, today()).expect("evaluates"),
            SectionStatus::NotCompleted
        );
    }

    #[test]
    fn application_only_sections_are_rejected_on_home_visits() {
        let update = SectionUpdate::GpDetails(PerApplicant::single("C1", GpDetails::default()));

        let err = evaluate(&update, Workflow::HomeVisit, today()).unwrap_err();
        assert!(matches!(
            err,
            CompletionError::SectionNotInWorkflow {
                section: Section::GpDetails,
                workflow: Workflow::HomeVisit
            }
        ));
    }

    #[test]
    fn case_level_sections_use_the_details() {
        let update = SectionUpdate::LanguagesSpokenInYourHome(CaseUpdate::new(
            "C1",
            Languages {
                primary_language: "English".to_string(),
                other_languages: String::new(),
            },
        ));
        assert_eq!(
            evaluate(&update, Workflow::HomeVisit, today()).expect("evaluates"),
            SectionStatus::Completed
        );
    }

    #[test]
    fn zero_year_history_is_rejected() {
        let rules = CompletionRules {
            address_history_years: 0,
        };
        assert!(matches!(
            rules.validate(),
            Err(CompletionError::InvalidRules(_))
        ));
        assert!(CompletionRules::default().validate().is_ok());
    }
}
