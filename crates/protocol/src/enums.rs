use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Completion state of one form section.
///
/// Writes only ever produce `Completed` or `NotCompleted`. `None` is what an
/// absent or unrecognised status field reads back as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SectionStatus {
    #[default]
    None,
    CantStart,
    Completed,
    NotCompleted,
}

impl SectionStatus {
    /// Decode a stored status. Never fails: unknown values are `None`.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("CantStart") => Self::CantStart,
            Some("Completed") => Self::Completed,
            Some("NotCompleted") => Self::NotCompleted,
            _ => Self::None,
        }
    }

    /// Wire literal, if this status has one.
    pub fn as_wire(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::CantStart => Some("CantStart"),
            Self::Completed => Some("Completed"),
            Self::NotCompleted => Some("NotCompleted"),
        }
    }

    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::NotCompleted
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum HoursOfWork {
    FullTime,
    PartTime,
}

impl HoursOfWork {
    pub const ALL: [HoursOfWork; 2] = [HoursOfWork::FullTime, HoursOfWork::PartTime];

    pub fn as_str(self) -> &'static str {
        match self {
            HoursOfWork::FullTime => "FullTime",
            HoursOfWork::PartTime => "PartTime",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|hours| hours.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum FosteringType {
    ShortBreaks,
    ShortTerm,
    LongTerm,
    Emergency,
    ParentAndChild,
}

impl FosteringType {
    pub const ALL: [FosteringType; 5] = [
        FosteringType::ShortBreaks,
        FosteringType::ShortTerm,
        FosteringType::LongTerm,
        FosteringType::Emergency,
        FosteringType::ParentAndChild,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FosteringType::ShortBreaks => "ShortBreaks",
            FosteringType::ShortTerm => "ShortTerm",
            FosteringType::LongTerm => "LongTerm",
            FosteringType::Emergency => "Emergency",
            FosteringType::ParentAndChild => "ParentAndChild",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

/// Which stage of the fostering journey is writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Workflow {
    HomeVisit,
    Application,
}

impl Workflow {
    pub fn as_str(self) -> &'static str {
        match self {
            Workflow::HomeVisit => "home_visit",
            Workflow::Application => "application",
        }
    }
}

/// One logical sub-form of a fostering case. Shared by both workflows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    TellUsAboutYourself,
    YourEmploymentDetails,
    LanguagesSpokenInYourHome,
    YourPartnership,
    YourFosteringHistory,
    YourHealth,
    TellUsAboutYourInterestInFostering,
    YourHousehold,
    ChildrenLivingAwayFromYourHome,
    References,
    GpDetails,
    CouncillorsOrEmployees,
    AddressHistory,
}

impl Section {
    pub const ALL: [Section; 13] = [
        Section::TellUsAboutYourself,
        Section::YourEmploymentDetails,
        Section::LanguagesSpokenInYourHome,
        Section::YourPartnership,
        Section::YourFosteringHistory,
        Section::YourHealth,
        Section::TellUsAboutYourInterestInFostering,
        Section::YourHousehold,
        Section::ChildrenLivingAwayFromYourHome,
        Section::References,
        Section::GpDetails,
        Section::CouncillorsOrEmployees,
        Section::AddressHistory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::TellUsAboutYourself => "tell_us_about_yourself",
            Section::YourEmploymentDetails => "your_employment_details",
            Section::LanguagesSpokenInYourHome => "languages_spoken_in_your_home",
            Section::YourPartnership => "your_partnership",
            Section::YourFosteringHistory => "your_fostering_history",
            Section::YourHealth => "your_health",
            Section::TellUsAboutYourInterestInFostering => {
                "tell_us_about_your_interest_in_fostering"
            }
            Section::YourHousehold => "your_household",
            Section::ChildrenLivingAwayFromYourHome => "children_living_away_from_your_home",
            Section::References => "references",
            Section::GpDetails => "gp_details",
            Section::CouncillorsOrEmployees => "councillors_or_employees",
            Section::AddressHistory => "address_history",
        }
    }

    /// Sections that only the application workflow knows about.
    pub fn is_application_only(self) -> bool {
        matches!(
            self,
            Section::References
                | Section::GpDetails
                | Section::CouncillorsOrEmployees
                | Section::AddressHistory
        )
    }

    pub fn belongs_to(self, workflow: Workflow) -> bool {
        match workflow {
            Workflow::Application => true,
            Workflow::HomeVisit => !self.is_application_only(),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_decodes_known_literals_only() {
        assert_eq!(SectionStatus::from_wire(Some("Completed")), SectionStatus::Completed);
        assert_eq!(
            SectionStatus::from_wire(Some("NotCompleted")),
            SectionStatus::NotCompleted
        );
        assert_eq!(SectionStatus::from_wire(Some("CantStart")), SectionStatus::CantStart);
        assert_eq!(SectionStatus::from_wire(Some("completed")), SectionStatus::None);
        assert_eq!(SectionStatus::from_wire(Some("")), SectionStatus::None);
        assert_eq!(SectionStatus::from_wire(None), SectionStatus::None);
    }

    #[test]
    fn enum_names_are_case_insensitive() {
        assert_eq!(HoursOfWork::from_name("fulltime"), Some(HoursOfWork::FullTime));
        assert_eq!(HoursOfWork::from_name("Zero"), None);
        assert_eq!(
            FosteringType::from_name(" LongTerm "),
            Some(FosteringType::LongTerm)
        );
    }

    #[test]
    fn application_only_sections() {
        assert!(Section::AddressHistory.belongs_to(Workflow::Application));
        assert!(!Section::AddressHistory.belongs_to(Workflow::HomeVisit));
        assert!(Section::YourHealth.belongs_to(Workflow::HomeVisit));
    }
}
