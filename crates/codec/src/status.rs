use fostering_protocol::{Section, SectionStatus, Workflow};

use crate::bag::FieldBag;
use crate::error::{CodecError, Result};

/// Status field stem per section. Both workflows share the table; they only
/// differ in the suffix appended to the stem.
const STATUS_STEMS: [(Section, &str); 13] = [
    (Section::TellUsAboutYourself, "tellusaboutyourself"),
    (Section::YourEmploymentDetails, "youremploymentdetails"),
    (Section::LanguagesSpokenInYourHome, "languagespokeninyourhome"),
    (Section::YourPartnership, "yourpartnership"),
    (Section::YourFosteringHistory, "yourfosteringhistory"),
    (Section::YourHealth, "yourhealth"),
    (
        Section::TellUsAboutYourInterestInFostering,
        "tellusaboutyourinterestinfostering",
    ),
    (Section::YourHousehold, "yourhousehold"),
    (
        Section::ChildrenLivingAwayFromYourHome,
        "childrenlivingawayfromyourhome",
    ),
    (Section::References, "references"),
    (Section::GpDetails, "gpdetails"),
    (Section::CouncillorsOrEmployees, "councillorsoremployees"),
    (Section::AddressHistory, "addresshistory"),
];

/// Name of the field holding `section`'s status for `workflow`.
///
/// Application-only sections have no home-visit status field.
pub fn status_field(section: Section, workflow: Workflow) -> Result<String> {
    if !section.belongs_to(workflow) {
        return Err(CodecError::unknown_section(section.as_str(), workflow.as_str()));
    }

    let stem = STATUS_STEMS
        .iter()
        .find(|(candidate, _)| *candidate == section)
        .map(|(_, stem)| *stem)
        .ok_or_else(|| CodecError::unknown_section(section.as_str(), workflow.as_str()))?;

    Ok(match workflow {
        Workflow::HomeVisit => format!("{stem}status"),
        Workflow::Application => format!("{stem}applicationstatus"),
    })
}

pub fn read_status(bag: &FieldBag, section: Section, workflow: Workflow) -> Result<SectionStatus> {
    let field = status_field(section, workflow)?;
    Ok(SectionStatus::from_wire(bag.get(&field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fostering_protocol::Field;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_section_has_a_stem() {
        for section in Section::ALL {
            assert!(status_field(section, Workflow::Application).is_ok(), "{section}");
        }
    }

    #[test]
    fn workflows_differ_by_suffix() {
        assert_eq!(
            status_field(Section::YourHealth, Workflow::HomeVisit).expect("field"),
            "yourhealthstatus"
        );
        assert_eq!(
            status_field(Section::YourHealth, Workflow::Application).expect("field"),
            "yourhealthapplicationstatus"
        );
    }

    #[test]
    fn application_only_sections_reject_home_visit() {
        assert!(matches!(
            status_field(Section::References, Workflow::HomeVisit),
            Err(CodecError::UnknownSection { .. })
        ));
    }

    #[test]
    fn unrecognised_status_reads_as_none() {
        let bag = FieldBag::new(vec![
            Field::new("yourhealthstatus", "Done"),
            Field::new("yourhealthapplicationstatus", "Completed"),
        ]);

        assert_eq!(
            read_status(&bag, Section::YourHealth, Workflow::HomeVisit).expect("status"),
            SectionStatus::None
        );
        assert_eq!(
            read_status(&bag, Section::YourHealth, Workflow::Application).expect("status"),
            SectionStatus::Completed
        );
    }
}
