//! Predicates answered separately by each applicant.

use chrono::{Months, NaiveDate};
use fostering_protocol::{
    AboutYourself, ChildrenLivingAway, CouncillorDetails, EmploymentDetails, FosteringHistory,
    GpDetails, HealthDetails, OtherPerson, PreviousAddress, Workflow,
};

use crate::filled;

/// Home visits also ask for sexual orientation; applications do not.
pub fn about_yourself(about: &AboutYourself, workflow: Workflow) -> bool {
    let core = filled(&about.ethnicity)
        && filled(&about.gender)
        && filled(&about.nationality)
        && filled(&about.religion);
    let orientation = match workflow {
        Workflow::HomeVisit => filled(&about.sexual_orientation),
        Workflow::Application => true,
    };
    let other_name = match about.ever_been_known_by_another_name {
        Some(false) => true,
        Some(true) => filled(&about.another_name),
        None => false,
    };

    core && orientation && other_name
}

pub fn employment(employment: &EmploymentDetails) -> bool {
    match employment.are_you_employed {
        Some(false) => true,
        Some(true) => {
            filled(&employment.job_title)
                && filled(&employment.current_employer)
                && employment.current_hours_of_work.is_some()
        }
        None => false,
    }
}

pub fn fostering_history(history: &FosteringHistory) -> bool {
    match history.previously_applied {
        Some(false) => true,
        Some(true) => filled(&history.previous_fostering_details),
        None => false,
    }
}

pub fn health(health: &HealthDetails) -> bool {
    match (health.registered_disabled, health.medical_conditions) {
        (Some(false), Some(false)) => true,
        (Some(_), Some(_)) => filled(&health.health_details),
        _ => false,
    }
}

fn child_away(child: &OtherPerson) -> bool {
    child.has_identity()
        && filled(&child.address.address_line_1)
        && filled(&child.address.postcode)
}

fn children_band(any: Option<bool>, children: &[OtherPerson]) -> bool {
    match any {
        Some(false) => true,
        Some(true) => !children.is_empty() && children.iter().all(child_away),
        None => false,
    }
}

pub fn children_living_away(children: &ChildrenLivingAway) -> bool {
    children_band(
        children.any_children_under_sixteen,
        &children.children_under_sixteen,
    ) && children_band(
        children.any_children_over_sixteen,
        &children.children_over_sixteen,
    )
}

pub fn gp_details(gp: &GpDetails) -> bool {
    filled(&gp.name_of_gp)
        && filled(&gp.name_of_practice)
        && filled(&gp.phone_number)
        && gp.address.as_ref().is_some_and(|address| address.is_valid())
}

pub fn councillor(councillor: &CouncillorDetails) -> bool {
    match councillor.contact_with_councillor {
        Some(false) => true,
        Some(true) => filled(&councillor.councillor_name) && filled(&councillor.relationship),
        None => false,
    }
}

/// At least one address dates back `years` from `today`, and every previous
/// address (all entries after the first) is dated and located.
pub fn address_history(history: &[PreviousAddress], years: u32, today: NaiveDate) -> bool {
    let Some(cutoff) = today.checked_sub_months(Months::new(years.saturating_mul(12))) else {
        return false;
    };

    let reaches_back = history
        .iter()
        .filter_map(|entry| entry.date_from)
        .any(|date_from| date_from <= cutoff);

    let previous_complete = history.iter().skip(1).all(|entry| {
        entry.date_from.is_some()
            && filled(&entry.address.address_line_1)
            && filled(&entry.address.town)
            && filled(&entry.address.country)
    });

    reaches_back && previous_complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use fostering_protocol::{Address, HoursOfWork};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn about() -> AboutYourself {
        AboutYourself {
            ever_been_known_by_another_name: Some(false),
            ethnicity: "White British".to_string(),
            gender: "Female".to_string(),
            nationality: "British".to_string(),
            religion: "None".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn sexual_orientation_only_matters_on_home_visits() {
        assert!(about_yourself(&about(), Workflow::Application));
        assert!(!about_yourself(&about(), Workflow::HomeVisit));

        let mut answered = about();
        answered.sexual_orientation = "Prefer not to say".to_string();
        assert!(about_yourself(&answered, Workflow::HomeVisit));
    }

    #[test]
    fn other_name_must_be_given_when_claimed() {
        let mut claimed = about();
        claimed.ever_been_known_by_another_name = Some(true);
        assert!(!about_yourself(&claimed, Workflow::Application));

        claimed.another_name = "Smith".to_string();
        assert!(about_yourself(&claimed, Workflow::Application));

        claimed.ever_been_known_by_another_name = None;
        assert!(!about_yourself(&claimed, Workflow::Application));
    }

    #[test]
    fn employment_rules() {
        let unemployed = EmploymentDetails {
            are_you_employed: Some(false),
            ..Default::default()
        };
        assert!(employment(&unemployed));

        let mut employed = EmploymentDetails {
            are_you_employed: Some(true),
            job_title: "Nurse".to_string(),
            current_employer: "NHS".to_string(),
            current_hours_of_work: Some(HoursOfWork::FullTime),
        };
        assert!(employment(&employed));

        employed.current_hours_of_work = None;
        assert!(!employment(&employed));
        assert!(!employment(&EmploymentDetails::default()));
    }

    #[test]
    fn health_details_required_when_anything_declared() {
        let clear = HealthDetails {
            registered_disabled: Some(false),
            medical_conditions: Some(false),
            health_details: String::new(),
        };
        assert!(health(&clear));

        let declared = HealthDetails {
            medical_conditions: Some(true),
            ..clear.clone()
        };
        assert!(!health(&declared));
        assert!(health(&HealthDetails {
            health_details: "Asthma".to_string(),
            ..declared
        }));
        assert!(!health(&HealthDetails::default()));
    }

    #[test]
    fn children_need_identity_and_address() {
        let mut child = OtherPerson::new("Kim", "Lee", "Female", Some(date(2012, 3, 4)));
        let mut away = ChildrenLivingAway {
            any_children_under_sixteen: Some(true),
            children_under_sixteen: vec![child.clone()],
            any_children_over_sixteen: Some(false),
            children_over_sixteen: Vec::new(),
        };
        assert!(!children_living_away(&away));

        child.address = Address::manual("1 Road", "", "Town", "SK1 1AA");
        away.children_under_sixteen = vec![child];
        assert!(children_living_away(&away));

        away.children_under_sixteen.clear();
        assert!(!children_living_away(&away));

        away.any_children_under_sixteen = Some(false);
        assert!(children_living_away(&away));

        away.any_children_over_sixteen = None;
        assert!(!children_living_away(&away));
    }

    #[test]
    fn address_history_needs_ten_years() {
        let today = date(2024, 6, 15);
        let previous = |line: &str, when| {
            PreviousAddress::new(
                Address {
                    address_line_1: line.to_string(),
                    town: "Town".to_string(),
                    country: "UK".to_string(),
                    postcode: "SK1 1AA".to_string(),
                    ..Default::default()
                },
                when,
            )
        };

        let settled = vec![PreviousAddress::current(Some(date(2014, 6, 1)))];
        assert!(address_history(&settled, 10, today));

        let recent = vec![PreviousAddress::current(Some(date(2020, 1, 1)))];
        assert!(!address_history(&recent, 10, today));

        let backed = vec![
            PreviousAddress::current(Some(date(2020, 1, 1))),
            previous("1 Road", Some(date(2010, 1, 1))),
        ];
        assert!(address_history(&backed, 10, today));

        let gap = vec![
            PreviousAddress::current(Some(date(2020, 1, 1))),
            previous("1 Road", Some(date(2010, 1, 1))),
            previous("", Some(date(2005, 1, 1))),
        ];
        assert!(!address_history(&gap, 10, today));

        assert!(!address_history(&[], 10, today));
    }
}
