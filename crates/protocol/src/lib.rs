//! # Fostering Protocol
//!
//! Shared types exchanged between the fostering frontend, the field codec and
//! the CRM gateway.
//!
//! ## Layers
//!
//! ```text
//! CRM custom fields (Field[])
//!     │
//!     ├──> FosteringCase view   (read path, built fresh per request)
//!     │      ├─ Applicant x1..2
//!     │      ├─ case-level sections (household, partnership, ...)
//!     │      └─ SectionStatuses
//!     │
//!     └──< SectionUpdate        (write path, one form section at a time)
//! ```

use anyhow::Result;
use serde::Serialize;

mod address;
mod case;
mod enums;
mod field;
mod person;
mod update;

pub use address::{Address, PreviousAddress};
pub use case::{
    AboutYourself, Applicant, CaseSubject, ChildrenLivingAway, EmploymentDetails,
    FosteringCase, FosteringHistory, HealthDetails, Household, InterestInFostering, Languages,
    PartnershipDetails, References, SectionStatuses,
};
pub use enums::{FosteringType, HoursOfWork, Section, SectionStatus, Workflow};
pub use field::Field;
pub use person::{CouncillorDetails, GpDetails, OtherPerson, ReferenceDetails};
pub use update::{CaseScoped, CaseUpdate, PerApplicant, SectionUpdate};

/// Version of the JSON case view handed to the frontend.
pub const CASE_VIEW_SCHEMA_VERSION: u32 = 1;

pub fn serialize_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Into::into)
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
