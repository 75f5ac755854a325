//! # Fostering Gateway
//!
//! Connects the codec and the completion rules to a CRM field store.
//!
//! ```text
//! get_case:       GetFields ──> FieldBag ──> read_case ──> FosteringCase
//!
//! update_section: SectionUpdate ──> CompletionRules::evaluate ──> status
//!                      │                                             │
//!                      └──────────> encode_update <──────────────────┘
//!                                        │
//!                                        └──> SetFields(case, form, fields)
//! ```
//!
//! Every store failure carries the operation name and the case reference.

mod config;
mod error;
mod service;
mod store;

pub use config::{GatewayConfig, DEFAULT_APPLICATION_FORM, DEFAULT_HOME_VISIT_FORM};
pub use error::{GatewayError, Result};
pub use service::CaseService;
pub use store::{
    merge_fields, CaseRecord, FieldStore, FieldWrite, InMemoryFieldStore, JsonFileFieldStore,
};
