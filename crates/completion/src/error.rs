use fostering_protocol::{Section, Workflow};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompletionError>;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Section {section} is not part of the {workflow} workflow")]
    SectionNotInWorkflow { section: Section, workflow: Workflow },

    #[error("Invalid completion rules: {0}")]
    InvalidRules(String),
}
