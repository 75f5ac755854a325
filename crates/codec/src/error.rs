use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors raised while mapping between custom fields and the case view
#[derive(Error, Debug)]
pub enum CodecError {
    /// A stored enum field holds a name the codec does not know
    #[error("Unknown value {value:?} in field {field}")]
    UnknownEnumValue { field: String, value: String },

    /// A slot layout cannot be encoded with single-digit slot suffixes
    #[error("Invalid slot layout: {0}")]
    InvalidLayout(String),

    /// More entries than single-digit slot suffixes can address
    #[error("Too many entries for {group}: {provided} provided, at most {max} slots")]
    TooManySlots {
        group: String,
        provided: usize,
        max: usize,
    },

    /// Section identifier not known, or not part of the given workflow
    #[error("Unknown section {section} for workflow {workflow}")]
    UnknownSection { section: String, workflow: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl CodecError {
    /// Create an unknown enum value error
    pub fn unknown_enum(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an invalid layout error
    pub fn invalid_layout(msg: impl Into<String>) -> Self {
        Self::InvalidLayout(msg.into())
    }

    /// Create an unknown section error
    pub fn unknown_section(section: impl Into<String>, workflow: impl Into<String>) -> Self {
        Self::UnknownSection {
            section: section.into(),
            workflow: workflow.into(),
        }
    }
}
