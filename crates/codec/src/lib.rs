//! # Fostering Codec
//!
//! Maps a CRM case's flat custom fields to the structured fostering case view
//! and maps section updates back to fields.
//!
//! ## Encodings
//!
//! ```text
//! Field bag (name -> string)
//!     │
//!     ├──> Scalars           "Yes"/"No" or "true"/"false" per field, dd/MM/yyyy dates
//!     ├──> Address           line1|line2|town, or place ref + display string
//!     ├──> Reference         flat fields + address, shared prefix
//!     ├──> Slotted list      prefix + trailing slot digit, blank slots dropped
//!     ├──> Address history   numbered positions + em-dash overflow block
//!     └──> Status fields     one per section and workflow
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fostering_codec::{read_case, FieldBag};
//! use fostering_protocol::{CaseSubject, Field};
//!
//! let bag = FieldBag::new(vec![
//!     Field::new("firstname", "Alex"),
//!     Field::new("withpartner", "Yes"),
//!     Field::new("firstname_2", "Sam"),
//! ]);
//!
//! let case = read_case("CASE-1", CaseSubject::default(), &bag).unwrap();
//! assert_eq!(case.second_applicant.unwrap().first_name, "Sam");
//! ```

mod address;
mod address_history;
mod bag;
mod batch;
mod error;
mod reader;
mod reference;
mod scalar;
mod slotted;
mod status;
mod writer;

pub mod names;

pub use address::{
    decode_address, decode_valid_address, encode_address, join_address_lines,
    split_address_lines, AddressFieldNames,
};
pub use address_history::{
    decode_address_history, encode_address_history, HistoryLayout, BOUNDED_POSITIONS,
    RECORD_SEPARATOR,
};
pub use bag::FieldBag;
pub use batch::FieldBatch;
pub use error::{CodecError, Result};
pub use reader::{includes_second_applicant, read_case};
pub use reference::{decode_reference, encode_reference, ReferenceFieldNames};
pub use scalar::{
    decode_bool, decode_date, decode_fostering_types, decode_hours_of_work, decode_month_year,
    encode_bool, encode_date, encode_fostering_types, encode_hours_of_work, encode_month_year,
    parse_date, BoolEncoding, DATE_FORMAT,
};
pub use slotted::{decode_slotted, encode_slotted, SlotLayout, MAX_SLOTS};
pub use status::{read_status, status_field};
pub use writer::{encode_section, encode_update};
