//! Repeated person groups stored as numbered field slots.
//!
//! A person in slot `n` (1-based) occupies one field per role, named
//! `prefix + n`. The slot number is the single trailing digit of the field
//! name, so a layout can address at most [`MAX_SLOTS`] slots.

use fostering_protocol::{Address, OtherPerson};

use crate::address::{join_address_lines, split_address_lines};
use crate::bag::FieldBag;
use crate::batch::FieldBatch;
use crate::error::{CodecError, Result};
use crate::scalar::{decode_date, encode_date};

/// Highest slot a single trailing digit can name.
pub const MAX_SLOTS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotRole {
    FirstName,
    LastName,
    Gender,
    DateOfBirth,
    RelationshipToYou,
    Address,
    Postcode,
}

/// Role-to-prefix mapping for one repeated group.
///
/// Optional roles left as `None` are neither read nor written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLayout {
    pub group: String,
    pub capacity: usize,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub relationship_to_you: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
}

impl SlotLayout {
    fn roles(&self) -> impl Iterator<Item = (SlotRole, &str)> {
        [
            (SlotRole::FirstName, Some(&self.first_name)),
            (SlotRole::LastName, Some(&self.last_name)),
            (SlotRole::Gender, Some(&self.gender)),
            (SlotRole::DateOfBirth, Some(&self.date_of_birth)),
            (SlotRole::RelationshipToYou, self.relationship_to_you.as_ref()),
            (SlotRole::Address, self.address.as_ref()),
            (SlotRole::Postcode, self.postcode.as_ref()),
        ]
        .into_iter()
        .filter_map(|(role, prefix)| prefix.map(|prefix| (role, prefix.as_str())))
    }

    fn role_for(&self, prefix: &str) -> Option<SlotRole> {
        self.roles()
            .find(|(_, candidate)| *candidate == prefix)
            .map(|(role, _)| role)
    }

    /// Capacity must fit single-digit slots; prefixes must be distinct.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.capacity > MAX_SLOTS {
            return Err(CodecError::invalid_layout(format!(
                "{}: capacity {} outside 1..={MAX_SLOTS}",
                self.group, self.capacity
            )));
        }

        let prefixes: Vec<&str> = self.roles().map(|(_, prefix)| prefix).collect();
        for (pos, prefix) in prefixes.iter().enumerate() {
            if prefix.is_empty() {
                return Err(CodecError::invalid_layout(format!(
                    "{}: empty field prefix",
                    self.group
                )));
            }
            if prefixes[..pos].contains(prefix) {
                return Err(CodecError::invalid_layout(format!(
                    "{}: prefix {prefix:?} used for two roles",
                    self.group
                )));
            }
        }

        Ok(())
    }

    /// Field name for a role prefix at a 1-based slot.
    pub fn slot_field(prefix: &str, slot: usize) -> String {
        format!("{prefix}{slot}")
    }
}

/// Split `hhfirstname3` into `("hhfirstname", 3)`. Slot 0 is not a slot.
fn split_slot(name: &str) -> Option<(&str, usize)> {
    let last = name.chars().last()?;
    let slot = last.to_digit(10)? as usize;
    if slot == 0 {
        return None;
    }
    Some((&name[..name.len() - last.len_utf8()], slot))
}

fn apply_role(person: &mut OtherPerson, role: SlotRole, value: &str) {
    match role {
        SlotRole::FirstName => person.first_name = value.to_string(),
        SlotRole::LastName => person.last_name = value.to_string(),
        SlotRole::Gender => person.gender = value.to_string(),
        SlotRole::DateOfBirth => person.date_of_birth = decode_date(Some(value)),
        SlotRole::RelationshipToYou => person.relationship_to_you = value.to_string(),
        SlotRole::Address => {
            let postcode = std::mem::take(&mut person.address.postcode);
            person.address = Address {
                postcode,
                ..Default::default()
            };
            split_address_lines(value, &mut person.address);
        }
        SlotRole::Postcode => person.address.postcode = value.to_string(),
    }
}

fn role_value(person: &OtherPerson, role: SlotRole) -> String {
    match role {
        SlotRole::FirstName => person.first_name.clone(),
        SlotRole::LastName => person.last_name.clone(),
        SlotRole::Gender => person.gender.clone(),
        SlotRole::DateOfBirth => encode_date(person.date_of_birth),
        SlotRole::RelationshipToYou => person.relationship_to_you.clone(),
        SlotRole::Address => join_address_lines(&person.address),
        SlotRole::Postcode => person.address.postcode.clone(),
    }
}

/// People in slot order, blank slots dropped.
///
/// Slots past the layout's capacity but within [`MAX_SLOTS`] are still read,
/// since encoding writes them when given more people than capacity.
pub fn decode_slotted(bag: &FieldBag, layout: &SlotLayout) -> Result<Vec<OtherPerson>> {
    layout.validate()?;

    let mut slots = vec![OtherPerson::default(); layout.capacity];
    for (name, value) in bag.iter() {
        let Some((prefix, slot)) = split_slot(name) else {
            continue;
        };
        let Some(role) = layout.role_for(prefix) else {
            continue;
        };
        if slots.len() < slot {
            slots.resize_with(slot, OtherPerson::default);
        }
        apply_role(&mut slots[slot - 1], role, value);
    }

    Ok(slots.into_iter().filter(|person| !person.is_blank()).collect())
}

/// Write every slot the decoder can see, `1..=MAX_SLOTS`. Unused slots are
/// written as empty strings so the store erases earlier occupants, including
/// ones that spilled past capacity on a previous write.
pub fn encode_slotted(
    people: &[OtherPerson],
    layout: &SlotLayout,
    batch: &mut FieldBatch,
) -> Result<()> {
    layout.validate()?;

    if people.len() > MAX_SLOTS {
        return Err(CodecError::TooManySlots {
            group: layout.group.clone(),
            provided: people.len(),
            max: MAX_SLOTS,
        });
    }

    for index in 0..MAX_SLOTS {
        let person = people.get(index);
        for (role, prefix) in layout.roles() {
            let value = person.map(|p| role_value(p, role)).unwrap_or_default();
            batch.add(SlotLayout::slot_field(prefix, index + 1), value);
        }
    }

    Ok(())
}
