//! Current value of every registration field.

use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// One string per field; an empty string means the field is absent.
///
/// Serializes as a camelCase map, the shape handed to the submission
/// collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    first_name: String,
    last_name: String,
    bio: String,
    email: String,
    phone: String,
    address1: String,
    address2: String,
    city: String,
    state: String,
    country: String,
    zipcode: String,
}

impl FormValues {
    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Bio => &self.bio,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Address1 => &self.address1,
            FieldId::Address2 => &self.address2,
            FieldId::City => &self.city,
            FieldId::State => &self.state,
            FieldId::Country => &self.country,
            FieldId::Zipcode => &self.zipcode,
        }
    }

    fn slot_mut(&mut self, id: FieldId) -> &mut String {
        match id {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Bio => &mut self.bio,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Address1 => &mut self.address1,
            FieldId::Address2 => &mut self.address2,
            FieldId::City => &mut self.city,
            FieldId::State => &mut self.state,
            FieldId::Country => &mut self.country,
            FieldId::Zipcode => &mut self.zipcode,
        }
    }

    /// Builder-style constructor for a detached value set.
    pub fn with(mut self, id: FieldId, value: impl Into<String>) -> Self {
        *self.slot_mut(id) = value.into();
        self
    }

    /// Only the form store mutates values in place.
    pub(crate) fn set(&mut self, id: FieldId, value: String) {
        *self.slot_mut(id) = value;
    }

    /// All fields with their values, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        FieldId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// `true` when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.iter().all(|(_, v)| v.is_empty())
    }
}
