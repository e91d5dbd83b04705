//! Field schema: the closed set of registration fields and their constraints.

use regform_common::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of every field on the registration form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    Bio,
    Email,
    Phone,
    Address1,
    Address2,
    City,
    State,
    Country,
    Zipcode,
}

impl FieldId {
    pub const COUNT: usize = 11;

    pub const ALL: [FieldId; Self::COUNT] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Bio,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address1,
        FieldId::Address2,
        FieldId::City,
        FieldId::State,
        FieldId::Country,
        FieldId::Zipcode,
    ];

    /// camelCase name used on the wire and in driver commands.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Bio => "bio",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Address1 => "address1",
            FieldId::Address2 => "address2",
            FieldId::City => "city",
            FieldId::State => "state",
            FieldId::Country => "country",
            FieldId::Zipcode => "zipcode",
        }
    }

    /// The static definition for this field. Exhaustive, so adding a
    /// variant without a definition does not compile.
    pub fn definition(self) -> &'static FieldDefinition {
        let index = match self {
            FieldId::FirstName => 0,
            FieldId::LastName => 1,
            FieldId::Bio => 2,
            FieldId::Email => 3,
            FieldId::Phone => 4,
            FieldId::Address1 => 5,
            FieldId::Address2 => 6,
            FieldId::City => 7,
            FieldId::State => 8,
            FieldId::Country => 9,
            FieldId::Zipcode => 10,
        };
        &REGISTRATION_SCHEMA[index]
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Input kind of a field. Drives the input hint a renderer would use
/// (`type="email"`, `type="tel"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Digits(usize),
}

/// Format constraint checked after the required check passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `local@domain.tld` address shape.
    Email,
    /// ASCII digits only, exactly this many.
    ExactDigits(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub id: FieldId,
    /// Human-readable label used in error messages.
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    pub format: Option<Pattern>,
}

impl FieldDefinition {
    const fn text(id: FieldId, label: &'static str) -> Self {
        Self {
            id,
            label,
            required: true,
            kind: FieldKind::Text,
            format: None,
        }
    }
}

/// The registration form schema, in form order.
pub static REGISTRATION_SCHEMA: [FieldDefinition; FieldId::COUNT] = [
    FieldDefinition::text(FieldId::FirstName, "First Name"),
    FieldDefinition::text(FieldId::LastName, "Last Name"),
    FieldDefinition::text(FieldId::Bio, "Bio"),
    FieldDefinition {
        id: FieldId::Email,
        label: "Email",
        required: true,
        kind: FieldKind::Email,
        format: Some(Pattern::Email),
    },
    FieldDefinition {
        id: FieldId::Phone,
        label: "Phone number",
        required: true,
        kind: FieldKind::Phone,
        format: Some(Pattern::ExactDigits(10)),
    },
    FieldDefinition::text(FieldId::Address1, "Address 1"),
    FieldDefinition {
        id: FieldId::Address2,
        label: "Address 2",
        required: false,
        kind: FieldKind::Text,
        format: None,
    },
    FieldDefinition::text(FieldId::City, "City"),
    FieldDefinition::text(FieldId::State, "State"),
    FieldDefinition::text(FieldId::Country, "Country"),
    FieldDefinition {
        id: FieldId::Zipcode,
        label: "Zipcode",
        required: true,
        kind: FieldKind::Digits(6),
        format: Some(Pattern::ExactDigits(6)),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_in_form_order() {
        for (def, id) in REGISTRATION_SCHEMA.iter().zip(FieldId::ALL) {
            assert_eq!(def.id, id);
        }
    }

    #[test]
    fn definition_lookup_matches_id() {
        for id in FieldId::ALL {
            assert_eq!(id.definition().id, id);
        }
    }

    #[test]
    fn only_address2_is_optional() {
        let optional: Vec<FieldId> = REGISTRATION_SCHEMA
            .iter()
            .filter(|d| !d.required)
            .map(|d| d.id)
            .collect();
        assert_eq!(optional, vec![FieldId::Address2]);
    }

    #[test]
    fn formats_are_declared_for_contact_fields() {
        assert_eq!(FieldId::Email.definition().format, Some(Pattern::Email));
        assert_eq!(
            FieldId::Phone.definition().format,
            Some(Pattern::ExactDigits(10))
        );
        assert_eq!(
            FieldId::Zipcode.definition().format,
            Some(Pattern::ExactDigits(6))
        );
        assert_eq!(FieldId::Address2.definition().format, None);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for id in FieldId::ALL {
            assert_eq!(id.name().parse::<FieldId>().unwrap(), id);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "nickname".parse::<FieldId>().unwrap_err();
        assert!(matches!(err, FormError::UnknownField(ref n) if n == "nickname"));
        assert!("FirstName".parse::<FieldId>().is_err());
    }

    #[test]
    fn serde_uses_camel_case_names() {
        let json = serde_json::to_string(&FieldId::FirstName).unwrap();
        assert_eq!(json, "\"firstName\"");
        let back: FieldId = serde_json::from_str("\"address1\"").unwrap();
        assert_eq!(back, FieldId::Address1);
    }
}
