//! Strongly-typed identifiers for domain entities
//!
//! Record identifiers are assigned by the remote collaborator and treated as
//! opaque strings on this side. Newtype wrappers prevent accidental mixing of
//! different identifier kinds. A freshly drafted record carries a client-side
//! placeholder id, which the collaborator replaces on first save.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_record_id {
    ($name:ident, $entity:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from a server-assigned value
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Creates a client-side placeholder id, replaced on first save
            pub fn placeholder() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the entity kind this identifier names
            pub fn entity() -> &'static str {
                $entity
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_record_id!(InvoiceId, "invoice");
define_record_id!(CustomerId, "customer");
define_record_id!(ItemId, "item");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trips_through_string() {
        let id = InvoiceId::new("42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_placeholder_ids_are_unique() {
        assert_ne!(ItemId::placeholder(), ItemId::placeholder());
    }

    #[test]
    fn test_serde_transparent() {
        let id: CustomerId = serde_json::from_str("\"c-7\"").unwrap();
        assert_eq!(id, CustomerId::new("c-7"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"c-7\"");
    }
}
