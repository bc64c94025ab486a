//! Strongly-typed identifier value objects.
//!
//! Every entity gets its own UUID newtype so a `StoreId` can never be
//! passed where a `UserId` is expected. All ids are generated by the
//! application (v4), never by the storage engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an id from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a user account.
    UserId
);

uuid_id!(
    /// Unique identifier for a store (one tracked business unit).
    StoreId
);

uuid_id!(
    /// Unique identifier for a ledger transaction.
    TransactionId
);

uuid_id!(
    /// Unique identifier for a daily revenue record.
    RevenueId
);

uuid_id!(
    /// Unique identifier for a monthly store goal.
    GoalId
);

uuid_id!(
    /// Unique identifier for a product group.
    GroupId
);

uuid_id!(
    /// Unique identifier for a supplier.
    SupplierId
);

uuid_id!(
    /// Unique identifier for a portioned product definition.
    PortionedProductId
);

uuid_id!(
    /// Unique identifier for a portioned price entry.
    PortionedEntryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(StoreId::new(), StoreId::new());
        assert_ne!(UserId::new(), UserId::new());
    }

    #[test]
    fn id_roundtrips_through_string() {
        let id = StoreId::new();
        let parsed: StoreId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn id_rejects_invalid_uuid() {
        assert!("not-a-uuid".parse::<UserId>().is_err());
    }

    #[test]
    fn id_serializes_as_bare_uuid() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = TransactionId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }
}
