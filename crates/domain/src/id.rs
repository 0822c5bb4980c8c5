//! Typed identifier newtypes backed by database-assigned integer keys.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Access the raw database key.
            #[must_use]
            pub fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Restaurant`](crate::restaurant::Restaurant).
    RestaurantId
);

define_id!(
    /// Unique identifier for a [`Pizza`](crate::pizza::Pizza).
    PizzaId
);

define_id!(
    /// Unique identifier for a
    /// [`RestaurantPizza`](crate::restaurant_pizza::RestaurantPizza).
    RestaurantPizzaId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = RestaurantId::from(42);
        let text = id.to_string();
        let parsed: RestaurantId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let id = PizzaId::from(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn should_deserialize_from_bare_integer() {
        let parsed: RestaurantPizzaId = serde_json::from_str("13").unwrap();
        assert_eq!(parsed.as_i64(), 13);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_text() {
        let result = RestaurantId::from_str("not-a-number");
        assert!(result.is_err());
    }
}
