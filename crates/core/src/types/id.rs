//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. The backend assigns
//! integer ids unique within each collection; the wrappers keep a room id
//! from ever being handed to a hotel lookup.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use hotelier_core::define_id;
/// define_id!(UserId);
/// define_id!(BookingId);
///
/// let user_id = UserId::new(7);
/// let booking_id = BookingId::new(7);
///
/// // These are different types, so this won't compile:
/// // let _: UserId = booking_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(HotelId);
define_id!(RoomId);
define_id!(BookingId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(HotelId::new(3).to_string(), "3");
    }

    #[test]
    fn test_id_conversions() {
        let id: RoomId = 12.into();
        assert_eq!(id.as_i32(), 12);
        assert_eq!(i32::from(id), 12);
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = UserId::new(7);
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "7");

        let parsed: UserId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(parsed, id);
    }
}
