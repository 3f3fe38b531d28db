#![allow(clippy::module_name_repetitions)]

/// Defines a typed arena identifier for one table of the catalog.
///
/// The identifier is the position of the record in its table, which is stable because records are never removed.
/// It displays (and parses) as `<table_name>:<index>`, e.g. `song:3`.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $table:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(usize);

        impl $name {
            /// Name of the table this id points into.
            pub const TABLE: &'static str = $table;

            #[must_use]
            #[inline]
            pub(crate) const fn from_index(index: usize) -> Self {
                Self(index)
            }

            /// Position of the record in its table.
            #[must_use]
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl std::fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}:{}", Self::TABLE, self.0)
            }
        }

        impl std::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}:{}", Self::TABLE, self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ();

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::db::schemas::parse_record_index(s, Self::TABLE).map(Self)
            }
        }
    };
}

pub mod album;
pub mod artist;
pub mod playlist;
pub mod song;
pub mod user;

/// Parse the index out of a `<table_name>:<index>` string.
///
/// Surrounding whitespace is ignored, anything else (wrong table, missing colon, non-numeric index) is rejected.
pub(crate) fn parse_record_index(s: &str, table: &str) -> Result<usize, ()> {
    let (tb, index) = s.trim().split_once(':').ok_or(())?;
    if tb != table || index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
        return Err(());
    }
    index.parse().map_err(|_| ())
}

/// Serialize a `std::time::Duration` as a whole number of seconds.
///
/// # Errors
///
/// This function will return an error if the serializer fails to write a `u64`.
#[cfg(feature = "serde")]
#[inline]
pub fn serialize_duration_as_secs<S>(x: &std::time::Duration, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_u64(x.as_secs())
}

/// Deserialize a `std::time::Duration` from a whole number of seconds.
///
/// # Errors
///
/// This function will return an error if the input is not an unsigned integer.
#[cfg(feature = "serde")]
#[inline]
pub fn deserialize_duration_from_secs<'de, D>(d: D) -> Result<std::time::Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let secs = u64::deserialize(d)?;
    Ok(std::time::Duration::from_secs(secs))
}
