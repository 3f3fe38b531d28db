use std::sync::Arc;

pub const TABLE_NAME: &str = "user";

record_id!(
    /// Identifies a [`User`] in the catalog.
    UserId,
    TABLE_NAME
);

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    pub name: Arc<str>,
    /// The key users are looked up by.
    pub mobile: Arc<str>,
}
