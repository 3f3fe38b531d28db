//! CRUD operations for the user table
use log::warn;
use tracing::instrument;

use crate::{
    db::{
        Catalog,
        schemas::user::{User, UserId},
    },
    errors::Error,
};

impl Catalog {
    /// Register a new [`User`] with no playlists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateMobile`] if `mobile` is already registered and the catalog enforces unique mobiles.
    /// Otherwise duplicates are accepted, and lookups by mobile keep resolving to the first user.
    #[instrument(skip(self))]
    pub fn create_user(&mut self, name: &str, mobile: &str) -> Result<User, Error> {
        if self.user_by_mobile(mobile).is_some() {
            if self.options.unique_mobiles {
                return Err(Error::DuplicateMobile(mobile.to_owned()));
            }
            warn!("Mobile {mobile} is already registered, lookups will resolve to the first user");
        }

        let user = User {
            id: UserId::from_index(self.users.len()),
            name: name.into(),
            mobile: mobile.into(),
        };
        self.users.push(user.clone());
        self.relations.user_to_playlist.define(user.id);
        self.relations.user_to_created.define(user.id);

        Ok(user)
    }
}
