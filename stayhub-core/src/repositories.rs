// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    /// Fails with [`Error::AlreadyExists`] if a user with the same
    /// email (the natural key) or id is already stored.
    fn create_user(&self, user: &User) -> Result<()>;

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;

    fn count_users(&self) -> Result<usize>;
}

pub trait OfferRepo {
    fn create_offer(&self, offer: &Offer) -> Result<()>;

    fn get_offer(&self, id: &Id) -> Result<Offer>;
    fn exists_offer(&self, id: &Id) -> Result<bool>;
    fn all_offers(&self) -> Result<Vec<Offer>>;
    fn count_offers(&self) -> Result<usize>;

    /// The only write path for the derived comment statistics.
    fn update_comment_stats(&self, id: &Id, stats: &CommentStats) -> Result<()>;
}

pub trait CommentRepo {
    fn create_comment(&self, comment: &Comment) -> Result<()>;

    fn comments_of_offer(&self, offer_id: &Id) -> Result<Vec<Comment>>;
    fn count_comments_of_offer(&self, offer_id: &Id) -> Result<usize>;
    fn delete_comments_of_offer(&self, offer_id: &Id) -> Result<usize>;
}
