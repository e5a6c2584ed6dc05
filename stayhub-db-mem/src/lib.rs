//! # stayhub-db-mem
//!
//! A thread-safe, in-memory implementation of the repository traits.
//! Backs the CLI tools and integration tests; data lives only as long
//! as the process.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;

use stayhub_core::{entities::*, repositories::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default)]
pub struct MemStore {
    users: RwLock<Vec<User>>,
    offers: RwLock<Vec<Offer>>,
    comments: RwLock<Vec<Comment>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockReadGuard<'_, Vec<T>>> {
    lock.read().map_err(|_| Error::Other(anyhow!("store lock poisoned")))
}

fn write<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockWriteGuard<'_, Vec<T>>> {
    lock.write().map_err(|_| Error::Other(anyhow!("store lock poisoned")))
}

impl UserRepo for MemStore {
    fn create_user(&self, user: &User) -> Result<()> {
        let mut users = write(&self.users)?;
        // email is the natural key; this check is the sole safety net
        // against duplicate-user races between concurrent writers
        if users.iter().any(|u| u.email == user.email || u.id == user.id) {
            return Err(Error::AlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        self.try_get_user_by_email(email)?.ok_or(Error::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        Ok(read(&self.users)?.iter().find(|u| &u.email == email).cloned())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(read(&self.users)?.len())
    }
}

impl OfferRepo for MemStore {
    fn create_offer(&self, offer: &Offer) -> Result<()> {
        let mut offers = write(&self.offers)?;
        if offers.iter().any(|o| o.id == offer.id) {
            return Err(Error::AlreadyExists);
        }
        offers.push(offer.clone());
        Ok(())
    }

    fn get_offer(&self, id: &Id) -> Result<Offer> {
        read(&self.offers)?
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn exists_offer(&self, id: &Id) -> Result<bool> {
        Ok(read(&self.offers)?.iter().any(|o| &o.id == id))
    }

    fn all_offers(&self) -> Result<Vec<Offer>> {
        Ok(read(&self.offers)?.clone())
    }

    fn count_offers(&self) -> Result<usize> {
        Ok(read(&self.offers)?.len())
    }

    fn update_comment_stats(&self, id: &Id, stats: &CommentStats) -> Result<()> {
        let mut offers = write(&self.offers)?;
        let offer = offers.iter_mut().find(|o| &o.id == id).ok_or(Error::NotFound)?;
        offer.comment_count = stats.count;
        offer.rating = stats.rating;
        Ok(())
    }
}

impl CommentRepo for MemStore {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        let mut comments = write(&self.comments)?;
        if comments.iter().any(|c| c.id == comment.id) {
            return Err(Error::AlreadyExists);
        }
        comments.push(comment.clone());
        Ok(())
    }

    fn comments_of_offer(&self, offer_id: &Id) -> Result<Vec<Comment>> {
        Ok(read(&self.comments)?
            .iter()
            .filter(|c| &c.offer_id == offer_id)
            .cloned()
            .collect())
    }

    fn count_comments_of_offer(&self, offer_id: &Id) -> Result<usize> {
        Ok(read(&self.comments)?
            .iter()
            .filter(|c| &c.offer_id == offer_id)
            .count())
    }

    fn delete_comments_of_offer(&self, offer_id: &Id) -> Result<usize> {
        let mut comments = write(&self.comments)?;
        let before = comments.len();
        comments.retain(|c| &c.offer_id != offer_id);
        Ok(before - comments.len())
    }
}
