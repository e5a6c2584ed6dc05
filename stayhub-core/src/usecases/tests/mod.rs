use std::cell::{Cell, RefCell};

use stayhub_entities::builders::*;

use crate::{entities::*, repositories::*};

type RepoResult<T> = std::result::Result<T, Error>;

/// In-memory store used by the use-case tests.
#[derive(Debug, Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub offers: RefCell<Vec<Offer>>,
    pub comments: RefCell<Vec<Comment>>,
    /// Simulates losing a duplicate-email race: the next `create_user`
    /// plants a conflicting row and fails with `AlreadyExists`.
    pub fail_next_create_user_with_duplicate: Cell<bool>,
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.fail_next_create_user_with_duplicate.take() {
            let winner = User::build().email(user.email.as_str()).finish();
            self.users.borrow_mut().push(winner);
            return Err(Error::AlreadyExists);
        }
        let mut users = self.users.borrow_mut();
        if users.iter().any(|u| u.email == user.email || u.id == user.id) {
            return Err(Error::AlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        self.try_get_user_by_email(email)?.ok_or(Error::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl OfferRepo for MockDb {
    fn create_offer(&self, offer: &Offer) -> RepoResult<()> {
        let mut offers = self.offers.borrow_mut();
        if offers.iter().any(|o| o.id == offer.id) {
            return Err(Error::AlreadyExists);
        }
        offers.push(offer.clone());
        Ok(())
    }

    fn get_offer(&self, id: &Id) -> RepoResult<Offer> {
        self.offers
            .borrow()
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn exists_offer(&self, id: &Id) -> RepoResult<bool> {
        Ok(self.offers.borrow().iter().any(|o| &o.id == id))
    }

    fn all_offers(&self) -> RepoResult<Vec<Offer>> {
        Ok(self.offers.borrow().clone())
    }

    fn count_offers(&self) -> RepoResult<usize> {
        Ok(self.offers.borrow().len())
    }

    fn update_comment_stats(&self, id: &Id, stats: &CommentStats) -> RepoResult<()> {
        let mut offers = self.offers.borrow_mut();
        let offer = offers
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or(Error::NotFound)?;
        offer.comment_count = stats.count;
        offer.rating = stats.rating;
        Ok(())
    }
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: &Comment) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        if comments.iter().any(|c| c.id == comment.id) {
            return Err(Error::AlreadyExists);
        }
        comments.push(comment.clone());
        Ok(())
    }

    fn comments_of_offer(&self, offer_id: &Id) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| &c.offer_id == offer_id)
            .cloned()
            .collect())
    }

    fn count_comments_of_offer(&self, offer_id: &Id) -> RepoResult<usize> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| &c.offer_id == offer_id)
            .count())
    }

    fn delete_comments_of_offer(&self, offer_id: &Id) -> RepoResult<usize> {
        let mut comments = self.comments.borrow_mut();
        let before = comments.len();
        comments.retain(|c| &c.offer_id != offer_id);
        Ok(before - comments.len())
    }
}
