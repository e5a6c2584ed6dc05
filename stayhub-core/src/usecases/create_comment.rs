use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub offer_id: Id,
    pub user_id: Id,
    pub text: String,
    pub rating: RatingValue,
}

/// A validated comment that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct Storable(Comment);

impl Storable {
    pub fn comment_id(&self) -> &Id {
        &self.0.id
    }
    pub fn offer_id(&self) -> &Id {
        &self.0.offer_id
    }
}

pub fn prepare_new_comment<R: OfferRepo>(repo: &R, c: NewComment) -> Result<Storable> {
    let text = c.text.trim().to_owned();
    let text_len = text.chars().count();
    if !(Comment::MIN_TEXT_LEN..=Comment::MAX_TEXT_LEN).contains(&text_len) {
        return Err(Error::CommentText);
    }
    if !c.rating.is_valid() {
        return Err(Error::RatingValue);
    }
    if !repo.exists_offer(&c.offer_id)? {
        return Err(Error::OfferDoesNotExist);
    }
    Ok(Storable(Comment {
        id: Id::new(),
        offer_id: c.offer_id,
        user_id: c.user_id,
        text,
        rating: c.rating,
        created_at: Timestamp::now(),
    }))
}

pub fn store_new_comment<R: CommentRepo>(repo: &R, s: Storable) -> Result<Id> {
    let Storable(comment) = s;
    repo.create_comment(&comment)?;
    log::debug!(
        "Stored new comment for offer {} by user {}",
        comment.offer_id,
        comment.user_id
    );
    Ok(comment.id)
}
