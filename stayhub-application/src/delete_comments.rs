use stayhub_core::{
    entities::Id,
    repositories::{CommentRepo, OfferRepo},
};

use crate::{usecases, Result};

/// Deletes every comment of an offer and resets its cached statistics
/// to "no ratings yet".
///
/// Called by the offer-deletion cascade among others; no partial
/// recompute is attempted because no comments remain afterwards.
pub fn delete_comments_of_offer<R>(repo: &R, offer_id: &Id) -> Result<usize>
where
    R: OfferRepo + CommentRepo,
{
    let deleted = repo.delete_comments_of_offer(offer_id)?;
    if deleted > 0 {
        usecases::reset_comment_stats(repo, offer_id)?;
    }
    info!("Deleted {deleted} comments for offer {offer_id}");
    Ok(deleted)
}
