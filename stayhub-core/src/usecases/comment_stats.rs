use super::prelude::*;
use crate::rating::Rated;

/// Recomputes an offer's comment count and mean rating from the full
/// comment set and writes both back.
///
/// The mean is never updated incrementally; recomputing from scratch
/// keeps the cached value free of accumulated floating-point drift.
pub fn refresh_comment_stats<R>(repo: &R, offer_id: &Id) -> Result<CommentStats>
where
    R: OfferRepo + CommentRepo,
{
    let offer = repo.get_offer(offer_id)?;
    let comments = repo.comments_of_offer(offer_id)?;
    let stats = CommentStats {
        count: comments.len() as u32,
        rating: offer.avg_rating(&comments),
    };
    repo.update_comment_stats(offer_id, &stats)?;
    Ok(stats)
}

/// Resets an offer's comment statistics after all of its comments have
/// been deleted.
pub fn reset_comment_stats<R: OfferRepo>(repo: &R, offer_id: &Id) -> Result<()> {
    repo.update_comment_stats(offer_id, &CommentStats::default())?;
    Ok(())
}
