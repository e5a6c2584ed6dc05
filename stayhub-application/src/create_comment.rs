use stayhub_core::{
    entities::{CommentStats, Id},
    repositories::{CommentRepo, OfferRepo},
};

use crate::{usecases, Result};

/// Whether the offer's cached statistics reflect the new comment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsUpdate {
    Updated(CommentStats),
    /// The comment is durable but the stats write failed; the cache
    /// lags until the next successful refresh.
    Stale,
}

/// Persists a new comment, then brings the offer's derived comment
/// count and mean rating up to date.
///
/// The comment is always made durable before the offer's cached fields
/// change, so a reader observing the updated offer can find a matching
/// comment set. The reverse order never happens. If the stats refresh
/// fails after the comment was stored, the comment stays, the caller
/// gets [`StatsUpdate::Stale`] rather than a fake success.
pub fn create_comment<R>(repo: &R, new_comment: usecases::NewComment) -> Result<(Id, StatsUpdate)>
where
    R: OfferRepo + CommentRepo,
{
    let storable = usecases::prepare_new_comment(repo, new_comment)?;
    let offer_id = storable.offer_id().clone();
    let comment_id = usecases::store_new_comment(repo, storable)?;
    match usecases::refresh_comment_stats(repo, &offer_id) {
        Ok(stats) => Ok((comment_id, StatsUpdate::Updated(stats))),
        Err(err) => {
            warn!(
                "Comment {comment_id} stored, but the cached stats of offer {offer_id} \
                 are now stale: {err}"
            );
            Ok((comment_id, StatsUpdate::Stale))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use stayhub_core::{entities::*, repositories::Error as RepoError, usecases::NewComment};
    use stayhub_db_mem::MemStore;
    use stayhub_entities::builders::*;

    type RepoResult<T> = std::result::Result<T, RepoError>;

    /// Delegates to [`MemStore`] but fails every stats write.
    struct BrokenStatsStore(MemStore);

    impl OfferRepo for BrokenStatsStore {
        fn create_offer(&self, offer: &Offer) -> RepoResult<()> {
            self.0.create_offer(offer)
        }
        fn get_offer(&self, id: &Id) -> RepoResult<Offer> {
            self.0.get_offer(id)
        }
        fn exists_offer(&self, id: &Id) -> RepoResult<bool> {
            self.0.exists_offer(id)
        }
        fn all_offers(&self) -> RepoResult<Vec<Offer>> {
            self.0.all_offers()
        }
        fn count_offers(&self) -> RepoResult<usize> {
            self.0.count_offers()
        }
        fn update_comment_stats(&self, _: &Id, _: &CommentStats) -> RepoResult<()> {
            Err(RepoError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "stats write failed",
            )))
        }
    }

    impl CommentRepo for BrokenStatsStore {
        fn create_comment(&self, comment: &Comment) -> RepoResult<()> {
            self.0.create_comment(comment)
        }
        fn comments_of_offer(&self, offer_id: &Id) -> RepoResult<Vec<Comment>> {
            self.0.comments_of_offer(offer_id)
        }
        fn count_comments_of_offer(&self, offer_id: &Id) -> RepoResult<usize> {
            self.0.count_comments_of_offer(offer_id)
        }
        fn delete_comments_of_offer(&self, offer_id: &Id) -> RepoResult<usize> {
            self.0.delete_comments_of_offer(offer_id)
        }
    }

    fn store_with_offer(id: &str) -> MemStore {
        let store = MemStore::new();
        store
            .create_offer(&Offer::build().id(id).finish())
            .unwrap();
        store
    }

    fn new_comment(offer_id: &str, rating: i8) -> NewComment {
        NewComment {
            offer_id: offer_id.into(),
            user_id: "user-1".into(),
            text: "Lovely place, would stay again.".into(),
            rating: rating.into(),
        }
    }

    #[test]
    fn stats_follow_each_created_comment() {
        let store = store_with_offer("o");
        for (rating, expected_count, expected_avg) in [(5, 1, 5.0), (3, 2, 4.0), (4, 3, 4.0)] {
            let (_, update) = create_comment(&store, new_comment("o", rating)).unwrap();
            let expected = CommentStats {
                count: expected_count,
                rating: AvgRating::from(expected_avg),
            };
            assert_eq!(StatsUpdate::Updated(expected), update);
        }
        let offer = store.get_offer(&"o".into()).unwrap();
        assert_eq!(3, offer.comment_count);
        assert_eq!(AvgRating::from(4.0), offer.rating);
    }

    #[test]
    fn failed_stats_refresh_is_stale_not_an_error() {
        let store = BrokenStatsStore(store_with_offer("o"));
        let (id, update) = create_comment(&store, new_comment("o", 4)).unwrap();
        assert_eq!(StatsUpdate::Stale, update);
        // the comment is durable even though the cached stats lag
        let comments = store.0.comments_of_offer(&"o".into()).unwrap();
        assert_eq!(1, comments.len());
        assert_eq!(id, comments[0].id);
        let offer = store.0.get_offer(&"o".into()).unwrap();
        assert_eq!(0, offer.comment_count);
        assert_eq!(AvgRating::from(0.0), offer.rating);
    }

    #[test]
    fn comment_for_missing_offer_is_rejected() {
        let store = MemStore::new();
        assert!(create_comment(&store, new_comment("nope", 4)).is_err());
        assert_eq!(0, store.comments_of_offer(&"nope".into()).unwrap().len());
    }
}
