use stayhub_entities::{comment::*, offer::*, rating::*};

pub trait Rated {
    fn avg_rating(&self, _: &[Comment]) -> AvgRating;
}

impl Rated for Offer {
    fn avg_rating(&self, comments: &[Comment]) -> AvgRating {
        debug_assert_eq!(
            comments.len(),
            comments.iter().filter(|c| c.offer_id == self.id).count()
        );
        comments
            .iter()
            .fold(AvgRatingBuilder::default(), |mut acc, c| {
                acc.add(c.rating);
                acc
            })
            .build()
    }
}
