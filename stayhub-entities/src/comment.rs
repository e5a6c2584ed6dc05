use crate::{id::Id, rating::RatingValue, time::Timestamp};

/// A rating plus text attached to one offer by one user.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub offer_id   : Id,
    pub user_id    : Id,
    pub text       : String,
    pub rating     : RatingValue,
    pub created_at : Timestamp,
}

impl Comment {
    pub const MIN_TEXT_LEN: usize = 5;
    pub const MAX_TEXT_LEN: usize = 1024;
}
