mod comment_stats;
mod create_comment;
mod error;
mod resolve_host;
mod store_new_offer;

#[cfg(test)]
pub mod tests;

pub use self::{
    comment_stats::*, create_comment::*, error::Error, resolve_host::*, store_new_offer::*,
};

pub type Result<T> = std::result::Result<T, Error>;

mod prelude {
    pub use super::{error::Error, Result};
    pub use crate::{entities::*, repositories::Error as RepoError, repositories::*};
}
