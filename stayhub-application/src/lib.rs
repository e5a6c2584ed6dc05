//! # stayhub-application
//!
//! Flows that compose the core use cases: the offline TSV import
//! pipeline and the comment flows that keep the cached offer
//! statistics in sync.

#[macro_use]
extern crate log;

mod create_comment;
mod delete_comments;

pub mod error;
pub mod import;

pub mod prelude {
    pub use super::{create_comment::*, delete_comments::*, import::*};
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use stayhub_core::usecases;
