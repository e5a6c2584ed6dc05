//! # stayhub-core
//!
//! Storage-agnostic business logic: repository traits, use cases and
//! validation rules. Concrete stores implement the traits in
//! [`repositories`]; callers compose the functions in [`usecases`].

pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use stayhub_entities::{
        comment::*, email::*, id::*, offer::*, password::*, position::*, rating::*, time::*,
        user::*,
    };
}
