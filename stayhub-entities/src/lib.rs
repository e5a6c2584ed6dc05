#![deny(missing_debug_implementations)]

//! # stayhub-entities
//!
//! Reusable, agnostic domain entities for Stayhub.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod comment;
pub mod email;
pub mod id;
pub mod offer;
pub mod password;
pub mod position;
pub mod rating;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
