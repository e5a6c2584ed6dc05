use strum::{Display, EnumString};

use crate::{email::EmailAddress, id::Id, password::Password};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id       : Id,
    pub name     : String,
    pub email    : EmailAddress,
    pub avatar   : String,
    pub password : Password,
    pub kind     : UserKind,
}

impl User {
    pub const MIN_NAME_LEN: usize = 1;
    pub const MAX_NAME_LEN: usize = 15;

    pub const DEFAULT_AVATAR: &'static str = "default-avatar.jpg";
}

/// The account tier of a host.
///
/// The string representations are the canonical tokens of the bulk
/// import format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum UserKind {
    #[default]
    #[strum(serialize = "Regular")]
    Regular,
    #[strum(serialize = "pro")]
    Pro,
}
