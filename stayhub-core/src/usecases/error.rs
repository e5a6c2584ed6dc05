use thiserror::Error;

use crate::{repositories, util::validate::OfferInvalidation};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The description is invalid")]
    Description,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("The user name is invalid")]
    UserName,
    #[error("Invalid password")]
    Password,
    #[error("Invalid image count")]
    ImageCount,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("The comment text is invalid")]
    CommentText,
    #[error("Invalid room count")]
    Rooms,
    #[error("Invalid guest count")]
    Guests,
    #[error("Invalid price")]
    Price,
    #[error("Invalid position")]
    Position,
    #[error("Invalid host reference")]
    Host,
    #[error("The offer does not exist")]
    OfferDoesNotExist,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<stayhub_entities::email::EmailAddressParseError> for Error {
    fn from(_: stayhub_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<stayhub_entities::password::PasswordHashError> for Error {
    fn from(_: stayhub_entities::password::PasswordHashError) -> Self {
        Self::Password
    }
}

impl From<OfferInvalidation> for Error {
    fn from(err: OfferInvalidation) -> Self {
        match err {
            OfferInvalidation::Title => Self::Title,
            OfferInvalidation::Description => Self::Description,
            OfferInvalidation::ImageCount => Self::ImageCount,
            OfferInvalidation::Rating => Self::RatingValue,
            OfferInvalidation::Rooms => Self::Rooms,
            OfferInvalidation::Guests => Self::Guests,
            OfferInvalidation::Price => Self::Price,
            OfferInvalidation::Position => Self::Position,
        }
    }
}
