use thiserror::Error;

use stayhub_entities::offer::Offer;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum OfferInvalidation {
    #[error("Invalid title")]
    Title,
    #[error("Invalid description")]
    Description,
    #[error("Invalid image count")]
    ImageCount,
    #[error("Invalid rating")]
    Rating,
    #[error("Invalid room count")]
    Rooms,
    #[error("Invalid guest count")]
    Guests,
    #[error("Invalid price")]
    Price,
    #[error("Invalid position")]
    Position,
}

impl Validate for Offer {
    type Error = OfferInvalidation;

    // Every invariant is checked before anything is persisted,
    // so an invalid offer is never partially written.
    fn validate(&self) -> Result<(), Self::Error> {
        let title_len = self.title.chars().count();
        if !(Self::MIN_TITLE_LEN..=Self::MAX_TITLE_LEN).contains(&title_len) {
            return Err(Self::Error::Title);
        }
        let description_len = self.description.chars().count();
        if !(Self::MIN_DESCRIPTION_LEN..=Self::MAX_DESCRIPTION_LEN).contains(&description_len) {
            return Err(Self::Error::Description);
        }
        if self.images.len() != Self::IMAGE_COUNT {
            return Err(Self::Error::ImageCount);
        }
        if !self.rating.is_valid() {
            return Err(Self::Error::Rating);
        }
        if !(Self::MIN_ROOMS..=Self::MAX_ROOMS).contains(&self.rooms) {
            return Err(Self::Error::Rooms);
        }
        if !(Self::MIN_GUESTS..=Self::MAX_GUESTS).contains(&self.guests) {
            return Err(Self::Error::Guests);
        }
        if !(Self::MIN_PRICE..=Self::MAX_PRICE).contains(&self.price) {
            return Err(Self::Error::Price);
        }
        if !self.position.is_valid() {
            return Err(Self::Error::Position);
        }
        Ok(())
    }
}
