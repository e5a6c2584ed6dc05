use super::prelude::*;
use crate::util::validate::Validate;

/// An offer decoded from a bulk source. Optional fields may still be
/// absent; the host is assigned at store time, after resolution.
#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewOffer {
    pub title         : String,
    pub description   : String,
    pub published_at  : Option<Timestamp>,
    pub city          : City,
    pub preview_image : String,
    pub images        : Vec<String>,
    pub is_premium    : bool,
    pub is_favorite   : Option<bool>,
    pub rating        : Option<AvgRating>,
    pub kind          : HousingKind,
    pub rooms         : Option<u8>,
    pub guests        : Option<u8>,
    pub price         : Option<u32>,
    pub conveniences  : Vec<Convenience>,
    pub comment_count : Option<u32>,
    pub position      : Position,
}

/// A validated offer that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct ValidatedOffer(Offer);

impl ValidatedOffer {
    pub fn offer_id(&self) -> &Id {
        &self.0.id
    }
}

/// Applies defaults and validates every field invariant.
///
/// Runs before the host is resolved so that a record failing validation
/// never triggers any write, not even a user insert.
pub fn prepare_new_offer(new: NewOffer) -> Result<ValidatedOffer> {
    let NewOffer {
        title,
        description,
        published_at,
        city,
        preview_image,
        images,
        is_premium,
        is_favorite,
        rating,
        kind,
        rooms,
        guests,
        price,
        conveniences,
        comment_count,
        position,
    } = new;
    let offer = Offer {
        id: Id::new(),
        title,
        description,
        published_at: published_at.unwrap_or_else(Timestamp::now),
        city,
        preview_image,
        images,
        is_premium,
        is_favorite: is_favorite.unwrap_or(false),
        rating: rating.unwrap_or_default(),
        kind,
        rooms: rooms.unwrap_or(Offer::MIN_ROOMS),
        guests: guests.unwrap_or(Offer::MIN_GUESTS),
        price: price.unwrap_or(Offer::MIN_PRICE),
        conveniences,
        host: Id::default(),
        comment_count: comment_count.unwrap_or(0),
        position,
    };
    offer.validate()?;
    Ok(ValidatedOffer(offer))
}

/// Assigns the resolved host and persists the prepared offer.
pub fn store_new_offer<R: OfferRepo>(repo: &R, s: ValidatedOffer, host: Id) -> Result<Id> {
    if !host.is_valid() {
        return Err(Error::Host);
    }
    let ValidatedOffer(mut offer) = s;
    offer.host = host;
    repo.create_offer(&offer)?;
    log::debug!("Stored new offer: id = {}, title = {}", offer.id, offer.title);
    Ok(offer.id)
}
