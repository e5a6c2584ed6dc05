use strum::{Display, EnumIter, EnumString};

use crate::{id::Id, position::Position, rating::AvgRating, time::Timestamp};

/// A rental offering.
///
/// `comment_count` and `rating` are caches over the comment collection
/// and must only be written through the stats-refresh use cases.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id            : Id,
    pub title         : String,
    pub description   : String,
    pub published_at  : Timestamp,
    pub city          : City,
    pub preview_image : String,
    pub images        : Vec<String>,
    pub is_premium    : bool,
    pub is_favorite   : bool,
    pub rating        : AvgRating,
    pub kind          : HousingKind,
    pub rooms         : u8,
    pub guests        : u8,
    pub price         : u32,
    pub conveniences  : Vec<Convenience>,
    pub host          : Id,
    pub comment_count : u32,
    pub position      : Position,
}

impl Offer {
    pub const MIN_TITLE_LEN: usize = 10;
    pub const MAX_TITLE_LEN: usize = 100;

    pub const MIN_DESCRIPTION_LEN: usize = 20;
    pub const MAX_DESCRIPTION_LEN: usize = 1024;

    pub const IMAGE_COUNT: usize = 6;

    pub const MIN_ROOMS: u8 = 1;
    pub const MAX_ROOMS: u8 = 8;

    pub const MIN_GUESTS: u8 = 1;
    pub const MAX_GUESTS: u8 = 10;

    pub const MIN_PRICE: u32 = 100;
    pub const MAX_PRICE: u32 = 100_000;
}

/// The derived comment statistics cached on an offer.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CommentStats {
    pub count: u32,
    pub rating: AvgRating,
}

/// The closed set of cities an offer can be located in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum City {
    #[default]
    Paris,
    Cologne,
    Brussels,
    Amsterdam,
    Hamburg,
    Dusseldorf,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum HousingKind {
    #[default]
    Apartment,
    House,
    Room,
    Hotel,
}

/// The fixed catalog of conveniences.
///
/// The string representations match the tokens of the bulk import format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Convenience {
    #[strum(serialize = "Breakfast")]
    Breakfast,
    #[strum(serialize = "Air conditioning")]
    AirConditioning,
    #[strum(serialize = "Laptop friendly workspace")]
    LaptopFriendlyWorkspace,
    #[strum(serialize = "Baby seat")]
    BabySeat,
    #[strum(serialize = "Washer")]
    Washer,
    #[strum(serialize = "Towels")]
    Towels,
    #[strum(serialize = "Fridge")]
    Fridge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_tokens() {
        assert_eq!(Ok(City::Amsterdam), "Amsterdam".parse());
        assert!("Berlin".parse::<City>().is_err());
        assert_eq!("Dusseldorf", City::Dusseldorf.to_string());
    }

    #[test]
    fn housing_kind_tokens() {
        assert_eq!(Ok(HousingKind::Apartment), "apartment".parse());
        assert_eq!(Ok(HousingKind::Hotel), "hotel".parse());
        assert!("Apartment".parse::<HousingKind>().is_err());
    }

    #[test]
    fn convenience_tokens() {
        assert_eq!(
            Ok(Convenience::AirConditioning),
            "Air conditioning".parse()
        );
        assert_eq!(
            "Laptop friendly workspace",
            Convenience::LaptopFriendlyWorkspace.to_string()
        );
        assert!("Sauna".parse::<Convenience>().is_err());
    }
}
