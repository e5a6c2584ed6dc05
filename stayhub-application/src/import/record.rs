use std::{fmt, str::FromStr};

use thiserror::Error;

use stayhub_core::{
    entities::*,
    usecases::{self, NewHost, NewOffer},
};

use super::token::{self, TokenMapping};

/// Exact field count of one import record.
pub const FIELD_COUNT: usize = 22;

/// Positional fields that carry typed values and can fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PublishDate,
    IsPremium,
    IsFavorite,
    Rating,
    Rooms,
    Guests,
    Price,
    CommentCount,
    Latitude,
    Longitude,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Self::PublishDate => "publish_date",
            Self::IsPremium => "is_premium",
            Self::IsFavorite => "is_favorite",
            Self::Rating => "rating",
            Self::Rooms => "rooms",
            Self::Guests => "guests",
            Self::Price => "price",
            Self::CommentCount => "comments_count",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Malformed record: expected {expected} fields, got {actual}")]
    Malformed { expected: usize, actual: usize },
    #[error("Field {field} does not decode: {raw:?}")]
    FieldDecode { field: Field, raw: String },
    #[error(transparent)]
    Invalid(#[from] usecases::Error),
}

/// The host columns of a record, before resolution to a user account.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostValue {
    pub name     : String,
    pub email    : String,
    pub avatar   : String,
    pub password : String,
    pub kind     : UserKind,
}

impl HostValue {
    /// Parses the email into the typed form the host resolver expects.
    pub fn into_new_host(self) -> Result<NewHost, usecases::Error> {
        let email = self.email.parse::<EmailAddress>()?;
        Ok(NewHost {
            name: self.name,
            email,
            password: self.password,
            kind: self.kind,
            avatar: Some(self.avatar),
        })
    }
}

/// One fully decoded import record.
///
/// Still carries the embedded [`HostValue`]; the offer fields convert
/// into a [`NewOffer`] for validation while the host is resolved to a
/// user id separately.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedOffer {
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
    pub host          : HostValue,
    pub comment_count : u32,
    pub position      : Position,
}

impl DecodedOffer {
    pub fn into_new_offer(self) -> NewOffer {
        NewOffer {
            title: self.title,
            description: self.description,
            published_at: Some(self.published_at),
            city: self.city,
            preview_image: self.preview_image,
            images: self.images,
            is_premium: self.is_premium,
            is_favorite: Some(self.is_favorite),
            rating: Some(self.rating),
            kind: self.kind,
            rooms: Some(self.rooms),
            guests: Some(self.guests),
            price: Some(self.price),
            conveniences: self.conveniences,
            comment_count: Some(self.comment_count),
            position: self.position,
        }
    }
}

/// Decodes one tab-separated line into a [`DecodedOffer`].
///
/// The raw fields are not trimmed except where the value semantically
/// requires it (names, emails, URIs), so that visually equal values
/// compare equal downstream. Numeric fields that do not parse fail the
/// whole record; silently coercing them to zero or NaN would corrupt
/// the aggregate computations invisibly.
pub fn decode_record(line: &str) -> Result<DecodedOffer, RecordError> {
    let fields: Vec<&str> = line.split('\t').collect();
    let [title, description, publish_date, city, preview_image, images, is_premium, is_favorite, rating, kind, rooms, guests, price, conveniences, host_name, host_email, host_avatar, host_password, host_kind, comments_count, latitude, longitude] =
        fields[..]
    else {
        return Err(RecordError::Malformed {
            expected: FIELD_COUNT,
            actual: fields.len(),
        });
    };

    let published_at =
        Timestamp::parse_rfc3339(publish_date).map_err(|_| RecordError::FieldDecode {
            field: Field::PublishDate,
            raw: publish_date.into(),
        })?;
    let (conveniences, dropped) = token::map_conveniences(conveniences);
    if !dropped.is_empty() {
        debug!("Dropping unknown convenience tokens: {dropped:?}");
    }

    let avatar = host_avatar.trim();
    let host = HostValue {
        name: host_name.trim().into(),
        email: host_email.trim().into(),
        avatar: if avatar.is_empty() {
            User::DEFAULT_AVATAR.into()
        } else {
            avatar.into()
        },
        password: host_password.trim().into(),
        kind: mapped("user kind", host_kind),
    };

    Ok(DecodedOffer {
        title: title.trim().into(),
        description: description.trim().into(),
        published_at,
        city: mapped("city", city),
        preview_image: preview_image.trim().into(),
        images: images.split(';').map(|img| img.trim().into()).collect(),
        is_premium: decode_flag(Field::IsPremium, is_premium)?,
        is_favorite: decode_flag(Field::IsFavorite, is_favorite)?,
        rating: AvgRating::from(decode_number::<f64>(Field::Rating, rating)?),
        kind: mapped("housing kind", kind),
        rooms: decode_number(Field::Rooms, rooms)?,
        guests: decode_number(Field::Guests, guests)?,
        price: decode_number(Field::Price, price)?,
        conveniences,
        host,
        comment_count: decode_number(Field::CommentCount, comments_count)?,
        position: Position::new(
            decode_number(Field::Latitude, latitude)?,
            decode_number(Field::Longitude, longitude)?,
        ),
    })
}

/// Encodes a decoded record back into its 22-field line form.
pub fn encode_record(offer: &DecodedOffer) -> String {
    let images = offer.images.join(";");
    let conveniences = offer
        .conveniences
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";");
    [
        offer.title.as_str(),
        offer.description.as_str(),
        &offer.published_at.to_string(),
        &offer.city.to_string(),
        offer.preview_image.as_str(),
        &images,
        &offer.is_premium.to_string(),
        &offer.is_favorite.to_string(),
        &f64::from(offer.rating).to_string(),
        &offer.kind.to_string(),
        &offer.rooms.to_string(),
        &offer.guests.to_string(),
        &offer.price.to_string(),
        &conveniences,
        offer.host.name.as_str(),
        offer.host.email.as_str(),
        offer.host.avatar.as_str(),
        offer.host.password.as_str(),
        &offer.host.kind.to_string(),
        &offer.comment_count.to_string(),
        &offer.position.lat.to_string(),
        &offer.position.lng.to_string(),
    ]
    .join("\t")
}

fn mapped<T>(domain: &str, token: &str) -> T
where
    T: Default + FromStr + fmt::Display,
{
    match token::map_token(token) {
        TokenMapping::Mapped(value) => value,
        TokenMapping::DefaultedFrom(token) => {
            let fallback = T::default();
            warn!("Unknown {domain} token {token:?}, falling back to {fallback}");
            fallback
        }
    }
}

fn decode_flag(field: Field, raw: &str) -> Result<bool, RecordError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(RecordError::FieldDecode {
            field,
            raw: raw.into(),
        }),
    }
}

fn decode_number<T: FromStr>(field: Field, raw: &str) -> Result<T, RecordError> {
    raw.parse().map_err(|_| RecordError::FieldDecode {
        field,
        raw: raw.into(),
    })
}
