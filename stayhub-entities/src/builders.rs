pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, offer_builder::*, user_builder::*};

pub mod offer_builder {

    use super::*;
    use crate::{id::*, offer::*, position::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct OfferBuild {
        offer: Offer,
    }

    impl OfferBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.offer.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.offer.title = title.into();
            self
        }
        pub fn description(mut self, description: &str) -> Self {
            self.offer.description = description.into();
            self
        }
        pub fn city(mut self, city: City) -> Self {
            self.offer.city = city;
            self
        }
        pub fn images(mut self, images: Vec<impl Into<String>>) -> Self {
            self.offer.images = images.into_iter().map(Into::into).collect();
            self
        }
        pub fn rating(mut self, rating: f64) -> Self {
            self.offer.rating = AvgRating::from(rating);
            self
        }
        pub fn rooms(mut self, rooms: u8) -> Self {
            self.offer.rooms = rooms;
            self
        }
        pub fn guests(mut self, guests: u8) -> Self {
            self.offer.guests = guests;
            self
        }
        pub fn price(mut self, price: u32) -> Self {
            self.offer.price = price;
            self
        }
        pub fn host(mut self, host: &str) -> Self {
            self.offer.host = host.into();
            self
        }
        pub fn comment_count(mut self, count: u32) -> Self {
            self.offer.comment_count = count;
            self
        }
        pub fn position(mut self, lat: f64, lng: f64) -> Self {
            self.offer.position = Position::new(lat, lng);
            self
        }
        pub fn finish(self) -> Offer {
            self.offer
        }
    }

    impl Builder for Offer {
        type Build = OfferBuild;
        fn build() -> Self::Build {
            OfferBuild {
                offer: Offer {
                    id: Id::new(),
                    title: "A quiet place in town".into(),
                    description: "Bright rooms and a view over the canal.".into(),
                    published_at: Timestamp::from_seconds(1_700_000_000),
                    city: City::Paris,
                    preview_image: "preview.jpg".into(),
                    images: (1..=Offer::IMAGE_COUNT)
                        .map(|n| format!("image-{n}.jpg"))
                        .collect(),
                    is_premium: false,
                    is_favorite: false,
                    rating: Default::default(),
                    kind: HousingKind::Apartment,
                    rooms: Offer::MIN_ROOMS,
                    guests: Offer::MIN_GUESTS,
                    price: Offer::MIN_PRICE,
                    conveniences: vec![],
                    host: "host".into(),
                    comment_count: 0,
                    position: Position::new(48.85661, 2.351499),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn kind(mut self, kind: UserKind) -> Self {
            self.user.kind = kind;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    id: Id::new(),
                    name: "host".into(),
                    email: EmailAddress::new_unchecked("host@example.com".into()),
                    avatar: User::DEFAULT_AVATAR.into(),
                    password: Password::from("$6$salt$hash".to_string()),
                    kind: UserKind::Regular,
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn offer(mut self, offer_id: &str) -> Self {
            self.comment.offer_id = offer_id.into();
            self
        }
        pub fn user(mut self, user_id: &str) -> Self {
            self.comment.user_id = user_id.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn rating(mut self, rating: i8) -> Self {
            self.comment.rating = rating.into();
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> Self::Build {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    offer_id: "offer".into(),
                    user_id: "user".into(),
                    text: "Would stay again.".into(),
                    rating: 5.into(),
                    created_at: Timestamp::from_seconds(1_700_000_000),
                },
            }
        }
    }
}
