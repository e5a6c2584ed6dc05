//! Sample-data generator for exercising the import pipeline.

use rand::Rng;
use strum::IntoEnumIterator;

use stayhub_core::entities::*;

use super::record::{encode_record, DecodedOffer, HostValue};

const TITLES: &[&str] = &[
    "Quiet loft by the canal",
    "Sunny studio near the park",
    "Rooftop flat with a terrace",
    "Townhouse on a cobbled lane",
    "Riverside room with breakfast",
];

const DESCRIPTIONS: &[&str] = &[
    "Bright rooms and a view over the canal basin.",
    "Freshly renovated, five minutes from the station.",
    "Top floor, morning sun, coffee machine included.",
    "A calm hideout in the middle of the old town.",
];

const HOSTS: &[(&str, &str)] = &[
    ("Ann", "ann@example.com"),
    ("Ben", "ben@example.com"),
    ("Cyd", "cyd@example.com"),
    ("Finn", "finn@example.com"),
];

/// Builds one plausible, fully valid record.
pub fn sample_offer<R: Rng>(rng: &mut R) -> DecodedOffer {
    let cities: Vec<City> = City::iter().collect();
    let kinds: Vec<HousingKind> = HousingKind::iter().collect();
    let conveniences: Vec<Convenience> = Convenience::iter().collect();
    let (host_name, host_email) = HOSTS[rng.gen_range(0..HOSTS.len())];
    let picked = rng.gen_range(0..=conveniences.len());
    DecodedOffer {
        title: TITLES[rng.gen_range(0..TITLES.len())].into(),
        description: DESCRIPTIONS[rng.gen_range(0..DESCRIPTIONS.len())].into(),
        published_at: Timestamp::from_seconds(rng.gen_range(1_600_000_000..1_700_000_000)),
        city: cities[rng.gen_range(0..cities.len())],
        preview_image: format!("preview-{}.jpg", rng.gen_range(1..=20)),
        images: (1..=Offer::IMAGE_COUNT)
            .map(|n| format!("image-{n}.jpg"))
            .collect(),
        is_premium: rng.gen_bool(0.3),
        is_favorite: false,
        rating: AvgRating::default(),
        kind: kinds[rng.gen_range(0..kinds.len())],
        rooms: rng.gen_range(Offer::MIN_ROOMS..=Offer::MAX_ROOMS),
        guests: rng.gen_range(Offer::MIN_GUESTS..=Offer::MAX_GUESTS),
        price: rng.gen_range(Offer::MIN_PRICE..=Offer::MAX_PRICE),
        conveniences: conveniences.into_iter().take(picked).collect(),
        host: HostValue {
            name: host_name.into(),
            email: host_email.into(),
            avatar: User::DEFAULT_AVATAR.into(),
            password: "changeme".into(),
            kind: if rng.gen_bool(0.5) {
                UserKind::Pro
            } else {
                UserKind::Regular
            },
        },
        comment_count: 0,
        position: Position::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0)),
    }
}

/// Produces `count` records in the import wire format, one per line.
pub fn generate_tsv<R: Rng>(rng: &mut R, count: usize) -> String {
    let mut out = String::new();
    for _ in 0..count {
        out.push_str(&encode_record(&sample_offer(rng)));
        out.push('\n');
    }
    out
}
