//! Fixed sample data seeded into the store at startup.
//!
//! The store has no durability; every process start repopulates the same
//! five Zelenogorsk points of interest so the mini-app always has markers to
//! render.

use tracing::info;

use crate::domain::ports::{LocationRepository, LocationStoreError};
use crate::domain::{LocationStatus, NewLocation};

fn sample(
    title: &str,
    address: &str,
    kind: &str,
    description: &str,
    lat: f64,
    lng: f64,
) -> NewLocation {
    NewLocation {
        title: title.to_owned(),
        address: address.to_owned(),
        kind: kind.to_owned(),
        status: LocationStatus::Active,
        description: Some(description.to_owned()),
        lat,
        lng,
    }
}

/// The five fixed sample locations, all inside the city bounding box.
#[must_use]
pub fn sample_locations() -> Vec<NewLocation> {
    vec![
        sample(
            "ТЦ Зеленый",
            "ул. Ленина, 15",
            "Торговый центр",
            "Крупный торговый центр в центре города с широким ассортиментом магазинов и услуг.",
            56.115,
            94.545,
        ),
        sample(
            "Городской парк",
            "ул. Парковая, 1",
            "Парк",
            "Центральный городской парк с зонами отдыха и детскими площадками.",
            56.125,
            94.555,
        ),
        sample(
            "Спортивный комплекс",
            "ул. Спортивная, 8",
            "Спорт",
            "Современный спортивный комплекс с бассейном и тренажерными залами.",
            56.118,
            94.570,
        ),
        sample(
            "Библиотека",
            "ул. Культуры, 3",
            "Культура",
            "Центральная городская библиотека с читальными залами и компьютерным центром.",
            56.108,
            94.535,
        ),
        sample(
            "Медицинский центр",
            "ул. Здоровья, 12",
            "Медицина",
            "Многопрофильный медицинский центр с современным оборудованием.",
            56.130,
            94.575,
        ),
    ]
}

/// Seed the sample locations into `repo`, returning how many were stored.
pub async fn seed_sample_locations(
    repo: &dyn LocationRepository,
) -> Result<usize, LocationStoreError> {
    let samples = sample_locations();
    let count = samples.len();
    for fields in samples {
        repo.create(fields).await?;
    }
    info!(count, "seeded sample locations");
    Ok(count)
}
