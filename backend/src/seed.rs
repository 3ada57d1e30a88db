//! Reviews and brews shown before any visitor has written anything.

use chrono::{DateTime, TimeZone, Utc};
use common::model::brew::Brew;
use common::model::review::{Review, TargetType};

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn list(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

pub(crate) fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: "seed-review-1".into(),
            user_id: "maria-barista".into(),
            user_name: "María".into(),
            target_type: TargetType::Recipe,
            target_id: "v60-pour-over".into(),
            rating: 5,
            title: "Finally a V60 guide that works".into(),
            content: "The bloom timing made all the difference. Sweet and clean.".into(),
            pros: list(&["Clear steps", "Great tips"]),
            cons: None,
            created_at: at(2024, 11, 2, 9),
            helpful: 12,
        },
        Review {
            id: "seed-review-2".into(),
            user_id: "tom-k".into(),
            user_name: "Tom".into(),
            target_type: TargetType::Recipe,
            target_id: "v60-pour-over".into(),
            rating: 4,
            title: "Good, needs practice".into(),
            content: "My first cups drained too slowly until I went coarser.".into(),
            pros: None,
            cons: list(&["Takes a few tries"]),
            created_at: at(2024, 10, 18, 7),
            helpful: 4,
        },
        Review {
            id: "seed-review-3".into(),
            user_id: "maria-barista".into(),
            user_name: "María".into(),
            target_type: TargetType::Coffee,
            target_id: "brazil-santos".into(),
            rating: 4,
            title: "Perfect for cold brew".into(),
            content: "Chocolatey and smooth, no sourness at all.".into(),
            pros: list(&["Low acidity"]),
            cons: list(&["A bit one-dimensional hot"]),
            created_at: at(2024, 9, 30, 15),
            helpful: 7,
        },
        Review {
            id: "seed-review-4".into(),
            user_id: "lee-brews".into(),
            user_name: "Lee".into(),
            target_type: TargetType::Equipment,
            target_id: "baratza-encore".into(),
            rating: 5,
            title: "Best upgrade I made".into(),
            content: "Going from a blade grinder to this changed every brew.".into(),
            pros: list(&["Consistent", "Quiet enough"]),
            cons: list(&["Can't do espresso"]),
            created_at: at(2024, 8, 21, 11),
            helpful: 9,
        },
    ]
}

pub(crate) fn brews() -> Vec<Brew> {
    vec![
        Brew {
            id: "seed-brew-1".into(),
            user_id: "lee-brews".into(),
            user_name: "Lee".into(),
            title: "Sunday Chemex".into(),
            description: "Kenya AA, 32 g to 500 g. Blackcurrant everywhere.".into(),
            method: "Chemex".into(),
            recipe_id: Some("chemex".into()),
            image_url: None,
            created_at: at(2024, 11, 10, 10),
            likes: 15,
        },
        Brew {
            id: "seed-brew-2".into(),
            user_id: "tom-k".into(),
            user_name: "Tom".into(),
            title: "First cold brew batch".into(),
            description: "Brazil Santos, 16 hours in the fridge.".into(),
            method: "Cold brew".into(),
            recipe_id: Some("cold-brew".into()),
            image_url: None,
            created_at: at(2024, 10, 5, 18),
            likes: 8,
        },
        Brew {
            id: "seed-brew-3".into(),
            user_id: "maria-barista".into(),
            user_name: "María".into(),
            title: "Inverted AeroPress experiment".into(),
            description: "Tried 80°C water with a dark roast. Surprisingly sweet.".into(),
            method: "AeroPress".into(),
            recipe_id: None,
            image_url: None,
            created_at: at(2024, 9, 12, 8),
            likes: 5,
        },
    ]
}
