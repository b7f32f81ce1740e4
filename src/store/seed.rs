//! Demo posts shown before any user interaction.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Comment, Post, PostId};

fn millis(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).single().unwrap_or_default()
}

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

/// The two posts every fresh feed starts with, oldest first.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId(1_678_886_400_000),
            author: "Demo User".to_string(),
            text: "Welcome to the Mini Social App! This is my first post.".to_string(),
            image_url: None,
            timestamp: utc(2023, 1, 1, 10, 0),
            likes: 2,
            is_liked: false,
            comments: vec![Comment {
                author: "Ali".to_string(),
                text: "Nice work on the app!".to_string(),
                timestamp: millis(1_678_886_400_001),
            }],
        },
        Post {
            id: PostId(1_678_972_800_000),
            author: "Ali".to_string(),
            text: "Having fun with the Coding Night Challenge! HTML, CSS, and JS only!"
                .to_string(),
            image_url: Some("https://picsum.photos/400/200".to_string()),
            timestamp: utc(2023, 1, 2, 12, 30),
            likes: 5,
            is_liked: true,
            comments: Vec::new(),
        },
    ]
}
