use crate::foundation::core::{DOOR_COUNT, DayNumber};

/// Particle effect layered over an opened door.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorEffect {
    #[default]
    None,
    Snow,
    Hearts,
    Sparkles,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DoorTheme {
    /// Accent colour as RGB.
    pub accent: [u8; 3],
    pub effect: DoorEffect,
}

/// What lies behind a door.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMedia {
    Video(String),
    Audio(String),
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DayContent {
    pub day: DayNumber,
    pub title: String,
    pub description: String,
    pub theme: DoorTheme,
    pub media: ContentMedia,
}

/// Day number to content. Pure data.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentRegistry {
    entries: Vec<DayContent>,
}

// (title, description, accent, effect, media kind)
const BUILTIN: [(&str, &str, [u8; 3], DoorEffect, MediaKind); DOOR_COUNT as usize] = [
    (
        "First Light",
        "The season starts with a song to warm up the evenings.",
        [196, 30, 58],
        DoorEffect::Snow,
        MediaKind::Audio,
    ),
    (
        "Paper Stars",
        "Fold your own window stars in five minutes.",
        [218, 165, 32],
        DoorEffect::Sparkles,
        MediaKind::Video,
    ),
    (
        "Cocoa Break",
        "Our favourite hot chocolate, step by step.",
        [120, 72, 40],
        DoorEffect::None,
        MediaKind::Text,
    ),
    (
        "Winter Walk",
        "A quiet walk through the frozen park.",
        [70, 130, 180],
        DoorEffect::Snow,
        MediaKind::Video,
    ),
    (
        "Letters Home",
        "Stories from people far away for the holidays.",
        [139, 0, 139],
        DoorEffect::Hearts,
        MediaKind::Audio,
    ),
    (
        "Gingerbread Lab",
        "Baking science for the whole family.",
        [160, 82, 45],
        DoorEffect::Sparkles,
        MediaKind::Video,
    ),
    (
        "Lantern Night",
        "Light up the street with homemade lanterns.",
        [255, 140, 0],
        DoorEffect::None,
        MediaKind::Text,
    ),
    (
        "Choir Practice",
        "Sing along with the neighbourhood choir.",
        [34, 139, 34],
        DoorEffect::Snow,
        MediaKind::Audio,
    ),
    (
        "Gift Wrapping",
        "Zero-waste wrapping ideas.",
        [205, 92, 92],
        DoorEffect::Hearts,
        MediaKind::Video,
    ),
    (
        "Story Hour",
        "A winter tale read by the fireplace.",
        [72, 61, 139],
        DoorEffect::None,
        MediaKind::Audio,
    ),
    (
        "Snow Globe",
        "Build a snow globe from a jam jar.",
        [176, 224, 230],
        DoorEffect::Snow,
        MediaKind::Video,
    ),
    (
        "Together",
        "Thank you for counting down with us.",
        [220, 20, 60],
        DoorEffect::Hearts,
        MediaKind::Video,
    ),
];

#[derive(Clone, Copy)]
enum MediaKind {
    Video,
    Audio,
    Text,
}

impl ContentRegistry {
    /// The shipped twelve days.
    pub fn builtin() -> Self {
        let entries = DayNumber::all()
            .zip(BUILTIN)
            .map(|(day, (title, description, accent, effect, kind))| DayContent {
                day,
                title: title.to_string(),
                description: description.to_string(),
                theme: DoorTheme { accent, effect },
                media: match kind {
                    MediaKind::Video => ContentMedia::Video(format!("content/day{day}/video.mp4")),
                    MediaKind::Audio => ContentMedia::Audio(format!("content/day{day}/audio.mp3")),
                    MediaKind::Text => ContentMedia::Text,
                },
            })
            .collect();
        Self { entries }
    }

    /// Registry from arbitrary entries; later duplicates of a day are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = DayContent>) -> Self {
        let mut out: Vec<DayContent> = Vec::new();
        for entry in entries {
            if out.iter().all(|e| e.day != entry.day) {
                out.push(entry);
            }
        }
        out.sort_by_key(|e| e.day);
        Self { entries: out }
    }

    pub fn get(&self, day: DayNumber) -> Option<&DayContent> {
        self.entries.iter().find(|e| e.day == day)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayContent> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/registry.rs"]
mod tests;
