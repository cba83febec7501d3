use crate::{
    content::registry::ContentRegistry, controller::route::Route, foundation::core::DayNumber,
};

pub const SITE_TITLE: &str = "Advent Calendar";
pub const SITE_DESCRIPTION: &str = "Twelve doors, one a day. Open today's surprise.";

/// Title, description and URLs injected into the served page for one route.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub image_url: String,
}

impl PageMeta {
    pub fn home(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            title: SITE_TITLE.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            canonical_url: format!("{base}/"),
            image_url: format!("{base}/previews/home.jpg"),
        }
    }

    /// Meta for a door's deep link, or `None` when the registry has no entry for it.
    pub fn for_day(day: DayNumber, registry: &ContentRegistry, base_url: &str) -> Option<Self> {
        let content = registry.get(day)?;
        let base = base_url.trim_end_matches('/');
        Some(Self {
            title: format!("Day {day}: {} | {SITE_TITLE}", content.title),
            description: content.description.clone(),
            canonical_url: format!("{base}/day/{day}"),
            image_url: format!("{base}/previews/day{day}.jpg"),
        })
    }

    /// Unknown routes and missing days fall back to the home page meta.
    pub fn for_route(route: &Route, registry: &ContentRegistry, base_url: &str) -> Self {
        match route {
            Route::Day(day) => {
                Self::for_day(*day, registry, base_url).unwrap_or_else(|| Self::home(base_url))
            }
            Route::Home | Route::Welcome | Route::NotFound(_) => Self::home(base_url),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/meta.rs"]
mod tests;
