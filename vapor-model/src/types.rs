//! Data model types for the storefront.
//!
//! These types represent the catalog schema: games, developers, tags,
//! users, reviews, and the draft payloads that create them. Cross-entity
//! relationships are id references resolved through the storefront, never
//! direct aliases.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Art & Money ─────────────────────────────────────────────────────────────

/// A hosted image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A retail price in integer minor units of its currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub currency: String,
    pub cents: u32,
}

impl Price {
    pub fn usd(cents: u32) -> Self {
        Self {
            currency: "USD".to_string(),
            cents,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{:02}",
            self.currency,
            self.cents / 100,
            self.cents % 100
        )
    }
}

// ── System Requirements ─────────────────────────────────────────────────────

/// Minimum hardware advertised on a store page. Every field is optional in
/// catalog data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemRequirements {
    #[serde(default)]
    pub os: Vec<String>,
    #[serde(default)]
    pub processor: Vec<String>,
    #[serde(default)]
    pub memory_gb: u32,
    #[serde(default)]
    pub graphics: Vec<String>,
    #[serde(default)]
    pub directx: String,
    #[serde(default)]
    pub storage_gb: u32,
}

// ── Content Rating ──────────────────────────────────────────────────────────

/// Age-suitability rating shown on a store page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentRating {
    Everyone,
    Everyone10Plus,
    Teen,
    Mature17Plus,
    AdultsOnly,
    RatingPending,
}

impl Default for ContentRating {
    fn default() -> Self {
        Self::RatingPending
    }
}

impl ContentRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Everyone => "Everyone",
            Self::Everyone10Plus => "Everyone 10+",
            Self::Teen => "Teen",
            Self::Mature17Plus => "Mature 17+",
            Self::AdultsOnly => "Adults Only",
            Self::RatingPending => "Rating Pending",
        }
    }

    /// Map a marketing label to a rating; anything unrecognized is pending.
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "everyone" | "e" => Self::Everyone,
            "everyone 10+" | "e10+" => Self::Everyone10Plus,
            "teen" | "t" => Self::Teen,
            "mature" | "mature 17+" | "m" => Self::Mature17Plus,
            "adults only" | "ao" => Self::AdultsOnly,
            _ => Self::RatingPending,
        }
    }
}

// ── Tag ─────────────────────────────────────────────────────────────────────

/// A genre or feature label games can carry.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub image: Image,
}

// ── Developer ───────────────────────────────────────────────────────────────

/// A studio with games in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub image: Image,
}

// ── Game ────────────────────────────────────────────────────────────────────

/// A store page entry.
///
/// Fixed after catalog construction except for `reviews`, which grows as
/// owners post verdicts through the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub description: String,
    pub main_image: Image,
    pub multimedia: Vec<Image>,
    /// Tag ids, resolved against the tag registry.
    pub tag_ids: Vec<String>,
    pub price: Price,
    pub requirements: SystemRequirements,
    /// Ids of store pages surfaced as "more like this".
    pub related_ids: Vec<String>,
    pub developer_id: String,
    pub release_date: NaiveDate,
    pub reviews: Vec<Review>,
    pub rating: ContentRating,
    pub website: String,
}

// ── Review ──────────────────────────────────────────────────────────────────

/// A verdict posted by a user on a game they own. Owned by exactly one game.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    /// Id of the user who wrote it.
    pub author_id: String,
    pub recommended: bool,
    pub body: String,
}

// ── User ────────────────────────────────────────────────────────────────────

/// A registered account with its library and friend graph.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub avatar_url: String,
    pub background_url: String,
    /// Game ids in purchase order, no duplicates.
    pub owned_games: Vec<String>,
    /// User ids. Kept symmetric by the storefront; never contains `id`.
    pub friends: Vec<String>,
}

// ── Drafts ──────────────────────────────────────────────────────────────────

/// Registration payload for a new account.
#[derive(Debug, Clone)]
pub struct DraftUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar_url: String,
    pub background_url: String,
}

/// Payload for reviewing an owned game.
#[derive(Debug, Clone)]
pub struct DraftReview {
    pub game_id: String,
    pub recommended: bool,
    pub body: String,
}

/// Payload for buying a game.
#[derive(Debug, Clone)]
pub struct DraftPurchase {
    pub game_id: String,
    pub card: CardInfo,
}

/// Card details presented at checkout. Accepted and discarded, never stored.
#[derive(Debug, Clone)]
pub struct CardInfo {
    pub holder: String,
    pub number: u64,
    pub expires: NaiveDate,
    pub cvv: u16,
}

// ── Identity ────────────────────────────────────────────────────────────────

/// Uniform id access for registry-kept entities.
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Game {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Developer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Tag {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for User {
    fn id(&self) -> &str {
        &self.id
    }
}
