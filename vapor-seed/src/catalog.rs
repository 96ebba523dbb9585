//! The embedded demo catalog: YAML records and their resolution into
//! domain entities.
//!
//! Records mirror how the catalog file is authored, not how the storefront
//! models the data: games reference tags and developers by id, dates are
//! ISO strings, and ratings are marketing labels. [`build_catalog`] resolves
//! all of that, prices each game, and wires up related lists.

use chrono::NaiveDate;
use rand::Rng;
use rand::rngs::StdRng;
use serde::Deserialize;
use thiserror::Error;
use vapor_model::{ContentRating, Developer, Game, Image, Price, SystemRequirements, Tag};

/// Problems turning the embedded catalog into domain data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("catalog YAML is invalid: {0}")]
    Parse(#[from] serde_yml::Error),
    #[error("game '{game_id}' references unknown tag '{tag_id}'")]
    UnknownTag { game_id: String, tag_id: String },
    #[error("game '{game_id}' references unknown developer '{developer_id}'")]
    UnknownDeveloper {
        game_id: String,
        developer_id: String,
    },
    #[error("game '{game_id}' has an unreadable release date '{value}'")]
    InvalidDate { game_id: String, value: String },
    #[error(transparent)]
    Store(#[from] vapor_store::StoreError),
}

// ── Records ─────────────────────────────────────────────────────────────────

/// Root of `data/catalog.yaml`.
#[derive(Debug, Deserialize)]
pub struct SeedCatalog {
    pub tags: Vec<TagRecord>,
    pub developers: Vec<DeveloperRecord>,
    pub games: Vec<GameRecord>,
    pub users: Vec<UserRecord>,
    pub review_phrases: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TagRecord {
    pub id: String,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Deserialize)]
pub struct DeveloperRecord {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// A game as authored in the catalog file. Prices and related lists are
/// filled in at build time.
#[derive(Debug, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub main_image: String,
    #[serde(default)]
    pub multimedia: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub developer: String,
    pub released: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub requirements: SystemRequirements,
}

/// A demo account as authored in the catalog file.
#[derive(Debug, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub background: String,
}

// ── Loading & Resolution ────────────────────────────────────────────────────

/// Parse the catalog shipped inside the crate.
pub fn load_catalog() -> Result<SeedCatalog, SeedError> {
    Ok(serde_yml::from_str(include_str!("../data/catalog.yaml"))?)
}

/// Resolved catalog collections, ready for `Storefront::new`.
pub type CatalogData = (Vec<Game>, Vec<Developer>, Vec<Tag>);

/// Resolve a catalog into domain entities.
///
/// Every tag and developer reference is checked against the catalog's own
/// registries. Prices are drawn from `rng` (free up to just under $200),
/// as are the related-game lists, so the result is deterministic for a
/// given generator state.
pub fn build_catalog(seed: &SeedCatalog, rng: &mut StdRng) -> Result<CatalogData, SeedError> {
    let tags: Vec<Tag> = seed
        .tags
        .iter()
        .map(|record| Tag {
            id: record.id.clone(),
            name: record.name.clone(),
            image: Image::new(record.image.clone()),
        })
        .collect();

    let developers: Vec<Developer> = seed
        .developers
        .iter()
        .map(|record| Developer {
            id: record.id.clone(),
            name: record.name.clone(),
            image: Image::new(record.image.clone()),
        })
        .collect();

    let mut games = Vec::with_capacity(seed.games.len());
    for record in &seed.games {
        for tag_id in &record.tags {
            if !tags.iter().any(|t| &t.id == tag_id) {
                return Err(SeedError::UnknownTag {
                    game_id: record.id.clone(),
                    tag_id: tag_id.clone(),
                });
            }
        }
        if !developers.iter().any(|d| d.id == record.developer) {
            return Err(SeedError::UnknownDeveloper {
                game_id: record.id.clone(),
                developer_id: record.developer.clone(),
            });
        }
        let release_date = NaiveDate::parse_from_str(&record.released, "%Y-%m-%d").map_err(
            |_| SeedError::InvalidDate {
                game_id: record.id.clone(),
                value: record.released.clone(),
            },
        )?;
        games.push(Game {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            main_image: Image::new(record.main_image.clone()),
            multimedia: record
                .multimedia
                .iter()
                .map(|url| Image::new(url.clone()))
                .collect(),
            tag_ids: record.tags.clone(),
            price: random_price(rng),
            requirements: record.requirements.clone(),
            related_ids: Vec::new(),
            developer_id: record.developer.clone(),
            release_date,
            reviews: Vec::new(),
            rating: ContentRating::from_str_loose(&record.rating),
            website: record.website.clone(),
        });
    }

    // Second pass for related lists (all ids now known).
    let all_ids: Vec<String> = games.iter().map(|g| g.id.clone()).collect();
    for game in &mut games {
        game.related_ids = related_ids(&all_ids, &game.id, rng);
    }

    Ok((games, developers, tags))
}

/// Sticker price in whole cents, anywhere from free to just under $200.
fn random_price(rng: &mut StdRng) -> Price {
    Price::usd(rng.gen_range(0..20_000))
}

/// Up to ten distinct ids drawn from `all`, never including `own_id`.
///
/// Draws are with replacement and deduplicated to first occurrences, so
/// shorter lists are possible and the order is the draw order.
fn related_ids(all: &[String], own_id: &str, rng: &mut StdRng) -> Vec<String> {
    if all.len() < 2 {
        return Vec::new();
    }
    let mut picked = Vec::new();
    for _ in 0..10 {
        let candidate = &all[rng.gen_range(0..all.len())];
        if candidate != own_id && !picked.contains(candidate) {
            picked.push(candidate.clone());
        }
    }
    picked
}
