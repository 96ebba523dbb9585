//! Read-side storefront calls: lookups, aggregation, ranking, and paged
//! listings.

use std::cmp::Reverse;

use vapor_model::page::{PageInfo, paginate};
use vapor_model::{Developer, Game, Review, Tag, User};

use crate::error::StoreError;
use crate::store::Storefront;

/// Number of entries in the recommended ranking.
pub const RECOMMENDED_LIMIT: usize = 10;

impl Storefront {
    // ── Lookups ─────────────────────────────────────────────────────────────

    /// Look up a user by id.
    pub fn get_user(&self, id: &str) -> Result<&User, StoreError> {
        self.users
            .get(id)
            .ok_or_else(|| StoreError::UserNotFound(id.to_string()))
    }

    /// Look up a game by id.
    pub fn get_game(&self, id: &str) -> Result<&Game, StoreError> {
        self.games
            .get(id)
            .ok_or_else(|| StoreError::GameNotFound(id.to_string()))
    }

    /// Look up a developer by id.
    pub fn get_developer(&self, id: &str) -> Result<&Developer, StoreError> {
        self.developers
            .get(id)
            .ok_or_else(|| StoreError::DeveloperNotFound(id.to_string()))
    }

    /// Look up a tag by id.
    pub fn get_tag(&self, id: &str) -> Result<&Tag, StoreError> {
        self.tags
            .get(id)
            .ok_or_else(|| StoreError::TagNotFound(id.to_string()))
    }

    // ── Aggregation & Ranking ───────────────────────────────────────────────

    /// Every review the user has written, across all games.
    pub fn user_reviews(&self, user_id: &str) -> Result<Vec<Review>, StoreError> {
        let user = self.get_user(user_id)?;
        Ok(self
            .games
            .iter()
            .flat_map(|game| &game.reviews)
            .filter(|review| review.author_id == user.id)
            .cloned()
            .collect())
    }

    /// The games with the most recommending reviews, best first, capped at
    /// [`RECOMMENDED_LIMIT`]. Ties keep catalog order.
    pub fn recommended_games(&self) -> Vec<Game> {
        let mut ranked: Vec<&Game> = self.games.iter().collect();
        ranked.sort_by_key(|game| Reverse(recommended_count(game)));
        ranked
            .into_iter()
            .take(RECOMMENDED_LIMIT)
            .cloned()
            .collect()
    }

    // ── Paged Listings ──────────────────────────────────────────────────────

    /// One page of the full catalog, in catalog order.
    pub fn list_games(&self, page: u32) -> Result<PageInfo<Game>, StoreError> {
        Ok(paginate(self.games.items(), page)?)
    }

    /// One page of the games carrying a tag.
    pub fn list_games_by_tag(&self, tag_id: &str, page: u32) -> Result<PageInfo<Game>, StoreError> {
        let tag = self.get_tag(tag_id)?;
        let matches: Vec<&Game> = self
            .games
            .iter()
            .filter(|game| game.tag_ids.iter().any(|t| t == &tag.id))
            .collect();
        Ok(paginate(&matches, page)?.map(|game| game.clone()))
    }

    /// One page of the games from a developer.
    pub fn list_games_by_developer(
        &self,
        developer_id: &str,
        page: u32,
    ) -> Result<PageInfo<Game>, StoreError> {
        let developer = self.get_developer(developer_id)?;
        let matches: Vec<&Game> = self
            .games
            .iter()
            .filter(|game| game.developer_id == developer.id)
            .collect();
        Ok(paginate(&matches, page)?.map(|game| game.clone()))
    }

    // ── Search ──────────────────────────────────────────────────────────────

    /// One page of the games whose name contains `name`, case-insensitively.
    pub fn search_games(&self, name: &str, page: u32) -> Result<PageInfo<Game>, StoreError> {
        let needle = name.to_lowercase();
        let matches: Vec<&Game> = self
            .games
            .iter()
            .filter(|game| game.name.to_lowercase().contains(&needle))
            .collect();
        Ok(paginate(&matches, page)?.map(|game| game.clone()))
    }

    /// One page of the users whose display name contains `name`,
    /// case-insensitively.
    pub fn search_users(&self, name: &str, page: u32) -> Result<PageInfo<User>, StoreError> {
        let needle = name.to_lowercase();
        let matches: Vec<&User> = self
            .users
            .iter()
            .filter(|user| user.name.to_lowercase().contains(&needle))
            .collect();
        Ok(paginate(&matches, page)?.map(|user| user.clone()))
    }
}

fn recommended_count(game: &Game) -> usize {
    game.reviews.iter().filter(|r| r.recommended).count()
}
