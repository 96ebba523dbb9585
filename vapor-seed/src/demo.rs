//! Deterministic demo population: register the catalog's users, then drive
//! randomized purchases, friendships, and reviews through the storefront.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vapor_model::{CardInfo, DraftPurchase, DraftReview, DraftUser};
use vapor_store::Storefront;

use crate::catalog::{SeedError, build_catalog, load_catalog};

/// Tunables for the generated population.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// RNG seed; the same seed always produces the same storefront.
    pub seed: u64,
    /// Purchase draws per user. Draws are with replacement, so actual
    /// library sizes vary below this.
    pub games_per_user: usize,
    /// Friend-toggle draws per user.
    pub friends_per_user: usize,
    /// Review draws per user, taken from that user's own library.
    pub reviews_per_user: usize,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            seed: 100,
            games_per_user: 12,
            friends_per_user: 4,
            reviews_per_user: 8,
        }
    }
}

/// Build a fully populated storefront from the embedded catalog.
///
/// Everything goes through the facade operations, so the populated state
/// satisfies the same invariants as any hand-driven session: no duplicate
/// ownership, reviews only from owners, symmetric friendships.
pub fn demo_storefront(options: &DemoOptions) -> Result<Storefront, SeedError> {
    let catalog = load_catalog()?;
    let mut rng = StdRng::seed_from_u64(options.seed);
    let (games, developers, tags) = build_catalog(&catalog, &mut rng)?;
    let mut store = Storefront::new(games, developers, tags)?;

    for record in &catalog.users {
        store.add_user(DraftUser {
            name: record.name.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
            avatar_url: record.avatar.clone(),
            background_url: record.background.clone(),
        })?;
    }

    let game_ids: Vec<String> = store.games().iter().map(|g| g.id.clone()).collect();
    let user_ids: Vec<String> = store.users().iter().map(|u| u.id.clone()).collect();

    // Libraries first; reviews need something to point at.
    for user_id in &user_ids {
        for game_id in draws(&game_ids, options.games_per_user, &mut rng) {
            let draft = DraftPurchase {
                game_id,
                card: demo_card(),
            };
            store.purchase_game(user_id, draft)?;
        }
    }

    for user_id in &user_ids {
        for friend_id in draws(&user_ids, options.friends_per_user, &mut rng) {
            if &friend_id == user_id {
                continue;
            }
            store.toggle_friend(user_id, &friend_id)?;
        }
    }

    if catalog.review_phrases.is_empty() {
        log::warn!("catalog has no review phrases, skipping review population");
    } else {
        for user_id in &user_ids {
            let owned = store.get_user(user_id)?.owned_games.clone();
            for game_id in draws(&owned, options.reviews_per_user, &mut rng) {
                let phrase = rng.gen_range(0..catalog.review_phrases.len());
                let draft = DraftReview {
                    game_id,
                    recommended: rng.gen_bool(0.5),
                    body: catalog.review_phrases[phrase].clone(),
                };
                store.add_review(user_id, draft)?;
            }
        }
    }

    log::info!(
        "demo storefront ready: {} games, {} developers, {} tags, {} users",
        store.games().len(),
        store.developers().len(),
        store.tags().len(),
        store.users().len(),
    );
    Ok(store)
}

/// `count` draws with replacement from `pool`, deduplicated to first
/// occurrences.
fn draws(pool: &[String], count: usize, rng: &mut StdRng) -> Vec<String> {
    if pool.is_empty() {
        return Vec::new();
    }
    let mut picked = Vec::new();
    for _ in 0..count {
        let candidate = &pool[rng.gen_range(0..pool.len())];
        if !picked.contains(candidate) {
            picked.push(candidate.clone());
        }
    }
    picked
}

fn demo_card() -> CardInfo {
    CardInfo {
        holder: "VAPOR DEMO".to_string(),
        number: 4111_1111_1111_1111,
        expires: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap_or_default(),
        cvv: 123,
    }
}
