//! Mutating storefront calls: registration, purchases, reviews, friendships.
//!
//! Each call validates against current state, then applies the whole change
//! or none of it. Successful calls return an owned snapshot of the entity
//! they touched.

use vapor_model::{DraftPurchase, DraftReview, DraftUser, Game, Review, User};

use crate::error::StoreError;
use crate::store::Storefront;

impl Storefront {
    /// Register a new account.
    ///
    /// Emails are unique across the registry; the first registration wins.
    pub fn add_user(&mut self, draft: DraftUser) -> Result<User, StoreError> {
        if self.users.iter().any(|u| u.email == draft.email) {
            return Err(StoreError::DuplicateEmail(draft.email));
        }
        let id = self.ids.next_user_id();
        log::debug!("registering user {id} ({})", draft.email);
        let user = User {
            id,
            email: draft.email,
            password: draft.password,
            name: draft.name,
            avatar_url: draft.avatar_url,
            background_url: draft.background_url,
            owned_games: Vec::new(),
            friends: Vec::new(),
        };
        self.users.insert("user", user.clone())?;
        Ok(user)
    }

    /// Add a game to a user's library.
    ///
    /// The card details are accepted and dropped; there is no payment back
    /// end behind the storefront.
    pub fn purchase_game(
        &mut self,
        user_id: &str,
        draft: DraftPurchase,
    ) -> Result<User, StoreError> {
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))?;
        if !self.games.contains(&draft.game_id) {
            return Err(StoreError::GameNotFound(draft.game_id));
        }
        if user.owned_games.contains(&draft.game_id) {
            return Err(StoreError::AlreadyOwned {
                user_id: user_id.to_string(),
                game_id: draft.game_id,
            });
        }
        log::debug!("user {user_id} bought game {}", draft.game_id);
        user.owned_games.push(draft.game_id);
        Ok(user.clone())
    }

    /// Post a review on a game the user owns.
    ///
    /// One review per user per game; later attempts are rejected rather than
    /// merged or replaced.
    pub fn add_review(&mut self, user_id: &str, draft: DraftReview) -> Result<Game, StoreError> {
        let user = self
            .users
            .get(user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))?;
        let game = self
            .games
            .get_mut(&draft.game_id)
            .ok_or_else(|| StoreError::GameNotFound(draft.game_id.clone()))?;
        if !user.owned_games.contains(&game.id) {
            return Err(StoreError::NotOwned {
                user_id: user_id.to_string(),
                game_id: game.id.clone(),
            });
        }
        if game.reviews.iter().any(|r| r.author_id == user.id) {
            return Err(StoreError::DuplicateReview {
                user_id: user_id.to_string(),
                game_id: game.id.clone(),
            });
        }
        let review = Review {
            id: self.ids.next_review_id(),
            author_id: user.id.clone(),
            recommended: draft.recommended,
            body: draft.body,
        };
        log::debug!("review {} by {user_id} on {}", review.id, game.id);
        game.reviews.push(review);
        Ok(game.clone())
    }

    /// Flip the friendship edge between two users.
    ///
    /// Adds the link if absent, removes it if present; both sides always
    /// change together. Self-links are rejected before any lookup, and both
    /// users are resolved before either friend list is touched, so the edge
    /// cannot end up half-applied.
    pub fn toggle_friend(&mut self, user_id: &str, friend_id: &str) -> Result<User, StoreError> {
        if user_id == friend_id {
            return Err(StoreError::SelfFriend);
        }
        let user_ix = self
            .users
            .position(user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))?;
        let friend_ix = self
            .users
            .position(friend_id)
            .ok_or_else(|| StoreError::UserNotFound(friend_id.to_string()))?;

        let linked = self
            .users
            .at(user_ix)
            .friends
            .iter()
            .any(|f| f == friend_id);
        if linked {
            self.users.at_mut(user_ix).friends.retain(|f| f != friend_id);
            self.users.at_mut(friend_ix).friends.retain(|f| f != user_id);
            log::debug!("unlinked users {user_id} and {friend_id}");
        } else {
            self.users.at_mut(user_ix).friends.push(friend_id.to_string());
            self.users.at_mut(friend_ix).friends.push(user_id.to_string());
            log::debug!("linked users {user_id} and {friend_id}");
        }
        Ok(self.users.at(user_ix).clone())
    }
}
