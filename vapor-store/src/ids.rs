//! Monotonic id generation for storefront-created entities.

/// Hands out `u_<n>` user ids and `r_<n>` review ids, one counter per kind.
///
/// Suffixes start at 0 and never repeat within a process lifetime. Catalog
/// entities (games, developers, tags) arrive with their ids already set and
/// are not covered here.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next_user: u64,
    next_review: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unused user id.
    pub fn next_user_id(&mut self) -> String {
        let id = format!("u_{}", self.next_user);
        self.next_user += 1;
        id
    }

    /// Next unused review id.
    pub fn next_review_id(&mut self) -> String {
        let id = format!("r_{}", self.next_review);
        self.next_review += 1;
        id
    }
}
