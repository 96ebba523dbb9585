use chrono::NaiveDate;
use vapor_model::*;
use vapor_store::{StoreError, Storefront};

fn test_game(id: &str, name: &str, developer_id: &str, tag_ids: &[&str]) -> Game {
    Game {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("About {name}."),
        main_image: Image::new(format!("https://img.invalid/{id}.jpg")),
        multimedia: Vec::new(),
        tag_ids: tag_ids.iter().map(|t| t.to_string()).collect(),
        price: Price::usd(1999),
        requirements: SystemRequirements::default(),
        related_ids: Vec::new(),
        developer_id: developer_id.to_string(),
        release_date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
        reviews: Vec::new(),
        rating: ContentRating::Teen,
        website: String::new(),
    }
}

fn test_tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.to_string(),
        name: name.to_string(),
        image: Image::new("https://img.invalid/tag.jpg"),
    }
}

fn test_developer(id: &str, name: &str) -> Developer {
    Developer {
        id: id.to_string(),
        name: name.to_string(),
        image: Image::new("https://img.invalid/dev.jpg"),
    }
}

fn test_draft_user(name: &str) -> DraftUser {
    DraftUser {
        name: name.to_string(),
        email: format!("{name}@example.com"),
        password: "hunter2".to_string(),
        avatar_url: String::new(),
        background_url: String::new(),
    }
}

fn test_card() -> CardInfo {
    CardInfo {
        holder: "TEST CARD".to_string(),
        number: 4111_1111_1111_1111,
        expires: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        cvv: 123,
    }
}

fn purchase(game_id: &str) -> DraftPurchase {
    DraftPurchase {
        game_id: game_id.to_string(),
        card: test_card(),
    }
}

fn review(game_id: &str, recommended: bool) -> DraftReview {
    DraftReview {
        game_id: game_id.to_string(),
        recommended,
        body: "Short verdict.".to_string(),
    }
}

fn test_store() -> Storefront {
    Storefront::new(
        vec![
            test_game("g_0", "Gravity Well", "d_0", &["t_0"]),
            test_game("g_1", "Harvest Lane", "d_0", &["t_1"]),
            test_game("g_2", "Neon Drift", "d_1", &["t_0", "t_1"]),
        ],
        vec![
            test_developer("d_0", "Redshift Studio"),
            test_developer("d_1", "Quiet Fox Games"),
        ],
        vec![test_tag("t_0", "Action"), test_tag("t_1", "Indie")],
    )
    .unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn duplicate_catalog_id_rejected() {
    let result = Storefront::new(
        vec![
            test_game("g_0", "Gravity Well", "d_0", &[]),
            test_game("g_0", "Gravity Well Again", "d_0", &[]),
        ],
        vec![test_developer("d_0", "Redshift Studio")],
        vec![],
    );
    assert!(matches!(
        result,
        Err(StoreError::DuplicateId { kind: "game", .. })
    ));
}

#[test]
fn new_store_has_no_users() {
    let store = test_store();
    assert!(store.users().is_empty());
    assert_eq!(store.games().len(), 3);
}

// ── Registration ────────────────────────────────────────────────────────────

#[test]
fn first_user_gets_id_u_0() {
    let mut store = test_store();
    let user = store.add_user(test_draft_user("alice")).unwrap();
    assert_eq!(user.id, "u_0");
    assert_eq!(user.email, "alice@example.com");
    assert!(user.owned_games.is_empty());
    assert!(user.friends.is_empty());
}

#[test]
fn user_ids_increment() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    let second = store.add_user(test_draft_user("bob")).unwrap();
    assert_eq!(second.id, "u_1");
}

#[test]
fn duplicate_email_rejected() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();

    let mut copycat = test_draft_user("impostor");
    copycat.email = "alice@example.com".to_string();
    let result = store.add_user(copycat);

    assert!(matches!(result, Err(StoreError::DuplicateEmail(_))));
    assert_eq!(store.users().len(), 1);
}

// ── Purchases ───────────────────────────────────────────────────────────────

#[test]
fn purchase_adds_to_library() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();

    let user = store.purchase_game("u_0", purchase("g_1")).unwrap();
    assert_eq!(user.owned_games, vec!["g_1".to_string()]);

    let user = store.purchase_game("u_0", purchase("g_0")).unwrap();
    assert_eq!(user.owned_games, vec!["g_1".to_string(), "g_0".to_string()]);
}

#[test]
fn purchase_unknown_user_rejected() {
    let mut store = test_store();
    // Both ids unknown: the user is checked first.
    let result = store.purchase_game("u_99", purchase("g_99"));
    assert!(matches!(result, Err(StoreError::UserNotFound(_))));
}

#[test]
fn purchase_unknown_game_rejected() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    let result = store.purchase_game("u_0", purchase("g_99"));
    assert!(matches!(result, Err(StoreError::GameNotFound(_))));
}

#[test]
fn repeat_purchase_rejected() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    store.purchase_game("u_0", purchase("g_0")).unwrap();

    let result = store.purchase_game("u_0", purchase("g_0"));
    assert!(matches!(result, Err(StoreError::AlreadyOwned { .. })));
    assert_eq!(store.get_user("u_0").unwrap().owned_games.len(), 1);
}

// ── Reviews ─────────────────────────────────────────────────────────────────

#[test]
fn review_requires_ownership() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();

    let result = store.add_review("u_0", review("g_0", true));
    assert!(matches!(result, Err(StoreError::NotOwned { .. })));
    assert!(store.get_game("g_0").unwrap().reviews.is_empty());
}

#[test]
fn review_records_author_and_id() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    store.purchase_game("u_0", purchase("g_0")).unwrap();

    let game = store.add_review("u_0", review("g_0", true)).unwrap();
    assert_eq!(game.reviews.len(), 1);
    assert_eq!(game.reviews[0].id, "r_0");
    assert_eq!(game.reviews[0].author_id, "u_0");
    assert!(game.reviews[0].recommended);
}

#[test]
fn second_review_on_same_game_rejected() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    store.purchase_game("u_0", purchase("g_0")).unwrap();
    store.add_review("u_0", review("g_0", true)).unwrap();

    let result = store.add_review("u_0", review("g_0", false));
    assert!(matches!(result, Err(StoreError::DuplicateReview { .. })));
    assert_eq!(store.get_game("g_0").unwrap().reviews.len(), 1);
}

#[test]
fn same_user_can_review_other_games() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    store.purchase_game("u_0", purchase("g_0")).unwrap();
    store.purchase_game("u_0", purchase("g_1")).unwrap();

    store.add_review("u_0", review("g_0", true)).unwrap();
    let game = store.add_review("u_0", review("g_1", false)).unwrap();
    assert_eq!(game.reviews[0].id, "r_1");
}

#[test]
fn different_users_can_review_same_game() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    store.add_user(test_draft_user("bob")).unwrap();
    store.purchase_game("u_0", purchase("g_0")).unwrap();
    store.purchase_game("u_1", purchase("g_0")).unwrap();

    store.add_review("u_0", review("g_0", true)).unwrap();
    let game = store.add_review("u_1", review("g_0", false)).unwrap();
    assert_eq!(game.reviews.len(), 2);
    assert_eq!(game.reviews[1].author_id, "u_1");
}

#[test]
fn review_on_unknown_game_rejected() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    let result = store.add_review("u_0", review("g_99", true));
    assert!(matches!(result, Err(StoreError::GameNotFound(_))));
}

// ── Friendships ─────────────────────────────────────────────────────────────

#[test]
fn toggle_creates_symmetric_link() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    store.add_user(test_draft_user("bob")).unwrap();

    let user = store.toggle_friend("u_0", "u_1").unwrap();
    assert_eq!(user.friends, vec!["u_1".to_string()]);
    assert_eq!(
        store.get_user("u_1").unwrap().friends,
        vec!["u_0".to_string()]
    );
}

#[test]
fn toggle_again_removes_link() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    store.add_user(test_draft_user("bob")).unwrap();

    store.toggle_friend("u_0", "u_1").unwrap();
    let user = store.toggle_friend("u_0", "u_1").unwrap();
    assert!(user.friends.is_empty());
    assert!(store.get_user("u_1").unwrap().friends.is_empty());
}

#[test]
fn toggle_from_either_side_removes_link() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    store.add_user(test_draft_user("bob")).unwrap();

    store.toggle_friend("u_0", "u_1").unwrap();
    let user = store.toggle_friend("u_1", "u_0").unwrap();
    assert!(user.friends.is_empty());
    assert!(store.get_user("u_0").unwrap().friends.is_empty());
}

#[test]
fn self_friend_rejected() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();

    let result = store.toggle_friend("u_0", "u_0");
    assert!(matches!(result, Err(StoreError::SelfFriend)));
    assert!(store.get_user("u_0").unwrap().friends.is_empty());

    // Equal ids read as self even when no such user exists.
    assert!(matches!(
        store.toggle_friend("u_77", "u_77"),
        Err(StoreError::SelfFriend)
    ));
}

#[test]
fn toggle_with_unknown_user_rejected() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();

    assert!(matches!(
        store.toggle_friend("u_99", "u_0"),
        Err(StoreError::UserNotFound(_))
    ));
    assert!(matches!(
        store.toggle_friend("u_0", "u_99"),
        Err(StoreError::UserNotFound(_))
    ));
    assert!(store.get_user("u_0").unwrap().friends.is_empty());
}

#[test]
fn links_to_multiple_friends_accumulate() {
    let mut store = test_store();
    store.add_user(test_draft_user("alice")).unwrap();
    store.add_user(test_draft_user("bob")).unwrap();
    store.add_user(test_draft_user("carol")).unwrap();

    store.toggle_friend("u_0", "u_1").unwrap();
    let user = store.toggle_friend("u_0", "u_2").unwrap();
    assert_eq!(user.friends, vec!["u_1".to_string(), "u_2".to_string()]);

    // Dropping one link leaves the other alone.
    let user = store.toggle_friend("u_0", "u_1").unwrap();
    assert_eq!(user.friends, vec!["u_2".to_string()]);
    assert_eq!(
        store.get_user("u_1").unwrap().friends,
        Vec::<String>::new()
    );
}
