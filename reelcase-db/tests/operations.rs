use reelcase_catalog::NewMovie;
use reelcase_db::{
    StoreError, add_movie, delete_movie, get_or_create, list_movies, open_memory, update_rating,
};

fn movie(title: &str, year: i32, rating: f64) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        year,
        rating,
        poster_url: Some(format!("https://posters.example/{}.jpg", year)),
    }
}

#[test]
fn add_then_list_round_trip() {
    let conn = open_memory().unwrap();
    let profile = get_or_create(&conn, "alice").unwrap();

    add_movie(&conn, profile, &movie("Batman", 1989, 7.5)).unwrap();

    let movies = list_movies(&conn, profile).unwrap();
    assert_eq!(movies.len(), 1);
    let entry = &movies["Batman"];
    assert_eq!(entry.year, 1989);
    assert_eq!(entry.rating, 7.5);
    assert_eq!(
        entry.poster_url.as_deref(),
        Some("https://posters.example/1989.jpg")
    );
}

#[test]
fn duplicate_title_is_rejected_and_original_kept() {
    let conn = open_memory().unwrap();
    let profile = get_or_create(&conn, "alice").unwrap();

    add_movie(&conn, profile, &movie("Batman", 1989, 7.5)).unwrap();
    let err = add_movie(&conn, profile, &movie("Batman", 2022, 3.0)).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateTitle { ref title } if title == "Batman"));

    // The original record is unchanged
    let movies = list_movies(&conn, profile).unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies["Batman"].year, 1989);
    assert_eq!(movies["Batman"].rating, 7.5);
}

#[test]
fn same_title_allowed_under_different_profiles() {
    let conn = open_memory().unwrap();
    let alice = get_or_create(&conn, "alice").unwrap();
    let bob = get_or_create(&conn, "bob").unwrap();

    add_movie(&conn, alice, &movie("Batman", 1989, 7.5)).unwrap();
    add_movie(&conn, bob, &movie("Batman", 1989, 9.0)).unwrap();

    assert_eq!(list_movies(&conn, alice).unwrap()["Batman"].rating, 7.5);
    assert_eq!(list_movies(&conn, bob).unwrap()["Batman"].rating, 9.0);
}

#[test]
fn empty_title_is_rejected() {
    let conn = open_memory().unwrap();
    let profile = get_or_create(&conn, "alice").unwrap();

    let err = add_movie(&conn, profile, &movie("  ", 1989, 7.5)).unwrap_err();
    assert!(matches!(err, StoreError::EmptyTitle));
}

#[test]
fn delete_missing_title_is_zero_rows() {
    let conn = open_memory().unwrap();
    let profile = get_or_create(&conn, "alice").unwrap();
    add_movie(&conn, profile, &movie("Batman", 1989, 7.5)).unwrap();

    let removed = delete_movie(&conn, profile, "Superman").unwrap();
    assert_eq!(removed, 0);

    // Nothing else was touched
    assert_eq!(list_movies(&conn, profile).unwrap().len(), 1);
}

#[test]
fn delete_removes_exactly_one_row() {
    let conn = open_memory().unwrap();
    let profile = get_or_create(&conn, "alice").unwrap();
    add_movie(&conn, profile, &movie("Batman", 1989, 7.5)).unwrap();
    add_movie(&conn, profile, &movie("Superman", 1978, 7.4)).unwrap();

    let removed = delete_movie(&conn, profile, "Batman").unwrap();
    assert_eq!(removed, 1);

    let movies = list_movies(&conn, profile).unwrap();
    assert_eq!(movies.len(), 1);
    assert!(movies.contains_key("Superman"));
}

#[test]
fn delete_is_scoped_to_the_profile() {
    let conn = open_memory().unwrap();
    let alice = get_or_create(&conn, "alice").unwrap();
    let bob = get_or_create(&conn, "bob").unwrap();
    add_movie(&conn, bob, &movie("Batman", 1989, 9.0)).unwrap();

    // Alice has no Batman; Bob's copy must survive her delete
    let removed = delete_movie(&conn, alice, "Batman").unwrap();
    assert_eq!(removed, 0);
    assert_eq!(list_movies(&conn, bob).unwrap().len(), 1);
}

#[test]
fn update_changes_rating_only() {
    let conn = open_memory().unwrap();
    let profile = get_or_create(&conn, "alice").unwrap();
    add_movie(&conn, profile, &movie("Batman", 1989, 7.5)).unwrap();

    let changed = update_rating(&conn, profile, "Batman", 8.1).unwrap();
    assert_eq!(changed, 1);

    let movies = list_movies(&conn, profile).unwrap();
    assert_eq!(movies["Batman"].rating, 8.1);
    assert_eq!(movies["Batman"].year, 1989);
}

#[test]
fn update_missing_title_is_zero_rows() {
    let conn = open_memory().unwrap();
    let profile = get_or_create(&conn, "alice").unwrap();

    let changed = update_rating(&conn, profile, "Batman", 8.1).unwrap();
    assert_eq!(changed, 0);
}

#[test]
fn listings_never_cross_profiles() {
    let conn = open_memory().unwrap();
    let alice = get_or_create(&conn, "alice").unwrap();
    let bob = get_or_create(&conn, "bob").unwrap();

    add_movie(&conn, alice, &movie("Batman", 1989, 7.5)).unwrap();
    add_movie(&conn, alice, &movie("Alien", 1979, 8.5)).unwrap();
    add_movie(&conn, bob, &movie("Heat", 1995, 8.3)).unwrap();

    let alices = list_movies(&conn, alice).unwrap();
    assert_eq!(alices.len(), 2);
    assert!(!alices.contains_key("Heat"));

    let bobs = list_movies(&conn, bob).unwrap();
    assert_eq!(bobs.len(), 1);
    assert!(!bobs.contains_key("Batman"));
}
