use reelcase_catalog::NewMovie;
use reelcase_db::{Session, open_memory};

fn movie(title: &str, rating: f64) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        year: 1999,
        rating,
        poster_url: None,
    }
}

#[test]
fn session_operations_are_profile_bound() {
    let conn = open_memory().unwrap();

    let alice = Session::open(&conn, "alice").unwrap();
    alice.add(&movie("The Matrix", 8.7)).unwrap();
    alice.add(&movie("Fight Club", 8.8)).unwrap();

    let bob = Session::open(&conn, "bob").unwrap();
    bob.add(&movie("The Matrix", 6.0)).unwrap();

    assert_eq!(alice.list().unwrap().len(), 2);
    assert_eq!(bob.list().unwrap().len(), 1);

    // Bob's copy keeps its own rating
    assert_eq!(bob.list().unwrap()["The Matrix"].rating, 6.0);

    let ranked = alice.by_rating().unwrap();
    assert_eq!(ranked[0].title, "Fight Club");

    assert_eq!(alice.search("matrix").unwrap().len(), 1);
    assert_eq!(alice.stats().unwrap().best[0].title, "Fight Club");

    assert_eq!(alice.delete("The Matrix").unwrap(), 1);
    assert_eq!(alice.list().unwrap().len(), 1);
    // Bob is untouched
    assert_eq!(bob.list().unwrap().len(), 1);
}

#[test]
fn reopening_a_session_resolves_the_same_profile() {
    let conn = open_memory().unwrap();

    let first = Session::open(&conn, "alice").unwrap();
    first.add(&movie("Heat", 8.3)).unwrap();

    // A later session for the same name sees the same collection
    let second = Session::open(&conn, "alice").unwrap();
    assert_eq!(first.profile(), second.profile());
    assert_eq!(second.list().unwrap().len(), 1);

    assert_eq!(second.update_rating("Heat", 9.0).unwrap(), 1);
    assert_eq!(first.list().unwrap()["Heat"].rating, 9.0);
}
