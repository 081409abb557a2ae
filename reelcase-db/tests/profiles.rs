use reelcase_db::{StoreError, get_or_create, list_profiles, open_memory};

#[test]
fn get_or_create_is_idempotent() {
    let conn = open_memory().unwrap();

    let first = get_or_create(&conn, "alice").unwrap();
    let second = get_or_create(&conn, "alice").unwrap();
    assert_eq!(first, second);

    let rows: i32 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn distinct_names_get_distinct_ids() {
    let conn = open_memory().unwrap();

    let alice = get_or_create(&conn, "alice").unwrap();
    let bob = get_or_create(&conn, "bob").unwrap();
    assert_ne!(alice, bob);
}

#[test]
fn empty_name_is_rejected() {
    let conn = open_memory().unwrap();

    assert!(matches!(
        get_or_create(&conn, ""),
        Err(StoreError::EmptyProfileName)
    ));
    assert!(matches!(
        get_or_create(&conn, "   "),
        Err(StoreError::EmptyProfileName)
    ));

    let rows: i32 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn list_profiles_is_alphabetical() {
    let conn = open_memory().unwrap();

    get_or_create(&conn, "carol").unwrap();
    get_or_create(&conn, "alice").unwrap();
    get_or_create(&conn, "bob").unwrap();

    let names = list_profiles(&conn).unwrap();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
}

#[test]
fn list_profiles_empty_registry() {
    let conn = open_memory().unwrap();
    assert!(list_profiles(&conn).unwrap().is_empty());
}
