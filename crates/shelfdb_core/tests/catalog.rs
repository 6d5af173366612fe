//! End-to-end catalog scenarios against a real backing file.

use shelfdb_core::{
    BookId, BookStatus, Catalog, CatalogError, RemoveOutcome, SearchField, StatusOutcome,
};
use tempfile::tempdir;

#[test]
fn full_lifecycle_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");
    let catalog = Catalog::open(&path).unwrap();

    // Empty store
    assert!(catalog.list_all().unwrap().is_empty());

    // Add
    let dune = catalog.add("Dune", "Herbert", 1965).unwrap();
    let all = catalog.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, BookId::new(1));
    assert_eq!(all[0].status, BookStatus::Available);

    // Check out
    let outcome = catalog
        .set_status(BookId::new(1), BookStatus::CheckedOut)
        .unwrap();
    assert!(matches!(outcome, StatusOutcome::Updated(_)));

    // Search sees the new status
    let hits = catalog.search("Dune", SearchField::Title).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].status, BookStatus::CheckedOut);

    // Remove
    let outcome = catalog.remove(dune.id).unwrap();
    assert!(matches!(outcome, RemoveOutcome::Removed(_)));
    assert!(catalog.list_all().unwrap().is_empty());
}

#[test]
fn collection_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");

    {
        let catalog = Catalog::open(&path).unwrap();
        catalog.add("Dune", "Herbert", 1965).unwrap();
        catalog.add("Solaris", "Lem", 1961).unwrap();
    }

    let catalog = Catalog::open(&path).unwrap();
    let all = catalog.list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "Dune");
    assert_eq!(all[1].title, "Solaris");

    // Ids keep counting from the persisted maximum.
    let third = catalog.add("Neuromancer", "Gibson", 1984).unwrap();
    assert_eq!(third.id, BookId::new(3));
}

#[test]
fn persisted_shape_is_a_plain_json_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");

    let catalog = Catalog::open(&path).unwrap();
    catalog.add("Dune", "Herbert", 1965).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "id": 1,
            "title": "Dune",
            "author": "Herbert",
            "year": 1965,
            "status": "available"
        }])
    );
}

#[test]
fn corrupt_file_refuses_all_operations_without_clobbering() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(&path, b"]][[").unwrap();

    let catalog = Catalog::open(&path).unwrap();

    assert!(matches!(
        catalog.list_all(),
        Err(CatalogError::CorruptStore { .. })
    ));
    assert!(matches!(
        catalog.add("Dune", "Herbert", 1965),
        Err(CatalogError::CorruptStore { .. })
    ));
    assert!(matches!(
        catalog.remove(BookId::new(1)),
        Err(CatalogError::CorruptStore { .. })
    ));

    // The damaged snapshot was not overwritten by any of the attempts.
    assert_eq!(std::fs::read(&path).unwrap(), b"]][[");
}

#[test]
fn foreign_status_value_is_corrupt() {
    // A file written by the old free-text implementation.
    let dir = tempdir().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(
        &path,
        br#"[{"id":1,"title":"T","author":"A","year":2000,"status":"lost"}]"#,
    )
    .unwrap();

    let catalog = Catalog::open(&path).unwrap();
    assert!(matches!(
        catalog.list_all(),
        Err(CatalogError::CorruptStore { .. })
    ));
}
