use super::*;

/// Tests the strict lookup check when every row came back.
///
/// Expected: Ok
#[test]
fn passes_when_all_rows_found() {
    assert!(ensure_all_found("menu item", 3, 3).is_ok());
}

/// Tests the strict lookup check when a row is missing.
///
/// Verifies that the error names the entity and carries both counts.
///
/// Expected: Err(CatalogError::NotFound)
#[test]
fn fails_when_rows_missing() {
    let result = ensure_all_found("modifier option", 2, 1);

    match result {
        Err(CatalogError::NotFound {
            entity,
            requested,
            found,
        }) => {
            assert_eq!(entity, "modifier option");
            assert_eq!(requested, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

/// Tests the strict lookup check with nothing requested.
///
/// Expected: Ok
#[test]
fn passes_for_empty_request() {
    assert!(ensure_all_found("menu item", 0, 0).is_ok());
}
