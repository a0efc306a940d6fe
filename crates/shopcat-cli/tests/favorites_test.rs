//! Favorites Tests
//!
//! Favorites persist as a JSON array of ids under `<data_dir>/storage/favorites`.

use anyhow::Result;
use shopcat_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_toggle_twice_restores_original_state() -> Result<()> {
    // Given: No favorites
    let world = TestWorld::new();

    // When: Toggling product 3 once
    let result = world.run_json(&["fav", "toggle", "3"])?;

    // Then: It is a favorite and persisted
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["content"]["favorite"], true);
    assert_eq!(json["content"]["total"], 1);
    assert_eq!(world.read_storage_entry("favorites").as_deref(), Some("[3]"));

    // When: Toggling it again
    let result = world.run_json(&["fav", "toggle", "3"])?;

    // Then: The set is empty again
    assert_eq!(result.json()?["content"]["favorite"], false);
    assert_eq!(world.read_storage_entry("favorites").as_deref(), Some("[]"));

    Ok(())
}

#[test]
fn test_toggle_works_without_any_source() -> Result<()> {
    // Given: Neither the API nor a fallback snapshot is available
    let world = TestWorld::new();

    // When/Then: Marking a favorite still succeeds
    let result = world.run(&["fav", "toggle", "7"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    Ok(())
}

#[test]
fn test_favorites_only_filter() -> Result<()> {
    let world = TestWorld::new()
        .with_fallback(fixtures::SAMPLE_PRODUCTS)
        .with_storage_entry("favorites", "[4,2]");

    let result = world.run_json(&["list", "--favorites"])?;

    assert!(result.success());
    let json = result.json()?;
    assertions::assert_product_ids(&json, &[2, 4])?;
    assert_eq!(json["content"]["products"][0]["favorite"], true);

    Ok(())
}

#[test]
fn test_favorites_only_with_none_suggests_marking_one() -> Result<()> {
    let world = TestWorld::new().with_fallback(fixtures::SHOE_AND_HAT);

    let result = world.run(&["list", "--favorites"])?;

    assert!(result.success());
    assert!(result.stdout().contains("shopcat fav toggle 1"));

    Ok(())
}

#[test]
fn test_corrupt_favorites_degrade_to_empty() -> Result<()> {
    // Given: A favorites entry that is not a JSON id array
    let world = TestWorld::new()
        .with_fallback(fixtures::SHOE_AND_HAT)
        .with_storage_entry("favorites", "{not json");

    // When: Listing favorites
    let result = world.run_json(&["fav", "list"])?;

    // Then: The set reads as empty
    assert!(result.success());
    assert_eq!(result.json()?["content"]["ids"], serde_json::json!([]));

    // And: The next toggle overwrites the corrupt entry
    world.run(&["fav", "toggle", "2"])?;
    assert_eq!(world.read_storage_entry("favorites").as_deref(), Some("[2]"));

    Ok(())
}

#[test]
fn test_favorite_list_is_sorted() -> Result<()> {
    let world = TestWorld::new().with_storage_entry("favorites", "[9,1,5]");

    let result = world.run(&["fav", "list", "--quiet"])?;

    assert!(result.success());
    assert_eq!(result.stdout(), "1\n5\n9\n");

    Ok(())
}
