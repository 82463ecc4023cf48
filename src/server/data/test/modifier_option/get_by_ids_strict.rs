use super::*;

/// Tests fetching modifier options by id.
///
/// Verifies that each option carries its group, price and availability.
///
/// Expected: Ok with both options
#[tokio::test]
async fn fetches_requested_options() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let size = factory::create_modifier(db, restaurant.id).await?;
    let small = factory::create_modifier_option(db, size.id).await?;
    let large = factory::modifier_option::ModifierOptionFactory::new(db, size.id)
        .name("Large")
        .price(1.5)
        .available(false)
        .build()
        .await?;

    let repo = ModifierOptionRepository::new(db);
    let options = repo
        .get_by_ids_strict(&BTreeSet::from([small.id, large.id]))
        .await
        .unwrap();

    assert_eq!(options.len(), 2);
    assert_eq!(options[&small.id].modifier_id, size.id);
    assert_eq!(options[&large.id].name, "Large");
    assert_eq!(options[&large.id].price, 1.5);
    assert!(!options[&large.id].available);

    Ok(())
}

/// Tests that an unknown option id fails the whole batch.
///
/// Expected: Err(CatalogError::NotFound)
#[tokio::test]
async fn fails_when_any_option_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let size = factory::create_modifier(db, restaurant.id).await?;
    let small = factory::create_modifier_option(db, size.id).await?;

    let repo = ModifierOptionRepository::new(db);
    let result = repo
        .get_by_ids_strict(&BTreeSet::from([small.id, small.id + 50]))
        .await;

    assert!(matches!(result, Err(CatalogError::NotFound { .. })));

    Ok(())
}
