use super::*;

/// Tests fetching menu items together with their modifier groups.
///
/// Verifies that every requested item is returned keyed by id, that attached groups are
/// loaded, and that an item without groups gets an empty list.
///
/// Expected: Ok with both items and their groups
#[tokio::test]
async fn fetches_items_with_modifiers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let burger = factory::create_menu_item(db, restaurant.id).await?;
    let fries = factory::create_menu_item(db, restaurant.id).await?;
    let size = factory::modifier::ModifierFactory::new(db, restaurant.id)
        .name("Size")
        .required(true)
        .max(2)
        .build()
        .await?;
    let sauce = factory::create_modifier(db, restaurant.id).await?;
    factory::attach_modifier(db, burger.id, size.id).await?;
    factory::attach_modifier(db, burger.id, sauce.id).await?;

    let repo = MenuItemRepository::new(db);
    let result = repo
        .get_by_ids_strict(&BTreeSet::from([burger.id, fries.id]), true)
        .await;

    assert!(result.is_ok());
    let items = result.unwrap();
    assert_eq!(items.len(), 2);

    let burger_groups = items[&burger.id].modifiers.as_ref().unwrap();
    assert_eq!(burger_groups.len(), 2);
    assert!(burger_groups
        .iter()
        .any(|group| group.id == size.id && group.required && group.max == 2));
    assert!(items[&burger.id].modifier(sauce.id).is_some());

    assert_eq!(
        items[&fries.id].modifiers.as_ref().map(Vec::is_empty),
        Some(true)
    );

    Ok(())
}

/// Tests fetching menu items without their modifier groups.
///
/// Expected: Ok with `modifiers` left as None
#[tokio::test]
async fn fetches_items_without_modifiers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, menu_item, _, _) = factory::helpers::create_menu_item_with_dependencies(db).await?;

    let repo = MenuItemRepository::new(db);
    let items = repo
        .get_by_ids_strict(&BTreeSet::from([menu_item.id]), false)
        .await
        .unwrap();

    assert_eq!(items[&menu_item.id].name, menu_item.name);
    assert_eq!(items[&menu_item.id].price, menu_item.price);
    assert!(items[&menu_item.id].modifiers.is_none());

    Ok(())
}

/// Tests that one missing id fails the whole batch.
///
/// Expected: Err(CatalogError::NotFound) with 2 requested and 1 found
#[tokio::test]
async fn fails_when_any_item_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let burger = factory::create_menu_item(db, restaurant.id).await?;

    let repo = MenuItemRepository::new(db);
    let result = repo
        .get_by_ids_strict(&BTreeSet::from([burger.id, burger.id + 100]), true)
        .await;

    assert!(matches!(
        result,
        Err(CatalogError::NotFound {
            requested: 2,
            found: 1,
            ..
        })
    ));

    Ok(())
}

/// Tests fetching with an empty id set.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenuItemRepository::new(db);
    let items = repo.get_by_ids_strict(&BTreeSet::new(), true).await.unwrap();

    assert!(items.is_empty());

    Ok(())
}
