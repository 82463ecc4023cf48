use super::*;

/// Tests deleting an order with items and selections.
///
/// Verifies that items and selections are removed with the order while the catalog rows
/// they referenced remain.
///
/// Expected: Ok(true) with no order rows left
#[tokio::test]
async fn deletes_order_and_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, burger, _, option) =
        factory::helpers::create_menu_item_with_dependencies(db).await?;
    let order = factory::create_order(db, restaurant.id).await?;
    let item = factory::create_order_item(db, order.id, &burger, 1).await?;
    insert_selection(db, item.id, &option, 1).await?;

    let repo = OrderRepository::new(db);
    let deleted = repo.delete(order.id).await?;

    assert!(deleted);
    assert_eq!(count_order_rows(db).await?, (0, 0, 0));
    assert!(entity::prelude::MenuItem::find_by_id(burger.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that deleting one order leaves others in place.
///
/// Expected: Ok(true) with the other order still stored
#[tokio::test]
async fn deletes_only_requested_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let first = factory::create_order(db, restaurant.id).await?;
    let second = factory::create_order(db, restaurant.id).await?;

    let repo = OrderRepository::new(db);
    assert!(repo.delete(first.id).await?);

    assert!(repo.get_by_id(first.id).await?.is_none());
    assert!(repo.get_by_id(second.id).await?.is_some());

    Ok(())
}

/// Tests deleting a nonexistent order.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let deleted = repo.delete(99).await?;

    assert!(!deleted);

    Ok(())
}
