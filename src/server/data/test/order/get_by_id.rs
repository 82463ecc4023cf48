use super::*;

/// Tests reading an order with its items and selections.
///
/// Verifies that items come back in creation order and each item's selections are
/// ordered by modifier option id regardless of insertion order.
///
/// Expected: Ok(Some) with hydrated items and sorted selections
#[tokio::test]
async fn returns_hydrated_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, burger, size, small) =
        factory::helpers::create_menu_item_with_dependencies(db).await?;
    let large = factory::modifier_option::ModifierOptionFactory::new(db, size.id)
        .name("Large")
        .price(1.5)
        .build()
        .await?;

    let order = factory::create_order(db, restaurant.id).await?;
    let first = factory::create_order_item(db, order.id, &burger, 1).await?;
    let second = factory::create_order_item(db, order.id, &burger, 3).await?;
    insert_selection(db, first.id, &large, 1).await?;
    insert_selection(db, first.id, &small, 1).await?;

    let repo = OrderRepository::new(db);
    let result = repo.get_by_id(order.id).await?;

    assert!(result.is_some());
    let hydrated = result.unwrap();
    assert_eq!(hydrated.id, order.id);
    assert_eq!(
        hydrated.items.iter().map(|item| item.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert_eq!(
        hydrated.items[0]
            .modifier_options
            .iter()
            .map(|option| option.modifier_option_id)
            .collect::<Vec<_>>(),
        vec![small.id, large.id]
    );
    assert_eq!(hydrated.items[0].modifier_options[1].option_price, 1.5);
    assert!(hydrated.items[1].modifier_options.is_empty());

    Ok(())
}

/// Tests reading an order that has no items.
///
/// Expected: Ok(Some) with an empty item list
#[tokio::test]
async fn returns_order_without_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let order = factory::create_order(db, restaurant.id).await?;

    let repo = OrderRepository::new(db);
    let hydrated = repo.get_by_id(order.id).await?.unwrap();

    assert!(hydrated.items.is_empty());

    Ok(())
}

/// Tests reading a nonexistent order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let result = repo.get_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}
