use super::*;

/// Tests listing orders newest first.
///
/// Verifies that orders are sorted by creation time descending, that the page size is
/// honored and that the total counts every order of the restaurant.
///
/// Expected: Ok with the two newest orders on page 0 and total 3
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let now = Utc::now();
    let oldest = factory::order::OrderFactory::new(db, restaurant.id)
        .created_at(now - Duration::minutes(30))
        .build()
        .await?;
    let newest = factory::order::OrderFactory::new(db, restaurant.id)
        .created_at(now)
        .build()
        .await?;
    let middle = factory::order::OrderFactory::new(db, restaurant.id)
        .created_at(now - Duration::minutes(10))
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let (orders, total) = repo.get_paginated_by_restaurant(restaurant.id, 0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        orders.iter().map(|order| order.id).collect::<Vec<_>>(),
        vec![newest.id, middle.id]
    );

    let (orders, _) = repo.get_paginated_by_restaurant(restaurant.id, 1, 2).await?;
    assert_eq!(
        orders.iter().map(|order| order.id).collect::<Vec<_>>(),
        vec![oldest.id]
    );

    Ok(())
}

/// Tests that listing only returns orders of the requested restaurant.
///
/// Expected: Ok with one hydrated order and total 1
#[tokio::test]
async fn filters_by_restaurant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let other = factory::create_restaurant(db).await?;
    let burger = factory::create_menu_item(db, restaurant.id).await?;

    let order = factory::create_order(db, restaurant.id).await?;
    factory::create_order_item(db, order.id, &burger, 2).await?;
    factory::create_order(db, other.id).await?;

    let repo = OrderRepository::new(db);
    let (orders, total) = repo
        .get_paginated_by_restaurant(restaurant.id, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order.id);
    assert_eq!(orders[0].items.len(), 1);
    assert_eq!(orders[0].items[0].quantity, 2);

    Ok(())
}

/// Tests listing a page past the end.
///
/// Expected: Ok with no orders and the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    factory::create_order(db, restaurant.id).await?;

    let repo = OrderRepository::new(db);
    let (orders, total) = repo
        .get_paginated_by_restaurant(restaurant.id, 5, 10)
        .await?;

    assert!(orders.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
