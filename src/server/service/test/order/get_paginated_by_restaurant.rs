use super::*;

/// Tests pagination metadata for a restaurant's orders.
///
/// Expected: Ok with total 3, two orders on the page and two pages
#[tokio::test]
async fn computes_page_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    for _ in 0..3 {
        factory::create_order(db, restaurant.id).await?;
    }

    let service = OrderService::new(db);
    let page = service
        .get_paginated_by_restaurant(restaurant.id, 0, 2)
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.orders.len(), 2);
    assert_eq!(page.page, 0);
    assert_eq!(page.per_page, 2);
    assert_eq!(page.total_pages, 2);

    Ok(())
}

/// Tests a restaurant without orders.
///
/// Expected: Ok with zero total and zero pages
#[tokio::test]
async fn returns_empty_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;

    let service = OrderService::new(db);
    let page = service
        .get_paginated_by_restaurant(restaurant.id, 0, 10)
        .await
        .unwrap();

    assert!(page.orders.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);

    Ok(())
}

/// Tests a page whose row offset does not fit in a u64.
///
/// Expected: Err(AppError::BadRequest) without querying
#[tokio::test]
async fn rejects_page_offset_overflow() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    factory::create_order(db, restaurant.id).await?;

    let service = OrderService::new(db);
    let result = service
        .get_paginated_by_restaurant(restaurant.id, u64::MAX / 2, 10)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a page size of zero.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_zero_page_size() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OrderService::new(db);
    let result = service.get_paginated_by_restaurant(1, 0, 0).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
