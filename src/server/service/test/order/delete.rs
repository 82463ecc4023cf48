use super::*;

/// Tests deleting an order created through the service.
///
/// Expected: Ok(true) and the order no longer found
#[tokio::test]
async fn deletes_created_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = seed_catalog(db).await?;

    let service = OrderService::new(db);
    let order = service
        .create(input(
            catalog.restaurant.id,
            vec![line(&catalog.burger, 1, &[(&catalog.small, 1)])],
        ))
        .await
        .unwrap();

    assert!(service.delete(order.id).await.unwrap());
    assert!(service.get_by_id(order.id).await.unwrap().is_none());
    assert_eq!(count_order_rows(db).await?, (0, 0, 0));

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

    let service = OrderService::new(db);

    assert!(!service.delete(3).await.unwrap());

    Ok(())
}
