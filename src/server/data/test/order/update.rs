use super::*;

/// Tests patching only the order status.
///
/// Verifies that the status changes, other header fields keep their values, items are
/// untouched and `updated_at` moves forward.
///
/// Expected: Ok(Some) with the new status
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let burger = factory::create_menu_item(db, restaurant.id).await?;
    let order = factory::order::OrderFactory::new(db, restaurant.id)
        .order_type(OrderType::Delivery)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    factory::create_order_item(db, order.id, &burger, 1).await?;

    let repo = OrderRepository::new(db);
    let result = repo
        .update(UpdateOrderParams {
            id: order.id,
            order_type: None,
            order_status: Some(OrderStatus::Confirmed),
            payment_status: None,
        })
        .await?;

    assert!(result.is_some());
    let updated = result.unwrap();
    assert_eq!(updated.order_status, OrderStatus::Confirmed);
    assert_eq!(updated.order_type, OrderType::Delivery);
    assert_eq!(updated.payment_status, PaymentStatus::Unpaid);
    assert_eq!(updated.items.len(), 1);
    assert!(updated.updated_at > order.updated_at);

    Ok(())
}

/// Tests patching every header field at once.
///
/// Expected: Ok(Some) with all three fields changed
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let order = factory::create_order(db, restaurant.id).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(UpdateOrderParams {
            id: order.id,
            order_type: Some(OrderType::Takeout),
            order_status: Some(OrderStatus::Completed),
            payment_status: Some(PaymentStatus::Paid),
        })
        .await?
        .unwrap();

    assert_eq!(updated.order_type, OrderType::Takeout);
    assert_eq!(updated.order_status, OrderStatus::Completed);
    assert_eq!(updated.payment_status, PaymentStatus::Paid);

    Ok(())
}

/// Tests patching a nonexistent order.
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
    let result = repo
        .update(UpdateOrderParams {
            id: 7,
            order_type: None,
            order_status: Some(OrderStatus::Cancelled),
            payment_status: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
