use super::*;

/// Tests patching an order's payment status.
///
/// Expected: Ok(Some) with the order paid
#[tokio::test]
async fn updates_payment_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let order = factory::create_order(db, restaurant.id).await?;

    let service = OrderService::new(db);
    let result = service
        .update(UpdateOrderParams {
            id: order.id,
            order_type: None,
            order_status: None,
            payment_status: Some(PaymentStatus::Paid),
        })
        .await
        .unwrap();

    assert!(result.is_some());
    assert_eq!(result.unwrap().payment_status, PaymentStatus::Paid);

    Ok(())
}

/// Tests a patch without any field.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_patch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let order = factory::create_order(db, restaurant.id).await?;

    let service = OrderService::new(db);
    let result = service
        .update(UpdateOrderParams {
            id: order.id,
            order_type: None,
            order_status: None,
            payment_status: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

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

    let service = OrderService::new(db);
    let result = service
        .update(UpdateOrderParams {
            id: 12,
            order_type: Some(OrderType::Delivery),
            order_status: None,
            payment_status: None,
        })
        .await
        .unwrap();

    assert!(result.is_none());

    Ok(())
}
