use super::*;

/// Tests writing an order with items and selections.
///
/// Verifies that the header, every item and every selection are stored with the given
/// snapshots and that the returned id reads back the same order.
///
/// Expected: Ok with one order, two items and one selection stored
#[tokio::test]
async fn writes_order_items_and_selections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, burger, _, option) =
        factory::helpers::create_menu_item_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let mut first = item_params(&burger, 2, vec![option_params(&option, 1)]);
    first.special_instructions = Some("no onions".to_string());
    let order_id = repo
        .create(order_params(
            restaurant.id,
            vec![first, item_params(&burger, 1, Vec::new())],
        ))
        .await
        .unwrap();

    assert_eq!(count_order_rows(db).await?, (1, 2, 1));

    let order = repo.get_by_id(order_id).await?.unwrap();
    assert_eq!(order.restaurant_id, restaurant.id);
    assert_eq!(order.order_type, OrderType::Takeout);
    assert_eq!(order.order_status, OrderStatus::Open);
    assert_eq!(order.payment_status, PaymentStatus::Unpaid);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.items[0].item_name, burger.name);
    assert_eq!(order.items[0].special_instructions.as_deref(), Some("no onions"));
    assert_eq!(order.items[0].modifier_options.len(), 1);
    assert_eq!(order.items[0].modifier_options[0].option_name, option.name);
    assert!(order.items[1].modifier_options.is_empty());

    Ok(())
}

/// Tests that a failing item insert rolls back the header.
///
/// Verifies that an item referencing a missing menu item fails on its foreign key after
/// the header was written and that no row of the order remains.
///
/// Expected: Err at stage HeaderWritten tagged StorageInvariant, no rows stored
#[tokio::test]
async fn rolls_back_when_item_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let burger = factory::create_menu_item(db, restaurant.id).await?;

    let mut missing = item_params(&burger, 1, Vec::new());
    missing.menu_item_id = burger.id + 100;

    let repo = OrderRepository::new(db);
    let result = repo
        .create(order_params(
            restaurant.id,
            vec![item_params(&burger, 1, Vec::new()), missing],
        ))
        .await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.stage, WriteStage::HeaderWritten);
    assert!(err.is_constraint_violation());
    assert_eq!(
        OrderError::from(err).kind(),
        OrderErrorKind::StorageInvariant
    );
    assert_eq!(count_order_rows(db).await?, (0, 0, 0));

    Ok(())
}

/// Tests that a duplicate selection on one item rolls back the whole order.
///
/// Verifies that the selection table's primary key refuses the same option twice on one
/// item after every item was written.
///
/// Expected: Err at stage ItemsWritten tagged StorageInvariant, no rows stored
#[tokio::test]
async fn rolls_back_when_selection_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (restaurant, burger, _, option) =
        factory::helpers::create_menu_item_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let result = repo
        .create(order_params(
            restaurant.id,
            vec![item_params(
                &burger,
                1,
                vec![option_params(&option, 1), option_params(&option, 1)],
            )],
        ))
        .await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.stage, WriteStage::ItemsWritten);
    assert!(err.is_constraint_violation());
    assert_eq!(
        OrderError::from(err).kind(),
        OrderErrorKind::StorageInvariant
    );
    assert_eq!(count_order_rows(db).await?, (0, 0, 0));

    Ok(())
}

/// Tests that a failed write leaves earlier orders untouched.
///
/// Expected: Ok for the first order, Err for the second, one order stored
#[tokio::test]
async fn failed_write_keeps_previous_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let restaurant = factory::create_restaurant(db).await?;
    let burger = factory::create_menu_item(db, restaurant.id).await?;

    let repo = OrderRepository::new(db);
    let first = repo
        .create(order_params(
            restaurant.id,
            vec![item_params(&burger, 1, Vec::new())],
        ))
        .await;
    assert!(first.is_ok());

    let second = repo
        .create(order_params(
            restaurant.id + 100,
            vec![item_params(&burger, 1, Vec::new())],
        ))
        .await;
    assert!(second.is_err());
    assert_eq!(second.unwrap_err().stage, WriteStage::Started);

    assert_eq!(count_order_rows(db).await?, (1, 1, 0));

    Ok(())
}
