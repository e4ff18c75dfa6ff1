use kiosk::config::KioskConfig;
use kiosk::lifecycle::KioskSystem;
use kiosk::model::{CartRow, Screen, SessionId};
use kiosk::order_flow::{Notice, OrderFlowError};
use kiosk::render::{CartTable, View};
use session_actor::SessionAccess;

#[tokio::test]
async fn test_full_order_flow() {
    let system = KioskSystem::with_defaults().unwrap();
    assert_eq!(system.config().session.buffer_size, 32);
    let client = &system.client;

    let id = client.open_session().await.unwrap();

    client.add_menu_item(id, "불고기 버거").await.unwrap();
    let notice = client.add_menu_item(id, "불고기 버거").await.unwrap();
    assert_eq!(
        notice,
        Notice::Added {
            name: "불고기 버거".into(),
            quantity: 2
        }
    );

    let session = client.snapshot(id).await.unwrap().unwrap();
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart().lines()[0].quantity, 2);
    assert_eq!(session.total(), 9000);

    assert_eq!(
        client.proceed_to_payment(id).await.unwrap(),
        Notice::MovedToPayment { total: 9000 }
    );
    let view = client.view(id, system.payment_methods()).await.unwrap();
    let View::Paying(payment) = view else {
        panic!("expected payment screen, got {view:?}");
    };
    assert_eq!(payment.total, 9000);
    assert_eq!(payment.methods.len(), 3);

    let notice = client.confirm_payment(id, "간편 결제 (Pay)").await.unwrap();
    let Notice::OrderCompleted(receipt) = notice else {
        panic!("expected OrderCompleted, got {notice:?}");
    };
    assert_eq!(receipt.method, "간편 결제 (Pay)");
    assert_eq!(receipt.total, 9000);

    let session = client.snapshot(id).await.unwrap().unwrap();
    assert!(session.cart().is_empty());
    assert_eq!(session.screen(), Screen::Selecting);

    client.close_session(id).await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_cart_cannot_pay() {
    let system = KioskSystem::with_defaults().unwrap();
    let client = &system.client;
    let id = client.open_session().await.unwrap();

    let err = client.proceed_to_payment(id).await.unwrap_err();
    assert_eq!(err, OrderFlowError::EmptyCart);

    let session = client.snapshot(id).await.unwrap().unwrap();
    assert_eq!(session.screen(), Screen::Selecting);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_back_to_menu_then_edit_table() {
    let system = KioskSystem::with_defaults().unwrap();
    let client = &system.client;
    let id = client.open_session().await.unwrap();

    client.add_menu_item(id, "새우 버거").await.unwrap();
    client.add_menu_item(id, "콜라").await.unwrap();
    client.proceed_to_payment(id).await.unwrap();

    // Cart is frozen on the payment screen
    let err = client.add_menu_item(id, "콜라").await.unwrap_err();
    assert!(matches!(
        err,
        OrderFlowError::UnexpectedEvent {
            screen: Screen::Paying,
            ..
        }
    ));

    assert_eq!(client.back_to_menu(id).await.unwrap(), Notice::BackToMenu);

    let view = client.view(id, system.payment_methods()).await.unwrap();
    let View::Selecting { cart, .. } = view else {
        panic!("expected menu screen, got {view:?}");
    };
    assert_eq!(cart.total, 4800 + 1800);

    // Edit the table: drop the burger, three colas, one new item
    let mut rows = cart.to_snapshot();
    rows[0].quantity = 0;
    rows[1].quantity = 3;
    rows.push(CartRow::new("양념감자", 1, 2000));
    let notice = client.apply_table_edit(id, rows).await.unwrap();
    assert_eq!(
        notice,
        Notice::CartReplaced {
            lines: 2,
            total: 1800 * 3 + 2000
        }
    );

    let session = client.snapshot(id).await.unwrap().unwrap();
    let table = CartTable::from_cart(session.cart());
    let names: Vec<&str> = table.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["콜라", "양념감자"]);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_item_and_unknown_session() {
    let system = KioskSystem::with_defaults().unwrap();
    let client = &system.client;
    let id = client.open_session().await.unwrap();

    assert_eq!(
        client.add_menu_item(id, "피자").await.unwrap_err(),
        OrderFlowError::UnknownMenuItem("피자".into())
    );

    let ghost = SessionId(999);
    assert_eq!(
        client.add_menu_item(ghost, "콜라").await.unwrap_err(),
        OrderFlowError::SessionNotFound("session_999".into())
    );
    assert!(client.snapshot(ghost).await.unwrap().is_none());
    assert!(matches!(
        client.close_session(ghost).await,
        Err(OrderFlowError::SessionNotFound(_))
    ));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let system = KioskSystem::with_defaults().unwrap();
    let client = &system.client;

    let first = client.open_session().await.unwrap();
    let second = client.open_session().await.unwrap();
    assert_ne!(first, second);
    assert_eq!(client.open_sessions().await.unwrap(), 2);

    client.add_menu_item(first, "아메리카노").await.unwrap();
    client.proceed_to_payment(first).await.unwrap();

    let other = client.snapshot(second).await.unwrap().unwrap();
    assert!(other.cart().is_empty());
    assert_eq!(other.screen(), Screen::Selecting);

    client.close_session(first).await.unwrap();
    assert_eq!(client.open_sessions().await.unwrap(), 1);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_kiosks() {
    let system = KioskSystem::with_defaults().unwrap();

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let client = system.client.clone();
        tasks.push(tokio::spawn(async move {
            let id = client.open_session().await?;
            for _ in 0..3 {
                client.add_menu_item(id, "치즈 스틱").await?;
            }
            client.proceed_to_payment(id).await?;
            client.confirm_payment(id, "상품권 / 쿠폰").await
        }));
    }

    for task in tasks {
        let notice = task.await.unwrap().unwrap();
        assert!(matches!(notice, Notice::OrderCompleted(r) if r.total == 1800 * 3));
    }

    assert_eq!(system.client.open_sessions().await.unwrap(), 10);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_custom_config_file() {
    let path = std::env::temp_dir().join(format!("kiosk-test-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
            payment_methods = ["현금"]

            [session]
            buffer_size = 4

            [[categories]]
            name = "음료"

            [[categories.items]]
            name = "식혜"
            price = 2200
        "#,
    )
    .unwrap();

    let config = KioskConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let system = KioskSystem::new(config).unwrap();
    assert_eq!(system.config().session.buffer_size, 4);
    assert_eq!(system.config().payment_methods, vec!["현금".to_string()]);
    assert_eq!(system.catalog().item_count(), 1);

    let id = system.client.open_session().await.unwrap();
    system.client.add_menu_item(id, "식혜").await.unwrap();
    system.client.proceed_to_payment(id).await.unwrap();
    let notice = system.client.confirm_payment(id, "현금").await.unwrap();
    assert!(matches!(notice, Notice::OrderCompleted(r) if r.total == 2200));
    system.shutdown().await.unwrap();
}
