use product_catalog::catalog_actor::{CatalogEvent, CatalogOutcome};
use product_catalog::clients::CatalogClient;
use product_catalog::error::CatalogError;
use product_catalog::model::{Category, DraftChange, ProductId};
use product_catalog::seed::Seed;
use product_catalog::session::{CatalogSession, SubmitOutcome};
use product_catalog::validation::ValidationRules;
use session_framework::mock::MockSession;
use session_framework::FrameworkError;

/// Client against a scripted session: checks the events it sends and how it unpacks
/// the answers, without a real session behind it.
#[tokio::test]
async fn test_client_sends_one_event_per_interaction() {
    let mut mock = MockSession::<CatalogSession>::new();
    mock.expect_event().return_ok(CatalogOutcome::Open(()));
    mock.expect_event().return_ok(CatalogOutcome::Change(()));
    mock.expect_event()
        .return_ok(CatalogOutcome::SelectCategory(Category::new(
            "Cars",
            "https://example.com/cars.png",
        )));
    mock.expect_event()
        .return_ok(CatalogOutcome::Submit(SubmitOutcome::Committed(
            ProductId::from("product_1"),
        )));

    let client = CatalogClient::new(mock.client());

    client.open_form().await.unwrap();
    client
        .change_field(DraftChange::Price("12".into()))
        .await
        .unwrap();
    let category = client.select_category("Cars").await.unwrap();
    assert_eq!(category.name, "Cars");
    assert_eq!(
        client.submit().await.unwrap(),
        SubmitOutcome::Committed(ProductId::from("product_1"))
    );

    mock.verify();
    assert_eq!(
        mock.received(),
        vec![
            CatalogEvent::Open,
            CatalogEvent::Change(DraftChange::Price("12".into())),
            CatalogEvent::SelectCategory("Cars".into()),
            CatalogEvent::Submit,
        ]
    );
}

#[tokio::test]
async fn test_cards_are_built_from_snapshot() {
    let session = CatalogSession::new(Seed::embedded().unwrap(), ValidationRules::default())
        .expect("embedded seed is valid");
    let snapshot = session.snapshot();
    let expected_len = snapshot.products.len();

    let mut mock = MockSession::<CatalogSession>::new();
    mock.expect_snapshot().return_ok(snapshot);

    let client = CatalogClient::new(mock.client());
    let cards = client.cards().await.unwrap();

    assert_eq!(cards.len(), expected_len);
    assert!(cards.iter().all(|card| card.price_label.starts_with('$')));
    mock.verify();
}

#[tokio::test]
async fn test_session_errors_reach_the_caller() {
    let mut mock = MockSession::<CatalogSession>::new();
    mock.expect_event()
        .return_err(FrameworkError::StateError(Box::new(
            CatalogError::UnknownCategory("Boats".into()),
        )));
    mock.expect_event().return_err(FrameworkError::ActorClosed);

    let client = CatalogClient::new(mock.client());

    assert_eq!(
        client.select_category("Boats").await,
        Err(CatalogError::UnknownCategory("Boats".into()))
    );
    assert!(matches!(
        client.toggle_color("#FF0032".into()).await,
        Err(CatalogError::ActorCommunicationError(_))
    ));
    mock.verify();
}
