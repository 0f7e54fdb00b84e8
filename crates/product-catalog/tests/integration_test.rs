use std::io::Write;
use std::sync::Arc;

use product_catalog::clients::CatalogClient;
use product_catalog::config::CatalogConfig;
use product_catalog::error::CatalogError;
use product_catalog::ids::SequentialIds;
use product_catalog::lifecycle::CatalogSystem;
use product_catalog::model::{DraftChange, ProductField, ProductId};
use product_catalog::seed::Seed;
use product_catalog::session::{CatalogSnapshot, FormState, SubmitOutcome};
use product_catalog::validation::{IMAGE_URL_MESSAGE, PRICE_MESSAGE};
use session_framework::DomainClient;

fn sequential_system(config: &CatalogConfig) -> CatalogSystem {
    CatalogSystem::with_parts(
        Seed::embedded().expect("embedded seed"),
        config,
        Arc::new(SequentialIds::new()),
    )
    .expect("Failed to start catalog system")
}

async fn read_snapshot(client: &CatalogClient) -> CatalogSnapshot {
    client.snapshot().await.expect("Failed to read snapshot")
}

async fn fill_valid_draft(system: &CatalogSystem) {
    let client = &system.catalog_client;
    for change in [
        DraftChange::Title("  Mirrorless camera body  ".into()),
        DraftChange::Description("24MP sensor, weather sealed, two card slots.".into()),
        DraftChange::ImageUrl("https://example.com/camera.png".into()),
        DraftChange::Price("899".into()),
    ] {
        client.change_field(change).await.expect("Failed to edit draft");
    }
}

/// Full end-to-end flow through the real actor: a rejected submit, a fix, and a commit.
#[tokio::test]
async fn test_full_catalog_flow() {
    let system = sequential_system(&CatalogConfig::default());
    let client = system.catalog_client.clone();

    let initial = client.products().await.expect("Failed to read products");
    let initial_len = initial.len();

    client.open_form().await.expect("Failed to open form");
    client
        .change_field(DraftChange::Title("Ab".into()))
        .await
        .unwrap();

    // Everything but colors fails on an almost empty draft
    let errors = match client.submit().await.unwrap() {
        SubmitOutcome::Rejected(errors) => errors,
        other => panic!("Expected rejection, got {other:?}"),
    };
    assert_eq!(
        errors.invalid_fields(),
        vec![
            ProductField::Title,
            ProductField::Description,
            ProductField::ImageUrl,
            ProductField::Price,
        ]
    );
    assert_eq!(errors.image_url, IMAGE_URL_MESSAGE);
    assert_eq!(errors.price, PRICE_MESSAGE);

    // Editing a field clears only that field's error
    client
        .change_field(DraftChange::Price("899".into()))
        .await
        .unwrap();
    let snapshot = read_snapshot(&client).await;
    assert!(snapshot.errors.price.is_empty());
    assert!(!snapshot.errors.title.is_empty());
    assert_eq!(snapshot.form, FormState::Open);

    fill_valid_draft(&system).await;
    assert!(client.toggle_color("#FF0032".into()).await.unwrap());
    assert!(client.toggle_color("#000000".into()).await.unwrap());
    assert!(!client.toggle_color("#000000".into()).await.unwrap());
    client.select_category("Camera").await.unwrap();

    let outcome = client.submit().await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Committed(ProductId::from("product_1")));

    let products = client.products().await.unwrap();
    assert_eq!(products.len(), initial_len + 1);
    let newest = &products[0];
    assert_eq!(newest.title, "Mirrorless camera body");
    assert_eq!(newest.price, "899");
    assert_eq!(newest.category.name, "Camera");
    assert_eq!(newest.colors.len(), 1);
    assert_eq!(newest.colors[0].as_str(), "#FF0032");

    // The committed draft is gone and the form is closed
    let snapshot = read_snapshot(&client).await;
    assert_eq!(snapshot.form, FormState::Closed);
    assert!(snapshot.draft.is_empty());
    assert!(snapshot.selected_colors.is_empty());
    assert!(snapshot.errors.is_clean());

    let cards = client.cards().await.unwrap();
    assert_eq!(cards[0].price_label, "$899");

    drop(client);
    let session = system.shutdown().await.expect("Failed to shut down");
    assert_eq!(session.products().len(), initial_len + 1);
}

#[tokio::test]
async fn test_form_guards_and_cancel() {
    let system = sequential_system(&CatalogConfig::default());
    let client = &system.catalog_client;

    assert_eq!(client.submit().await, Err(CatalogError::FormClosed));
    assert_eq!(
        client.change_field(DraftChange::Title("x".into())).await,
        Err(CatalogError::FormClosed)
    );

    client.open_form().await.unwrap();
    client.open_form().await.unwrap();
    fill_valid_draft(&system).await;
    assert_eq!(
        client.select_category("Boats").await,
        Err(CatalogError::UnknownCategory("Boats".into()))
    );
    client.cancel_form().await.unwrap();

    assert_eq!(client.cancel_form().await, Err(CatalogError::FormClosed));

    let session = system.shutdown().await.unwrap();
    assert_eq!(session.form_state(), FormState::Closed);
    assert!(session.draft().is_empty());
}

#[tokio::test]
async fn test_require_color_rejects_colorless_draft() {
    let mut config = CatalogConfig::default();
    config.rules.require_color = true;
    let system = sequential_system(&config);
    let client = &system.catalog_client;

    client.open_form().await.unwrap();
    fill_valid_draft(&system).await;

    match client.submit().await.unwrap() {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(errors.invalid_fields(), vec![ProductField::Colors]);
        }
        other => panic!("Expected rejection, got {other:?}"),
    }

    client.toggle_color("#1F8A70".into()).await.unwrap();
    assert!(matches!(
        client.submit().await.unwrap(),
        SubmitOutcome::Committed(_)
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_generated_id_leaves_state_unchanged() {
    let config = CatalogConfig::default();
    let system = CatalogSystem::with_parts(
        Seed::embedded().unwrap(),
        &config,
        Arc::new(SequentialIds::starting_at("seed", 1)),
    )
    .unwrap();
    let client = &system.catalog_client;

    client.open_form().await.unwrap();
    fill_valid_draft(&system).await;

    assert_eq!(
        client.submit().await,
        Err(CatalogError::DuplicateId(ProductId::from("seed_1")))
    );
    let snapshot = read_snapshot(client).await;
    assert_eq!(snapshot.form, FormState::Open);
    assert!(!snapshot.draft.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_start_loads_seed_from_configured_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "products": [],
            "categories": [{{ "name": "Books", "imageURL": "https://example.com/books.png" }}]
        }}"#
    )
    .unwrap();

    let config = CatalogConfig {
        seed_path: Some(file.path().to_path_buf()),
        ..CatalogConfig::default()
    };
    let system = CatalogSystem::start(&config).unwrap();

    let snapshot = read_snapshot(&system.catalog_client).await;
    assert!(snapshot.products.is_empty());
    assert_eq!(snapshot.selected_category.name, "Books");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_mailbox_capacity_is_rejected_before_spawning() {
    let config = CatalogConfig {
        mailbox_capacity: 0,
        ..CatalogConfig::default()
    };
    let result = CatalogSystem::with_parts(
        Seed::embedded().unwrap(),
        &config,
        Arc::new(SequentialIds::new()),
    );
    assert!(matches!(result, Err(CatalogError::InvalidConfig(_))));
}

#[tokio::test]
async fn test_start_fails_on_missing_seed_file() {
    let config = CatalogConfig {
        seed_path: Some("/definitely/not/here.json".into()),
        ..CatalogConfig::default()
    };
    assert!(matches!(
        CatalogSystem::start(&config),
        Err(CatalogError::Seed(_))
    ));
}
