use product_catalog::config::CatalogConfig;
use product_catalog::lifecycle::CatalogSystem;
use product_catalog::model::DraftChange;
use product_catalog::session::SubmitOutcome;
use session_framework::setup_tracing;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = CatalogConfig::from_env()?;
    info!(
        title_min = config.rules.title.min,
        title_max = config.rules.title.max,
        require_color = config.rules.require_color,
        "Starting product catalog"
    );

    let system = CatalogSystem::start(&config)?;
    let client = &system.catalog_client;

    let span = tracing::info_span!("rejected_draft");
    async {
        client.open_form().await?;
        client.change_field(DraftChange::Title("Ab".into())).await?;
        match client.submit().await? {
            SubmitOutcome::Rejected(errors) => {
                for field in errors.invalid_fields() {
                    warn!(%field, message = errors.get(field), "Field rejected");
                }
            }
            SubmitOutcome::Committed(id) => info!(product_id = %id, "Unexpected commit"),
        }
        client.cancel_form().await
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("committed_draft");
    let outcome = async {
        client.open_form().await?;
        for change in [
            DraftChange::Title("Trail running shoes".into()),
            DraftChange::Description("Lightweight shoes with a grippy outsole.".into()),
            DraftChange::ImageUrl("https://example.com/shoes.png".into()),
            DraftChange::Price("129.99".into()),
        ] {
            client.change_field(change).await?;
        }
        client.toggle_color("#FF0032".into()).await?;
        client.toggle_color("#000000".into()).await?;
        client.select_category("Nike").await?;
        client.submit().await
    }
    .instrument(span)
    .await?;

    if let SubmitOutcome::Committed(id) = &outcome {
        info!(product_id = %id, "Product committed");
    }

    for card in system.catalog_client.cards().await? {
        info!(
            id = %card.id,
            title = %card.title,
            price = %card.price_label,
            category = %card.category_name,
            "Card"
        );
    }

    let session = system.shutdown().await?;
    info!(products = session.products().len(), "Application completed successfully");
    Ok(())
}
