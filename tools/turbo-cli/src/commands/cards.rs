//! Product cards command.

use anyhow::Result;

use super::QueryArgs;
use crate::context::Context;

/// Run the cards command.
pub async fn run(args: QueryArgs, ctx: &Context) -> Result<()> {
    let request = args.to_request(ctx)?;
    if let Ok(json) = serde_json::to_string(&request) {
        ctx.output.debug(&format!("Request: {}", json));
    }
    let service = ctx.service()?;

    let spinner = ctx.output.spinner("Querying product cards...");
    let result = service.product_cards(&request).await;
    spinner.finish_and_clear();
    let cards = result?;

    if ctx.output.is_json() {
        ctx.output.json(&cards);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} products (page {} of {})",
        cards.total_count, cards.current_page, cards.page_info.total_pages
    ));
    if cards.items.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }
    ctx.output.cards(&cards.items);

    if cards.has_more_items {
        ctx.output.info(&format!(
            "More results: --page {}",
            cards.current_page + 1
        ));
    }

    Ok(())
}
