//! Product search command.

use anyhow::Result;

use super::QueryArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: QueryArgs, ctx: &Context) -> Result<()> {
    let request = args.to_request(ctx)?;
    if let Ok(json) = serde_json::to_string(&request) {
        ctx.output.debug(&format!("Request: {}", json));
    }
    let service = ctx.service()?;

    let spinner = ctx.output.spinner("Searching products...");
    let response = service.product_search(&request).await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&response);
        return Ok(());
    }

    let products = &response.products;
    ctx.output.header(&format!(
        "{} products (page {} of {})",
        response.total_count, products.current_page, products.page_info.total_pages
    ));
    if products.items.is_empty() {
        // A failed backend also lands here; the error log has the cause.
        ctx.output.info("No products found.");
    } else {
        ctx.output.cards(&products.items);
    }

    if !response.facets.facets.is_empty() {
        ctx.output.header("Filters");
        ctx.output.facets(&response.facets.facets);
    }

    if products.has_more_items {
        ctx.output.info(&format!(
            "More results: --page {}",
            products.current_page + 1
        ));
    }

    Ok(())
}
