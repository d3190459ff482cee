//! Verify fixture files on disk.

use anyhow::{bail, Context as _, Result};
use turbo_fixtures::check::violations;
use turbo_fixtures::prelude::*;

use super::CheckArgs;
use crate::context::Context;

/// Run the check command.
pub fn run(args: CheckArgs, ctx: &Context) -> Result<()> {
    let dir = ctx.output_dir(args.out_dir.as_deref());
    ctx.output.header("Checking fixtures");
    ctx.output.debug(&format!("Reading {}", dir.display()));

    let fixtures = match load_fixtures(&dir) {
        Ok(fixtures) => fixtures,
        Err(e) if e.is_io() => {
            bail!("{}; run `seed generate` first", e)
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to load fixtures from {}", dir.display()))
        }
    };

    let found = violations(&fixtures);
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "outputDir": dir.display().to_string(),
            "products": fixtures.products.len(),
            "reviews": fixtures.reviews.len(),
            "violations": found,
        }));
    } else {
        for violation in &found {
            ctx.output.list_item(violation);
        }
    }

    if !found.is_empty() {
        bail!("{} fixture violation(s) in {}", found.len(), dir.display());
    }

    ctx.output.success(&format!(
        "{} products and {} reviews are consistent",
        fixtures.products.len(),
        fixtures.reviews.len()
    ));
    Ok(())
}
