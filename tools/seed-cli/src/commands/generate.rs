//! Generate fixture files.

use anyhow::{Context as _, Result};
use serde::Serialize;
use turbo_fixtures::prelude::*;

use super::GenerateArgs;
use crate::context::Context;

/// Machine-readable result of a generate run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateSummary {
    output_dir: String,
    products_file: String,
    reviews_file: String,
    products: usize,
    reviews: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

/// Run the generate command.
pub fn run(args: GenerateArgs, ctx: &Context) -> Result<()> {
    let out_dir = ctx.output_dir(args.out_dir.as_deref());
    let seed = args.seed.or(ctx.config.generator.seed);

    tracing::info!(seed = ?seed, dir = %out_dir.display(), "starting fixture run");
    ctx.output.header("Generating fixtures");

    let mut generator = match seed {
        Some(seed) => {
            ctx.output.debug(&format!("Using seed {}", seed));
            FixtureGenerator::seeded(seed)
        }
        None => FixtureGenerator::from_entropy(),
    };

    let fixtures = generator.generate().context("Failed to generate fixtures")?;
    ctx.output.step(
        1,
        2,
        &format!(
            "Generated {} reviews and {} products",
            fixtures.reviews.len(),
            fixtures.products.len()
        ),
    );

    let paths = write_fixtures(&out_dir, &fixtures)
        .with_context(|| format!("Failed to write fixtures to {}", out_dir.display()))?;
    ctx.output.step(2, 2, "Wrote fixture files");

    if ctx.output.is_json() {
        ctx.output.json(&GenerateSummary {
            output_dir: out_dir.display().to_string(),
            products_file: paths.products.display().to_string(),
            reviews_file: paths.reviews.display().to_string(),
            products: fixtures.products.len(),
            reviews: fixtures.reviews.len(),
            seed,
        });
        return Ok(());
    }

    ctx.output.success(&format!(
        "Done! Generated products.json and reviews.json in {}",
        out_dir.display()
    ));
    ctx.output.kv("products", &paths.products.display().to_string());
    ctx.output.kv("reviews", &paths.reviews.display().to_string());

    Ok(())
}
