//! Maestro Fixtures - exports resolved fixture documents for the test runner.
//!
//! # Execution Flow
//!
//! 1. Parse CLI flags
//! 2. Load [`ResolverSettings`] (settings file, then `FIXTURES__*` variables, then flags)
//! 3. Initialize logging → `<log_dir>/maestro-fixtures.<date>`
//! 4. Resolve each requested platform variant, reading `APP_MODE` from the process environment
//! 5. Write `<output_dir>/<variant>.<format>` or print the documents to stdout

use anyhow::{Context, Result};
use clap::Parser;
use maestro_fixtures::cli::Cli;
use maestro_fixtures::config::render_fixtures;
use maestro_fixtures::{
    APP_NAME, FixtureResolver, FixtureStore, ProcessEnv, ResolverSettings, VERSION,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = cli.apply_to(
        ResolverSettings::load(cli.settings.as_deref()).context("Failed to load settings")?,
    );

    // Console logging would interleave with documents on stdout, so it goes to stderr
    let _guard = maestro_fixtures::logging::setup_logging_with_console(
        &settings.log_dir,
        APP_NAME,
        settings.debug_mode,
        true,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let resolver = FixtureResolver::new(ProcessEnv).with_options(settings.resolve_options());
    let store = if cli.stdout {
        None
    } else {
        Some(FixtureStore::new(&settings.output_dir, settings.format)?)
    };

    for variant in cli.variant.variants() {
        let fixtures = resolver
            .resolve_variant(variant)
            .with_context(|| format!("Failed to resolve {} fixtures", variant))?;

        match &store {
            Some(store) => {
                store.save_fixtures(variant, &fixtures)?;
            }
            None => println!("{}", render_fixtures(&fixtures, settings.format)?),
        }
    }

    tracing::info!("Fixture export complete");
    Ok(())
}
