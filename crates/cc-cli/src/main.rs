use std::io;

use anyhow::bail;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use craftcalc::{cli, prompt};

fn main() -> anyhow::Result<()> {
    // Initialize logging. Defaults to warn so interactive output stays clean;
    // RUST_LOG=craftcalc=debug shows the config load path.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "craftcalc=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = cli::Cli::parse_args();

    let recipes_path = args
        .recipes
        .unwrap_or_else(cc_catalog::paths::recipes_file);
    debug!("Recipes file: {}", recipes_path.display());

    if args.init {
        if recipes_path.exists() {
            bail!("{} already exists; not overwriting", recipes_path.display());
        }
        cc_catalog::save_catalog(&cc_catalog::built_in_catalog(), &recipes_path)?;
        println!("Wrote built-in recipes to {}", recipes_path.display());
        return Ok(());
    }

    let catalog = cc_catalog::load_catalog_or_default(&recipes_path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt::PromptSession::new(&catalog, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
