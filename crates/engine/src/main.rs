//! Pointforge Engine - Main entry point.
//!
//! Prices one character sheet and prints its report as JSON:
//!
//! ```text
//! pointforge-engine [path/to/character.json]
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pointforge_engine::infrastructure::json_files::{JsonCatalogFile, JsonCharacterDirectory};
use pointforge_engine::infrastructure::settings::{EngineSettings, CHARACTER_PATH_VAR};
use pointforge_engine::use_cases::CharacterSheetUseCases;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pointforge_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut settings = EngineSettings::from_env();
    if let Some(arg) = std::env::args().nth(1) {
        settings.character_path = Some(PathBuf::from(arg));
    }

    let character_path = settings.character_path.clone().with_context(|| {
        format!("no character sheet given; pass a path or set {CHARACTER_PATH_VAR}")
    })?;
    let (characters, id) = JsonCharacterDirectory::for_file(&character_path)
        .with_context(|| format!("not a sheet path: {}", character_path.display()))?;

    tracing::info!(
        catalog = %settings.catalog_path.display(),
        character = %character_path.display(),
        policy = ?settings.limitation_policy,
        "Starting Pointforge Engine"
    );

    let catalog = JsonCatalogFile::new(settings.catalog_path.clone());
    let use_cases = CharacterSheetUseCases::load(
        &catalog,
        Arc::new(characters),
        settings.limitation_policy,
        settings.cache_capacity,
    )
    .await?;

    let report = use_cases.report_by_id(&id).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
