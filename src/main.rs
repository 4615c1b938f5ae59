//! Console demo - runs a multi-value selection on stdin/stdout.
//!
//! Usage: `keyboard-selection [--back] [CANDIDATES.yaml]`
//!
//! Each line typed is one turn. Type a value, or a command caption (`OK`,
//! `Clear`, `All`, and `Back` with `--back`).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use keyboard_selection::adapters::{note_store_from_config, CatalogLocalizer, ConsoleMessenger};
use keyboard_selection::application::{
    MultiSelectionCallbacks, MultiSelectionOptions, SelectManyCommand, SelectManyHandler,
    SelectionOutcome,
};
use keyboard_selection::config::AppConfig;
use keyboard_selection::domain::foundation::ConversationId;
use keyboard_selection::domain::selection::CandidateModel;
use keyboard_selection::telemetry::init_tracing;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, PartialEq, Eq)]
enum Ending {
    Confirmed(Vec<String>),
    BackedOut(Vec<String>),
}

fn default_candidates() -> Result<CandidateModel, Box<dyn std::error::Error>> {
    Ok(CandidateModel::builder()
        .row([("Red", "r"), ("Green", "g"), ("Blue", "b")])
        .row([("Black", "k"), ("White", "w")])
        .build()?)
}

fn load_candidates(path: &Path) -> Result<CandidateModel, Box<dyn std::error::Error>> {
    let yaml = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&yaml)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let mut back_enabled = false;
    let mut candidates_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--back" => back_enabled = true,
            _ => candidates_path = Some(PathBuf::from(arg)),
        }
    }

    let candidates = match &candidates_path {
        Some(path) => load_candidates(path)?,
        None => default_candidates()?,
    };

    let notes = note_store_from_config(&config.storage).await?;
    let localizer = Arc::new(CatalogLocalizer::from_config(&config.localization)?);
    let handler = SelectManyHandler::new(notes, Arc::new(ConsoleMessenger::stdout()), localizer);

    let conversation = ConversationId::new("console")?;
    let key = config.selection.default_selection_key()?;
    let options = MultiSelectionOptions::from_defaults(&config.selection);
    tracing::info!(key = %key, back = back_enabled, "starting console selection");

    let callbacks = || {
        let callbacks = MultiSelectionCallbacks::new(Ending::Confirmed).with_save(|values: &[String]| {
            tracing::info!(values = ?values, "saving selection");
        });
        if back_enabled {
            callbacks.with_back(Ending::BackedOut)
        } else {
            callbacks
        }
    };

    let command = |input: String| SelectManyCommand {
        conversation_id: conversation.clone(),
        key: key.clone(),
        candidates: candidates.clone(),
        prompt_text: "Choose values:".to_string(),
        input,
        options: options.clone(),
    };

    // The first turn only shows the prompt
    handler.handle(command(String::new()), callbacks()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let outcome = handler.handle(command(line.trim().to_string()), callbacks()).await?;
        match outcome {
            SelectionOutcome::Pending { .. } => continue,
            SelectionOutcome::Completed(Ending::Confirmed(values)) => {
                println!("Selected: {}", values.join(", "));
                return Ok(());
            }
            SelectionOutcome::Completed(Ending::BackedOut(values)) => {
                println!("Went back with: {}", values.join(", "));
                return Ok(());
            }
        }
    }

    tracing::warn!("input closed before the selection finished");
    Ok(())
}
