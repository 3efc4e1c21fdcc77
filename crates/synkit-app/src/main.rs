use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use synkit_config::Config;
use synkit_core::dictionary::CustomDictionary;
use synkit_types::{AppEvent, LookupRequest, Script};
use tracing_subscriber::EnvFilter;

use self::cli::{BufferArgs, Cli, Command};
use self::controller::AppController;
use self::editor::EditorBuffer;
use self::presenter::{FixedPick, SelectionPrompt, StdinPrompt};
use self::state::AppState;

mod cli;
mod controller;
mod editor;
mod events;
mod presenter;
mod profile;
mod sessions;
mod state;

#[cfg(test)]
mod tests;

/// The command line host has a single buffer
const BUFFER_SLOT: &str = "buffer";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_tracing(config.debug, cli.json);

    match cli.command {
        Command::Lookup { buffer, lang } => run_lookup(config, buffer, lang.map(Script::from)).await,
        Command::Dict { files, buffer } => run_dict(config, &files, buffer).await,
        Command::Complete { roots, prefix } => run_complete(config, roots, &prefix).await,
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => profile::load_config_file(path)?,
        None => {
            profile::init_user_config()?;
            profile::load_user_profile(&cli.profile)?
        }
    };
    Ok(config.with_env_overrides())
}

fn init_tracing(debug: bool, json: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn prompt_for(pick: Option<i64>) -> Box<dyn SelectionPrompt> {
    match pick {
        Some(index) => Box::new(FixedPick(index)),
        None => Box::new(StdinPrompt),
    }
}

async fn run_lookup(
    config: Config,
    args: BufferArgs,
    language: Option<Script>,
) -> anyhow::Result<()> {
    let mut editor = EditorBuffer::new(args.text, args.cursor);
    let Some(word) = editor.current_word().map(str::to_string) else {
        tracing::info!("No word at the cursor, nothing to look up");
        println!("{}", editor.text());
        return Ok(());
    };

    let state = Arc::new(AppState::new(config.clone())?);
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    let request = LookupRequest::new(BUFFER_SLOT, word).with_language(language);
    controller.host_sender().send(AppEvent::Lookup(request)).await?;

    let receiver = controller.host_receiver();
    let mut prompt = prompt_for(args.pick);

    tokio::select! {
        result = presenter::host_loop(&receiver, BUFFER_SLOT, &mut editor, prompt.as_mut(), &config) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("Task exited with error: {e}"),
            Err(e) => tracing::error!("Task panicked: {e}"),
        }
    }

    println!("{}", editor.text());
    Ok(())
}

async fn run_dict(config: Config, files: &[PathBuf], args: BufferArgs) -> anyhow::Result<()> {
    let mut editor = EditorBuffer::new(args.text, args.cursor);
    let Some(word) = editor.current_word().map(str::to_string) else {
        tracing::info!("No word at the cursor, nothing to look up");
        println!("{}", editor.text());
        return Ok(());
    };

    let mut dictionary = CustomDictionary::new();
    for file in files {
        match CustomDictionary::load_from_file(file, config.dictionary.comment_char) {
            Ok(loaded) => dictionary = dictionary.merge(loaded),
            Err(e) => tracing::warn!("Skipping {}: {}", file.display(), e),
        }
    }

    let results = dictionary.lookup(&word);
    eprintln!("{}", events::lookup::found_status(results.len(), &word));

    let mut prompt = prompt_for(args.pick);
    presenter::present_and_apply(&results, &mut editor, prompt.as_mut(), &config).await;

    println!("{}", editor.text());
    Ok(())
}

async fn run_complete(config: Config, roots: Vec<PathBuf>, prefix: &str) -> anyhow::Result<()> {
    let max_suggestions = config.corpus.max_suggestions;
    let corpus = tokio::task::spawn_blocking(move || synkit_corpus::collect(&roots, &config)).await??;

    for completion in corpus.autocomplete(prefix, max_suggestions) {
        println!("{}\t{}", completion.label, completion.insert);
    }

    Ok(())
}
