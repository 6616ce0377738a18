use clap::Parser;
use std::path::PathBuf;
use wrapflow::{Scene, WrapMode, WrapflowError, run_scene};

/// Lays out a scene document with a wrap panel and prints the result as JSON.
#[derive(Parser, Debug)]
#[command(name = "wrapflow", version, about)]
struct Cli {
    /// Path to the scene JSON document.
    scene: PathBuf,

    /// Override the scene's wrap mode (greedy or stretch).
    #[arg(long)]
    mode: Option<WrapMode>,

    /// Override the available width offered to the panel.
    #[arg(long)]
    width: Option<f32>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), WrapflowError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    log::info!("Loading scene from {}", cli.scene.display());
    let mut scene = Scene::from_file(&cli.scene)?;
    if let Some(mode) = cli.mode {
        scene.layout.mode = mode;
    }
    if let Some(width) = cli.width {
        scene.available.width = Some(width);
    }

    let layout = run_scene(&scene)?;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };
    println!("{output}");
    Ok(())
}
