use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use custom_editor::{ElementConfig, DEFAULT_CONFIG_NAME};
use std::fs;
use std::path::{Path, PathBuf};

use crate::script::{parse_script, Replay};

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// JSON script of host actions
    pub script: PathBuf,

    /// Element config file (defaults to custom-editor.config.json in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print emitted events
    #[arg(short, long)]
    pub pretty: bool,
}

pub fn replay(args: ReplayArgs, cwd: &str) -> Result<()> {
    let config = load_config(args.config.as_deref(), cwd)?;

    let source = fs::read_to_string(&args.script)
        .with_context(|| format!("Cannot read script {}", args.script.display()))?;
    let steps = parse_script(&source)?;

    let mut replay = Replay::new(config);
    let outcome = replay.run(&steps);

    // Events emitted before a failing step are still printed
    for event in replay.events() {
        let line = if args.pretty {
            serde_json::to_string_pretty(event)?
        } else {
            serde_json::to_string(event)?
        };
        println!("{}", line);
    }
    outcome?;

    let summary = replay.summary();
    let attached: Vec<String> = summary.attached.iter().map(ToString::to_string).collect();
    eprintln!();
    eprintln!("✨ {} Replayed {} steps", "Done".green().bold(), steps.len());
    eprintln!("   Mode:      {:?}", summary.mode);
    eprintln!("   Connected: {}", summary.connected);
    eprintln!("   Attached:  {}", attached.join(", "));
    eprintln!("   Display:   {}", summary.display_html);
    eprintln!("   Draft:     {}", summary.draft);

    Ok(())
}

fn load_config(explicit: Option<&Path>, cwd: &str) -> Result<ElementConfig> {
    match explicit {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Cannot read config {}", path.display()))?;
            Ok(ElementConfig::from_json(&content)?)
        }
        None => Ok(ElementConfig::load(&PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME))?),
    }
}
