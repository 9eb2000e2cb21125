use anyhow::Result;
use clap::Args;
use colored::Colorize;
use custom_editor::Command;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn list(args: ListArgs) -> Result<()> {
    if args.json {
        let entries: Vec<serde_json::Value> = Command::ALL
            .iter()
            .map(|command| serde_json::json!({"name": command.wire_name(), "alias": command.alias()}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for command in Command::ALL {
        match command.alias() {
            Some(alias) => println!("{:<22} {}", command.wire_name().bold(), alias.dimmed()),
            None => println!("{}", command.wire_name().bold()),
        }
    }
    Ok(())
}
