//! CLI command implementations

use anyhow::Result;
use serde::Serialize;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::guide::{Guide, GuidePipeline};

#[derive(Serialize)]
struct GuideOutput<'a> {
    guide: &'a Guide,
}

/// Generate a guide for a YouTube video URL and render it.
pub async fn generate_guide(settings: &Settings, url: &str, json: bool) -> Result<()> {
    let pipeline = GuidePipeline::from_settings(settings)?;
    let guide = pipeline.generate(url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&GuideOutput { guide: &guide })?);
        return Ok(());
    }

    render_guide(&guide);
    Ok(())
}

/// Print a guide's sections to the terminal.
fn render_guide(guide: &Guide) {
    println!("Introduction");
    println!("{}", guide.introduction);
    println!();

    if !guide.prerequisites.is_empty() {
        println!("Prerequisites");
        for prerequisite in &guide.prerequisites {
            println!("  - {}", prerequisite);
        }
        println!();
    }

    for (i, step) in guide.steps.iter().enumerate() {
        println!("Step {}: {}", i + 1, step.title);
        println!("{}", step.description);
        if let Some(code) = step.code.as_deref() {
            println!();
            for line in code.lines() {
                println!("    {}", line);
            }
        }
        println!();
    }

    if !guide.testing.trim().is_empty() {
        println!("Testing");
        println!("{}", guide.testing);
        println!();
    }

    println!("Conclusion");
    println!("{}", guide.conclusion);
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
