use super::load_config;
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn show_config(full: bool, env_file: Option<&Path>, output: &Output) -> Result<()> {
    let config = load_config(env_file)?;
    let shown = if full { config } else { config.masked() };

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            println!("\n{}", "Configuration".bright_cyan().bold());
            if let Some(path) = env_file {
                println!("{} {}", "Env file:".bright_black(), path.display());
            }
            println!();

            println!("{}", service_table("Plex", &[
                ("Discover URL", &shown.plex_url),
                ("Token", &shown.credentials.plex_token),
            ]));
            println!("{}", service_table("TMDB", &[
                ("URL", &shown.tmdb_url),
                ("API Key", &shown.credentials.tmdb_api_key),
            ]));
            println!("{}", service_table("Radarr", &[
                ("URL", &shown.radarr.url),
                ("API Key", &shown.credentials.radarr_api_key),
                ("Root Folder", &shown.radarr.root_folder),
                ("Quality Profile", &shown.quality_profile_name),
            ]));
            let language_profile = shown.language_profile_id.to_string();
            println!("{}", service_table("Sonarr", &[
                ("URL", &shown.sonarr.url),
                ("API Key", &shown.credentials.sonarr_api_key),
                ("Root Folder", &shown.sonarr.root_folder),
                ("Language Profile ID", &language_profile),
            ]));

            if !full {
                output.info("Credentials are masked. Use --full to show them.");
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&shown)?);
        }
    }

    Ok(())
}

fn service_table(name: &str, rows: &[(&str, &String)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(format!("{} Configuration", name))
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
    ]);
    for (label, value) in rows {
        table.add_row(vec![Cell::new(*label), Cell::new(value.as_str())]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

