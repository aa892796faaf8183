/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::StoreClient;
use crate::color;
use crate::export;
use crate::types::PaletteId;

#[derive(Parser)]
#[command(
    name = "palettr",
    version,
    about = "Palettr - a terminal color palette workspace"
)]
pub struct Cli {
    /// Base URL of the palette store API. Falls back to PALETTR_API_BASE,
    /// then to http://localhost:3000.
    #[arg(long = "api-base", global = true)]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a palette and print it, one color per line.
    Generate,
    /// List the palettes saved in the store.
    List,
    /// Save a palette under a name. With no colors given, saves a fresh one.
    Save {
        name: String,
        /// Exactly five colors in #rrggbb form.
        colors: Vec<String>,
    },
    /// Delete a saved palette by id.
    Delete { id: PaletteId },
    /// Generate a palette and write it to a PNG file.
    Export {
        /// Output path, defaults to palette.png.
        path: Option<PathBuf>,
    },
}

/// Execute a CLI command against the palette store.
pub fn run(command: Command, client: &StoreClient) -> Result<()> {
    match command {
        Command::Generate => handle_generate(),
        Command::List => handle_list(client)?,
        Command::Save { name, colors } => handle_save(name, colors, client)?,
        Command::Delete { id } => handle_delete(id, client)?,
        Command::Export { path } => handle_export(path)?,
    }
    Ok(())
}

fn handle_generate() {
    for color in color::generate_palette() {
        println!("{color}");
    }
}

fn handle_list(client: &StoreClient) -> Result<()> {
    let palettes = client.list()?;
    if palettes.is_empty() {
        println!("No saved palettes.");
        return Ok(());
    }
    for palette in palettes {
        println!(
            "[{}] {}: {}",
            palette.id,
            palette.name,
            palette.colors.join(" ")
        );
    }
    Ok(())
}

fn handle_save(name: String, colors: Vec<String>, client: &StoreClient) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        println!("Enter palette name first");
        return Ok(());
    }

    let colors = if colors.is_empty() {
        color::generate_palette()
    } else {
        if colors.len() != color::PALETTE_SIZE {
            println!(
                "Expected exactly {} colors, got {}.",
                color::PALETTE_SIZE,
                colors.len()
            );
            return Ok(());
        }
        for value in &colors {
            if !color::is_valid_hex(value) {
                println!("Invalid color '{value}'. Please provide a hex code like #aabbcc.");
                return Ok(());
            }
        }
        colors
    };

    client.create(name, &colors)?;
    for color in &colors {
        println!("{color}");
    }
    println!("Saved palette '{name}'");
    Ok(())
}

fn handle_delete(id: PaletteId, client: &StoreClient) -> Result<()> {
    client.delete(&id)?;
    println!("Deleted palette {id}");
    Ok(())
}

fn handle_export(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from("palette.png"));
    let palette = color::generate_palette();
    export::write_png(&palette, &path)?;
    for color in &palette {
        println!("{color}");
    }
    println!("Wrote {}", path.display());
    Ok(())
}
