//! MDI protocol implementation

use std::io::Write;
use anyhow::{bail, ensure, Context, Result};

use crate::{
    core::{Loc, MoveOutcome},
    engine::Engine,
};

/// Whether the command loop keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn parse_loc(arg: Option<&&str>) -> Result<Loc> {
    arg.context("missing square argument")?.parse()
}

fn report_drop<W: Write>(out: &mut W, outcome: Option<MoveOutcome>) -> Result<()> {
    match outcome {
        Some(outcome) => writeln!(out, "info {}", outcome)?,
        None => writeln!(out, "info nomove")?,
    }
    Ok(())
}

/// Handle an MDI command
pub fn handle_command<W: Write>(cmd: &str, engine: &mut Engine, out: &mut W) -> Result<Flow> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(Flow::Continue);
    }

    match parts[0] {
        "mdi" => {
            writeln!(out, "id name Masterdrez")?;
            writeln!(out, "option name occupied type combo default overwrite var overwrite var reject var swap")?;
            writeln!(out, "option name strictmode type check default false")?;
            writeln!(out, "option name assets type string default none")?;
            writeln!(out, "option name orientation type combo default white var white var black var red var blue")?;
            writeln!(out, "option name turncolor type combo default white var white var black var red var blue")?;
            writeln!(out, "option name movablecolor type combo default white var white var black var red var blue")?;
            writeln!(out, "option name free type check default true")?;
            writeln!(out, "mdiok")?;
        }
        "isready" => {
            writeln!(out, "readyok")?;
        }
        "setoption" => {
            ensure!(parts.len() == 5 && parts[1] == "name" && parts[3] == "value",
                "invalid setoption command");

            engine.set_option(parts[2], parts[4])?;
        }
        "position" => {
            ensure!(parts.len() >= 2, "position command requires at least 2 arguments");

            match parts[1] {
                "startpos" => engine.reset_game()?,
                "empty" => engine.set_board(crate::core::generate()),
                "fen" if parts.len() == 3 => engine.load_fen(parts[2])?,
                _ => bail!("invalid position command"),
            }
        }
        "pickup" => {
            let loc = parse_loc(parts.get(1))?;
            let piece = engine.pick_up(loc)?;
            writeln!(out, "info held {} {}", piece, loc)?;
        }
        "drop" => {
            let loc = parse_loc(parts.get(1))?;
            let outcome = engine.drop_on(loc)?;
            report_drop(out, outcome)?;
        }
        "cancel" => {
            if let Some(piece) = engine.cancel() {
                writeln!(out, "info released {}", piece)?;
            }
        }
        "move" => {
            ensure!(parts.len() == 3, "move requires a from and a to square");
            let from = parse_loc(parts.get(1))?;
            let to = parse_loc(parts.get(2))?;
            let outcome = engine.move_from(from, to)?;
            report_drop(out, outcome)?;
        }
        "display" => {
            write!(out, "{}", engine.board)?;
        }
        "getfen" => {
            writeln!(out, "{}", engine.get_fen())?;
        }
        "config" => {
            let assets = match &engine.options.assets {
                Some(assets) => assets.root().display().to_string(),
                None => "none".to_string(),
            };
            writeln!(
                out,
                "config {} occupied {} assets {}",
                engine.render, engine.options.occupied_policy, assets
            )?;
        }
        "asset" => {
            let loc = parse_loc(parts.get(1))?;
            let asset = engine.resolve_asset(&loc)?;
            if asset.is_empty() {
                writeln!(out, "info asset placeholder")?;
            } else {
                writeln!(out, "asset {}", asset)?;
            }
        }
        "quit" => {
            return Ok(Flow::Quit);
        }
        cmd => {
            bail!("Unknown command: {}", cmd);
        }
    }

    out.flush()?;
    Ok(Flow::Continue)
}
