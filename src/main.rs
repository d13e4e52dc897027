use anyhow::Result;
use masterdrez::{
    engine::{Engine, EngineOptions},
    mdi::{handle_command, parse_command, Flow},
    utils::init_logging,
};
use std::io::{self, BufRead};

/// Report a failed line: fatal in strict mode, logged otherwise
fn report(err: anyhow::Error, strict_mode: bool) {
    if strict_mode {
        panic!("{:#}", err);
    } else {
        eprintln!("error: {:#}", err);
    }
}

fn main() -> Result<()> {
    init_logging();
    println!("Masterdrez - Cross Board Engine");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut engine = Engine::with_options(EngineOptions::from_env())?;

    for line in stdin.lock().split(b'\n') {
        let bytes = match line {
            Ok(bytes) => bytes,
            Err(err) => {
                // A failed read on stdin does not recover
                report(err.into(), engine.options.strict_mode);
                break;
            }
        };
        let input = String::from_utf8_lossy(&bytes);

        if let Some(cmd) = parse_command(&input) {
            match handle_command(&cmd, &mut engine, &mut out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => report(err, engine.options.strict_mode),
            }
        }
    }

    Ok(())
}
