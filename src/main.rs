use std::fs::File;
use std::thread::sleep;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use simplelog::{Config, WriteLogger};

use errorsnake::config::{Args, Settings};
use errorsnake::input::{is_press, is_quit, key_code_of};
use errorsnake::session::Session;
use errorsnake::term::TermCanvas;

fn main() -> Result<()> {
    let settings = Settings::from_args(&Args::parse())?;

    // The terminal owns stdout, so logs go to a file
    let log_file = File::create(&settings.log_file)
        .with_context(|| format!("creating log file {}", settings.log_file.display()))?;
    WriteLogger::init(settings.log_level, Config::default(), log_file).context("initializing logger")?;

    info!("Starting with {:?}", settings);

    let mut canvas = TermCanvas::new(settings.arena).context("sizing the terminal")?;
    canvas.setup().context("setting up the terminal")?;

    let res = play(&settings, &mut canvas);

    // Give the terminal back even if the game loop failed
    canvas.restore().context("restoring the terminal")?;
    res
}

fn play(settings: &Settings, canvas: &mut TermCanvas) -> Result<()> {
    let rng: Box<dyn RngCore> = match settings.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    };

    let mut session = Session::new(settings.arena, settings.rules, rng);
    session.set_celebration_hook(Box::new(|score| info!("🎈 {} errors squashed", score)));

    loop {
        let tick_start = Instant::now();

        for key_ev in canvas.read_key_events_queue()? {
            if !is_press(&key_ev) {
                continue;
            }
            if is_quit(&key_ev) {
                info!("Quit with score {}", session.game().score());
                return Ok(());
            }
            match key_code_of(&key_ev.code) {
                Some(code) => session.handle_key(code),
                None => warn!("No key code for {:?}", key_ev.code),
            }
        }

        let interval = session.tick(canvas);
        canvas.present()?;

        if let Some(left) = interval.checked_sub(tick_start.elapsed()) {
            sleep(left);
        }
    }
}
