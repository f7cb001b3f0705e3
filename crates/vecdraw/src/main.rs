use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use vecdraw::{backend::HeadlessBackend, config::Config, script, session::Session};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replays a recorded drawing session without a window")]
struct Args {
    /// Event script to replay, one event per line.
    script: PathBuf,
    /// Seed for the random color button. Random if not given.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    vecdraw::init_logger!();

    let args = Args::parse();
    let config = Config::from_env()?;

    let src = fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read {}", args.script.display()))?;
    let events = script::parse(&src)
        .with_context(|| format!("failed to parse {}", args.script.display()))?;

    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut backend = HeadlessBackend::new(config.buffer_capacity)?;
    let mut session = Session::new(config.buffer_capacity, config.canvas_size);
    session.render(&mut backend)?;

    for event in events {
        log::debug!("{event}");
        let redraw = event.redraws();
        event.apply(&mut session, &mut rng);
        if redraw {
            session.render(&mut backend)?;
        }
    }

    log::info!(
        "{} vertices in {} frames, color {:?}",
        session.recorder().total(),
        backend.frames(),
        session.color(),
    );
    for call in backend.draws() {
        println!("{} {} {}", call.topology, call.first, call.count);
    }

    Ok(())
}
