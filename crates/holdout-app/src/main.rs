use std::process;
use std::time::{Duration, Instant};

use holdout_app::autopilot::Autopilot;
use holdout_app::cli::{Args, USAGE};
use holdout_app::game_loop::{spawn_game_loop, tick_duration};
use holdout_app::sink::{FrameSink, JsonLinesSink, NullSink};
use holdout_app::state::SharedState;
use holdout_app::AppError;
use holdout_core::commands::PlayerCommand;
use holdout_core::config::GameConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            process::exit(2);
        }
    };
    if args.help {
        eprint!("{USAGE}");
        return;
    }

    if let Err(e) = run(args) {
        log::error!("{e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.validate()?;
    log::info!(
        "starting holdout: seed {}, {} Hz, {:.1}s",
        config.seed,
        config.tick_rate,
        args.seconds
    );

    let frame_time = tick_duration(config.tick_rate);
    let sink: Box<dyn FrameSink> = if args.emit_frames {
        Box::new(JsonLinesSink::stdout())
    } else {
        Box::new(NullSink)
    };
    let shared = SharedState::new();
    let mut handle = spawn_game_loop(config, sink, shared.clone())?;
    handle.send(PlayerCommand::StartGame)?;

    let pilot = Autopilot::new();
    let deadline = Instant::now() + Duration::from_secs_f64(args.seconds);
    let mut last_frame = None;
    while Instant::now() < deadline {
        std::thread::sleep(frame_time);
        let Some(snapshot) = shared.latest() else {
            continue;
        };
        if last_frame == Some(snapshot.frame) {
            continue;
        }
        last_frame = Some(snapshot.frame);
        if snapshot.scoreboard.is_game_over() {
            log::info!("defender fell, ending demo");
            break;
        }
        handle.send_all(pilot.decide(&snapshot))?;
    }

    handle.shutdown();
    if let Some(board) = shared.scoreboard() {
        log::info!(
            "final: score {}, wave {}, health {}/{}",
            board.score,
            board.wave,
            board.display_health(),
            board.max_health
        );
    }
    Ok(())
}
