//! Command-line arguments for the `holdout` binary.

use std::path::PathBuf;

use crate::error::AppError;

pub const USAGE: &str = "holdout: headless arcade defense demo\n\
    \n\
    Usage: holdout [--config <path>] [--seconds <n>] [--emit-frames]\n\
    \n\
      --config <path>  JSON game configuration (defaults when omitted)\n\
      --seconds <n>    Wall-clock seconds to run (default: 30)\n\
      --emit-frames    Write every frame to stdout as a JSON line\n";

const DEFAULT_SECONDS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub seconds: f64,
    pub emit_frames: bool,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config: None,
            seconds: DEFAULT_SECONDS,
            emit_frames: false,
            help: false,
        }
    }
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppError::Usage("--config needs a path".into()))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--seconds" => {
                    let value = args
                        .next()
                        .ok_or_else(|| AppError::Usage("--seconds needs a value".into()))?;
                    parsed.seconds = value
                        .parse::<f64>()
                        .ok()
                        .filter(|s| s.is_finite() && *s > 0.0)
                        .ok_or_else(|| AppError::Usage(format!("bad --seconds value: {value}")))?;
                }
                "--emit-frames" => parsed.emit_frames = true,
                "--help" | "-h" => parsed.help = true,
                other => return Err(AppError::Usage(format!("unknown argument: {other}"))),
            }
        }
        Ok(parsed)
    }
}
