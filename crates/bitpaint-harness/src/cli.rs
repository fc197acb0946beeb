#![forbid(unsafe_code)]

//! Command-line argument parsing for `bitpaint-demo`.
//!
//! Flags are parsed by hand. Environment variables with the `BITPAINT_DEMO_`
//! prefix override the defaults and are in turn overridden by flags.

use std::env;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
bitpaint demo: renders a node/edge diagram to a PPM image

USAGE:
    bitpaint-demo [OPTIONS]

OPTIONS:
    --width=N        Frame width in pixels (default: 960)
    --height=N       Frame height in pixels (default: 720)
    --out=PATH       Output file (default: bitpaint-demo.ppm)
    --help, -h       Show this help message
    --version, -V    Show version

ENVIRONMENT VARIABLES:
    BITPAINT_DEMO_WIDTH    Override --width
    BITPAINT_DEMO_HEIGHT   Override --height
    BITPAINT_DEMO_OUT      Override --out
    RUST_LOG               Log filter (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Frame width in pixels.
    pub width: usize,
    /// Frame height in pixels.
    pub height: usize,
    /// Where to write the PPM image.
    pub out: PathBuf,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            width: 960,
            height: 720,
            out: PathBuf::from("bitpaint-demo.ppm"),
        }
    }
}

/// What the argument list asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Render,
    Help,
    Version,
}

impl Opts {
    /// Parse environment variables and command-line arguments.
    ///
    /// Prints help or version and exits when asked to; exits with status 1
    /// on a malformed argument.
    pub fn parse() -> Self {
        let mut opts = Self::default();
        opts.apply_env(|key| env::var(key).ok());

        match opts.apply_args(env::args().skip(1)) {
            Ok(Command::Render) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("bitpaint-demo {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Apply `BITPAINT_DEMO_*` overrides. Unparsable numbers are ignored.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("BITPAINT_DEMO_WIDTH")
            && let Ok(n) = val.parse()
        {
            self.width = n;
        }
        if let Some(val) = var("BITPAINT_DEMO_HEIGHT")
            && let Ok(n) = val.parse()
        {
            self.height = n;
        }
        if let Some(val) = var("BITPAINT_DEMO_OUT") {
            self.out = PathBuf::from(val);
        }
    }

    /// Apply command-line flags.
    pub fn apply_args<I>(&mut self, args: I) -> Result<Command, String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--width=") {
                        self.width = val
                            .parse()
                            .map_err(|_| format!("Invalid --width value: {val}"))?;
                    } else if let Some(val) = other.strip_prefix("--height=") {
                        self.height = val
                            .parse()
                            .map_err(|_| format!("Invalid --height value: {val}"))?;
                    } else if let Some(val) = other.strip_prefix("--out=") {
                        self.out = PathBuf::from(val);
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }
        Ok(Command::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!((opts.width, opts.height), (960, 720));
        assert_eq!(opts.out, PathBuf::from("bitpaint-demo.ppm"));
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_lists_env_vars() {
        assert!(HELP_TEXT.contains("BITPAINT_DEMO_WIDTH"));
        assert!(HELP_TEXT.contains("BITPAINT_DEMO_OUT"));
    }

    #[test]
    fn flags_override_env() {
        let mut opts = Opts::default();
        opts.apply_env(|key| match key {
            "BITPAINT_DEMO_WIDTH" => Some("320".into()),
            "BITPAINT_DEMO_HEIGHT" => Some("tall".into()),
            "BITPAINT_DEMO_OUT" => Some("env.ppm".into()),
            _ => None,
        });
        assert_eq!(opts.width, 320);
        assert_eq!(opts.height, 720);
        assert_eq!(opts.out, PathBuf::from("env.ppm"));

        let cmd = opts.apply_args(["--width=64", "--out=flag.ppm"]).unwrap();
        assert_eq!(cmd, Command::Render);
        assert_eq!(opts.width, 64);
        assert_eq!(opts.out, PathBuf::from("flag.ppm"));
    }

    #[test]
    fn help_and_version_short_circuit() {
        let mut opts = Opts::default();
        assert_eq!(opts.apply_args(["-h", "--bogus"]), Ok(Command::Help));
        assert_eq!(opts.apply_args(["--version"]), Ok(Command::Version));
    }

    #[test]
    fn malformed_args_are_errors() {
        let mut opts = Opts::default();
        assert_eq!(
            opts.apply_args(["--height=-3"]),
            Err("Invalid --height value: -3".to_string())
        );
        assert_eq!(
            opts.apply_args(["--frobnicate"]),
            Err("Unknown argument: --frobnicate".to_string())
        );
    }
}
