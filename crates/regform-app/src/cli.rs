use clap::Parser;
use std::path::PathBuf;

/// regform — drive the registration form core from the command line.
///
/// Reads one command per line (`set <field> <value>`, `blur <field>`,
/// `submit`, `reset`, `profile <path>`, `cover <path>`, `show`, `quit`).
#[derive(Parser, Debug)]
#[command(name = "regform", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `regform=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Read commands from this file instead of stdin.
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "regform",
            "--config",
            "/tmp/regform.toml",
            "--log-level",
            "regform=debug",
            "-s",
            "signup.txt",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/regform.toml")));
        assert_eq!(args.log_level.as_deref(), Some("regform=debug"));
        assert_eq!(args.script, Some(PathBuf::from("signup.txt")));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["regform"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.script.is_none());
    }
}
