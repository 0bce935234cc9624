use std::env;

use color_eyre::eyre::{OptionExt, Result, eyre};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Account,
    Daily,
}

pub struct CliArgs {
    pub input_file_path: String,
    pub report: Report,
}

impl CliArgs {
    pub fn load() -> Result<Self> {
        CliArgs::parse(env::args().skip(1))
    }

    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let input_file_path = args.next().ok_or_eyre("Input file not passed")?;

        let report = match args.next().as_deref() {
            None | Some("account") => Report::Account,
            Some("daily") => Report::Daily,
            Some(other) => return Err(eyre!("Unknown report {}", other)),
        };

        Ok(CliArgs {
            input_file_path,
            report,
        })
    }
}

pub struct ServerArgs {
    pub port: u16,
}

impl ServerArgs {
    pub fn load() -> Result<Self> {
        ServerArgs::parse(env::var("PORT").ok())
    }

    pub fn parse(port: Option<String>) -> Result<Self> {
        let port = match port {
            Some(p) => p
                .trim()
                .parse::<u16>()
                .map_err(|e| eyre!("Invalid PORT {}: {}", p, e))?,
            None => DEFAULT_PORT,
        };

        Ok(ServerArgs { port })
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{CliArgs, DEFAULT_PORT, Report, ServerArgs};

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn defaults_to_account_report() {
        let cli = CliArgs::parse(args(&["actions.csv"])).unwrap();

        assert_eq!(cli.input_file_path, "actions.csv");
        assert_eq!(cli.report, Report::Account);
    }

    #[test]
    fn selects_daily_report() {
        let cli = CliArgs::parse(args(&["actions.csv", "daily"])).unwrap();

        assert_eq!(cli.report, Report::Daily);
    }

    #[test]
    fn rejects_missing_and_unknown() {
        let missing = CliArgs::parse(args(&[])).err().unwrap();
        assert!(missing.to_string().contains("Input file not passed"));

        let unknown = CliArgs::parse(args(&["a.csv", "weekly"])).err().unwrap();
        assert!(unknown.to_string().contains("Unknown report weekly"));
    }

    #[test]
    fn server_port() {
        assert_eq!(ServerArgs::parse(None).unwrap().port, DEFAULT_PORT);
        assert_eq!(ServerArgs::parse(Some("8080".to_owned())).unwrap().port, 8080);
        assert!(ServerArgs::parse(Some("http".to_owned())).is_err());
    }
}
