//! bimtrack entry point for native builds.
//!
//! Imports a project snapshot, prints what was loaded and any per-record
//! problems, and optionally writes the records back out.
//!
//! Usage:
//! `bimtrack-native [SNAPSHOT.json] [--export] [--log-level LEVEL] [--save-config]`
//!
//! `--save-config` writes the effective configuration (including a
//! `--log-level` override) to the user config file.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bimtrack::config::AppConfig;

    let mut config = AppConfig::load_or_default();
    let args = match native::Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Application error: {}", e);
            std::process::exit(2);
        }
    };
    if let Some(level) = args.log_level {
        config.preferences.log_level = level;
    }

    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();
    log::debug!("Log level {}", config.preferences.log_level);

    if let Err(e) = native::run(&config, args) {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;
    use std::path::PathBuf;

    use bimtrack::config::{AppConfig, ConfigError, LogLevel};
    use bimtrack::store::{ImportReport, RecordStore};
    use bimtrack::views::{ProjectDetails, team_info_lines};

    #[derive(Debug, Default, PartialEq)]
    pub struct Args {
        pub snapshot: Option<PathBuf>,
        pub export: bool,
        pub log_level: Option<LogLevel>,
        pub save_config: bool,
    }

    impl Args {
        pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
            let mut parsed = Args::default();
            let mut args = args.into_iter();
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--export" => parsed.export = true,
                    "--save-config" => parsed.save_config = true,
                    "--log-level" => {
                        let value = args.next().unwrap_or_default();
                        parsed.log_level = Some(value.parse()?);
                    }
                    _ if parsed.snapshot.is_none() => parsed.snapshot = Some(PathBuf::from(&arg)),
                    _ => eprintln!("Ignoring extra argument {:?}", arg),
                }
            }
            Ok(parsed)
        }
    }

    pub fn run(config: &AppConfig, args: Args) -> Result<(), Box<dyn Error>> {
        if args.save_config {
            config.save_to_default_path()?;
        }

        let path = match args.snapshot {
            Some(path) => path,
            None => match rfd::FileDialog::new()
                .add_filter("Project snapshot", &["json"])
                .pick_file()
            {
                Some(path) => path,
                None => {
                    log::info!("No snapshot selected");
                    return Ok(());
                }
            },
        };

        let json = std::fs::read_to_string(&path)?;
        let mut store = config.preferences.record_store();
        let report = store.import_snapshot(&json)?;
        log::info!("Imported {} records from {:?}", report.imported(), path);

        print_report(&report);
        print_records(&store);

        if args.export {
            export(&store, config)?;
        }
        Ok(())
    }

    fn print_report(report: &ImportReport) {
        println!(
            "Imported {} projects and {} teams",
            report.projects_imported, report.teams_imported
        );
        for message in report.failure_messages() {
            println!("  rejected {}", message);
        }
        for warning in &report.warnings {
            println!("  {} #{}: {}", warning.record, warning.index, warning.message);
        }
    }

    fn print_records(store: &RecordStore) {
        for project in store.projects() {
            let teams = store.teams_for_project(project.id());
            let details = ProjectDetails::new(project, &teams);
            println!();
            println!("{} [{}] {}", details.name, details.project_type, details.status);
            if !details.address.is_empty() {
                println!("  {}", details.address);
            }
            println!(
                "  cost {}  progress {}  finish {}",
                details.cost, details.progress, details.finish_date
            );
            for team in teams {
                for line in team_info_lines(team) {
                    println!("    {}: {}", line.label, line.value);
                }
            }
        }

        let unlinked = store.teams().iter().filter(|t| t.project_id.is_none()).count();
        if unlinked > 0 {
            println!();
            println!("{} teams are not linked to a project", unlinked);
        }
    }

    fn export(store: &RecordStore, config: &AppConfig) -> Result<(), Box<dyn Error>> {
        let file_name = config.preferences.export_file_name_with_extension();
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&file_name)
            .save_file()
        else {
            log::info!("Export cancelled");
            return Ok(());
        };

        std::fs::write(&path, store.export_json()?)?;
        println!("Exported records to {}", path.display());
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::native::Args;
    use bimtrack::config::LogLevel;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let parsed = Args::parse(args(&[
            "site.json",
            "--log-level",
            "debug",
            "--save-config",
            "--export",
        ]))
        .unwrap();

        assert_eq!(parsed.snapshot, Some(PathBuf::from("site.json")));
        assert_eq!(parsed.log_level, Some(LogLevel::Debug));
        assert!(parsed.save_config);
        assert!(parsed.export);
    }

    #[test]
    fn test_parse_args_rejects_unknown_level() {
        assert!(Args::parse(args(&["--log-level", "loud"])).is_err());
        assert_eq!(Args::parse(args(&[])).unwrap(), Args::default());
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
