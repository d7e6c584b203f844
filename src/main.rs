use clap::{Arg, Command};
use log::LevelFilter;
use phish_analyzer::{Analyzer, MailContext, ScoringConfig};
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("phish-analyzer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Analyse a raw .eml file for phishing indicators")
        .arg(
            Arg::new("eml_path")
                .value_name("FILE")
                .help("Raw .eml file to analyse")
                .required_unless_present("generate-config"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Scoring rules file (YAML); built-in defaults when omitted"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the default scoring rules to a file and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("json-out")
                .long("json-out")
                .value_name("FILE")
                .help("Also write the JSON report to a file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-detector sub-scores")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        if let Err(e) = ScoringConfig::generate_default(Path::new(generate_path)) {
            eprintln!("Error: failed to write config to {generate_path}: {e}");
            process::exit(1);
        }
        println!("Default scoring config written to: {generate_path}");
        return;
    }

    let eml_path = matches
        .get_one::<String>("eml_path")
        .expect("required by clap");
    let json_out = matches.get_one::<String>("json-out");
    let config_path = matches.get_one::<String>("config");

    if let Err(e) = run(eml_path, config_path.map(String::as_str), json_out.map(String::as_str)) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(eml_path: &str, config_path: Option<&str>, json_out: Option<&str>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => ScoringConfig::load_from_file(Path::new(path))?,
        None => ScoringConfig::default(),
    };

    let raw = fs::read(eml_path)?;
    let ctx = MailContext::parse(&raw)
        .ok_or_else(|| anyhow::anyhow!("failed to parse message: {eml_path}"))?;

    let analyzer = Analyzer::new(config);
    let report = analyzer.analyze(&ctx);
    let json = serde_json::to_string_pretty(&report)?;

    if let Some(out_path) = json_out {
        fs::write(out_path, &json)?;
        log::info!("report written to {out_path}");
    }
    println!("{json}");

    Ok(())
}
