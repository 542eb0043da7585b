use clap::Parser;
use std::io::Write;
use std::str::FromStr;
use tagcount::application::CountTagsService;
use tagcount::cli::{format_report, Cli};
use tagcount::domain::SortOrder;
use tagcount::error::TagCountError;
use tagcount::infrastructure::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagCountError> {
    // Config is read only with --config
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    let cli_sort = cli
        .sort
        .as_deref()
        .map(SortOrder::from_str)
        .transpose()
        .map_err(TagCountError::Config)?;
    let sort = config.resolve_sort(cli_sort);
    let input = config.resolve_input(cli.input);
    log::debug!("input {}, sort {:?}", input.display(), sort);

    let report = CountTagsService::from_filesystem()
        .run(&input)?
        .sorted(sort);

    // Render fully before writing so failures never leave a partial report
    let output = format_report(&report);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
