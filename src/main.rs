use std::process;
use log::{error, LevelFilter};

use rectkit::utils::logger::Logger;
use rectkit::commands::{build_cli, CommandFactory, RectkitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let log_file = matches.get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or("rectkit.log");
    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };

    if let Err(e) = Logger::init_global_logger(log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    // Run summaries go next to the main log
    let summary_file = format!("{}.summary", log_file);
    let logger = match Logger::new(&summary_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = RectkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
