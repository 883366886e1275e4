use std::process::ExitCode;

use colored::Colorize;
use lessons::{logging, render_enumerations, LessonConfig};

fn main() -> ExitCode {
    logging::init();
    let config = match LessonConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    for line in render_enumerations(&config) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
