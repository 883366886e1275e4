use std::process::ExitCode;

use colored::Colorize;
use lessons::{logging, render_generics, LessonConfig, LessonError};

fn run() -> Result<Vec<String>, LessonError> {
    let config = LessonConfig::load()?;
    render_generics(&config)
}

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
