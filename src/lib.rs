//! Enumerations and generics, shown side by side.
//!
//! Every demo is a plain function returning the lines it would print, so the
//! binaries stay thin and the tests can compare lines directly.

pub mod color;
pub mod config;
pub mod containers;
pub mod day;
pub mod error;
pub mod logging;
pub mod signal;
pub mod spare_part;

pub use color::Color;
pub use config::LessonConfig;
pub use containers::{TypedList, UntypedList, Vehicle};
pub use day::Day;
pub use error::{ConfigError, LessonError};
pub use signal::TrafficSignal;
pub use spare_part::SparePart;

/// Lines printed by the `enumerations` binary, in order.
pub fn render_enumerations(config: &LessonConfig) -> Vec<String> {
    let mut lines = color::render_colors();
    lines.push(day::day_message_for_name(&config.day).to_string());
    lines.push(spare_part::part_price(config.part).to_string());
    lines.extend(TrafficSignal::values().map(TrafficSignal::describe));
    lines
}

/// Lines printed by the `generics` binary, in order.
pub fn render_generics(config: &LessonConfig) -> Result<Vec<String>, LessonError> {
    let mut lines = containers::render_downcast(config.untyped_pick)?;
    lines.extend(containers::render_typed(config.typed_pick)?);
    Ok(lines)
}
