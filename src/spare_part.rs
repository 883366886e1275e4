//! Spare-part prices, dispatched two ways.
//!
//! `part_price` keeps integer constants standing in for an enum, so any `i32`
//! reaches it and the fallback arm is live. `SparePart` is the closed version
//! of the same table.

use tracing::{debug, warn};

use crate::error::LessonError;

pub const ENGINE: i32 = 0;
pub const TIRES: i32 = 1;
pub const BRAKES: i32 = 2;
pub const BODY: i32 = 3;
pub const EXHAUST: i32 = 4;

pub const NEW_SPARE_PART: &str = "It's a New Spare Part";

pub fn part_price(code: i32) -> &'static str {
    match code {
        ENGINE => "Engine is 1300$",
        TIRES => "Tires is 400$",
        BRAKES => "Brakes is 120$",
        BODY => "Body is 2500$",
        EXHAUST => "Exhaust system is 200$",
        _ => {
            warn!(code, "unknown spare part code");
            NEW_SPARE_PART
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SparePart {
    Engine,
    Tires,
    Brakes,
    Body,
    Exhaust,
}

impl SparePart {
    pub const ALL: [SparePart; 5] = [
        SparePart::Engine,
        SparePart::Tires,
        SparePart::Brakes,
        SparePart::Body,
        SparePart::Exhaust,
    ];

    pub fn code(self) -> i32 {
        match self {
            SparePart::Engine => ENGINE,
            SparePart::Tires => TIRES,
            SparePart::Brakes => BRAKES,
            SparePart::Body => BODY,
            SparePart::Exhaust => EXHAUST,
        }
    }

    pub fn price_message(self) -> &'static str {
        match self {
            SparePart::Engine => "Engine is 1300$",
            SparePart::Tires => "Tires is 400$",
            SparePart::Brakes => "Brakes is 120$",
            SparePart::Body => "Body is 2500$",
            SparePart::Exhaust => "Exhaust system is 200$",
        }
    }
}

impl TryFrom<i32> for SparePart {
    type Error = LessonError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        let part = SparePart::ALL
            .into_iter()
            .find(|part| part.code() == code)
            .ok_or(LessonError::UnknownPart(code))?;
        debug!(?part, code, "resolved spare part");
        Ok(part)
    }
}
