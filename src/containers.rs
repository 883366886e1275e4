//! The same list of spare parts stored twice: once untyped, where every read
//! is a runtime cast that can fail, and once generic, where it cannot.

use std::any::{self, Any};
use std::fmt;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::error::LessonError;

pub const SPARE_PARTS: [&str; 5] = ["Engine", "Tires", "Brakes", "Body", "Exhaust system"];

/// Something that is not a string, for the failing cast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vehicle;

// =============================================================================
// Untyped list
// =============================================================================

struct Entry {
    value: Box<dyn Any>,
    type_name: &'static str,
}

/// Ordered, heterogeneous, duplicates allowed.
#[derive(Default)]
pub struct UntypedList {
    entries: Vec<Entry>,
}

impl UntypedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<T: Any>(&mut self, value: T) {
        self.entries.push(Entry {
            value: Box::new(value),
            type_name: any::type_name::<T>(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Type name recorded when the element at `index` was added.
    pub fn type_name_at(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|e| e.type_name)
    }

    /// Read the element at `index` as a `T`. The caller picks `T`; nothing
    /// checks it until this call.
    pub fn get_as<T: Any>(&self, index: usize) -> Result<&T, LessonError> {
        let entry = self.entries.get(index).ok_or(LessonError::IndexOutOfBounds {
            index,
            len: self.entries.len(),
        })?;

        entry.value.downcast_ref::<T>().ok_or_else(|| {
            let err = LessonError::type_mismatch(index, any::type_name::<T>(), entry.type_name);
            warn!(%err, "downcast failed");
            err
        })
    }
}

impl fmt::Debug for UntypedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.type_name))
            .finish()
    }
}

// =============================================================================
// Typed list
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedList<T> {
    items: Vec<T>,
}

impl<T> TypedList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for TypedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for TypedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for TypedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}

// =============================================================================
// Fixtures and demo output
// =============================================================================

/// The five parts followed by a `Vehicle` at index 5.
pub fn untyped_spare_parts() -> UntypedList {
    let mut list = UntypedList::new();
    for part in SPARE_PARTS {
        list.add(part.to_string());
    }
    list.add(Vehicle);
    list
}

pub fn typed_spare_parts() -> TypedList<String> {
    SPARE_PARTS.iter().map(|p| p.to_string()).collect()
}

const RULE: &str = "---------------------------------";

fn banner(title: &str, prompt: &str, choice: &str) -> String {
    format!("\n{RULE}\n\t\t{title}\n{RULE}\n{prompt}\n{choice}")
}

pub fn render_downcast(pick: usize) -> Result<Vec<String>, LessonError> {
    let parts = untyped_spare_parts();
    let part: &String = parts.get_as(pick)?;
    debug!(pick, %part, "downcast succeeded");
    Ok(vec![banner(
        "USED THE DOWN-CAST",
        "You have chosen the following part: ",
        part,
    )])
}

pub fn render_typed(pick: usize) -> Result<Vec<String>, LessonError> {
    let parts = typed_spare_parts();
    let part = parts.get(pick).ok_or(LessonError::IndexOutOfBounds {
        index: pick,
        len: parts.len(),
    })?;
    Ok(vec![banner(
        "USED THE GENERICS",
        "You've chosen the following: ",
        part,
    )])
}
