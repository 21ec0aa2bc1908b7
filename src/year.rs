//! Footer copyright year.

use crate::host::{Clock, TextTarget};

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

/// Write the clock's year into `target`. Returns the year written, or `None`
/// when the page has no display element.
pub fn stamp<T: TextTarget>(target: Option<&T>, clock: &impl Clock) -> Option<u32> {
    let target = target?;
    let year = clock.current_year();
    target.set_text(&year.to_string());
    Some(year)
}
