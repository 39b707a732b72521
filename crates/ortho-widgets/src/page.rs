// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Kinds of demo page

use ortho::cast::Cast;
use std::fmt;

/// Kind of demo page
///
/// Each kind describes a list of fixed-height rows. Grid-like pages are
/// modelled as rows of items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// A plain table of text rows
    Overview,
    /// A two-column grid of thumbnails
    Details,
    /// A column of chart cards
    Analytics,
}

impl PageKind {
    /// All kinds in display order
    pub const ALL: [PageKind; 3] = [PageKind::Overview, PageKind::Details, PageKind::Analytics];

    /// Title shown in the page selector
    pub fn title(self) -> &'static str {
        match self {
            PageKind::Overview => "Overview",
            PageKind::Details => "Details",
            PageKind::Analytics => "Analytics",
        }
    }

    /// Number of rows
    pub fn rows(self) -> usize {
        match self {
            PageKind::Overview => 30,
            // 20 thumbnails in two columns
            PageKind::Details => 10,
            PageKind::Analytics => 15,
        }
    }

    /// Height of each row, including spacing
    pub fn row_height(self) -> f32 {
        match self {
            PageKind::Overview => 44.0,
            PageKind::Details => 132.0,
            PageKind::Analytics => 160.0,
        }
    }

    /// Total content height
    pub fn content_height(self) -> f32 {
        let rows: f32 = self.rows().cast();
        rows * self.row_height()
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn content_heights() {
        assert_eq!(PageKind::Overview.content_height(), 1320.0);
        assert_eq!(PageKind::Details.content_height(), 1320.0);
        assert_eq!(PageKind::Analytics.content_height(), 2400.0);
        assert_eq!(PageKind::Details.to_string(), "Details");
    }
}
