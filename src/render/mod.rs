//! Fixed-width bracket grid
//!
//! The final sits in the center column; earlier rounds fan out to the left
//! (the final's left subtree) and mirror to the right. With tree depth D
//! the grid has 2D + 1 columns. Read-only: rendering never touches the tree.

use std::fmt::Write;

use crate::competitor::{label_seed_width, Competitor, MatchSlot, LABEL_NAME_WIDTH};
use crate::tree::{Bracket, BracketNode};

/// Layout parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width of one round's column; widened when a box would not fit
    pub column_width: usize,

    /// Characters of each name shown inside a box
    pub name_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::with_name_width(LABEL_NAME_WIDTH)
    }
}

impl RenderConfig {
    /// Columns sized to fit `name_width`-character names
    pub fn with_name_width(name_width: usize) -> Self {
        Self {
            column_width: name_width + 8,
            name_width,
        }
    }

    /// Width of one `|label|` box whose seed column is `seed_width` wide
    pub fn box_width(&self, seed_width: usize) -> usize {
        self.name_width + seed_width + 5
    }

    fn entry(&self, competitor: Option<&Competitor>, seed_width: usize) -> String {
        match competitor {
            Some(c) => format!("|{}|", c.bracket_label(seed_width, self.name_width)),
            None => format!("|{}|", "-".repeat(self.box_width(seed_width) - 2)),
        }
    }
}

/// Render with the default layout
pub fn render(bracket: &Bracket) -> String {
    render_with(bracket, &RenderConfig::default())
}

/// Render with an explicit layout
pub fn render_with(bracket: &Bracket, config: &RenderConfig) -> String {
    Grid::new(bracket, config).draw()
}

struct Grid<'a> {
    bracket: &'a Bracket,
    config: &'a RenderConfig,
    depth: usize,
    seed_width: usize,
    box_width: usize,
    column_width: usize,
    out: String,
}

impl<'a> Grid<'a> {
    fn new(bracket: &'a Bracket, config: &'a RenderConfig) -> Self {
        let seed_width = label_seed_width(bracket.competitor_count());
        let box_width = config.box_width(seed_width);
        Self {
            bracket,
            config,
            depth: bracket.depth() as usize,
            seed_width,
            box_width,
            column_width: config.column_width.max(box_width + 1),
            out: String::new(),
        }
    }

    fn total_width(&self) -> usize {
        (2 * self.depth + 1) * self.column_width
    }

    fn entry(&self, competitor: Option<&Competitor>) -> String {
        self.config.entry(competitor, self.seed_width)
    }

    fn draw(mut self) -> String {
        self.header();

        let root = self.bracket.root();
        if let Some((left, right)) = root.children() {
            self.mirrored(left, right, 0);
        }

        let center = self.depth * self.column_width;
        for side in [root.slot().side_a(), root.slot().side_b()] {
            let entry = self.entry(side);
            let _ = writeln!(self.out, "{:pad$}{entry}", "", pad = center);
        }
        self.out
    }

    fn header(&mut self) {
        let columns = 2 * self.depth + 1;
        let width = self.column_width;
        let mut line = String::new();

        for column in 0..columns {
            let label = match column.abs_diff(self.depth) {
                0 => "FINAL".to_string(),
                1 => "SEMIFINALS".to_string(),
                2 => "QUARTERFINALS".to_string(),
                _ if column < self.depth => format!("ROUND: {}", column + 1),
                _ => format!("ROUND: {}", columns - column),
            };
            let _ = write!(line, "{label:<width$}");
        }

        let _ = writeln!(self.out, "{}", line.trim_end());
        let _ = writeln!(self.out, "{}", "=".repeat(self.total_width().saturating_sub(2)));
    }

    /// In-order walk of the two halves side by side.
    fn mirrored(&mut self, left: &BracketNode, right: &BracketNode, level: usize) {
        if let (Some((ll, lr)), Some((rl, rr))) = (left.children(), right.children()) {
            self.mirrored(ll, rl, level + 1);
            self.pair_rows(left.slot(), right.slot(), level);
            self.mirrored(lr, rr, level + 1);
        } else {
            self.pair_rows(left.slot(), right.slot(), level);
        }
    }

    fn pair_rows(&mut self, left: &MatchSlot, right: &MatchSlot, level: usize) {
        let pad = (self.depth - 1 - level) * self.column_width;
        let gap = self.total_width().saturating_sub(2 * pad + 2 * self.box_width);

        for (l, r) in [(left.side_a(), right.side_a()), (left.side_b(), right.side_b())] {
            let _ = writeln!(
                self.out,
                "{:pad$}{}{:gap$}{}",
                "",
                self.entry(l),
                "",
                self.entry(r),
                pad = pad,
                gap = gap
            );
        }
    }
}
