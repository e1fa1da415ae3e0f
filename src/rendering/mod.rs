use std::io::{self, Write};

use crate::domain::{Cell, Grid, Transition};

/// Clear the screen and move the cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Format large numbers with K/M/B suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// How cells are turned into characters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// `o` for live cells, blank for dead ones
    #[default]
    Plain,
    /// Distinguish births (`+`), survivors (`o`) and fresh deaths (`x`)
    Transitions,
}

impl GlyphStyle {
    pub fn glyph(self, cell: &Cell) -> char {
        match self {
            GlyphStyle::Plain => {
                if cell.is_alive() {
                    'o'
                } else {
                    ' '
                }
            }
            GlyphStyle::Transitions => match (cell.is_alive(), cell.transition()) {
                (true, Transition::Born) => '+',
                (true, _) => 'o',
                (false, Transition::Died) => 'x',
                (false, _) => ' ',
            },
        }
    }
}

/// Draws grid snapshots as text frames
#[derive(Clone, Debug)]
pub struct TerminalRenderer {
    pub style: GlyphStyle,
    pub clear_screen: bool,
}

impl TerminalRenderer {
    pub fn new(style: GlyphStyle, clear_screen: bool) -> Self {
        Self {
            style,
            clear_screen,
        }
    }

    /// One printable line per grid row; each cell is a space followed by its glyph
    pub fn rows(&self, grid: &Grid) -> Vec<String> {
        grid.rows()
            .map(|row| {
                row.iter().fold(String::with_capacity(row.len() * 2), |mut line, cell| {
                    line.push(' ');
                    line.push(self.style.glyph(cell));
                    line
                })
            })
            .collect()
    }

    /// Write a full frame: optional clear, the grid, then a status line
    pub fn draw<W: Write + ?Sized>(
        &self,
        grid: &Grid,
        generation: u64,
        out: &mut W,
    ) -> io::Result<()> {
        let mut frame = String::new();
        if self.clear_screen {
            frame.push_str(CLEAR_SCREEN);
        }
        for line in self.rows(grid) {
            frame.push_str(&line);
            frame.push('\n');
        }
        frame.push('\n');
        frame.push_str(&format!(
            "generation {}  population {}\n",
            generation,
            format_number(grid.population())
        ));

        out.write_all(frame.as_bytes())?;
        out.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(GlyphStyle::default(), true)
    }
}
