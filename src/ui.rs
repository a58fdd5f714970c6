//! Text views of what the AI knows and where it expects ships.

use alloc::string::String;
use core::fmt::Write;

use crate::{
    common::Position,
    config::BOARD_SIZE,
    heatmap::Heatmap,
    knowledge::{Belief, KnowledgeGrid},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

fn header(out: &mut String, width: usize) {
    out.push_str("   ");
    for c in 0..GRID_SIZE {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {:>width$}", ch, width = width);
    }
    out.push('\n');
}

/// Knowledge grid, one symbol per cell: `.` unknown, `o` miss, `X` hit,
/// `#` sunk.
pub fn render_knowledge(knowledge: &KnowledgeGrid) -> String {
    let mut out = String::new();
    header(&mut out, 1);
    for r in 0..GRID_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let ch = match knowledge.belief_at(Position::new(c, r)) {
                Belief::Unknown => '.',
                Belief::Miss => 'o',
                Belief::Hit => 'X',
                Belief::Sunk => '#',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Heatmap as per-cell frequencies; resolved cells are shown as `-`.
pub fn render_heatmap(heatmap: &Heatmap, knowledge: &KnowledgeGrid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Heatmap ({} samples):", heatmap.samples());
    header(&mut out, 4);
    for r in 0..GRID_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let pos = Position::new(c, r);
            if knowledge.belief_at(pos) == Belief::Unknown {
                let _ = write!(out, " {:4.2}", heatmap.frequency(pos));
            } else {
                out.push_str("    -");
            }
        }
        out.push('\n');
    }
    out
}
