//! Tree statistics collection and display
//!
//! Counts the files and directories in a built tree. The root counts too, so a
//! lone file root yields one file and zero directories.
//!
//! The overview breaks a saved tree down by top-level section: each visible
//! directory directly under the root, with its immediate and total entry counts.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{HIDDEN_PREFIX, TreeNode};

/// Entry counts for a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub files: usize,
    pub directories: usize,
}

impl TreeStats {
    pub fn total(&self) -> usize {
        self.files + self.directories
    }
}

/// Count the files and directories in a tree, including the root.
/// Directories without a `children` key contribute only themselves.
pub fn summarize(node: &TreeNode) -> TreeStats {
    if !node.is_dir() {
        return TreeStats {
            files: 1,
            directories: 0,
        };
    }

    node.children().iter().map(summarize).fold(
        TreeStats {
            files: 0,
            directories: 1,
        },
        |acc, child| TreeStats {
            files: acc.files + child.files,
            directories: acc.directories + child.directories,
        },
    )
}

/// Print statistics to stdout with optional color.
pub fn print_stats(stats: &TreeStats, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_stats(&mut stdout, stats)
}

/// Entry counts for one top-level directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStats {
    pub name: String,
    /// Immediate children
    pub top_items: usize,
    /// All descendants at any depth
    pub total_entries: usize,
}

/// Number of nodes below `node`, not counting `node` itself.
pub fn count_descendants(node: &TreeNode) -> usize {
    node.children()
        .iter()
        .map(|child| 1 + count_descendants(child))
        .sum()
}

/// Summarize each visible directory directly under the root, in tree order.
pub fn overview(root: &TreeNode) -> Vec<SectionStats> {
    root.children()
        .iter()
        .filter(|section| section.is_dir() && !section.name.starts_with(HIDDEN_PREFIX))
        .map(|section| SectionStats {
            name: section.name.clone(),
            top_items: section.children().len(),
            total_entries: count_descendants(section),
        })
        .collect()
}

/// Print the section overview to stdout with optional color.
pub fn print_overview(sections: &[SectionStats], use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_overview(&mut stdout, sections)
}

fn write_overview<W: WriteColor>(out: &mut W, sections: &[SectionStats]) -> io::Result<()> {
    if sections.is_empty() {
        return writeln!(out, "No sections available.");
    }

    let width = sections.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);
    let mut name_color = ColorSpec::new();
    name_color.set_fg(Some(Color::Blue)).set_bold(true);

    for section in sections {
        out.set_color(&name_color)?;
        write!(out, "{:<width$}", section.name, width = width)?;
        out.reset()?;
        writeln!(
            out,
            "  {} top items · {} total entries",
            section.top_items, section.total_entries
        )?;
    }
    Ok(())
}

fn write_stats<W: WriteColor>(out: &mut W, stats: &TreeStats) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    writeln!(out)?;
    out.set_color(&bold)?;
    writeln!(out, "Statistics:")?;
    out.reset()?;
    writeln!(out, "  Directories: {}", stats.directories)?;
    writeln!(out, "  Files: {}", stats.files)?;
    writeln!(out, "  Total items: {}", stats.total())?;
    Ok(())
}
