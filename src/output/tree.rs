//! Tree formatter for console output
//!
//! Renders a `TreeNode` with box-drawing connectors, directories in bold
//! blue, followed by a directory/file count footer. Directories that could
//! not be listed are marked with their error.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::TreeNode;

/// Formatter for buffered tree output.
pub struct TreeFormatter {
    use_color: bool,
}

impl TreeFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Render without colors.
    pub fn format(&self, node: &TreeNode) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writes into a Vec cannot fail
        let _ = self.write(&mut out, node);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(&mut stdout, node)
    }

    pub fn write<W: WriteColor>(&self, out: &mut W, node: &TreeNode) -> io::Result<()> {
        let (dir_count, file_count) = self.write_node(out, node, "", true, true)?;
        writeln!(out)?;
        writeln!(out, "{} directories, {} files", dir_count, file_count)?;
        Ok(())
    }

    /// Write one node and its subtree. Returns the (directories, files) shown
    /// below the root; the root itself is not counted.
    fn write_node<W: WriteColor>(
        &self,
        out: &mut W,
        node: &TreeNode,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<(usize, usize)> {
        let connector = if is_last { "└── " } else { "├── " };

        if !is_root {
            write!(out, "{}{}", prefix, connector)?;
        }

        if !node.is_dir() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
            writeln!(out, "{}", node.name)?;
            out.reset()?;
            return Ok(if is_root { (0, 0) } else { (0, 1) });
        }

        // An unnamed root ("." or "/") prints like tree(1) does
        let name = if is_root && node.name.is_empty() {
            "."
        } else {
            node.name.as_str()
        };
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", name)?;
        out.reset()?;

        if let Some(error) = &node.error {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(out, "  [{}]", error)?;
            out.reset()?;
        }
        writeln!(out)?;

        let new_prefix = if is_root {
            String::new()
        } else if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        let mut dir_count = 0;
        let mut file_count = 0;

        let children = node.children();
        for (i, child) in children.iter().enumerate() {
            let child_is_last = i == children.len() - 1;
            let (d, f) = self.write_node(out, child, &new_prefix, child_is_last, false)?;
            dir_count += d;
            file_count += f;
        }

        if !is_root {
            dir_count += 1;
        }
        Ok((dir_count, file_count))
    }
}
