//! Execution report: node counting and the post-run summary.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::Node;

/// Count files and folders in a subtree.
///
/// Returns `(files, folders)`. A folder counts itself plus everything
/// below it, so the tree's root is included in the folder total.
pub fn count_nodes(node: &Node) -> (usize, usize) {
    match node {
        Node::File { .. } => (1, 0),
        Node::Folder { children, .. } => {
            let mut files = 0;
            let mut folders = 1;
            for child in children {
                let (f, d) = count_nodes(child);
                files += f;
                folders += d;
            }
            (files, folders)
        }
    }
}

/// Print the execution report to stdout with optional color.
pub fn print_report(
    source: &Path,
    output: &Path,
    files: usize,
    folders: usize,
    use_color: bool,
) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    writeln!(stdout)?;
    stdout.set_color(&bold)?;
    writeln!(stdout, "Execution Report")?;
    stdout.reset()?;
    writeln!(stdout, "────────────────")?;
    writeln!(stdout, "Source folder:      {}", source.display())?;
    writeln!(stdout, "Output file:        {}", output.display())?;
    writeln!(stdout, "Total files:        {files}")?;
    writeln!(stdout, "Total directories:  {folders}")?;
    writeln!(stdout, "Total items:        {}", files + folders)?;

    Ok(())
}
