use crate::app::models::StatsNode;
use std::io::{self, Write};

const INDENT: &str = "    ";

/// Writes `stats` as an indented tree, one entry per line.
pub fn print_stats<W: Write>(stats: &StatsNode, label: &str, out: &mut W) -> io::Result<()> {
    write_node(stats, label, 0, out)
}

fn write_node<W: Write>(
    node: &StatsNode,
    label: &str,
    depth: usize,
    out: &mut W,
) -> io::Result<()> {
    let indent = INDENT.repeat(depth);
    match node {
        StatsNode::File { lines } => writeln!(out, "{indent}{label} ({lines} lines)"),
        StatsNode::Dir {
            lines,
            files,
            entries,
        } => {
            writeln!(out, "{indent}{label} [{files} files, {lines} lines]")?;
            for (name, child) in entries {
                write_node(child, name, depth + 1, out)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(stats: &StatsNode, label: &str) -> String {
        let mut buf = Vec::new();
        print_stats(stats, label, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> StatsNode {
        let mut subdir = StatsNode::empty_dir();
        subdir.push_entry("nested.txt".into(), StatsNode::File { lines: 2 });

        let mut root = StatsNode::empty_dir();
        root.push_entry("file1.txt".into(), StatsNode::File { lines: 2 });
        root.push_entry("file2.txt".into(), StatsNode::File { lines: 1 });
        root.push_entry("subdir".into(), subdir);
        root
    }

    #[test]
    fn renders_header_and_entries() {
        let output = render(&sample(), "temp_dir");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "temp_dir [3 files, 5 lines]");
        assert!(output.contains("file1.txt (2 lines)"));
        assert_eq!(
            lines,
            vec![
                "temp_dir [3 files, 5 lines]",
                "    file1.txt (2 lines)",
                "    file2.txt (1 lines)",
                "    subdir [1 files, 2 lines]",
                "        nested.txt (2 lines)",
            ]
        );
    }

    #[test]
    fn file_root_renders_single_line() {
        let output = render(&StatsNode::File { lines: 7 }, "main.rs");
        assert_eq!(output, "main.rs (7 lines)\n");
    }

    #[test]
    fn empty_dir_renders_header_only() {
        let output = render(&StatsNode::empty_dir(), ".");
        assert_eq!(output, ". [0 files, 0 lines]\n");
    }
}
