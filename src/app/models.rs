/// Folder and file name patterns to skip during a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    pub folders: Vec<String>,
    pub files: Vec<String>,
}

/// Line and file counts for a single scanned entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsNode {
    File {
        lines: u64,
    },
    Dir {
        lines: u64,
        files: u64,
        /// Children in the order the filesystem listed them
        entries: Vec<(String, StatsNode)>,
    },
}

impl StatsNode {
    pub fn empty_dir() -> Self {
        StatsNode::Dir {
            lines: 0,
            files: 0,
            entries: Vec::new(),
        }
    }

    pub fn lines(&self) -> u64 {
        match self {
            StatsNode::File { lines } => *lines,
            StatsNode::Dir { lines, .. } => *lines,
        }
    }

    /// Number of files this node accounts for; a file counts itself.
    pub fn files(&self) -> u64 {
        match self {
            StatsNode::File { .. } => 1,
            StatsNode::Dir { files, .. } => *files,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, StatsNode::Dir { .. })
    }

    pub fn entries(&self) -> &[(String, StatsNode)] {
        match self {
            StatsNode::File { .. } => &[],
            StatsNode::Dir { entries, .. } => entries,
        }
    }

    /// Looks up a direct child by name.
    pub fn get(&self, name: &str) -> Option<&StatsNode> {
        self.entries()
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, node)| node)
    }

    /// Appends a child and folds its counts into this directory's totals.
    /// Has no effect on a file node.
    pub fn push_entry(&mut self, name: String, child: StatsNode) {
        if let StatsNode::Dir {
            lines,
            files,
            entries,
        } = self
        {
            *lines += child.lines();
            *files += child.files();
            entries.push((name, child));
        }
    }
}
