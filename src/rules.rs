use std::fs::File;
use std::io::{self, BufReader, Read};
use std::ops::Deref;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to read rule groups from {path}: {source}")]
    SourceUnavailable { path: PathBuf, source: io::Error },
}

/// Rule group identifiers in the order they appear in the export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleList(Vec<String>);

impl RuleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: String) {
        self.0.push(rule);
    }
}

impl Deref for RuleList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for RuleList {
    fn from(rules: Vec<String>) -> Self {
        Self(rules)
    }
}

/// Reads one identifier per line. Lines are kept verbatim apart from the line
/// terminator (`\n`, `\r\n` or a lone `\r`), so blank lines and duplicates
/// survive.
pub fn collect(path: &Path) -> Result<RuleList, Error> {
    let unavailable = |source: io::Error| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let mut reader = BufReader::new(file);

    let mut contents = String::new();
    reader.read_to_string(&mut contents).map_err(unavailable)?;

    let mut rules = RuleList::new();
    for line in split_lines(&contents) {
        rules.push(line.to_string());
    }

    return Ok(rules);
}

fn split_lines(contents: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = contents;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(index) => {
                lines.push(&rest[..index]);
                let terminator = if rest[index..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[index + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}
