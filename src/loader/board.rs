//! Board file loader
//!
//! One card name per line. Blank lines and `#` comments are skipped, and a
//! `Prefix: Name` line with an Event, Project, Way, Landmark or Ally prefix
//! (any case) adds a landscape instead of a kingdom card:
//!
//! ```text
//! # Big money with a twist
//! Smithy
//! Village
//! Event: Seize the Day
//! project: Fair
//! ```
//!
//! Names are kept as written; they are resolved against the card registry
//! when a game is set up.

use crate::{DominionError, Result};
use std::fs;
use std::path::Path;

/// Cards and landscapes for one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub kingdom: Vec<String>,
    pub events: Vec<String>,
    pub projects: Vec<String>,
    pub ways: Vec<String>,
    pub landmarks: Vec<String>,
    pub allies: Vec<String>,
}

impl Board {
    /// Board with just a kingdom, for building games in code
    pub fn with_kingdom<S: AsRef<str>>(kingdom: &[S]) -> Self {
        Board {
            kingdom: kingdom.iter().map(|name| name.as_ref().to_string()).collect(),
            ..Board::default()
        }
    }

    fn landscape_list(&mut self, prefix: &str) -> Option<&mut Vec<String>> {
        match prefix.to_ascii_lowercase().as_str() {
            "event" => Some(&mut self.events),
            "project" => Some(&mut self.projects),
            "way" => Some(&mut self.ways),
            "landmark" => Some(&mut self.landmarks),
            "ally" => Some(&mut self.allies),
            _ => None,
        }
    }
}

/// Board loader for plain-text board files
pub struct BoardLoader;

impl BoardLoader {
    /// Load a board from a file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Board> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a board from its text content
    pub fn parse(content: &str) -> Result<Board> {
        let mut board = Board::default();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once(':') {
                Some((prefix, name)) => {
                    let name = name.trim();
                    let Some(list) = board.landscape_list(prefix.trim()) else {
                        return Err(DominionError::InvalidBoard(format!(
                            "line {}: unknown prefix '{}'",
                            line_no + 1,
                            prefix.trim()
                        )));
                    };
                    if name.is_empty() {
                        return Err(DominionError::InvalidBoard(format!(
                            "line {}: missing name after '{}:'",
                            line_no + 1,
                            prefix.trim()
                        )));
                    }
                    list.push(name.to_string());
                }
                None => board.kingdom.push(line.to_string()),
            }
        }

        if board.kingdom.is_empty() {
            return Err(DominionError::InvalidBoard("no kingdom cards".to_string()));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let content = r#"
# First game
Cellar
Market
  Militia

Event: Seize the Day
PROJECT: Fair
way: Way of the Ox
Landmark: Wall
Ally: Market Towns
"#;
        let board = BoardLoader::parse(content).unwrap();
        assert_eq!(board.kingdom, vec!["Cellar", "Market", "Militia"]);
        assert_eq!(board.events, vec!["Seize the Day"]);
        assert_eq!(board.projects, vec!["Fair"]);
        assert_eq!(board.ways, vec!["Way of the Ox"]);
        assert_eq!(board.landmarks, vec!["Wall"]);
        assert_eq!(board.allies, vec!["Market Towns"]);
    }

    #[test]
    fn test_landscapes_only_is_an_error() {
        let err = BoardLoader::parse("# nothing\nEvent: Delay\n").unwrap_err();
        assert!(matches!(err, DominionError::InvalidBoard(_)));
        assert!(BoardLoader::parse("").is_err());
    }

    #[test]
    fn test_malformed_prefix_lines() {
        assert!(matches!(
            BoardLoader::parse("Smithy\nArtifact: Flag\n"),
            Err(DominionError::InvalidBoard(_))
        ));
        assert!(matches!(
            BoardLoader::parse("Smithy\nEvent:\n"),
            Err(DominionError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_with_kingdom() {
        let board = Board::with_kingdom(&["Smithy", "Village"]);
        assert_eq!(board.kingdom.len(), 2);
        assert!(board.events.is_empty());
    }
}
