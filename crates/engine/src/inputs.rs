// crates/engine/src/inputs.rs
use crate::config::Config;
use crate::error::{EngineError, Result};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Identifiers to dispatch: direct inputs first, then the `files_from` list.
///
/// # Errors
/// Returns `EngineError::FilesFrom` if the list cannot be read.
pub fn resolve(config: &Config) -> Result<Vec<PathBuf>> {
    let mut paths = config.inputs.clone();

    if let Some(list) = &config.files_from {
        let listed = read_list(list).map_err(|e| EngineError::FilesFrom {
            path: list.clone(),
            source: e,
        })?;
        log::debug!("read {} identifiers from '{}'", listed.len(), list.display());
        paths.extend(listed);
    }

    Ok(paths)
}

fn read_list(list: &Path) -> io::Result<Vec<PathBuf>> {
    if list == Path::new("-") {
        parse_list(io::stdin().lock())
    } else {
        parse_list(std::fs::File::open(list)?)
    }
}

fn parse_list<R: Read>(reader: R) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let trimmed = line.trim_end_matches('\r');
        if !trimmed.trim().is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;

    #[test]
    fn test_parse_list_skips_blank_lines() {
        let paths = parse_list("a.txt\r\n\n  \nb c.txt\n".as_bytes()).unwrap();
        assert_eq!(paths, vec![PathBuf::from("a.txt"), PathBuf::from("b c.txt")]);
    }

    #[test]
    fn test_direct_inputs_come_first() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("list.txt");
        std::fs::write(&list, "listed.txt\n").unwrap();

        let config = ConfigBuilder::default()
            .inputs(vec![PathBuf::from("direct.txt")])
            .files_from(Some(list))
            .build()
            .unwrap();

        let paths = resolve(&config).unwrap();
        assert_eq!(paths, vec![PathBuf::from("direct.txt"), PathBuf::from("listed.txt")]);
    }

    #[test]
    fn test_missing_list_is_fatal() {
        let config = ConfigBuilder::default()
            .files_from(Some(PathBuf::from("/definitely/not/here.list")))
            .build()
            .unwrap();
        assert!(matches!(resolve(&config), Err(EngineError::FilesFrom { .. })));
    }
}
