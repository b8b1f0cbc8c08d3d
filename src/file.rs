// src/file.rs

use std::{
    fs,
    io,
    path::Path,
};

/// Write rendered output to `path`, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parents() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("cricstat_file_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let path = dir.join("nested").join("out.csv");
        write_output(&path, "a,b\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");

        let _ = fs::remove_dir_all(&dir);
    }
}
