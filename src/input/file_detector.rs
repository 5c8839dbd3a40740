//! File type detection

use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Text,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => FileType::Text,
            _ => FileType::Unknown,
        }
    }
}

/// Whether a file name ends with `.<extension>`, compared case-sensitively
pub fn has_extension(file_name: &str, extension: &str) -> bool {
    let extension = extension.trim_start_matches('.');
    file_name
        .strip_suffix(extension)
        .map(|stem| stem.ends_with('.'))
        .unwrap_or(false)
}

pub fn detect(path: &Path) -> FileType {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(FileType::from_extension)
        .unwrap_or(FileType::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(has_extension("PERSON1_CV.txt", "txt"));
        assert!(has_extension("PERSON1_CV.txt", ".txt"));
        assert!(!has_extension("PERSON1_CV.TXT", "txt"));
        assert!(!has_extension("notes.pdf", "txt"));
        assert!(!has_extension("txt", "txt"));
    }

    #[test]
    fn test_detect() {
        assert_eq!(detect(Path::new("cvs/a.txt")), FileType::Text);
        assert_eq!(detect(Path::new("cvs/a.md")), FileType::Unknown);
        assert_eq!(detect(Path::new("cvs/README")), FileType::Unknown);
    }
}
