//! Loads the job description and the folder of resumes

use crate::error::{Result, RankerError};
use crate::input::file_detector::has_extension;
use crate::processing::document::Document;
use crate::processing::observer::{NoopObserver, RankingObserver};
use log::debug;
use std::fs;
use std::path::Path;

pub struct DocumentLoader<'a> {
    extension: String,
    observer: &'a dyn RankingObserver,
}

impl Default for DocumentLoader<'_> {
    fn default() -> Self {
        Self::new("txt")
    }
}

impl<'a> DocumentLoader<'a> {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            observer: &NoopObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn RankingObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn load_job_description(&self, path: &Path) -> Result<Document> {
        let content = fs::read_to_string(path)?;
        let job = Document::job_description(path.to_string_lossy(), content);
        self.observer.job_loaded(&job);
        Ok(job)
    }

    /// Every regular file in `dir` with the configured extension, sorted by file name
    pub fn load_resumes(&self, dir: &Path) -> Result<Vec<Document>> {
        if !dir.is_dir() {
            return Err(RankerError::InvalidInput(format!(
                "Resume folder does not exist or is not a directory: {}",
                dir.display()
            )));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().to_string();

            if !has_extension(&file_name, &self.extension) {
                debug!("Skipping {}", file_name);
                continue;
            }
            // metadata follows symlinks
            if !fs::metadata(entry.path())?.is_file() {
                debug!("Skipping non-file entry {}", file_name);
                continue;
            }
            files.push((file_name, entry.path()));
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));

        let mut resumes = Vec::with_capacity(files.len());
        for (file_name, path) in files {
            let content = fs::read_to_string(&path)?;
            let resume = Document::resume(file_name, content);
            self.observer.resume_loaded(&resume);
            resumes.push(resume);
        }

        Ok(resumes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_resumes_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "beta").unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("folder.txt")).unwrap();

        let resumes = DocumentLoader::default().load_resumes(dir.path()).unwrap();
        let names: Vec<&str> = resumes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(resumes[0].content, "alpha");
    }

    #[test]
    fn test_missing_job_description_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = DocumentLoader::default().load_job_description(&dir.path().join("job1.txt"));
        assert!(matches!(result, Err(RankerError::Io(_))));
    }

    #[test]
    fn test_missing_resume_folder() {
        let dir = TempDir::new().unwrap();
        let result = DocumentLoader::default().load_resumes(&dir.path().join("cvs"));
        assert!(matches!(result, Err(RankerError::InvalidInput(_))));
    }

    #[test]
    fn test_non_utf8_resume_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.txt"), [0x66, 0xFF, 0xFE, 0x80]).unwrap();
        let result = DocumentLoader::default().load_resumes(dir.path());
        assert!(matches!(result, Err(RankerError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_resume_is_loaded() {
        let store = TempDir::new().unwrap();
        let target = store.path().join("original.txt");
        fs::write(&target, "linked python developer").unwrap();

        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("linked.txt")).unwrap();
        fs::write(dir.path().join("plain.txt"), "plain").unwrap();

        let resumes = DocumentLoader::default().load_resumes(dir.path()).unwrap();
        let names: Vec<&str> = resumes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["linked.txt", "plain.txt"]);
        assert_eq!(resumes[0].content, "linked python developer");
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.cv"), "alpha").unwrap();
        fs::write(dir.path().join("b.txt"), "beta").unwrap();

        let resumes = DocumentLoader::new("cv").load_resumes(dir.path()).unwrap();
        assert_eq!(resumes.len(), 1);
        assert_eq!(resumes[0].name, "a.cv");
    }
}
