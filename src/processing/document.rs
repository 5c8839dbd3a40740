//! Document structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// File name for resumes, file path for the job description
    pub name: String,
    pub content: String,
    pub document_type: DocumentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Resume,
    JobDescription,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>, document_type: DocumentType) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            document_type,
        }
    }

    pub fn resume(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(name, content, DocumentType::Resume)
    }

    pub fn job_description(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(name, content, DocumentType::JobDescription)
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn character_count(&self) -> usize {
        self.content.chars().count()
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::Resume => write!(f, "Resume"),
            DocumentType::JobDescription => write!(f, "Job Description"),
        }
    }
}
