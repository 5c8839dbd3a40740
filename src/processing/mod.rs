//! Text processing, keyword extraction and candidate ranking

pub mod document;
pub mod text_processor;
pub mod keywords;
pub mod observer;
pub mod ranker;
