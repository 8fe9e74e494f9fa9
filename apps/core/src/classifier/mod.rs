//! # Classifier Module
//!
//! Keyword-based ticket division classification. No trained model: every
//! decision is traceable to dictionary hits.
//!
//! ## Components
//! - `normalize`: canonical text form shared by input and keywords
//! - `dictionary`: validated, immutable category table
//! - `divisions`: built-in Indonesian/English division keywords
//! - `scoring`: per-category phrase / word / substring scoring
//! - `engine`: winner selection, fallback, confidence, suggestions

pub mod dictionary;
pub mod divisions;
pub mod engine;
pub mod normalize;
pub mod scoring;

pub use dictionary::{
    Category, CategoryDictionary, CategoryName, CategorySpec, DictionaryBuilder, DictionaryError,
    DictionarySpec,
};
pub use divisions::{default_divisions, FALLBACK_DIVISION};
pub use engine::{
    ClassificationEngine, ClassificationResult, ConfidenceLevel, EngineOptions, Method, Suggestion,
};
pub use normalize::normalize;
