#![doc = include_str!("../README.md")]

pub mod cli;
pub mod engine;
pub mod error;
pub mod patterns;
pub mod tools;
pub mod types;


pub use engine::*;
pub use error::*;
pub use tools::classify::{classify, normalize_selector};
pub use tools::document::{
    Adapter, Content, Document, DocumentAdapter, DynamicAdapter, MatchResult, StaticAdapter,
};
pub use tools::fetch::{renderer_for, HttpRenderer, Renderer};
#[cfg(feature = "headless")]
pub use tools::fetch::ChromeRenderer;
pub use tools::specificity::{
    branch_specificities, extract_selector_parts, specificity, specificity_for, SelectorParts,
    SpecificityScore,
};
pub use tools::validate::validate;
pub use types::*;
