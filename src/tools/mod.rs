pub mod classify;
pub mod document;
pub mod fetch;
pub mod specificity;
pub mod validate;
pub mod xpath;
