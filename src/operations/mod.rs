// src/operations/mod.rs
//! The two operations the server offers, independent of any transport.

pub mod article;
pub mod search;

pub use article::{retrieve_article, ArticleRequest};
pub use search::{search_articles, SearchRequest};
