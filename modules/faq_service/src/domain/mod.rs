//! Domain layer - business logic and services

pub mod identifier;
pub mod relations;
pub mod repository;
pub mod service;
pub mod stores;

pub use identifier::{SlugUrlKeyGenerator, UrlKeyGenerator};
pub use relations::{RelationPlan, RewritePaths};
pub use repository::{FaqCategoryRepository, FaqRepository, UrlRewriteRepository};
pub use service::Service;
pub use stores::StoreManager;
