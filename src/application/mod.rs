//! Application layer - Use cases and orchestration

pub mod count_tags;

pub use count_tags::CountTagsService;
