pub mod mappers;
pub mod repositories;

pub use repositories::suggestion_repository::PostgresSuggestionRepository;
