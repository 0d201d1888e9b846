pub mod analysis;
pub mod common;
pub mod conversation;
pub mod dispatch;
pub mod health;
pub mod llm;
pub mod planning;
pub mod recipe;
pub mod suggestion;
