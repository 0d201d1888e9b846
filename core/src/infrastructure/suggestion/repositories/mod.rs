pub mod suggestion_repository;
