pub mod creator_repository;

pub use creator_repository::{CreatorRepository, RepoError};
