pub mod creator_service;

pub use creator_service::CreatorService;
