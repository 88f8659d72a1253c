//! Group infrastructure: file-backed repository and query service

mod repository;
mod service;

pub use repository::FileGroupRepository;
pub use service::GroupService;
