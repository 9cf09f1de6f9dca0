mod blocklist_repository;

pub use blocklist_repository::BlocklistRepository;
