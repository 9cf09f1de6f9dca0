#![allow(dead_code, unused_imports)]

mod event_counter;
mod mock_repositories;

pub use event_counter::EventCounter;
pub use mock_repositories::MockBlocklistRepository;
