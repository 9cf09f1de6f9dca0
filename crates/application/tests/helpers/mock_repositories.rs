#![allow(dead_code)]

use adfilter_dns_application::ports::BlocklistRepository;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockBlocklistRepository {
    domains: HashSet<String>,
    lookups: AtomicUsize,
}

impl MockBlocklistRepository {
    pub fn new() -> Self {
        Self {
            domains: HashSet::new(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_blocked_domains(domains: Vec<&str>) -> Self {
        Self {
            domains: domains.into_iter().map(str::to_string).collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl BlocklistRepository for MockBlocklistRepository {
    fn contains(&self, domain: &str) -> bool {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.domains.contains(domain)
    }

    fn len(&self) -> usize {
        self.domains.len()
    }
}
