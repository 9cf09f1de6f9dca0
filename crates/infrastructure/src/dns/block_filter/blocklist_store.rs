use adfilter_dns_application::ports::BlocklistRepository;
use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use std::collections::HashSet;

/// Immutable set of lowercase blocked domain literals.
#[derive(Debug, Default, Clone)]
pub struct BlocklistStore {
    exact: HashSet<CompactString, FxBuildHasher>,
}

impl BlocklistStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_domains<I>(domains: I) -> Self
    where
        I: IntoIterator<Item = CompactString>,
    {
        let exact: HashSet<CompactString, FxBuildHasher> = domains.into_iter().collect();
        Self { exact }
    }

    #[inline]
    pub fn contains(&self, domain: &str) -> bool {
        self.exact.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

impl BlocklistRepository for BlocklistStore {
    fn contains(&self, domain: &str) -> bool {
        BlocklistStore::contains(self, domain)
    }

    fn len(&self) -> usize {
        BlocklistStore::len(self)
    }
}
