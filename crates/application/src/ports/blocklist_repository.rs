/// Read-only set of blocked domain literals.
///
/// Implementations are built once and never mutated afterwards, so lookups
/// take `&self` and need no locking.
pub trait BlocklistRepository: Send + Sync {
    /// Exact membership test against a lowercase, dot-terminated-free literal.
    fn contains(&self, domain: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
