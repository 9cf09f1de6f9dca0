use std::borrow::Cow;
use std::sync::Arc;

use crate::ports::BlocklistRepository;

/// Parent-domain suffix matching over a [`BlocklistRepository`].
///
/// Blocking `example.com` blocks every `*.example.com`; blocking a subdomain
/// never blocks its parent.
#[derive(Clone)]
pub struct DomainMatcher {
    blocklist: Arc<dyn BlocklistRepository>,
}

impl DomainMatcher {
    pub fn new(blocklist: Arc<dyn BlocklistRepository>) -> Self {
        Self { blocklist }
    }

    pub fn blocklist_len(&self) -> usize {
        self.blocklist.len()
    }

    pub fn is_blocked(&self, raw_domain: &str) -> bool {
        let domain = normalize(raw_domain);
        if domain.is_empty() {
            return false;
        }

        let blocked =
            suffix_candidates(&domain).any(|candidate| self.blocklist.contains(candidate));
        blocked
    }
}

fn normalize(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.strip_suffix('.').unwrap_or(raw);
    if trimmed.chars().any(char::is_uppercase) {
        Cow::Owned(trimmed.to_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// The domain itself, then each parent down to the last label.
fn suffix_candidates(domain: &str) -> impl Iterator<Item = &str> {
    std::iter::once(0)
        .chain(domain.match_indices('.').map(|(i, _)| i + 1))
        .map(move |start| &domain[start..])
        .filter(|candidate| !candidate.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_candidates_order() {
        let got: Vec<&str> = suffix_candidates("a.b.example.com").collect();
        assert_eq!(got, vec!["a.b.example.com", "b.example.com", "example.com", "com"]);
    }

    #[test]
    fn test_suffix_candidates_single_label() {
        let got: Vec<&str> = suffix_candidates("localhost").collect();
        assert_eq!(got, vec!["localhost"]);
    }

    #[test]
    fn test_normalize_strips_one_trailing_dot() {
        assert_eq!(normalize("Ad.Kakao.COM."), "ad.kakao.com");
        assert_eq!(normalize("kakao.com.."), "kakao.com.");
    }
}
