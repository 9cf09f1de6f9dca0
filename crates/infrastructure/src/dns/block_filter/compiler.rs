use super::blocklist_store::BlocklistStore;
use adfilter_dns_domain::DomainError;
use compact_str::CompactString;
use std::path::Path;
use tracing::{info, warn};

/// Extracts the domain literal from a `||domain^` rule.
///
/// Comments (`!`), blank lines and every other rule shape yield `None`.
/// The literal is lowercased but otherwise taken as-is.
pub fn parse_list_line(line: &str) -> Option<CompactString> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('!') {
        return None;
    }

    let domain = line.strip_prefix("||")?.strip_suffix('^')?;
    if domain.is_empty() || domain.contains('/') || domain.contains(':') {
        return None;
    }

    Some(CompactString::from(domain.to_lowercase()))
}

pub fn parse_list_text(text: &str) -> BlocklistStore {
    BlocklistStore::from_domains(text.lines().filter_map(parse_list_line))
}

/// Outcome of reading a filter file. A missing or unreadable file yields an
/// empty store plus the error as a warning; it never aborts startup.
#[derive(Debug)]
pub struct FilterLoad {
    pub store: BlocklistStore,
    pub warning: Option<DomainError>,
}

pub fn load_filter_file(path: impl AsRef<Path>) -> FilterLoad {
    let path = path.as_ref();

    match std::fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            let store = parse_list_text(&text);
            info!(path = %path.display(), domains = store.len(), "Loaded blocked domains");
            FilterLoad {
                store,
                warning: None,
            }
        }
        Err(e) => {
            let err = DomainError::FilterLoad {
                path: path.display().to_string(),
                reason: e.to_string(),
            };
            warn!(error = %err, "Filter file unavailable, every domain will be allowed");
            FilterLoad {
                store: BlocklistStore::empty(),
                warning: Some(err),
            }
        }
    }
}
