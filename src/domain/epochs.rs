use std::collections::BTreeMap;

/// Highest epoch with a non-zero share count, keyed by chain.
///
/// Backed by a `BTreeMap` so every tick visits chains in the same order and
/// repeated ticks over unchanged data emit identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainEpochs {
    epochs: BTreeMap<String, i64>,
}

impl ChainEpochs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the epoch for `chain`, replacing any earlier value.
    pub fn insert(&mut self, chain: impl Into<String>, epoch: i64) {
        self.epochs.insert(chain.into(), epoch);
    }

    pub fn get(&self, chain: &str) -> Option<i64> {
        self.epochs.get(chain).copied()
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    pub fn chains(&self) -> impl Iterator<Item = &str> {
        self.epochs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.epochs.iter().map(|(chain, epoch)| (chain.as_str(), *epoch))
    }
}

impl FromIterator<(String, i64)> for ChainEpochs {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self {
            epochs: iter.into_iter().collect(),
        }
    }
}

/// Whether `chain` can be used as a metric name prefix and a file name.
///
/// Accepts `[A-Za-z_][A-Za-z0-9_]*`, the subset of Prometheus metric names
/// without colons. This also rules out path separators and `..`.
pub fn is_valid_chain_key(chain: &str) -> bool {
    let mut chars = chain.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_sorted_by_chain() {
        let mut epochs = ChainEpochs::new();
        epochs.insert("eth", 12);
        epochs.insert("btc", 5);
        epochs.insert("ltc", 7);

        let order: Vec<&str> = epochs.chains().collect();
        assert_eq!(order, vec!["btc", "eth", "ltc"]);
    }

    #[test]
    fn test_insert_replaces_existing_value() {
        let mut epochs = ChainEpochs::new();
        epochs.insert("btc", 5);
        epochs.insert("btc", 9);

        assert_eq!(epochs.len(), 1);
        assert_eq!(epochs.get("btc"), Some(9));
    }

    #[test]
    fn test_collect_from_pairs() {
        let epochs: ChainEpochs = vec![("doge".to_string(), 3), ("btc".to_string(), 1)]
            .into_iter()
            .collect();

        assert_eq!(
            epochs.iter().collect::<Vec<_>>(),
            vec![("btc", 1), ("doge", 3)]
        );
    }

    #[test]
    fn test_valid_chain_keys() {
        assert!(is_valid_chain_key("btc"));
        assert!(is_valid_chain_key("bch_abc"));
        assert!(is_valid_chain_key("_private"));
        assert!(is_valid_chain_key("Eth2"));
    }

    #[test]
    fn test_invalid_chain_keys() {
        assert!(!is_valid_chain_key(""));
        assert!(!is_valid_chain_key("2fa"));
        assert!(!is_valid_chain_key("../etc"));
        assert!(!is_valid_chain_key("btc/main"));
        assert!(!is_valid_chain_key("bit-coin"));
        assert!(!is_valid_chain_key("btc:cash"));
    }
}
