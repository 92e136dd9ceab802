//! Compact port-list expansion (`Po1-2,Te1/0/1` → `Po1`, `Po2`, `Te1/0/1`).

/// Split comma-joined tokens and drop empty fragments.
pub fn split_compound_ports<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .flat_map(|t| t.as_ref().split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Expand `<prefix><start>-<end>` tokens into one token per port.
///
/// The prefix is everything before the start number, slash path included
/// (`Gi1/0/42-43` → `Gi1/0/42`, `Gi1/0/43`). Single ports and reversed
/// ranges are kept as-is.
pub fn expand_ranges<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref();
        match parse_range(token) {
            Some((prefix, start, end)) if start <= end => {
                out.extend((start..=end).map(|i| format!("{prefix}{i}")));
            }
            _ => out.push(token.to_owned()),
        }
    }
    out
}

fn parse_range(token: &str) -> Option<(&str, u32, u32)> {
    let (head, end) = token.rsplit_once('-')?;
    if end.is_empty() || !end.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let prefix_len = head.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let (prefix, start) = head.split_at(prefix_len);
    if start.is_empty() {
        return None;
    }
    Some((prefix, start.parse().ok()?, end.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn expands_slash_prefixed_range() {
        assert_eq!(expand_ranges(&["Gi1/0/42-43"]), ["Gi1/0/42", "Gi1/0/43"]);
        assert_eq!(
            expand_ranges(&["Te1/0/1-4"]),
            ["Te1/0/1", "Te1/0/2", "Te1/0/3", "Te1/0/4"]
        );
        assert_eq!(expand_ranges(&["Po1-2"]), ["Po1", "Po2"]);
    }

    #[test]
    fn single_ports_unchanged() {
        assert_eq!(expand_ranges(&["Gi1/0/5"]), ["Gi1/0/5"]);
        assert_eq!(expand_ranges(&["ge-0/0/1"]), ["ge-0/0/1"]);
        assert_eq!(expand_ranges(&["Po-2"]), ["Po-2"]);
    }

    #[test]
    fn reversed_range_unchanged() {
        assert_eq!(expand_ranges(&["Te1/0/9-3"]), ["Te1/0/9-3"]);
        assert_eq!(expand_ranges(&["Te1/0/3-3"]), ["Te1/0/3"]);
    }

    #[test]
    fn split_drops_empty_fragments() {
        assert_eq!(
            split_compound_ports(&["Po1-2,", "Te1/0/1-2,Po1", "", " Te1/0/6 "]),
            ["Po1-2", "Te1/0/1-2", "Po1", "Te1/0/6"]
        );
    }

    #[test]
    fn split_then_expand() {
        let ports = expand_ranges(&split_compound_ports(&["Te1/0/1-2,Po1"]));
        assert_eq!(ports, ["Te1/0/1", "Te1/0/2", "Po1"]);
    }
}
