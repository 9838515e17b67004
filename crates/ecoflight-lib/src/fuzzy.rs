//! "Did you mean" suggestions for unknown airport codes and aircraft models.

/// Minimum Jaro-Winkler similarity for a model name to be suggested.
const MIN_SIMILARITY: f64 = 0.7;

/// Most edits (including one adjacent transposition) between an unknown
/// airport code and a suggested one.
const MAX_CODE_EDITS: usize = 1;

/// Return up to `limit` candidates most similar to `needle`, best first.
///
/// Comparison is case-insensitive; ties are broken by candidate name so the
/// output is deterministic.
pub(crate) fn fuzzy_matches<'a, I>(needle: &str, candidates: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = needle.trim().to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| {
            let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
            (score, candidate)
        })
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

/// Airport codes within one edit of `needle`, fewest edits first.
///
/// Jaro-Winkler has no match window on three-letter strings, so short codes
/// are ranked by Damerau-Levenshtein distance instead. Equal distances fall
/// back to Jaro-Winkler similarity and then to the code itself.
pub(crate) fn fuzzy_code_matches<'a, I>(needle: &str, candidates: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = needle.trim().to_uppercase();
    let mut scored: Vec<(usize, f64, &str)> = candidates
        .into_iter()
        .map(|candidate| {
            let upper = candidate.to_uppercase();
            let edits = strsim::damerau_levenshtein(&needle, &upper);
            (edits, strsim::jaro_winkler(&needle, &upper), candidate)
        })
        .filter(|(edits, _, _)| *edits <= MAX_CODE_EDITS)
        .collect();

    scored.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| b.1.total_cmp(&a.1))
            .then_with(|| a.2.cmp(b.2))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, _, candidate)| candidate.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_codes_first() {
        let codes = ["JFK", "LAX", "JAX", "ORD"];
        let matches = fuzzy_code_matches("JFX", codes, 3);
        assert_eq!(matches, vec!["JFK".to_string(), "JAX".to_string()]);
    }

    #[test]
    fn transposed_code_is_suggested() {
        let codes = ["ATL", "JFK", "LAX", "ORD"];
        assert_eq!(fuzzy_code_matches("jkf", codes, 3), vec!["JFK".to_string()]);
        assert_eq!(fuzzy_code_matches("OR", codes, 3), vec!["ORD".to_string()]);
    }

    #[test]
    fn distant_codes_are_not_suggested() {
        assert!(fuzzy_code_matches("ZZZ", ["JFK", "LAX"], 3).is_empty());
    }

    #[test]
    fn respects_limit() {
        let models = ["Boeing 737-800", "Boeing 787-9", "Boeing 777-300ER"];
        assert_eq!(fuzzy_matches("boeing 7", models, 2).len(), 2);
    }

    #[test]
    fn filters_low_similarity() {
        assert!(fuzzy_matches("zzzzzz", ["Boeing 787-9", "Airbus A320neo"], 3).is_empty());
    }
}
