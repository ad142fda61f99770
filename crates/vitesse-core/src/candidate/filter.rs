use super::Candidate;

/// Returns the candidates visible under the given search term and favorites toggle.
///
/// The term is trimmed and compared case-insensitively as a substring of the
/// first name, last name, email and phone (a missing phone matches as an
/// empty string). An empty term matches everything. Both conditions must
/// hold. Order follows `candidates`.
pub fn filter_candidates(
    candidates: &[Candidate],
    search_text: &str,
    show_only_favorites: bool,
) -> Vec<Candidate> {
    let term = search_text.trim().to_lowercase();

    candidates
        .iter()
        .filter(|candidate| matches_search(candidate, &term))
        .filter(|candidate| !show_only_favorites || candidate.is_favorite)
        .cloned()
        .collect()
}

/// `term` must already be trimmed and lowercased.
pub fn matches_search(candidate: &Candidate, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    [
        candidate.first_name.as_str(),
        candidate.last_name.as_str(),
        candidate.email.as_str(),
        candidate.phone.as_deref().unwrap_or(""),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, first: &str, last: &str, phone: Option<&str>, fav: bool) -> Candidate {
        Candidate {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            phone: phone.map(str::to_string),
            linkedin_url: None,
            note: None,
            is_favorite: fav,
        }
    }

    fn roster() -> Vec<Candidate> {
        vec![
            candidate("1", "John", "Doe", Some("0601020304"), false),
            candidate("2", "Jane", "Smith", None, true),
            candidate("3", "Johnny", "Walker", Some("0799887766"), true),
        ]
    }

    fn ids(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_search_without_favorites_returns_everything() {
        let all = roster();
        assert_eq!(filter_candidates(&all, "", false), all);
        assert_eq!(filter_candidates(&all, "   ", false), all);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let all = roster();
        assert_eq!(ids(&filter_candidates(&all, "  JOHN ", false)), vec!["1", "3"]);
        assert_eq!(ids(&filter_candidates(&all, "smith", false)), vec!["2"]);
    }

    #[test]
    fn test_search_matches_email_and_phone() {
        let all = roster();
        assert_eq!(ids(&filter_candidates(&all, "walker@", false)), vec!["3"]);
        assert_eq!(ids(&filter_candidates(&all, "0601", false)), vec!["1"]);
    }

    #[test]
    fn test_favorites_and_search_combine() {
        let all = roster();
        assert_eq!(ids(&filter_candidates(&all, "", true)), vec!["2", "3"]);
        assert_eq!(ids(&filter_candidates(&all, "john", true)), vec!["3"]);
        assert!(filter_candidates(&all, "doe", true).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = roster();
        let first = filter_candidates(&all, "jo", true);
        let second = filter_candidates(&all, "jo", true);
        assert_eq!(first, second);
        assert_eq!(all, roster());
    }

    #[test]
    fn test_turning_favorites_off_restores_search_result() {
        let all = roster();
        let search_only = filter_candidates(&all, "john", false);
        assert_eq!(ids(&search_only), vec!["1", "3"]);

        assert_eq!(ids(&filter_candidates(&all, "john", true)), vec!["3"]);
        assert_eq!(filter_candidates(&all, "john", false), search_only);
    }
}
