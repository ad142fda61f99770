/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "authToken";

/// Persistence for the single bearer token of the current session.
///
/// Implementations swallow their own storage failures: a store that cannot
/// persist reports the token as absent on the next [`get`](Self::get), which
/// is how callers detect that a session could not be established.
pub trait TokenStore: Send + Sync {
    /// Stores `token`, replacing any previous one.
    fn save(&self, token: &str);

    /// Returns the stored token, or `None` if absent or unreadable.
    fn get(&self) -> Option<String>;

    /// Removes the stored token.
    fn clear(&self);

    fn has_token(&self) -> bool {
        self.get().is_some()
    }
}

/// Masks a token for display, keeping only its first and last four characters.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
