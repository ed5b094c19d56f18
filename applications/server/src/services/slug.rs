/// Playlist identifier derivation
use rand::Rng;
use vidlist_core::types::PlaylistId;

/// URL-safe alphabet for random tokens
const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of fallback identifiers and collision suffixes
pub const TOKEN_LEN: usize = 4;

/// Random token drawn from `[A-Za-z0-9_-]`
pub fn random_token(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Accented and extended Latin letters (Latin-1 Supplement through Latin
/// Extended-B, plus Latin Extended Additional).
fn is_latin_letter(c: char) -> bool {
    c.is_alphabetic() && matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}')
}

fn is_latin_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_latin_letter(c)
}

/// Strict slug of a playlist name.
///
/// Characters other than Latin letters, digits, whitespace and `-` are
/// dropped without leaving a separator, so `Rock'n'Roll` becomes
/// `rocknroll`. What remains is transliterated to ASCII, lowercased, and
/// whitespace runs become one hyphen. Empty when the name has no Latin
/// alphanumeric content.
pub fn slugify(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|&c| is_latin_alphanumeric(c) || c.is_whitespace() || c == '-')
        .collect();

    if !kept.chars().any(is_latin_alphanumeric) {
        return String::new();
    }

    ::slug::slugify(kept)
}

/// Identifier to try first for `name`: its slug, or a random token when the
/// name has no sluggable characters.
pub fn base_identifier(name: &str) -> PlaylistId {
    let slug = slugify(name);
    if slug.is_empty() {
        PlaylistId::new(random_token(TOKEN_LEN))
    } else {
        PlaylistId::new(slug)
    }
}

/// `base-XXXX` with a fresh token.
pub fn with_suffix(base: &PlaylistId) -> PlaylistId {
    PlaylistId::new(format!("{}-{}", base, random_token(TOKEN_LEN)))
}
