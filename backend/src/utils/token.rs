use crate::constants::{API_TOKEN_LENGTH, GUEST_NAME_PREFIX, GUEST_NAME_SUFFIX_LENGTH};
use rand::distr::Alphanumeric;
use rand::Rng;

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Opaque bearer token identifying a guest actor.
pub fn generate_api_token() -> String {
    random_alphanumeric(API_TOKEN_LENGTH)
}

/// Auto-generated display name for a guest, e.g. "Guest x7Kp2mQa".
pub fn generate_guest_name() -> String {
    format!(
        "{} {}",
        GUEST_NAME_PREFIX,
        random_alphanumeric(GUEST_NAME_SUFFIX_LENGTH)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_token_shape() {
        let token = generate_api_token();
        assert_eq!(token.len(), API_TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn guest_name_shape() {
        let name = generate_guest_name();
        let suffix = name
            .strip_prefix("Guest ")
            .expect("guest names start with the prefix");
        assert_eq!(suffix.len(), GUEST_NAME_SUFFIX_LENGTH);
    }

    #[test]
    fn tokens_are_not_repeated() {
        assert_ne!(generate_api_token(), generate_api_token());
    }
}
