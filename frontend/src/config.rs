
/// Canonical public address, used for structured data and share links.
pub fn get_site_url() -> &'static str {
    "https://intakesense.com"
}

pub fn get_forms_endpoint() -> &'static str {
    "https://api.web3forms.com/submit"
}

/// Web3Forms access key, baked in at build time.
///
/// Missing keys are not fatal: the request goes out with an empty key and
/// the forms API rejects it.
pub fn get_access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or("")
}

pub fn has_access_key() -> bool {
    !get_access_key().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_key_falls_back_to_empty() {
        let expected = option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or("");
        assert_eq!(get_access_key(), expected);
        assert_eq!(has_access_key(), !expected.is_empty());
    }
}
