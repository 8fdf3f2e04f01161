//! Google Service Account Authentication
//!
//! サービスアカウント認証機能

use anyhow::{Context, Result};
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use google_sheets4::{hyper, hyper_rustls};

pub type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

/// Expands tilde in path and returns the full path
pub fn expand_key_path(key_path: &str) -> String {
    shellexpand::tilde(key_path).to_string()
}

/// Builds a service account authenticator from a JSON key file
pub async fn authenticate(
    key_path: &str,
    client: hyper::Client<HttpsConnector>,
) -> Result<Authenticator<HttpsConnector>> {
    let expanded_path = expand_key_path(key_path);

    let key = oauth2::read_service_account_key(&expanded_path)
        .await
        .with_context(|| format!("Failed to read service account key at '{}'", expanded_path))?;

    oauth2::ServiceAccountAuthenticator::with_client(key, client)
        .build()
        .await
        .context("Failed to authenticate with service account")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_key_path_with_tilde() {
        #[cfg(unix)]
        let home = std::env::var("HOME")
            .expect("HOME environment variable should be set on Unix systems");

        #[cfg(windows)]
        let home = std::env::var("USERPROFILE")
            .expect("USERPROFILE environment variable should be set on Windows");

        let result = expand_key_path("~/.config/devlog/service-account.json");
        let expected = format!("{}/.config/devlog/service-account.json", home);

        #[cfg(unix)]
        assert_eq!(result, expected);

        #[cfg(windows)]
        assert_eq!(result.replace('\\', "/"), expected.replace('\\', "/"));
    }

    #[test]
    fn test_expand_key_path_absolute() {
        let result = expand_key_path("/etc/devlog/key.json");
        assert_eq!(result, "/etc/devlog/key.json");
    }

    #[test]
    fn test_expand_key_path_relative() {
        let result = expand_key_path("./keys/key.json");
        assert_eq!(result, "./keys/key.json");
    }
}
