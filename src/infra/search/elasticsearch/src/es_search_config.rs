// Copyright ShopSearch Team and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct EsSearchConfig {
    pub url: url::Url,
    pub user: Option<String>,
    pub password: Option<String>,
    pub timeout_secs: u64,
}

impl EsSearchConfig {
    pub const DEFAULT_URL: &'static str = "http://localhost:9200";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Basic auth credentials, present only when both user and password are
    /// non-empty; otherwise requests are sent unauthenticated
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (self.user.as_deref(), self.password.as_deref()) {
            (Some(user), Some(password)) if !user.is_empty() && !password.is_empty() => {
                Some((user, password))
            }
            _ => None,
        }
    }
}

impl Default for EsSearchConfig {
    fn default() -> Self {
        Self {
            url: url::Url::parse(Self::DEFAULT_URL).unwrap(),
            user: None,
            password: None,
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_requires_both_credentials() {
        let mut config = EsSearchConfig::default();
        assert_eq!(config.basic_auth(), None);

        config.user = Some("elastic".to_string());
        assert_eq!(config.basic_auth(), None);

        config.password = Some(String::new());
        assert_eq!(config.basic_auth(), None);

        config.password = Some("changeme".to_string());
        assert_eq!(config.basic_auth(), Some(("elastic", "changeme")));
    }
}
