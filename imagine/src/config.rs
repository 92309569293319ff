use engine::image_model::Endpoint;
use serde::{Deserialize, Serialize};

/// Settings read from `imagine.ron` in the local config dir.
///
/// ```ron
/// (
///     api_base: Some("https://api.openai.com/v1"),
///     organization: Some("org-..."),
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: Option<String>,
    pub organization: Option<String>,
}

impl Config {
    /// Environment values (`OPENAI_API_BASE`, `OPENAI_ORGANIZATION`) win over
    /// the file. Empty values count as unset.
    pub fn endpoint(
        &self,
        env_api_base: Option<String>,
        env_organization: Option<String>,
    ) -> Endpoint {
        let defaults = Endpoint::default();
        Endpoint {
            api_base: first_set(env_api_base, &self.api_base).unwrap_or(defaults.api_base),
            organization: first_set(env_organization, &self.organization),
        }
    }
}

fn first_set(env: Option<String>, file: &Option<String>) -> Option<String> {
    env.filter(|v| !v.is_empty())
        .or_else(|| file.clone().filter(|v| !v.is_empty()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_to_public_api() {
        let endpoint = Config::default().endpoint(None, None);
        assert_eq!(endpoint, Endpoint::default());
        assert_eq!(endpoint.api_base, "https://api.openai.com/v1");
        assert_eq!(endpoint.organization, None);
    }

    #[test]
    fn file_values_are_used() {
        let cfg = Config {
            api_base: Some("http://localhost:9000/v1".into()),
            organization: Some("org-file".into()),
        };
        let endpoint = cfg.endpoint(None, Some(String::new()));
        assert_eq!(endpoint.api_base, "http://localhost:9000/v1");
        assert_eq!(endpoint.organization.as_deref(), Some("org-file"));
    }

    #[test]
    fn environment_beats_file() {
        let cfg = Config {
            api_base: Some("http://localhost:9000/v1".into()),
            organization: Some("org-file".into()),
        };
        let endpoint = cfg.endpoint(
            Some("http://proxy.internal/v1".into()),
            Some("org-env".into()),
        );
        assert_eq!(endpoint.api_base, "http://proxy.internal/v1");
        assert_eq!(endpoint.organization.as_deref(), Some("org-env"));
    }
}
