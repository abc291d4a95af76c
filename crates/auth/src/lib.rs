//! Identity provider registry for Navdeck.
//!
//! This crate assembles the fixed list of sign-in providers from
//! environment-sourced credentials at process start. It performs no protocol
//! work: OAuth flows and email delivery belong to external collaborators.
//! The registry's job is to
//!
//! - declare which providers exist and which credentials each one requires,
//! - resolve those credentials through the configured secrets backend,
//! - fail loudly at startup when a required credential is missing,
//! - never leak credential material through `Debug` or serialized output.
//!
//! The primary entry point is [`ProviderRegistry::from_env`].

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Keychain service name used when the keychain backend is selected.
const KEYCHAIN_SERVICE: &str = "navdeck";

/// Environment variable used to select the secret resolution backend.
pub const SECRETS_BACKEND_ENV_VAR: &str = "NAVDECK_SECRETS_BACKEND";

/// Error surfaced when the provider registry cannot be assembled.
///
/// These are deployment-time misconfigurations; callers are expected to
/// abort startup rather than retry.
#[derive(Debug, Error)]
pub enum AuthConfigError {
    /// A required credential variable is absent.
    #[error("provider {provider} requires {var} to be set")]
    MissingCredential {
        /// Display name of the provider missing a credential.
        provider: &'static str,
        /// Name of the missing variable.
        var: &'static str,
    },
    /// The OS keychain rejected a lookup.
    #[error("keychain lookup for {var} failed: {error}")]
    Keychain {
        /// Name of the variable being resolved.
        var: &'static str,
        /// Underlying keyring error text.
        error: String,
    },
}

/// Secret resolution backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretsBackend {
    /// Resolve credentials from process environment variables.
    Environment,
    /// Resolve credentials from the OS keychain via `keyring`, keyed by
    /// variable name under the `navdeck` service.
    Keychain,
}

impl SecretsBackend {
    fn from_env_var(raw: Option<String>) -> Self {
        match raw.unwrap_or_default().trim().to_ascii_lowercase().as_str() {
            "keychain" => Self::Keychain,
            _ => Self::Environment,
        }
    }
}

/// Determine the currently configured secrets backend.
pub fn secrets_backend() -> SecretsBackend {
    let configured_value = std::env::var(SECRETS_BACKEND_ENV_VAR).ok();
    SecretsBackend::from_env_var(configured_value)
}

/// The kind of identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// OAuth sign-in via Google.
    Google,
    /// OAuth sign-in via GitHub.
    Github,
    /// Magic-link sign-in delivered over email.
    EmailLink,
}

impl ProviderKind {
    /// Human-readable provider name for errors and listings.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Github => "GitHub",
            Self::EmailLink => "Email link",
        }
    }

    /// Variables this provider requires, in declaration order.
    pub fn required_vars(self) -> &'static [&'static str] {
        match self {
            Self::Google => &["GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"],
            Self::Github => &["GITHUB_CLIENT_ID", "GITHUB_CLIENT_SECRET"],
            Self::EmailLink => &["RESEND_API_KEY", "EMAIL_FROM"],
        }
    }
}

/// A resolved credential: the variable name and its opaque value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Variable name the value was resolved from.
    pub var: &'static str,
    value: String,
}

impl Credential {
    /// The raw credential value. Callers own keeping this out of logs.
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print credential material.
        f.debug_struct("Credential")
            .field("var", &self.var)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// A configured identity provider: its kind plus resolved credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    /// Which provider this is.
    pub kind: ProviderKind,
    /// Credentials resolved for this provider, one per required variable.
    pub credentials: Vec<Credential>,
}

impl Provider {
    /// Looks up a resolved credential by variable name.
    pub fn credential(&self, var: &str) -> Option<&Credential> {
        self.credentials.iter().find(|c| c.var == var)
    }
}

/// The fixed provider list assembled at process start.
///
/// The registry is immutable after construction; there is no runtime
/// mutation, retry, or re-validation.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: Vec<Provider>,
}

impl ProviderRegistry {
    /// Assemble the registry from the configured secrets backend.
    ///
    /// Every provider in [`ProviderRegistry::declared_kinds`] must resolve
    /// all of its required variables; the first missing one aborts assembly
    /// with [`AuthConfigError::MissingCredential`].
    pub fn from_env() -> Result<Self, AuthConfigError> {
        let backend = secrets_backend();
        debug!(?backend, "assembling provider registry");

        let mut providers = Vec::new();
        for kind in Self::declared_kinds() {
            providers.push(assemble_provider(*kind, backend)?);
        }
        Ok(Self { providers })
    }

    /// The fixed set of providers this deployment declares.
    pub fn declared_kinds() -> &'static [ProviderKind] {
        &[ProviderKind::Google, ProviderKind::Github, ProviderKind::EmailLink]
    }

    /// All assembled providers, in declaration order.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Looks up a provider by kind.
    pub fn get(&self, kind: ProviderKind) -> Option<&Provider> {
        self.providers.iter().find(|p| p.kind == kind)
    }

    /// Redacted JSON listing of the registry, for `auth providers` output
    /// and deployment debugging. Values never appear; only which variables
    /// resolved.
    pub fn listing(&self) -> serde_json::Value {
        let entries: Vec<serde_json::Value> = self
            .providers
            .iter()
            .map(|p| {
                serde_json::json!({
                    "kind": p.kind,
                    "name": p.kind.display_name(),
                    "credentials": p.credentials.iter().map(|c| c.var).collect::<Vec<_>>(),
                })
            })
            .collect();
        serde_json::json!({ "providers": entries })
    }
}

fn assemble_provider(kind: ProviderKind, backend: SecretsBackend) -> Result<Provider, AuthConfigError> {
    let mut credentials = Vec::new();
    for &var in kind.required_vars() {
        let value = resolve_credential(var, backend)?.ok_or(AuthConfigError::MissingCredential {
            provider: kind.display_name(),
            var,
        })?;
        debug!(var, "credential resolved");
        credentials.push(Credential { var, value });
    }
    Ok(Provider { kind, credentials })
}

/// Resolve a single credential through the chosen backend.
///
/// Returns `Ok(None)` when the variable is simply unset; keychain transport
/// failures other than "no entry" are surfaced as errors.
fn resolve_credential(var: &'static str, backend: SecretsBackend) -> Result<Option<String>, AuthConfigError> {
    match backend {
        SecretsBackend::Environment => Ok(std::env::var(var).ok().filter(|v| !v.is_empty())),
        SecretsBackend::Keychain => {
            let entry = keyring::Entry::new(KEYCHAIN_SERVICE, var).map_err(|e| AuthConfigError::Keychain {
                var,
                error: navdeck_util::redact_sensitive(&e.to_string()),
            })?;
            match entry.get_password() {
                Ok(value) => Ok(Some(value)),
                Err(keyring::Error::NoEntry) => Ok(None),
                // Keychain errors can echo lookup context; scrub before surfacing.
                Err(e) => Err(AuthConfigError::Keychain {
                    var,
                    error: navdeck_util::redact_sensitive(&e.to_string()),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [(&str, &str); 6] = [
        ("GOOGLE_CLIENT_ID", "google-id"),
        ("GOOGLE_CLIENT_SECRET", "google-secret"),
        ("GITHUB_CLIENT_ID", "github-id"),
        ("GITHUB_CLIENT_SECRET", "github-secret"),
        ("RESEND_API_KEY", "resend-key"),
        ("EMAIL_FROM", "noreply@example.com"),
    ];

    fn with_full_env<F: FnOnce()>(f: F) {
        let vars: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|(k, v)| (*k, Some(*v))).collect();
        temp_env::with_vars(vars, f);
    }

    #[test]
    fn assembles_all_three_providers_from_env() {
        with_full_env(|| {
            let registry = ProviderRegistry::from_env().unwrap();
            assert_eq!(registry.providers().len(), 3);
            let google = registry.get(ProviderKind::Google).unwrap();
            assert_eq!(google.credential("GOOGLE_CLIENT_ID").unwrap().expose(), "google-id");
            let email = registry.get(ProviderKind::EmailLink).unwrap();
            assert_eq!(email.credential("EMAIL_FROM").unwrap().expose(), "noreply@example.com");
        });
    }

    #[test]
    fn missing_required_credential_is_a_startup_error() {
        let mut vars: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|(k, v)| (*k, Some(*v))).collect();
        vars[1].1 = None; // GOOGLE_CLIENT_SECRET
        temp_env::with_vars(vars, || {
            let err = ProviderRegistry::from_env().unwrap_err();
            match err {
                AuthConfigError::MissingCredential { provider, var } => {
                    assert_eq!(provider, "Google");
                    assert_eq!(var, "GOOGLE_CLIENT_SECRET");
                }
                other => panic!("unexpected error: {other}"),
            }
        });
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut vars: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|(k, v)| (*k, Some(*v))).collect();
        vars[4].1 = Some(""); // RESEND_API_KEY
        temp_env::with_vars(vars, || {
            let err = ProviderRegistry::from_env().unwrap_err();
            assert!(matches!(
                err,
                AuthConfigError::MissingCredential {
                    provider: "Email link",
                    var: "RESEND_API_KEY"
                }
            ));
        });
    }

    #[test]
    fn debug_output_never_contains_credential_values() {
        with_full_env(|| {
            let registry = ProviderRegistry::from_env().unwrap();
            let debug = format!("{registry:?}");
            assert!(!debug.contains("google-secret"));
            assert!(debug.contains("<redacted>"));
        });
    }

    #[test]
    fn listing_is_redacted_and_names_variables() {
        with_full_env(|| {
            let registry = ProviderRegistry::from_env().unwrap();
            let listing = serde_json::to_string(&registry.listing()).unwrap();
            assert!(listing.contains("GITHUB_CLIENT_ID"));
            assert!(listing.contains("email-link"));
            assert!(!listing.contains("github-secret"));
        });
    }

    #[test]
    fn backend_selector_defaults_to_environment() {
        assert_eq!(SecretsBackend::from_env_var(None), SecretsBackend::Environment);
        assert_eq!(SecretsBackend::from_env_var(Some("env".into())), SecretsBackend::Environment);
        assert_eq!(SecretsBackend::from_env_var(Some(" Keychain ".into())), SecretsBackend::Keychain);
    }
}
