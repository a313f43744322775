//! Placeholder sign-in.
//!
//! A custom token handed over by the host page wins when an identity provider
//! is configured; everyone else gets an anonymous id that is remembered in
//! local storage. Nothing here can fail the page: every error ends in an
//! anonymous session.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::config::AppConfig;

pub const ANONYMOUS_UID_KEY: &str = "anonymous_uid";

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("sign-in token is not a three part JWT")]
    MalformedToken,
    #[error("token payload is not base64url: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("token payload is not JSON: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("token has no uid or sub claim")]
    MissingUid,
    #[error("local storage unavailable")]
    StorageUnavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInMethod {
    CustomToken,
    Anonymous,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub method: SignInMethod,
}

/// Key/value storage for the anonymous id.
pub trait IdStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), IdentityError>;
}

impl IdStore for web_sys::Storage {
    fn get(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), IdentityError> {
        self.set_item(key, value)
            .map_err(|_| IdentityError::StorageUnavailable)
    }
}

#[derive(Deserialize)]
struct Claims {
    #[serde(default)]
    uid: Option<String>,
    #[serde(default)]
    sub: Option<String>,
}

/// Pulls the user id out of a custom sign-in token without verifying it.
pub fn uid_from_token(token: &str) -> Result<String, IdentityError> {
    let mut parts = token.trim().split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err(IdentityError::MalformedToken),
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let claims: Claims = serde_json::from_slice(&bytes)?;

    claims
        .uid
        .filter(|uid| !uid.is_empty())
        .or(claims.sub.filter(|sub| !sub.is_empty()))
        .ok_or(IdentityError::MissingUid)
}

/// Returns the remembered anonymous id for `app_id`, minting one if needed.
pub fn anonymous_id(store: &dyn IdStore, app_id: &str) -> String {
    let key = format!("{}:{}", ANONYMOUS_UID_KEY, app_id);
    if let Some(existing) = store.get(&key).filter(|id| !id.is_empty()) {
        return existing;
    }

    let fresh = Uuid::new_v4().to_string();
    if let Err(err) = store.set(&key, &fresh) {
        warn!("anonymous id will not survive a reload: {}", err);
    }
    fresh
}

pub fn sign_in(config: &AppConfig, store: Option<&dyn IdStore>) -> Session {
    if config.provider_configured() {
        if let Some(token) = config.initial_auth_token.as_deref() {
            match uid_from_token(token) {
                Ok(user_id) => {
                    return Session {
                        user_id,
                        method: SignInMethod::CustomToken,
                    }
                }
                Err(err) => warn!("custom token sign-in failed, continuing anonymously: {}", err),
            }
        }
    }

    let user_id = match store {
        Some(store) => anonymous_id(store, &config.app_id),
        None => Uuid::new_v4().to_string(),
    };
    Session {
        user_id,
        method: SignInMethod::Anonymous,
    }
}

/// Signs in against the browser's local storage.
pub fn bootstrap(config: &AppConfig) -> Session {
    let storage = web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten();
    if storage.is_none() {
        warn!("{}, anonymous id is per page load", IdentityError::StorageUnavailable);
    }

    let session = sign_in(config, storage.as_ref().map(|storage| storage as &dyn IdStore));
    info!("signed in as {} ({:?})", session.user_id, session.method);
    session
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::config::ProviderConfig;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl IdStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), IdentityError> {
            if self.read_only {
                return Err(IdentityError::StorageUnavailable);
            }
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn token(claims: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(claims)
        )
    }

    fn configured(token: Option<String>) -> AppConfig {
        AppConfig {
            app_id: "parkchoi".to_string(),
            provider: Some(ProviderConfig {
                project_id: Some("parkchoi-web".to_string()),
                ..ProviderConfig::default()
            }),
            initial_auth_token: token,
        }
    }

    #[test]
    fn reads_uid_claim() {
        let uid = uid_from_token(&token(r#"{"uid":"client-42","sub":"svc@example"}"#)).unwrap();
        assert_eq!(uid, "client-42");
    }

    #[test]
    fn falls_back_to_sub_claim() {
        let uid = uid_from_token(&token(r#"{"uid":"","sub":"user-7"}"#)).unwrap();
        assert_eq!(uid, "user-7");
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!(matches!(uid_from_token("abc"), Err(IdentityError::MalformedToken)));
        assert!(matches!(uid_from_token("a..c"), Err(IdentityError::MalformedToken)));
        assert!(matches!(uid_from_token("a.b.c.d"), Err(IdentityError::MalformedToken)));
        assert!(matches!(uid_from_token("a.!!!.c"), Err(IdentityError::Decode(_))));
        assert!(matches!(
            uid_from_token(&token("not json")),
            Err(IdentityError::Payload(_))
        ));
        assert!(matches!(
            uid_from_token(&token(r#"{"iss":"x"}"#)),
            Err(IdentityError::MissingUid)
        ));
    }

    #[test]
    fn custom_token_wins_when_provider_configured() {
        let store = MemoryStore::default();
        let session = sign_in(
            &configured(Some(token(r#"{"uid":"client-42"}"#))),
            Some(&store),
        );
        assert_eq!(
            session,
            Session {
                user_id: "client-42".to_string(),
                method: SignInMethod::CustomToken,
            }
        );
        assert!(store.items.borrow().is_empty());
    }

    #[test]
    fn token_is_ignored_without_provider() {
        let config = AppConfig {
            initial_auth_token: Some(token(r#"{"uid":"client-42"}"#)),
            ..AppConfig::default()
        };
        let session = sign_in(&config, None);
        assert_eq!(session.method, SignInMethod::Anonymous);
        assert_ne!(session.user_id, "client-42");
    }

    #[test]
    fn broken_token_falls_back_to_anonymous() {
        let store = MemoryStore::default();
        let session = sign_in(&configured(Some("garbage".to_string())), Some(&store));
        assert_eq!(session.method, SignInMethod::Anonymous);
        assert!(Uuid::parse_str(&session.user_id).is_ok());
    }

    #[test]
    fn anonymous_id_is_remembered_per_app() {
        let store = MemoryStore::default();
        let first = sign_in(&configured(None), Some(&store));
        let again = sign_in(&configured(None), Some(&store));
        assert_eq!(first.user_id, again.user_id);
        assert_eq!(
            store.get("anonymous_uid:parkchoi").as_deref(),
            Some(first.user_id.as_str())
        );

        let other = anonymous_id(&store, "other-app");
        assert_ne!(other, first.user_id);
    }

    #[test]
    fn read_only_storage_still_yields_an_id() {
        let store = MemoryStore {
            read_only: true,
            ..MemoryStore::default()
        };
        let a = anonymous_id(&store, "parkchoi");
        let b = anonymous_id(&store, "parkchoi");
        assert!(Uuid::parse_str(&a).is_ok());
        assert_ne!(a, b);
    }
}
