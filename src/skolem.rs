//! Skolemization of anonymous nodes
//!
//! Entities that must be named in a graph but carry no identifier get a
//! minted URI of the form `<base>.well-known/skolem/<uuid>`. Every minted
//! URI is remembered so callers can ask whether a URI came from here.
//!
//! The base URL is read from the environment variable `modelldcatno_baseurl`
//! at every mint. A missing or malformed value falls back to
//! `http://wwww.digdir.no/`; the base always ends with `/`.

use crate::values::{is_valid_uri, Uri};
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};
use uuid::Uuid;

/// Environment variable holding the skolemization base URL
pub const BASEURL_KEY: &str = "modelldcatno_baseurl";

/// Base URL used when none (or a malformed one) is configured
pub const BASEURL_DEFAULT: &str = "http://wwww.digdir.no/";

const SKOLEM_PATH: &str = ".well-known/skolem/";

static GLOBAL_SKOLEMIZER: OnceCell<Skolemizer> = OnceCell::new();

#[derive(Debug, Clone)]
enum BaseUrlSource {
    /// Re-read this environment variable on every mint
    Env(String),
    /// Fixed base, validated when the skolemizer was built
    Fixed(String),
}

/// Registry of minted skolem URIs
#[derive(Debug)]
pub struct Skolemizer {
    source: BaseUrlSource,
    skolemizations: Mutex<HashSet<String>>,
}

impl Skolemizer {
    /// Skolemizer reading `modelldcatno_baseurl` at every mint
    pub fn new() -> Self {
        Self::from_env_key(BASEURL_KEY)
    }

    /// Skolemizer reading another environment variable at every mint
    pub fn from_env_key(key: impl Into<String>) -> Self {
        Self {
            source: BaseUrlSource::Env(key.into()),
            skolemizations: Mutex::new(HashSet::new()),
        }
    }

    /// Skolemizer with a fixed base URL (falls back to the default if malformed)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            source: BaseUrlSource::Fixed(normalize_base(Some(base_url.into()))),
            skolemizations: Mutex::new(HashSet::new()),
        }
    }

    /// The process-wide skolemizer used by entity emission
    pub fn global() -> &'static Skolemizer {
        GLOBAL_SKOLEMIZER.get_or_init(Skolemizer::new)
    }

    /// Current base URL, always ending with `/`
    pub fn base_url(&self) -> String {
        match &self.source {
            BaseUrlSource::Env(key) => normalize_base(std::env::var(key).ok()),
            BaseUrlSource::Fixed(base) => base.clone(),
        }
    }

    /// Mint and record a fresh skolem URI
    pub fn add_skolemization(&self) -> Uri {
        let minted = format!("{}{}{}", self.base_url(), SKOLEM_PATH, Uuid::new_v4());
        debug!("Minted skolem URI {}", minted);

        self.skolemizations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(minted.clone());

        Uri::from_trusted(minted)
    }

    /// True if `skolemization` was minted by this registry
    pub fn is_exact_skolemization(&self, skolemization: &str) -> bool {
        self.skolemizations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(skolemization)
    }

    /// True if `skolemization` is a well-formed URI under the current skolem prefix
    ///
    /// Does not require that the URI was actually minted.
    pub fn has_skolemization_morfologi(&self, skolemization: &str) -> bool {
        if !is_valid_uri(skolemization) {
            return false;
        }
        let prefix = format!("{}{}", self.base_url(), SKOLEM_PATH);
        skolemization.starts_with(&prefix)
    }

    /// Number of URIs minted so far
    pub fn len(&self) -> usize {
        self.skolemizations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if nothing has been minted yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Skolemizer {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_base(configured: Option<String>) -> String {
    let mut base = match configured {
        Some(value) if is_valid_uri(&value) => value,
        Some(value) => {
            warn!(
                "Ignoring malformed skolemization base URL {:?}, using {}",
                value, BASEURL_DEFAULT
            );
            BASEURL_DEFAULT.to_string()
        }
        None => BASEURL_DEFAULT.to_string(),
    };

    if !base.ends_with('/') {
        base.push('/');
    }
    base
}
