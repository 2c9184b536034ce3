//! Regular expressions used by string rules
//!
//! Built-in patterns are compiled once per process. Patterns written in
//! `regex:` rules are compiled on first use and kept in a bounded LRU cache
//! owned by the validator.
//!
//! Every pattern is matched against the whole value.

use crate::error::ValidatorError;
use lru::LruCache;
use parking_lot::Mutex;
use regex::Regex;
use std::num::NonZeroUsize;
use std::sync::{Arc, LazyLock};

type Compiled = LazyLock<Result<Regex, regex::Error>>;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";
// Either a scheme with any host, or a bare dotted host ending in a TLD.
const URL_PATTERN: &str = r"^(?:(?:https?|ftp)://[^\s/?#:]+|(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63})(?::[0-9]{1,5})?(?:/[\w\-.~%!$&'()*+,;=:@]*)*(?:\?[^#\s]*)?(?:#[\w\-]*)?$";
const IPV4_PATTERN: &str = r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]{1,2})\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9]{1,2})$";
const ALPHA_PATTERN: &str = r"^[\p{L}\p{M}]+$";
const ALPHA_DASH_PATTERN: &str = r"^[\p{L}\p{M}\p{N}_-]+$";
const ALPHA_NUM_PATTERN: &str = r"^[\p{L}\p{M}\p{N}]+$";
const ALPHA_SPACE_PATTERN: &str = r"^[\p{L}\p{M}\s]+$";
const ALPHA_DASH_SPACE_PATTERN: &str = r"^[\p{L}\p{M}\p{N}_\s-]+$";
const ALPHA_NUM_SPACE_PATTERN: &str = r"^[\p{L}\p{M}\p{N}\s]+$";

static EMAIL: Compiled = LazyLock::new(|| Regex::new(EMAIL_PATTERN));
static URL: Compiled = LazyLock::new(|| Regex::new(URL_PATTERN));
static IPV4: Compiled = LazyLock::new(|| Regex::new(IPV4_PATTERN));
static ALPHA: Compiled = LazyLock::new(|| Regex::new(ALPHA_PATTERN));
static ALPHA_DASH: Compiled = LazyLock::new(|| Regex::new(ALPHA_DASH_PATTERN));
static ALPHA_NUM: Compiled = LazyLock::new(|| Regex::new(ALPHA_NUM_PATTERN));
static ALPHA_SPACE: Compiled = LazyLock::new(|| Regex::new(ALPHA_SPACE_PATTERN));
static ALPHA_DASH_SPACE: Compiled = LazyLock::new(|| Regex::new(ALPHA_DASH_SPACE_PATTERN));
static ALPHA_NUM_SPACE: Compiled = LazyLock::new(|| Regex::new(ALPHA_NUM_SPACE_PATTERN));

/// A built-in format check of the string category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `email`
    Email,
    /// `url`
    Url,
    /// `ipv4`
    Ipv4,
    /// `alpha`: letters
    Alpha,
    /// `alpha_dash`: letters, digits, `-` and `_`
    AlphaDash,
    /// `alpha_num`: letters and digits
    AlphaNum,
    /// `alpha_space`: letters and whitespace
    AlphaSpace,
    /// `alpha_dash_space`: letters, digits, `-`, `_` and whitespace
    AlphaDashSpace,
    /// `alpha_num_space`: letters, digits and whitespace
    AlphaNumSpace,
}

impl Format {
    /// The compiled pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::InvalidPattern`] if the built-in pattern
    /// failed to compile.
    pub fn regex(self) -> Result<&'static Regex, ValidatorError> {
        let (cell, pattern) = match self {
            Self::Email => (&EMAIL, EMAIL_PATTERN),
            Self::Url => (&URL, URL_PATTERN),
            Self::Ipv4 => (&IPV4, IPV4_PATTERN),
            Self::Alpha => (&ALPHA, ALPHA_PATTERN),
            Self::AlphaDash => (&ALPHA_DASH, ALPHA_DASH_PATTERN),
            Self::AlphaNum => (&ALPHA_NUM, ALPHA_NUM_PATTERN),
            Self::AlphaSpace => (&ALPHA_SPACE, ALPHA_SPACE_PATTERN),
            Self::AlphaDashSpace => (&ALPHA_DASH_SPACE, ALPHA_DASH_SPACE_PATTERN),
            Self::AlphaNumSpace => (&ALPHA_NUM_SPACE, ALPHA_NUM_SPACE_PATTERN),
        };
        LazyLock::force(cell)
            .as_ref()
            .map_err(|source| ValidatorError::InvalidPattern {
                pattern: pattern.to_owned(),
                source: source.clone(),
            })
    }

    /// Full-match test. The empty string always passes.
    ///
    /// # Errors
    ///
    /// See [`Format::regex`].
    pub fn matches(self, input: &str) -> Result<bool, ValidatorError> {
        if input.is_empty() {
            return Ok(true);
        }
        Ok(self.regex()?.is_match(input))
    }
}

// ============================================================================
// USER PATTERN CACHE
// ============================================================================

/// LRU cache of compiled `regex:` arguments.
pub struct PatternCache {
    cache: Mutex<LruCache<String, Arc<Regex>>>,
}

impl PatternCache {
    /// Creates a cache holding up to `capacity` patterns.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Returns the compiled, whole-value-anchored form of `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::InvalidPattern`] when `pattern` does not
    /// compile.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<Regex>, ValidatorError> {
        if let Some(regex) = self.cache.lock().get(pattern) {
            return Ok(Arc::clone(regex));
        }

        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .map(Arc::new)
            .map_err(|source| ValidatorError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })?;
        self.cache.lock().put(pattern.to_owned(), Arc::clone(&regex));
        Ok(regex)
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns true when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

impl std::fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternCache")
            .field("len", &self.len())
            .finish()
    }
}
