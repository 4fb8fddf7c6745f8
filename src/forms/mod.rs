//! Form schemas, their validation, and the stub submission step.

pub mod login;
pub mod preferences;
pub mod scholarship;
pub mod signup;
pub mod validate;

use std::fmt;

use crate::notifications::Notice;

/// Validation messages keyed by field name, first failure per field only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already failed.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if !self.has(field) {
            self.entries.push((field, message.into()));
        }
    }

    /// Record the result of a check that yields an optional message.
    pub fn check(&mut self, field: &'static str, outcome: Option<String>) {
        if let Some(message) = outcome {
            self.add(field, message);
        }
    }

    pub fn has(&self, field: &str) -> bool {
        self.entries.iter().any(|(f, _)| *f == field)
    }

    /// The message for `field`, or an empty string.
    pub fn message(&self, field: &str) -> &str {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
            .unwrap_or("")
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(f, _)| *f).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `Ok(value)` when nothing failed, otherwise the collected errors.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// One `<option>` of a select box.
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn list(pairs: &[(&str, &str)], current: &str) -> Vec<SelectOption> {
        pairs
            .iter()
            .map(|(value, label)| SelectOption {
                value: value.to_string(),
                label: label.to_string(),
                selected: *value == current,
            })
            .collect()
    }
}

/// HTML checkbox semantics: present with any truthy value means checked.
pub fn is_checked(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("on" | "true" | "1" | "yes"))
}

#[derive(Debug)]
pub struct SubmitError(pub String);

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Submission failed: {}", self.0)
    }
}

/// Stand-in for a backend call. There is no backend, so it always succeeds.
pub fn submit_stub<T: fmt::Debug>(form_name: &str, payload: &T) -> Result<(), SubmitError> {
    log::info!("{form_name} submitted");
    log::debug!("{form_name} payload: {payload:?}");
    Ok(())
}

/// Pick the notice for a submission outcome.
pub fn outcome_notice(result: Result<(), SubmitError>, success: Notice, failure: Notice) -> Notice {
    match result {
        Ok(()) => success,
        Err(e) => {
            log::warn!("{e}");
            failure
        }
    }
}

/// Raw `application/x-www-form-urlencoded` body with repeated keys preserved.
#[derive(Debug, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

/// Decode a URL-encoded string: `+` → space, `%HH` → byte.
fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    let mut out = Vec::with_capacity(s.len());
    let b = s.as_bytes();
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'%' && i + 2 < b.len() {
            let hi = (b[i + 1] as char).to_digit(16);
            let lo = (b[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(b[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

impl FormData {
    pub fn parse(body: &str) -> Self {
        let pairs = body
            .split('&')
            .filter(|s| !s.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (url_decode(k), url_decode(v)),
                None => (url_decode(pair), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// First value for `key`, or an empty string.
    pub fn get(&self, key: &str) -> &str {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Every non-empty value submitted under `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, v)| k == key && !v.trim().is_empty())
            .map(|(_, v)| v.trim().to_string())
            .collect()
    }
}
