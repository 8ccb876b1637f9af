//! Form validation gate
//!
//! Submission is allowed only when the link field and, while advanced
//! options are active, every visible advanced field pass their checks. On
//! failure a single aggregate message names the failing groups; the TUI also
//! shows per-field errors inline using the same check functions.

use chrono::{DateTime, Utc};

use super::duration::DurationText;
use crate::utils::{parse_expiry, validate_link};

/// Upper bound the service accepts for `max_uses` (2^63 - 1).
pub const MAX_USES_CEILING: u64 = (1 << 63) - 1;

/// Input length bounds sourced from the config service. Unset until the
/// config fetch resolves; unset bounds are simply not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldLimits {
    pub max_link_length: Option<usize>,
    pub max_custom_id_length: Option<usize>,
}

/// A borrowed snapshot of the form, as read at validation/submit time.
#[derive(Debug, Clone, Copy)]
pub struct FormFields<'a> {
    pub link: &'a str,
    pub advanced: bool,
    pub max_uses: &'a str,
    pub custom_id: &'a str,
    /// `true` = absolute expiry date, `false` = duration countdown.
    pub date_mode: bool,
    pub expiry_date: &'a str,
    pub duration: DurationText,
}

/// The groups a validation failure message can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Url,
    MaxUses,
    CustomId,
    ExpiryDate,
}

impl FieldGroup {
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldGroup::Url => "url",
            FieldGroup::MaxUses => "max usages",
            FieldGroup::CustomId => "custom id",
            FieldGroup::ExpiryDate => "expiry date",
        }
    }
}

/// Link field check: required, well-formed, within the configured bound.
pub fn link_error(link: &str, limits: &FieldLimits) -> Option<String> {
    if let Err(e) = validate_link(link) {
        return Some(e.to_string());
    }
    if let Some(max) = limits.max_link_length
        && link.chars().count() > max
    {
        return Some(format!("URL too long (max {} chars)", max));
    }
    None
}

/// Max-uses field check. Empty is fine (the field is optional); anything
/// else must be a plain decimal integer within the service bound.
pub fn max_uses_error(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Some("Must be a non-negative integer".to_string());
    }
    match raw.parse::<u64>() {
        Ok(n) if n <= MAX_USES_CEILING => None,
        _ => Some(format!("Must be at most {}", MAX_USES_CEILING)),
    }
}

/// Custom-id field check against the configured length bound.
pub fn custom_id_error(raw: &str, limits: &FieldLimits) -> Option<String> {
    if let Some(max) = limits.max_custom_id_length
        && raw.chars().count() > max
    {
        return Some(format!("Custom ID too long (max {} chars)", max));
    }
    None
}

/// Absolute expiry field check. Empty is fine; a supplied value must parse
/// and lie in the future.
pub fn expiry_date_error(raw: &str, now: DateTime<Utc>) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    match parse_expiry(raw) {
        Ok(target) if target > now => None,
        Ok(_) => Some("Expiry date must be in the future".to_string()),
        Err(e) => Some(e),
    }
}

/// Evaluate the whole gate and report the failing groups in display order.
pub fn invalid_groups(
    fields: &FormFields<'_>,
    limits: &FieldLimits,
    now: DateTime<Utc>,
) -> Vec<FieldGroup> {
    let mut groups = Vec::new();

    if link_error(fields.link, limits).is_some() {
        groups.push(FieldGroup::Url);
    }

    if fields.advanced {
        if max_uses_error(fields.max_uses).is_some() {
            groups.push(FieldGroup::MaxUses);
        }
        if custom_id_error(fields.custom_id, limits).is_some() {
            groups.push(FieldGroup::CustomId);
        }
        if fields.date_mode && expiry_date_error(fields.expiry_date, now).is_some() {
            groups.push(FieldGroup::ExpiryDate);
        }
    }

    groups
}

/// Compose the aggregate failure message, e.g.
/// `url and max usages are invalid, check them and try again.`
pub fn failure_message(groups: &[FieldGroup]) -> Option<String> {
    if groups.is_empty() {
        return None;
    }

    let names: Vec<&str> = groups.iter().map(FieldGroup::display_name).collect();
    let (verb, pronoun) = if names.len() == 1 {
        ("is", "it")
    } else {
        ("are", "them")
    };

    Some(format!(
        "{} {} invalid, check {} and try again.",
        names.join(" and "),
        verb,
        pronoun
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    fn fields<'a>(link: &'a str, advanced: bool, max_uses: &'a str) -> FormFields<'a> {
        FormFields {
            link,
            advanced,
            max_uses,
            custom_id: "",
            date_mode: false,
            expiry_date: "",
            duration: DurationText::zero(),
        }
    }

    #[test]
    fn test_invalid_url_alone() {
        let groups = invalid_groups(&fields("nope", false, ""), &FieldLimits::default(), now());
        assert_eq!(groups, vec![FieldGroup::Url]);
        assert_eq!(
            failure_message(&groups).unwrap(),
            "url is invalid, check it and try again."
        );
    }

    #[test]
    fn test_url_and_max_uses_enumerated() {
        let groups = invalid_groups(
            &fields("nope", true, "12x"),
            &FieldLimits::default(),
            now(),
        );
        assert_eq!(groups, vec![FieldGroup::Url, FieldGroup::MaxUses]);
        assert_eq!(
            failure_message(&groups).unwrap(),
            "url and max usages are invalid, check them and try again."
        );
    }

    #[test]
    fn test_advanced_fields_ignored_when_advanced_off() {
        let groups = invalid_groups(
            &fields("https://example.com", false, "not-a-number"),
            &FieldLimits::default(),
            now(),
        );
        assert!(groups.is_empty());
        assert_eq!(failure_message(&groups), None);
    }

    #[test]
    fn test_max_uses_bounds() {
        assert!(max_uses_error("").is_none());
        assert!(max_uses_error("0").is_none());
        assert!(max_uses_error("9223372036854775807").is_none());
        assert!(max_uses_error("9223372036854775808").is_some());
        assert!(max_uses_error("-1").is_some());
        assert!(max_uses_error("+1").is_some());
        assert!(max_uses_error("1.5").is_some());
    }

    #[test]
    fn test_link_length_limit() {
        let limits = FieldLimits {
            max_link_length: Some(30),
            max_custom_id_length: None,
        };
        assert!(link_error("https://example.com", &limits).is_none());
        let long = format!("https://example.com/{}", "a".repeat(40));
        assert!(link_error(&long, &limits).is_some());
    }

    #[test]
    fn test_custom_id_length_limit() {
        let limits = FieldLimits {
            max_link_length: None,
            max_custom_id_length: Some(8),
        };
        assert!(custom_id_error("mylink", &limits).is_none());
        assert!(custom_id_error("much-too-long-id", &limits).is_some());
        // No limit fetched yet: nothing to enforce.
        assert!(custom_id_error("much-too-long-id", &FieldLimits::default()).is_none());
    }

    #[test]
    fn test_expiry_date_checks() {
        assert!(expiry_date_error("", now()).is_none());
        assert!(expiry_date_error("2026-02-01T00:00:00Z", now()).is_none());
        assert!(expiry_date_error("2020-01-01T00:00:00Z", now()).is_some());
        assert!(expiry_date_error("garbage", now()).is_some());
    }

    #[test]
    fn test_expiry_only_checked_in_date_mode() {
        let mut f = fields("https://example.com", true, "");
        f.expiry_date = "garbage";
        f.date_mode = false;
        assert!(invalid_groups(&f, &FieldLimits::default(), now()).is_empty());
        f.date_mode = true;
        assert_eq!(
            invalid_groups(&f, &FieldLimits::default(), now()),
            vec![FieldGroup::ExpiryDate]
        );
    }
}
