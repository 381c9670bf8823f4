use std::sync::OnceLock;

use regex::Regex;

static SPELLED_DURATION: OnceLock<Option<Regex>> = OnceLock::new();
static YEAR: OnceLock<Option<Regex>> = OnceLock::new();

fn spelled_duration() -> Option<&'static Regex> {
    SPELLED_DURATION
        .get_or_init(|| {
            Regex::new(r"(?i)(\d+)\s*(hours?|hrs?|minutes?|mins?|seconds?|secs?)\b").ok()
        })
        .as_ref()
}

fn year_regex() -> Option<&'static Regex> {
    YEAR.get_or_init(|| Regex::new(r"^\s*(\d{4})\s*$").ok())
        .as_ref()
}

/// Seconds from `"3:45"`, `"1:02:03"`, `"45 min"` or `"1 hr 5 min"`.
pub fn parse_duration(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if s.contains(':') {
        let mut seconds: u32 = 0;
        for part in s.split(':') {
            let value = part.trim().parse::<u32>().ok()?;
            seconds = seconds.checked_mul(60)?.checked_add(value)?;
        }
        return Some(seconds);
    }

    let re = spelled_duration()?;
    let mut seconds: u32 = 0;
    let mut matched = false;
    for cap in re.captures_iter(s) {
        let value = cap[1].parse::<u32>().ok()?;
        let unit = cap[2].to_ascii_lowercase();
        let factor = if unit.starts_with('h') {
            3600
        } else if unit.starts_with('m') {
            60
        } else {
            1
        };
        seconds = seconds.checked_add(value.checked_mul(factor)?)?;
        matched = true;
    }
    matched.then_some(seconds)
}

/// A bare four digit year such as `"2021"`.
pub fn parse_year(s: &str) -> Option<u16> {
    let caps = year_regex()?.captures(s)?;
    let year = caps[1].parse::<u16>().ok()?;
    (1000..=2999).contains(&year).then_some(year)
}

/// Subtitle runs interleave the real segments with `" • "`, `" & "` and `", "`.
pub fn is_separator(text: &str) -> bool {
    matches!(text.trim(), "" | "•" | "·" | "&" | "," | "|")
}

pub fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
