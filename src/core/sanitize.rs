// src/core/sanitize.rs

/// "$1,234,567" → Some(1234567). Anything else (e.g. "n/c", "-") → None.
pub fn parse_money(s: &str) -> Option<i64> {
    let digits: String = s.trim().chars().filter(|c| *c != '$' && *c != ',').collect();
    digits.parse().ok()
}

/// Upper-case the first letter of each run of letters, lower-case the rest.
/// "thunderbolts (2025)" → "Thunderbolts (2025)".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_letter { out.extend(ch.to_lowercase()); } else { out.extend(ch.to_uppercase()); }
            prev_letter = true;
        } else {
            out.push(ch);
            prev_letter = false;
        }
    }
    out
}

/// Movie page URL → display title: last path segment, dashes to spaces, title-cased.
pub fn title_from_url(url: &str) -> String {
    let url = url.split(['#', '?']).next().unwrap_or(url);
    let slug = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    title_case(&slug.replace('-', " "))
}

/// 1234567 → "$1,234,567"
pub fn fmt_dollars(v: i64) -> String {
    let digits = v.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { grouped.push(','); }
        grouped.push(ch);
    }
    if v < 0 { join!("-$", &grouped) } else { join!("$", &grouped) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_strips_symbols() {
        assert_eq!(parse_money("$1,234,567"), Some(1_234_567));
        assert_eq!(parse_money(" $0 "), Some(0));
        assert_eq!(parse_money("n/c"), None);
        assert_eq!(parse_money(""), None);
    }

    #[test]
    fn title_from_movie_url() {
        assert_eq!(
            title_from_url("https://www.the-numbers.com/movie/Thunderbolts-(2025)"),
            "Thunderbolts (2025)"
        );
        assert_eq!(
            title_from_url("https://www.the-numbers.com/movie/Lilo-and-Stitch-(2025)#tab=summary"),
            "Lilo And Stitch (2025)"
        );
    }

    #[test]
    fn title_case_lowers_tail() {
        assert_eq!(title_case("MISSION impossible"), "Mission Impossible");
    }

    #[test]
    fn dollars_grouped() {
        assert_eq!(fmt_dollars(0), "$0");
        assert_eq!(fmt_dollars(999), "$999");
        assert_eq!(fmt_dollars(1_000), "$1,000");
        assert_eq!(fmt_dollars(190_274_328), "$190,274,328");
        assert_eq!(fmt_dollars(-1_500), "-$1,500");
    }
}
