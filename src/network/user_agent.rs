//! User agent generation

use rand::seq::SliceRandom;
use rand::Rng;

const CHROME_VERSIONS: &[&str] = &["124.0.0.0", "125.0.0.0", "126.0.0.0", "127.0.0.0"];
const FIREFOX_VERSIONS: &[&str] = &["125.0", "126.0", "127.0", "128.0"];
const SAFARI_VERSIONS: &[&str] = &["17.4", "17.5", "17.6"];

const OS_STRINGS: &[&str] = &[
    "Windows NT 10.0; Win64; x64",
    "Macintosh; Intel Mac OS X 10_15_7",
    "Macintosh; Intel Mac OS X 14_5",
    "X11; Linux x86_64",
];

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Generate a random but realistic desktop browser user agent
pub fn generate_user_agent() -> String {
    let mut rng = rand::thread_rng();
    let os = pick(&mut rng, OS_STRINGS);

    match rng.gen_range(0..10u8) {
        // Chrome 60%
        0..=5 => format!(
            "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
            os,
            pick(&mut rng, CHROME_VERSIONS)
        ),
        // Firefox 30%
        6..=8 => {
            let firefox = pick(&mut rng, FIREFOX_VERSIONS);
            format!(
                "Mozilla/5.0 ({}; rv:{}) Gecko/20100101 Firefox/{}",
                os, firefox, firefox
            )
        }
        _ => format!(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{} Safari/605.1.15",
            pick(&mut rng, SAFARI_VERSIONS)
        ),
    }
}

/// Accept header for the JSON search endpoint
pub fn accept_json() -> &'static str {
    "application/json,text/javascript,*/*;q=0.01"
}

/// Standard accept-language header
pub fn accept_language(lang: &str) -> String {
    if lang == "all" || lang.is_empty() {
        "en-US,en;q=0.9".to_string()
    } else {
        format!("{},en-US;q=0.9,en;q=0.8", lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_agent() {
        for _ in 0..20 {
            let ua = generate_user_agent();
            assert!(ua.starts_with("Mozilla/5.0"));
            assert!(ua.len() > 50);
        }
    }

    #[test]
    fn test_pick_handles_empty_table() {
        let mut rng = rand::thread_rng();
        assert_eq!(pick(&mut rng, &[]), "");
        assert_eq!(pick(&mut rng, &["only"]), "only");
    }

    #[test]
    fn test_accept_language() {
        assert_eq!(accept_language(""), "en-US,en;q=0.9");
        assert_eq!(accept_language("de"), "de,en-US;q=0.9,en;q=0.8");
    }
}
