use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug regex"));

/// 规范化参数名：先音译为 ASCII 并小写，非字母数字的连续字符替换为 `_`，去掉首尾 `_`
pub fn slugify(value: &str) -> String {
    let lowered = deunicode(value).to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Max Temp"), "max_temp");
    }

    #[test]
    fn test_runs_and_edges() {
        assert_eq!(slugify("  Range -- (min/max)  "), "range_min_max");
        assert_eq!(slugify("already_slug"), "already_slug");
        assert_eq!(slugify("___"), "");
    }

    #[test]
    fn test_transliterates_cyrillic() {
        assert_eq!(slugify("Рабочее Давление"), "rabochee_davlenie");
    }

    #[test]
    fn test_output_is_ascii() {
        assert!(slugify("Диапазон измерения").is_ascii());
    }
}
