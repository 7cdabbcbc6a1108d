use once_cell::sync::Lazy;
use regex::Regex;

/// 未评分占位值
pub const RATING_SENTINEL: &str = "0";

static RATING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-5]\.[0-5]$").expect("Invalid rating regex"));

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// 评分格式：占位值 "0" 或 `d.d`（两位均为 0-5）
pub fn validate_rating(rating: &str) -> Result<(), String> {
    if rating == RATING_SENTINEL || RATING_RE.is_match(rating) {
        Ok(())
    } else {
        Err(format!(
            "Rating '{rating}' must be \"0\" or match the pattern d.d with digits 0-5"
        ))
    }
}

/// 是否为真实评分（非占位值）
pub fn is_real_rating(rating: &str) -> bool {
    rating != RATING_SENTINEL && RATING_RE.is_match(rating)
}

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, dots, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    if !password.chars().any(|c| c.is_alphabetic()) {
        errors.push("Password must contain at least one letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ratings() {
        for rating in ["0", "0.0", "3.5", "5.5", "4.0"] {
            assert!(validate_rating(rating).is_ok(), "{rating} should be valid");
        }
    }

    #[test]
    fn test_invalid_ratings() {
        for rating in ["6.0", "3.7", "abc", "", "3", "3.55", " 3.5", "00"] {
            assert!(validate_rating(rating).is_err(), "{rating} should be invalid");
        }
    }

    #[test]
    fn test_real_rating() {
        assert!(!is_real_rating("0"));
        assert!(is_real_rating("0.0"));
        assert!(is_real_rating("2.5"));
        assert!(!is_real_rating("9.9"));
    }

    #[test]
    fn test_username() {
        assert!(validate_username("ivanov").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("bad name").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("op@plant.ru").is_ok());
        assert!(validate_email("op@plant").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("operator1").is_valid);
        assert!(validate_password("Оператор12").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("abcdefgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }
}
