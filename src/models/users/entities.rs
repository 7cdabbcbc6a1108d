use serde::{Deserialize, Serialize};

// 用户角色，由 is_staff / is_superuser 推导
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Trainee, // 学员
    Staff,   // 教员
    Admin,   // 管理员
}

impl UserRole {
    pub const TRAINEE: &'static str = "trainee";
    pub const STAFF: &'static str = "staff";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn staff_roles() -> &'static [&'static UserRole] {
        &[&Self::Staff, &Self::Admin]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Trainee, &Self::Staff, &Self::Admin]
    }

    pub fn from_flags(is_staff: bool, is_superuser: bool) -> Self {
        if is_superuser {
            UserRole::Admin
        } else if is_staff {
            UserRole::Staff
        } else {
            UserRole::Trainee
        }
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: trainee, staff, admin"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Trainee => write!(f, "{}", UserRole::TRAINEE),
            UserRole::Staff => write!(f, "{}", UserRole::STAFF),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::TRAINEE => Ok(UserRole::Trainee),
            UserRole::STAFF => Ok(UserRole::Staff),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
    pub division: Option<String>,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub registered_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn role(&self) -> UserRole {
        UserRole::from_flags(self.is_staff, self.is_superuser)
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role().to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_flags() {
        assert_eq!(UserRole::from_flags(false, false), UserRole::Trainee);
        assert_eq!(UserRole::from_flags(true, false), UserRole::Staff);
        assert_eq!(UserRole::from_flags(false, true), UserRole::Admin);
        assert_eq!(UserRole::from_flags(true, true), UserRole::Admin);
    }

    #[test]
    fn test_role_round_trip_str() {
        for role in UserRole::all_roles() {
            assert_eq!(role.to_string().parse::<UserRole>(), Ok(**role));
        }
        assert!("instructor".parse::<UserRole>().is_err());
    }
}
