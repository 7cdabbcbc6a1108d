//! 按角色划分的导航菜单
//!
//! 进程启动后不可变，所有请求共享。

use once_cell::sync::Lazy;
use serde::Serialize;

use super::users::entities::UserRole;

#[derive(Debug, Serialize)]
pub struct MenuItem {
    pub title: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MenuSection {
    pub name: &'static str,
    /// 可见该分组的最低角色
    pub access: UserRole,
    pub items: Vec<MenuItem>,
}

static MENU: Lazy<Vec<MenuSection>> = Lazy::new(|| {
    vec![
        MenuSection {
            name: "STATISTICS",
            access: UserRole::Trainee,
            items: vec![
                MenuItem {
                    title: "Dashboard",
                    path: "/api/v1/admissions/my/dashboard",
                },
                MenuItem {
                    title: "Active tasks",
                    path: "/api/v1/admissions/my",
                },
            ],
        },
        MenuSection {
            name: "TRAINER",
            access: UserRole::Staff,
            items: vec![MenuItem {
                title: "Locations",
                path: "/api/v1/catalog/locations",
            }],
        },
        MenuSection {
            name: "ADMINISTRATION",
            access: UserRole::Staff,
            items: vec![MenuItem {
                title: "Users",
                path: "/api/v1/users",
            }],
        },
        MenuSection {
            name: "SUPERUSER",
            access: UserRole::Admin,
            items: vec![MenuItem {
                title: "Scenario creation",
                path: "/api/v1/scenarios",
            }],
        },
    ]
});

/// 返回该角色可见的菜单分组
pub fn menu_for_role(role: UserRole) -> Vec<&'static MenuSection> {
    MENU.iter().filter(|section| role >= section.access).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(role: UserRole) -> Vec<&'static str> {
        menu_for_role(role).iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_trainee_sees_statistics_only() {
        assert_eq!(names(UserRole::Trainee), vec!["STATISTICS"]);
    }

    #[test]
    fn test_staff_menu() {
        assert_eq!(
            names(UserRole::Staff),
            vec!["STATISTICS", "TRAINER", "ADMINISTRATION"]
        );
    }

    #[test]
    fn test_admin_sees_everything() {
        assert_eq!(names(UserRole::Admin).len(), 4);
    }
}
