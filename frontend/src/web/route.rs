//! 视图定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有视图及其标识、标题和 URL。

use std::fmt::Display;

/// 应用视图枚举，同一时刻只有一个处于激活状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// 仪表盘 (默认视图)
    #[default]
    Dashboard,
    Quotes,
    Jobs,
    Clients,
    Staff,
    Payments,
    Reports,
}

impl View {
    /// 导航栏中的顺序
    pub const ALL: [View; 7] = [
        View::Dashboard,
        View::Quotes,
        View::Jobs,
        View::Clients,
        View::Staff,
        View::Payments,
        View::Reports,
    ];

    /// 解析视图标识；未知标识回落到仪表盘
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "quotes" => Self::Quotes,
            "jobs" => Self::Jobs,
            "clients" => Self::Clients,
            "staff" => Self::Staff,
            "payments" => Self::Payments,
            "reports" => Self::Reports,
            _ => Self::Dashboard,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Quotes => "quotes",
            Self::Jobs => "jobs",
            Self::Clients => "clients",
            Self::Staff => "staff",
            Self::Payments => "payments",
            Self::Reports => "reports",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Quotes => "Quotes",
            Self::Jobs => "Jobs",
            Self::Clients => "Clients",
            Self::Staff => "Staff",
            Self::Payments => "Payments",
            Self::Reports => "Reports",
        }
    }

    /// 将 URL path 解析为视图；`/` 与未知路径都是仪表盘
    pub fn from_path(path: &str) -> Self {
        let segment = path.trim_matches('/').split('/').next().unwrap_or_default();
        Self::from_id(segment)
    }

    /// 获取视图对应的 URL path
    pub fn to_path(&self) -> String {
        format!("/{}", self.id())
    }
}

impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_id(view.id()), view);
            assert_eq!(View::from_path(&view.to_path()), view);
        }
    }

    #[test]
    fn unknown_id_is_dashboard() {
        assert_eq!(View::from_id("invoices"), View::Dashboard);
        assert_eq!(View::from_id(""), View::Dashboard);
        assert_eq!(View::from_id(" Jobs "), View::Jobs);
    }

    #[test]
    fn paths_fall_back_to_dashboard() {
        assert_eq!(View::from_path("/"), View::Dashboard);
        assert_eq!(View::from_path(""), View::Dashboard);
        assert_eq!(View::from_path("/admin/settings"), View::Dashboard);
        assert_eq!(View::from_path("/payments/"), View::Payments);
        assert_eq!(View::from_path("/staff/12"), View::Staff);
    }

    #[test]
    fn display_uses_id() {
        assert_eq!(View::Reports.to_string(), "reports");
        assert_eq!(View::Reports.title(), "Reports");
    }
}
