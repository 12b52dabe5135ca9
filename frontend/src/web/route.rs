//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其层级。

use std::fmt::Display;

use h5bridge::RouteHierarchy;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 位置服务
    Location,
    /// WiFi 列表
    Device,
    /// 保存图片
    Watch,
    /// 原生路由演示
    Navigate,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    pub const ALL: [AppRoute; 5] = [
        AppRoute::Home,
        AppRoute::Location,
        AppRoute::Device,
        AppRoute::Watch,
        AppRoute::Navigate,
    ];

    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/location" => Self::Location,
            "/device" => Self::Device,
            "/watch" => Self::Watch,
            "/navigate" => Self::Navigate,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Location => "/location",
            Self::Device => "/device",
            Self::Watch => "/watch",
            Self::Navigate => "/navigate",
            Self::NotFound => "/404",
        }
    }

    /// 路由层级：首页为 0，功能页为 1
    pub fn level(&self) -> u32 {
        match self {
            Self::Home => 0,
            _ => 1,
        }
    }

    /// 由所有已知路由构建层级表
    pub fn hierarchy() -> RouteHierarchy {
        RouteHierarchy::new(Self::ALL.iter().map(|r| (r.to_path(), r.level())))
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
