//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 每次路由变化同时记录其导航事件（PUSH / REPLACE 来自应用，POP 来自 popstate），
//! 供动画协调器判断方向。

use h5bridge::{NavigateOptions, NavigationEvent, Navigator};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;
use crate::serde_helper;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str, state: &JsValue) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(state, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数）
fn replace_history_state(path: &str, state: &JsValue) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(state, "", Some(path));
        }
    }
}

/// 当前位置：路径以及到达它的导航事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLocation {
    pub path: String,
    pub event: NavigationEvent,
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前位置（只读信号）
    location: ReadSignal<RouteLocation>,
    /// 设置当前位置（写入信号）
    set_location: WriteSignal<RouteLocation>,
}

impl RouterService {
    /// 创建新的路由服务
    fn new() -> Self {
        // 初始加载视为 POP（与浏览器会话恢复一致）
        let (location, set_location) = signal(RouteLocation {
            path: current_path(),
            event: NavigationEvent::Pop,
        });

        Self {
            location,
            set_location,
        }
    }

    /// 获取当前位置信号
    pub fn location(&self) -> ReadSignal<RouteLocation> {
        self.location
    }

    /// 当前路由（派生信号）
    pub fn current_route(&self) -> Signal<AppRoute> {
        let location = self.location;
        Signal::derive(move || location.with(|l| AppRoute::from_path(&l.path)))
    }

    /// 推入新页面
    pub fn navigate(&self, path: &str) {
        self.go(path, false, &JsValue::NULL);
    }

    /// 替换当前页面
    pub fn replace(&self, path: &str) {
        self.go(path, true, &JsValue::NULL);
    }

    fn go(&self, path: &str, replace: bool, state: &JsValue) {
        let event = if replace {
            replace_history_state(path, state);
            NavigationEvent::Replace
        } else {
            push_history_state(path, state);
            NavigationEvent::Push
        };
        self.set_location.set(RouteLocation {
            path: path.to_string(),
            event,
        });
    }

    /// 返回上一页，结果由 popstate 监听器上报
    pub fn back(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_location = self.set_location;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_location.set(RouteLocation {
                path: current_path(),
                event: NavigationEvent::Pop,
            });
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

impl Navigator for RouterService {
    fn navigate_back(&self) {
        self.back();
    }

    fn navigate_to(&self, target: &str, options: &NavigateOptions) {
        let state = options
            .state
            .as_ref()
            .and_then(|s| serde_helper::to_value(s).ok())
            .unwrap_or(JsValue::NULL);
        self.go(target, options.replace, &state);
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router();

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let route = router.current_route();

    move || matcher(route.get())
}
