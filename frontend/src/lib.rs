//! H5 原生桥接演示前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `animation`: 路由动画上下文
//! - `components`: UI 组件层

mod animation;
mod bridge;
mod components {
    pub mod home;
    pub mod panels;
    pub mod transition;
}
mod serde_helper;

use std::rc::Rc;

use h5bridge::{AnimationPreset, AnimationState, DeviceType, Scheduler};
use leptos::prelude::*;

use crate::animation::provide_route_animation;
use crate::components::home::HomePage;
use crate::components::panels::{DevicePanel, LocationPanel, NavigatePanel, WatchPanel};
use crate::components::transition::RouteTransition;

// 浏览器 API 封装模块
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use storage::SessionHistoryStore;
    pub use timer::GlooScheduler;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet, use_router};
use web::{GlooScheduler, SessionHistoryStore};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Location => view! { <LocationPanel /> }.into_any(),
        AppRoute::Device => view! { <DevicePanel /> }.into_any(),
        AppRoute::Watch => view! { <WatchPanel /> }.into_any(),
        AppRoute::Navigate => view! { <NavigatePanel /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

fn user_agent() -> String {
    window().navigator().user_agent().unwrap_or_default()
}

/// 带过渡动画的路由出口
///
/// 需要在 Router 内部使用，以便取得路由服务。
#[component]
fn AnimatedOutlet() -> impl IntoView {
    let router = use_router();
    let preset = AnimationPreset::for_device(DeviceType::from_user_agent(&user_agent()));
    let options = preset.options();
    h5bridge::log_info!("[App] animation preset: {:?}", preset);

    let state = Rc::new(
        AnimationState::with_initial(AppRoute::hierarchy(), options.default_animation)
            .with_history_store(Rc::new(SessionHistoryStore)),
    );
    let scheduler: Rc<dyn Scheduler> = Rc::new(GlooScheduler::default());

    provide_route_animation(state, router, Rc::clone(&scheduler), options);

    view! {
        <RouteTransition scheduler=scheduler>
            <RouterOutlet matcher=route_matcher />
        </RouteTransition>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <AnimatedOutlet />
        </Router>
    }
}
