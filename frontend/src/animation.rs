//! 路由动画上下文
//!
//! 把核心的 [`RouteAnimation`] 包装成 Leptos Context：
//! 决策通过订阅同步到 Signal，导航接口转发给协调器。
//! 协调器与订阅都存放在 `StoredValue` 中，随所属 Owner 一起释放，
//! 释放即卸载（取消完成定时器、注销订阅）。

use std::rc::Rc;

use h5bridge::{
    AnimationDecision, AnimationOptions, AnimationState, AnimationType, Direction,
    EnhancedNavigateOptions, RouteAnimation, Scheduler,
};
use leptos::prelude::*;

use crate::web::router::RouterService;

/// 路由动画上下文
#[derive(Clone, Copy)]
pub struct RouteAnimationContext {
    route: StoredValue<Rc<RouteAnimation>, LocalStorage>,
    decision: ReadSignal<AnimationDecision>,
    enable_gesture: bool,
}

impl RouteAnimationContext {
    pub fn decision(&self) -> ReadSignal<AnimationDecision> {
        self.decision
    }

    pub fn animation_type(&self) -> AnimationType {
        self.decision.get().animation_type
    }

    pub fn is_animating(&self) -> bool {
        self.decision.get().is_animating
    }

    pub fn direction(&self) -> Direction {
        self.decision.get().direction
    }

    pub fn enable_gesture(&self) -> bool {
        self.enable_gesture
    }

    pub fn set_animation_type(&self, animation: AnimationType) {
        self.route.with_value(|r| r.set_animation_type(animation));
    }

    pub fn go_back(&self, animation: Option<AnimationType>) {
        self.route.with_value(|r| r.go_back(animation));
    }

    pub fn enhanced_navigate(&self, target: &str, options: EnhancedNavigateOptions) {
        self.route.with_value(|r| r.enhanced_navigate(target, options));
    }

    /// 不带动画预设的普通前进导航
    pub fn push(&self, target: &str) {
        self.enhanced_navigate(target, EnhancedNavigateOptions::default());
    }

    /// 共享协调器句柄（供手势识别器使用）
    pub fn route(&self) -> Rc<RouteAnimation> {
        self.route.with_value(Rc::clone)
    }
}

/// 创建协调器并提供到 Context
///
/// 路由位置的每次变化都会转发给协调器。
pub fn provide_route_animation(
    state: Rc<AnimationState>,
    router: RouterService,
    scheduler: Rc<dyn Scheduler>,
    options: AnimationOptions,
) -> RouteAnimationContext {
    let enable_gesture = options.enable_gesture;
    let route = Rc::new(RouteAnimation::new(
        Rc::clone(&state),
        Rc::new(router),
        scheduler,
        options,
    ));

    let (decision, set_decision) = signal(route.decision());
    let subscription = state.subscribe(move |d| set_decision.set(*d));

    let route = StoredValue::new_local(route);
    // 随 Owner 释放时注销
    let _subscription = StoredValue::new_local(subscription);

    let location = router.location();
    Effect::new(move |_| {
        let current = location.get();
        route.with_value(|r| r.on_path_change(&current.path, current.event));
    });

    let ctx = RouteAnimationContext {
        route,
        decision,
        enable_gesture,
    };
    provide_context(ctx);
    ctx
}

/// 从 Context 获取路由动画
pub fn use_route_animation() -> RouteAnimationContext {
    use_context::<RouteAnimationContext>()
        .expect("RouteAnimationContext not found in context. Ensure it is provided.")
}
