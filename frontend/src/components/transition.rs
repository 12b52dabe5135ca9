//! 路由过渡容器
//!
//! 根据当前决策给页面包裹层加上过渡类名，
//! 并把触摸事件交给 [`EdgeSwipe`] 实现边缘右滑返回。

use std::rc::Rc;

use h5bridge::{Direction, DragFeedback, EdgeSwipe, GestureOutcome, Scheduler};
use leptos::ev::TouchEvent;
use leptos::prelude::*;

use crate::animation::use_route_animation;

fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

fn first_touch(ev: &TouchEvent, changed: bool) -> Option<(f64, f64)> {
    let list = if changed {
        ev.changed_touches()
    } else {
        ev.touches()
    };
    list.get(0)
        .map(|t| (f64::from(t.client_x()), f64::from(t.client_y())))
}

fn drag_style(drag: Option<DragFeedback>) -> String {
    match drag {
        Some(f) => format!(
            "transform: translateX({:.1}px); opacity: {:.3}; transition: none;",
            f.offset_x, f.opacity
        ),
        None => String::new(),
    }
}

#[component]
pub fn RouteTransition(
    /// 手势结束后的回弹计时使用的调度器
    scheduler: Rc<dyn Scheduler>,
    children: Children,
) -> impl IntoView {
    let ctx = use_route_animation();
    let swipe = StoredValue::new_local(EdgeSwipe::new(ctx.route(), scheduler, viewport_width()));
    let (drag, set_drag) = signal(None::<DragFeedback>);

    let apply = move |outcome: GestureOutcome| match outcome {
        GestureOutcome::Drag(feedback) => set_drag.set(Some(feedback)),
        o if o.resets_transform() => set_drag.set(None),
        _ => {}
    };

    let on_touch_start = move |ev: TouchEvent| {
        if let Some((x, y)) = first_touch(&ev, false) {
            swipe.with_value(|s| {
                s.set_viewport_width(viewport_width());
                apply(s.touch_start(x, y));
            });
        }
    };
    let on_touch_move = move |ev: TouchEvent| {
        if let Some((x, y)) = first_touch(&ev, false) {
            swipe.with_value(|s| apply(s.touch_move(x, y)));
        }
    };
    let on_touch_end = move |ev: TouchEvent| {
        if let Some((x, _)) = first_touch(&ev, true) {
            swipe.with_value(|s| apply(s.touch_end(x)));
        }
    };
    let on_touch_cancel = move |_: TouchEvent| {
        swipe.with_value(|s| apply(s.touch_cancel()));
    };

    let wrapper_class = move || {
        let decision = ctx.decision().get();
        if decision.is_animating {
            format!(
                "page-wrapper {anim}-enter {anim}-enter-active {dir}",
                anim = decision.animation_type.as_str(),
                dir = match decision.direction {
                    Direction::Forward => "forward",
                    Direction::Backward => "backward",
                },
            )
        } else {
            "page-wrapper".to_string()
        }
    };

    view! {
        <div
            class="route-transition-group relative w-full min-h-screen overflow-hidden"
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
        >
            <div class=wrapper_class style=move || drag_style(drag.get())>
                {children()}
            </div>
        </div>
    }
}
