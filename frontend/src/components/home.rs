use h5bridge::{AnimationPreset, AnimationType};
use leptos::prelude::*;

use crate::animation::use_route_animation;
use crate::web::route::AppRoute;

struct NavItem {
    route: AppRoute,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

static NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        route: AppRoute::Location,
        title: "位置服务",
        description: "获取当前位置信息",
        icon: "📍",
    },
    NavItem {
        route: AppRoute::Device,
        title: "WiFi列表",
        description: "获取设备WiFi信息",
        icon: "📶",
    },
    NavItem {
        route: AppRoute::Watch,
        title: "保存图片",
        description: "图片保存功能演示",
        icon: "📸",
    },
    NavItem {
        route: AppRoute::Navigate,
        title: "模拟路由",
        description: "路由演示",
        icon: "👂🏻",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_route_animation();
    let (show_controller, set_show_controller) = signal(false);

    let items = NAV_ITEMS
        .iter()
        .map(|item| {
            let path = item.route.to_path();
            view! {
                <div
                    class="card bg-base-100 shadow-xl cursor-pointer active:scale-95 transition"
                    on:click=move |_| ctx.push(path)
                >
                    <div class="card-body flex-row items-center gap-4">
                        <span class="text-3xl">{item.icon}</span>
                        <div>
                            <h3 class="card-title">{item.title}</h3>
                            <p class="text-base-content/70 text-sm">{item.description}</p>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen flex flex-col bg-gradient-to-br from-indigo-400 to-purple-700">
            <div class="navbar text-white">
                <span class="mx-auto font-semibold">"🌉 H5-Native-Bridge 演示"</span>
            </div>
            <div class="flex-1 p-5 flex flex-col gap-4 overflow-auto">
                <div class="text-center text-white mb-5">
                    <h2 class="text-2xl">"功能演示"</h2>
                    <p class="opacity-80">"点击下方按钮体验各项功能"</p>
                    <button
                        class="btn btn-sm btn-outline text-white mt-3"
                        on:click=move |_| set_show_controller.update(|v| *v = !*v)
                    >
                        "🎨 动画设置"
                    </button>
                </div>
                <Show when=move || show_controller.get()>
                    <AnimationController />
                </Show>
                {items}
            </div>
        </div>
    }
}

/// 动画控制面板：查看当前决策并覆盖动画类型
#[component]
fn AnimationController() -> impl IntoView {
    let ctx = use_route_animation();

    let options = AnimationType::ALL
        .iter()
        .map(|&animation| {
            view! {
                <label class="label cursor-pointer justify-start gap-2">
                    <input
                        type="radio"
                        name="animation-type"
                        class="radio radio-sm"
                        prop:checked=move || ctx.animation_type() == animation
                        on:change=move |_| ctx.set_animation_type(animation)
                    />
                    <span>{animation.label()}</span>
                </label>
            }
        })
        .collect_view();

    // 只切换到预设的默认动画，时长与手势配置在启动时已确定
    let preset_button = move |preset: AnimationPreset, label: &'static str| {
        let animation = preset.options().default_animation;
        view! {
            <button class="btn btn-sm btn-primary" on:click=move |_| ctx.set_animation_type(animation)>
                {label}
            </button>
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body gap-3">
                <h3 class="card-title">"🎨 动画控制面板"</h3>
                <div class="text-sm">
                    <div>"当前动画: " {move || ctx.animation_type().label()}</div>
                    <div>"动画状态: " {move || if ctx.is_animating() { "进行中" } else { "空闲" }}</div>
                    <div>"手势返回: " {if ctx.enable_gesture() { "已启用" } else { "已禁用" }}</div>
                </div>
                <h4 class="font-semibold">"🎭 选择动画类型"</h4>
                <div>{options}</div>
                <h4 class="font-semibold">"⚙️ 预设动画快捷切换"</h4>
                <div class="flex flex-wrap gap-2">
                    {preset_button(AnimationPreset::Mobile, "📱 移动端默认动画")}
                    {preset_button(AnimationPreset::Desktop, "💻 桌面端默认动画")}
                    {preset_button(AnimationPreset::None, "🚫 无动画模式的默认动画")}
                </div>
            </div>
        </div>
    }
}
