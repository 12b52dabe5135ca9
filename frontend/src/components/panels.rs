//! 原生能力演示面板
//!
//! 每个面板独立维护 [`RequestStatus`]，桥接调用失败只显示在面板内。

use h5bridge::{AnimationType, NativeBridge, RequestStatus};
use h5bridge_shared::{
    LocationInfo, LocationOptions, NavigateRequest, NavigateType, SaveImageRequest,
    SaveImageResult, WifiList, WifiListOptions,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::animation::use_route_animation;
use crate::bridge::JsNativeBridge;

const DEMO_IMAGE_URL: &str = "https://picsum.photos/400/300";

/// 顶部导航栏，返回按钮触发带动画的后退
#[component]
fn NavBar(title: &'static str, #[prop(optional)] back_animation: Option<AnimationType>) -> impl IntoView {
    let ctx = use_route_animation();

    view! {
        <div class="navbar bg-base-100 shadow">
            <button class="btn btn-ghost btn-sm" on:click=move |_| ctx.go_back(back_animation)>
                "‹ 返回"
            </button>
            <span class="mx-auto font-semibold">{title}</span>
        </div>
    }
}

/// 请求状态的通用展示
fn status_view<T: Clone + Send + Sync + 'static>(
    status: ReadSignal<RequestStatus<T>>,
    render: fn(T) -> AnyView,
) -> impl IntoView {
    move || match status.get() {
        RequestStatus::Idle => ().into_any(),
        RequestStatus::Loading => view! { <span class="loading loading-spinner"></span> }.into_any(),
        RequestStatus::Success(value) => render(value),
        RequestStatus::Error(message) => view! {
            <div class="alert alert-error">
                <span>{format!("调用失败: {}", message)}</span>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn LocationPanel() -> impl IntoView {
    let (status, set_status) = signal(RequestStatus::<LocationInfo>::Idle);

    let get_location = move |_| {
        set_status.set(RequestStatus::Loading);
        spawn_local(async move {
            let options = LocationOptions::default();
            set_status.set(RequestStatus::track(JsNativeBridge.get_location(&options)).await);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <NavBar title="位置服务" back_animation=AnimationType::Fade />
            <div class="p-4 space-y-4">
                <h2 class="text-xl font-bold">"位置服务"</h2>
                <button class="btn btn-primary" on:click=get_location disabled=move || status.with(|s| s.is_loading())>
                    "获取当前位置"
                </button>
                {status_view(status, |info: LocationInfo| view! {
                    <div class="card bg-base-100 shadow"><div class="card-body text-sm">
                        <div>"纬度: " {info.latitude}</div>
                        <div>"经度: " {info.longitude}</div>
                        <div>"精度: " {info.accuracy} " 米"</div>
                        <div>"地址: " {info.address.unwrap_or_default()}</div>
                        <div>"城市: " {info.city.unwrap_or_default()}</div>
                    </div></div>
                }.into_any())}
            </div>
        </div>
    }
}

#[component]
pub fn DevicePanel() -> impl IntoView {
    let (status, set_status) = signal(RequestStatus::<WifiList>::Idle);

    let get_wifi_list = move |_| {
        set_status.set(RequestStatus::Loading);
        spawn_local(async move {
            let options = WifiListOptions { refresh: true };
            set_status.set(RequestStatus::track(JsNativeBridge.get_wifi_list(&options)).await);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <NavBar title="WiFi列表" />
            <div class="p-4 space-y-4">
                <h2 class="text-xl font-bold">"wifi信息"</h2>
                <button class="btn btn-primary" on:click=get_wifi_list disabled=move || status.with(|s| s.is_loading())>
                    "获取WiFi列表"
                </button>
                {status_view(status, |list: WifiList| {
                    if list.wifi_list.is_empty() {
                        return view! { <p class="text-base-content/50">"未发现WiFi"</p> }.into_any();
                    }
                    list.wifi_list
                        .into_iter()
                        .map(|wifi| view! {
                            <div class="card bg-base-100 shadow"><div class="card-body p-3 text-sm">
                                <div class="font-semibold">{wifi.ssid}</div>
                                <div>"信号: " {wifi.level.map(|l| format!("{} dBm", l)).unwrap_or_default()}</div>
                                <div>{if wifi.secure.unwrap_or(false) { "🔒 加密" } else { "开放" }}</div>
                            </div></div>
                        })
                        .collect_view()
                        .into_any()
                })}
            </div>
        </div>
    }
}

#[component]
pub fn WatchPanel() -> impl IntoView {
    let (status, set_status) = signal(RequestStatus::<SaveImageResult>::Idle);

    let save_image = move |_| {
        set_status.set(RequestStatus::Loading);
        spawn_local(async move {
            let request = SaveImageRequest {
                url: DEMO_IMAGE_URL.to_string(),
            };
            set_status.set(RequestStatus::track(JsNativeBridge.save_image(&request)).await);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <NavBar title="保存图片" />
            <div class="p-4 space-y-4">
                <h2 class="text-xl font-bold">"图片信息"</h2>
                <img class="rounded-box w-full" src=DEMO_IMAGE_URL />
                <button class="btn btn-primary" on:click=save_image disabled=move || status.with(|s| s.is_loading())>
                    "保存到相册"
                </button>
                {status_view(status, |result: SaveImageResult| view! {
                    <div class="alert alert-success"><span>"已保存: " {result.data.file}</span></div>
                }.into_any())}
            </div>
        </div>
    }
}

#[component]
pub fn NavigatePanel() -> impl IntoView {
    let (status, set_status) = signal(RequestStatus::<serde_json::Value>::Idle);

    let call = move |kind: NavigateType, url: &'static str, info: &'static str| {
        set_status.set(RequestStatus::Loading);
        spawn_local(async move {
            let request = NavigateRequest {
                kind,
                url: url.to_string(),
                data: serde_json::json!({ "info": info }),
            };
            set_status.set(RequestStatus::track(JsNativeBridge.navigate(&request)).await);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <NavBar title="原生路由,H5路由跳转" />
            <div class="p-4 flex flex-col items-center gap-3">
                <button class="btn w-52" on:click=move |_| call(NavigateType::Push, "/location", "打开新页")>
                    "Push 打开新页"
                </button>
                <button class="btn w-52" on:click=move |_| call(NavigateType::Pop, "", "关闭当前页")>
                    "Pop 关闭当前页"
                </button>
                <button class="btn w-52" on:click=move |_| call(NavigateType::Forward, "/location", "当前页前进")>
                    "Forward 当前页前进"
                </button>
                <button class="btn w-52" on:click=move |_| call(NavigateType::Back, "", "当前页返回")>
                    "Back 当前页返回"
                </button>
                {status_view(status, |value: serde_json::Value| view! {
                    <pre class="text-xs">{value.to_string()}</pre>
                }.into_any())}
            </div>
        </div>
    }
}
