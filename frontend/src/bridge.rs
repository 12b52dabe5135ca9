//! 原生桥接的浏览器实现
//!
//! 宿主页面加载 `h5-native-bridge` 后将其挂载为 `window.nativeBridge`，
//! 每个请求按 [`BridgeCall::METHOD`] 查找同名方法并等待其返回的 Promise。

use async_trait::async_trait;
use h5bridge::{BridgeError, BridgeResult, NativeBridge};
use h5bridge_shared::{
    BridgeCall, LocationInfo, LocationOptions, NavigateRequest, SaveImageRequest,
    SaveImageResult, WifiList, WifiListOptions,
};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::serde_helper;

const BRIDGE_GLOBAL: &str = "nativeBridge";

/// 把 JS 异常转换为桥接错误，优先取 `message` 字段
fn js_error(value: JsValue) -> BridgeError {
    let message = Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    BridgeError::new(message)
}

fn bridge_object() -> BridgeResult<JsValue> {
    let bridge = Reflect::get(&js_sys::global(), &JsValue::from_str(BRIDGE_GLOBAL))
        .map_err(js_error)?;
    if bridge.is_undefined() || bridge.is_null() {
        return Err(BridgeError::new(format!("window.{} is not available", BRIDGE_GLOBAL)));
    }
    Ok(bridge)
}

async fn invoke<C: BridgeCall>(payload: &C) -> BridgeResult<C::Response> {
    let bridge = bridge_object()?;
    let method: Function = Reflect::get(&bridge, &JsValue::from_str(C::METHOD))
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| BridgeError::new(format!("{}.{} is not a function", BRIDGE_GLOBAL, C::METHOD)))?;

    let args = serde_helper::to_value(payload)?;
    let returned = method.call1(&bridge, &args).map_err(js_error)?;
    // 同步返回值同样包装为 Promise
    let value = JsFuture::from(Promise::resolve(&returned))
        .await
        .map_err(js_error)?;

    Ok(serde_helper::from_value(value)?)
}

/// 基于 `window.nativeBridge` 的桥接实现
#[derive(Debug, Clone, Copy, Default)]
pub struct JsNativeBridge;

#[async_trait(?Send)]
impl NativeBridge for JsNativeBridge {
    async fn get_location(&self, options: &LocationOptions) -> BridgeResult<LocationInfo> {
        invoke(options).await
    }

    async fn get_wifi_list(&self, options: &WifiListOptions) -> BridgeResult<WifiList> {
        invoke(options).await
    }

    async fn save_image(&self, request: &SaveImageRequest) -> BridgeResult<SaveImageResult> {
        invoke(request).await
    }

    async fn navigate(&self, request: &NavigateRequest) -> BridgeResult<serde_json::Value> {
        invoke(request).await
    }
}
