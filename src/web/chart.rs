//! Chart.js 绑定与图表句柄登记
//!
//! 只封装本应用需要的两个操作：构造与销毁。图表的渲染行为
//! 属于外部库，配置对象整体序列化后交给 JS 侧。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::serde_helper;

/// 横向条形图滚动布局：前五行可见，其余滚动
pub const MAX_VISIBLE_BARS: u32 = 5;
const BAR_HEIGHT: u32 = 54;
const BAR_PADDING: u32 = 34;

#[wasm_bindgen]
extern "C" {
    /// 全局 Chart 构造器（index.html 通过 CDN 引入）
    pub type Chart;

    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Chart;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Chart);
}

/// 已挂载图表的句柄登记表
///
/// 同一槽位重复渲染时先销毁旧实例；报表页卸载效果统一销毁全部句柄。
/// 句柄是 JS 对象，存放在非 Send 的本地存储里。
#[derive(Clone, Copy)]
pub struct ChartRegistry {
    charts: StoredValue<Vec<(&'static str, Chart)>, LocalStorage>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self {
            charts: StoredValue::new_local(Vec::new()),
        }
    }

    /// 登记槽位句柄，替换并销毁同槽位的旧图表
    pub fn set(&self, slot: &'static str, chart: Chart) {
        self.charts.update_value(|charts| {
            if let Some(index) = charts.iter().position(|(name, _)| *name == slot) {
                let (_, old) = charts.remove(index);
                old.destroy();
            }
            charts.push((slot, chart));
        });
    }

    /// 销毁全部句柄（报表页清理效果）
    pub fn destroy_all(&self) {
        self.charts.update_value(|charts| {
            for (_, chart) in charts.drain(..) {
                chart.destroy();
            }
        });
    }
}

impl Default for ChartRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取图表登记表
pub fn use_chart_registry() -> ChartRegistry {
    use_context::<ChartRegistry>().expect("ChartRegistry should be provided")
}

/// 在指定 canvas 上渲染图表并登记句柄
///
/// canvas 不在文档中（视图已切走）时静默放弃。
pub fn render_chart(
    registry: &ChartRegistry,
    slot: &'static str,
    canvas_id: &str,
    config: &serde_json::Value,
) {
    let Some(canvas) = document()
        .get_element_by_id(canvas_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
    else {
        tracing::debug!(canvas_id, "chart canvas not in document, skipping render");
        return;
    };

    match serde_helper::to_value(config) {
        Ok(js_config) => registry.set(slot, Chart::new(&canvas, &js_config)),
        Err(error) => tracing::error!(%error, canvas_id, "failed to serialize chart config"),
    }
}

/// 设置 canvas 高度使前 [`MAX_VISIBLE_BARS`] 行可见、其余行可滚动
pub fn set_scrollable_chart_height(canvas_id: &str, row_count: usize) {
    let Some(canvas) = document()
        .get_element_by_id(canvas_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
    else {
        return;
    };
    let rows = (row_count as u32).max(MAX_VISIBLE_BARS);
    canvas.set_height(rows * BAR_HEIGHT + BAR_PADDING);
}
