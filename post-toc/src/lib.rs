use wasm_bindgen::prelude::*;

use blog_common::models::Heading;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// 初始化函数 - 设置错误处理
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 目录侧边栏需要的最少标题数；标题太少时不渲染目录
pub const MIN_HEADINGS_FOR_TOC: usize = 3;

/// 活动标题跟踪器 - 由每个标题元素的可见性回调驱动。
/// 视图为每个标题注册一个被动的可见性监听（IntersectionObserver），
/// 回调统一汇入 observe()，卸载时注销监听并 reset()
#[derive(Debug, Default)]
pub struct TocTracker {
    headings: Vec<Heading>,
    active: Option<String>,
}

impl TocTracker {
    pub fn new(headings: Vec<Heading>) -> Self {
        Self {
            headings,
            active: None,
        }
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// 是否渲染目录：标题数大于2时才显示
    pub fn show_toc(&self) -> bool {
        self.headings.len() >= MIN_HEADINGS_FOR_TOC
    }

    /// 处理一次可见性变化并返回当前活动标题。
    /// 可见的已知标题成为活动标题（后到的事件覆盖先到的）；
    /// 标题离开视口不改变活动标题；未知ID被忽略
    pub fn observe(&mut self, id: &str, is_intersecting: bool) -> Option<&str> {
        if is_intersecting && self.headings.iter().any(|h| h.id == id) {
            self.active = Some(id.to_string());
        }
        self.active.as_deref()
    }

    /// 当前活动标题ID
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// 视图卸载时重置
    pub fn reset(&mut self) {
        self.active = None;
    }
}

/// 目录跟踪器JS接口 - 包装给IntersectionObserver回调使用
#[wasm_bindgen]
pub struct TocTrackerJs {
    inner: TocTracker,
}

#[wasm_bindgen]
impl TocTrackerJs {
    /// 由标题列表JSON构造：[{"id":...,"text":...,"level":...},...]
    #[wasm_bindgen(constructor)]
    pub fn new(headings_json: &str) -> Result<TocTrackerJs, JsValue> {
        let headings: Vec<Heading> = serde_json::from_str(headings_json)
            .map_err(|e| JsValue::from_str(&format!("解析标题列表失败: {}", e)))?;
        Ok(TocTrackerJs {
            inner: TocTracker::new(headings),
        })
    }

    pub fn show_toc(&self) -> bool {
        self.inner.show_toc()
    }

    /// 处理一次可见性回调，返回当前活动标题ID
    pub fn observe(&mut self, id: &str, is_intersecting: bool) -> Option<String> {
        self.inner.observe(id, is_intersecting).map(String::from)
    }

    pub fn active(&self) -> Option<String> {
        self.inner.active().map(String::from)
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
