use wasm_bindgen::prelude::*;
use web_sys::console;

use blog_common::models::{Post, ALL};
use blog_common::store;

pub mod models;
pub mod nav;
pub mod taxonomy;

use models::{FilterParams, FilterResult, NavNeighbors, PageControl};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// 初始化函数 - 设置错误处理
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 判断单篇文章是否命中 (标签, 分类) 筛选。
/// 分类即文章的第一个标签；无标签按空标签列表处理
fn selected(post: &Post, tag: &str, category: &str) -> bool {
    let match_tag = tag == ALL || post.frontmatter.tags.iter().any(|t| t == tag);
    let match_category = category == ALL || post.category() == category;
    match_tag && match_category
}

/// 按 (标签, 分类) 筛选文章。
/// 结果是输入的稳定子序列：不重排，两个条件都为“全部”时原样返回
pub fn filter_posts(posts: &[Post], tag: &str, category: &str) -> Vec<Post> {
    posts
        .iter()
        .filter(|p| selected(p, tag, category))
        .cloned()
        .collect()
}

/// 总页数 = ceil(total / limit)；空列表为0
pub fn total_pages(total: usize, limit: usize) -> usize {
    let limit = limit.max(1);
    (total + limit - 1) / limit
}

/// 切出指定页，返回 (当前页条目, 总页数)。
/// 页码超出 [1, 总页数] 时当前页为空
pub fn paginate(posts: &[Post], limit: usize, page: usize) -> (Vec<Post>, usize) {
    let limit = limit.max(1);
    let total = posts.len();
    let pages = total_pages(total, limit);
    if page == 0 || page > pages {
        return (Vec::new(), pages);
    }
    let start = (page - 1) * limit;
    let end = (start + limit).min(total);
    (posts[start..end].to_vec(), pages)
}

/// 生成分页控件序列：始终包含第一页和最后一页，当前页前后各 neighbors 页，
/// 其余空档折叠为单个省略号。窄屏传入更小的 neighbors。
/// 只有一页（或没有内容）时不渲染控件
pub fn page_controls(current: usize, total: usize, neighbors: usize) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }
    let mut controls = Vec::new();
    let mut last_shown = 0usize;
    for number in 1..=total {
        let shown = number == 1
            || number == total
            || (number + neighbors >= current && number <= current + neighbors);
        if !shown {
            continue;
        }
        if last_shown != 0 && number > last_shown + 1 {
            controls.push(PageControl::Gap);
        }
        controls.push(PageControl::Page { number });
        last_shown = number;
    }
    controls
}

/// 列表页的显式UI状态：当前标签、分类与页码。
/// 展示给用户的列表永远是 (快照, 此状态) 的纯函数，没有隐藏状态
#[derive(Debug, Clone)]
pub struct ListingState {
    tag: String,
    category: String,
    page: usize,
    limit: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            tag: ALL.to_string(),
            category: ALL.to_string(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListingState {
    pub fn with_page_size(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 切换标签筛选，页码重置到第一页
    pub fn set_tag(&mut self, tag: &str) {
        self.tag = tag.to_string();
        self.page = 1;
    }

    /// 切换分类筛选，页码重置到第一页
    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.page = 1;
    }

    /// 跳转页码；超出 [1, total_pages] 时忽略，保留原页码，不做收拢
    pub fn goto_page(&mut self, page: usize, total_pages: usize) {
        if page >= 1 && page <= total_pages {
            self.page = page;
        }
    }

    /// 计算当前应展示的一页
    pub fn apply(&self, posts: &[Post]) -> FilterResult {
        let filtered = filter_posts(posts, &self.tag, &self.category);
        let total = filtered.len();
        let (page_posts, pages) = paginate(&filtered, self.limit, self.page);
        FilterResult {
            posts: page_posts,
            total,
            page: self.page,
            limit: self.limit,
            total_pages: pages,
        }
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("序列化结果失败: {}", e)))
}

/// 文章列表JS接口 - 提供给JavaScript使用的筛选与导航API
#[wasm_bindgen]
pub struct PostFilterJs;

#[wasm_bindgen]
impl PostFilterJs {
    /// 加载文章索引，返回文章数量。每个会话只加载一次；
    /// 失败时列表降级为空并把错误抛给调用者
    pub async fn init() -> Result<u32, JsValue> {
        match store::ensure_loaded().await {
            Ok(count) => Ok(count as u32),
            Err(e) => {
                console::log_1(&JsValue::from_str(&format!("加载文章索引失败: {}", e)));
                Err(JsValue::from(e))
            }
        }
    }

    /// 按参数筛选并分页
    pub fn filter_posts(params_json: &str) -> Result<JsValue, JsValue> {
        let params: FilterParams = serde_json::from_str(params_json)
            .map_err(|e| JsValue::from_str(&format!("解析筛选参数失败: {}", e)))?;

        let posts = store::snapshot();
        let tag = params.tag.as_deref().unwrap_or(ALL);
        let category = params.category.as_deref().unwrap_or(ALL);
        let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
        let page = params.page.unwrap_or(1);

        let filtered = filter_posts(&posts, tag, category);
        let total = filtered.len();
        let (page_posts, pages) = paginate(&filtered, limit, page);
        to_js(&FilterResult {
            posts: page_posts,
            total,
            page,
            limit,
            total_pages: pages,
        })
    }

    /// 所有标签，“全部”在首位
    pub fn all_tags() -> Result<JsValue, JsValue> {
        to_js(&taxonomy::collect_tags(&store::snapshot()))
    }

    /// 所有分类，“全部”在首位
    pub fn all_categories() -> Result<JsValue, JsValue> {
        to_js(&taxonomy::collect_categories(&store::snapshot()))
    }

    /// 按年月归档，最新的分组在前
    pub fn archives() -> Result<JsValue, JsValue> {
        to_js(&taxonomy::archives(&store::snapshot()))
    }

    /// 分页控件序列
    pub fn page_controls(current: usize, total: usize, neighbors: usize) -> Result<JsValue, JsValue> {
        to_js(&page_controls(current, total, neighbors))
    }

    /// 指定文章的上一篇/下一篇
    pub fn neighbors(slug: &str) -> Result<JsValue, JsValue> {
        let posts = store::snapshot();
        let (prev, next) = nav::neighbors(&posts, slug);
        to_js(&NavNeighbors {
            prev: prev.cloned(),
            next: next.cloned(),
        })
    }

    /// 相关文章推荐
    pub fn related(slug: &str, count: usize) -> Result<JsValue, JsValue> {
        to_js(&nav::related_posts(&store::snapshot(), slug, count))
    }

    /// 获取单篇文章的Markdown正文。
    /// 文章不存在时错误信息为“文章未找到”，供渲染“内容不存在”状态
    pub async fn post_body(slug: String) -> Result<String, JsValue> {
        blog_common::fetch_post_body(&slug)
            .await
            .map_err(JsValue::from)
    }
}

/// 列表页状态容器JS接口 - 由顶层视图持有并向下传递
#[wasm_bindgen]
pub struct ListingJs {
    state: ListingState,
}

#[wasm_bindgen]
impl ListingJs {
    #[wasm_bindgen(constructor)]
    pub fn new(page_size: usize) -> ListingJs {
        ListingJs {
            state: ListingState::with_page_size(if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            }),
        }
    }

    pub fn set_tag(&mut self, tag: &str) {
        self.state.set_tag(tag);
    }

    pub fn set_category(&mut self, category: &str) {
        self.state.set_category(category);
    }

    /// 跳转页码；超出当前筛选的页数范围时忽略
    pub fn goto_page(&mut self, page: usize) {
        let filtered = filter_posts(&store::snapshot(), self.state.tag(), self.state.category());
        let pages = total_pages(filtered.len(), self.state.limit());
        self.state.goto_page(page, pages);
    }

    pub fn page(&self) -> usize {
        self.state.page()
    }

    /// 当前筛选状态下应展示的一页
    pub fn current(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.apply(&store::snapshot()))
    }

    /// 当前筛选状态下的分页控件
    pub fn controls(&self, neighbors: usize) -> Result<JsValue, JsValue> {
        let filtered = filter_posts(&store::snapshot(), self.state.tag(), self.state.category());
        let pages = total_pages(filtered.len(), self.state.limit());
        to_js(&page_controls(self.state.page(), pages, neighbors))
    }
}
