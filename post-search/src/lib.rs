use wasm_bindgen::prelude::*;
use web_sys::console;

use blog_common::models::Post;
use blog_common::store;

pub mod models;

use models::{SearchItem, SearchRequest, SearchResponse};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// 初始化函数 - 设置错误处理
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 判断文章是否命中查询词：对标题、摘要（如有）与每个标签
/// 做大小写无关的子串匹配。调用方保证 term 非空且已转为小写
pub fn matches(post: &Post, term: &str) -> bool {
    let fm = &post.frontmatter;
    if fm.title.to_lowercase().contains(term) {
        return true;
    }
    if let Some(excerpt) = &fm.excerpt {
        if excerpt.to_lowercase().contains(term) {
            return true;
        }
    }
    fm.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

/// 执行搜索。
/// 空查询（含纯空白）返回零命中且 is_searching=false —— 这是“没有在搜索”
/// 的空态，不回退为完整列表。非空查询按索引顺序稳定筛选后分页
pub fn search(posts: &[Post], req: &SearchRequest) -> SearchResponse {
    let term = req.query.trim().to_lowercase();
    if term.is_empty() {
        return SearchResponse::idle(req.page, req.page_size);
    }

    let hits: Vec<&Post> = posts.iter().filter(|p| matches(p, &term)).collect();
    let total = hits.len();
    let page_size = req.page_size.max(1);
    let total_pages = (total + page_size - 1) / page_size;

    let start = (req.page.max(1) - 1) * page_size;
    let end = (start + page_size).min(total);
    let page_hits: &[&Post] = if start < total { &hits[start..end] } else { &[] };

    let items = page_hits
        .iter()
        .map(|post| SearchItem {
            slug: post.slug.clone(),
            title: highlight(&post.frontmatter.title, &term),
            excerpt: post.frontmatter.excerpt.clone(),
            cover: post.frontmatter.cover.clone(),
            date: post.frontmatter.date.clone(),
            tags: post.frontmatter.tags.clone(),
        })
        .collect();

    SearchResponse {
        items,
        total,
        page: req.page,
        page_size,
        total_pages,
        is_searching: true,
        query: term,
    }
}

/// 将文本中命中查询词的部分包裹 <mark> 标记，保留原始大小写。
/// 所有切分都先收拢到字符边界上（标题常含中文）
pub fn highlight(text: &str, term: &str) -> String {
    if text.is_empty() || term.is_empty() {
        return text.to_string();
    }

    let text_lower = text.to_lowercase();
    let term_lower = term.to_lowercase();

    // 查找所有匹配位置
    let mut spans = Vec::new();
    let mut from = 0;
    while from < text_lower.len() {
        match text_lower[from..].find(&term_lower) {
            Some(found) => {
                let start = find_char_boundary(text, from + found);
                let end = find_char_boundary(text, from + found + term_lower.len());
                if end > start {
                    spans.push((start, end));
                }
                from = if end > from { end } else { from + 1 };
            }
            None => break,
        }
    }
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + spans.len() * 13);
    let mut last = 0;
    for (start, end) in spans {
        if start > last {
            out.push_str(&text[last..start]);
        }
        out.push_str("<mark>");
        out.push_str(&text[start..end]);
        out.push_str("</mark>");
        last = end;
    }
    if last < text.len() {
        out.push_str(&text[last..]);
    }
    out
}

/// 把索引收拢到不超过它的最近字符边界
fn find_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// 从地址栏查询串（location.search，形如 "?q=小说"）读取初始搜索词。
/// 缺省或纯空白返回 None
pub fn initial_query(location_search: &str) -> Option<String> {
    let params = web_sys::UrlSearchParams::new_with_str(location_search).ok()?;
    let q = params.get("q")?;
    let q = q.trim();
    if q.is_empty() {
        None
    } else {
        Some(q.to_string())
    }
}

/// 文章搜索JS接口 - 提供给JavaScript使用的搜索API
#[wasm_bindgen]
pub struct PostSearchJs;

#[wasm_bindgen]
impl PostSearchJs {
    /// 加载文章索引，返回文章数量。与列表模块一致：每会话一次，失败降级为空列表
    pub async fn init() -> Result<u32, JsValue> {
        match store::ensure_loaded().await {
            Ok(count) => Ok(count as u32),
            Err(e) => {
                console::log_1(&JsValue::from_str(&format!("加载文章索引失败: {}", e)));
                Err(JsValue::from(e))
            }
        }
    }

    /// 执行搜索
    pub fn search(request_json: &str) -> Result<JsValue, JsValue> {
        let req: SearchRequest = serde_json::from_str(request_json)
            .map_err(|e| JsValue::from_str(&format!("解析搜索请求失败: {}", e)))?;
        let response = crate::search(&store::snapshot(), &req);
        serde_wasm_bindgen::to_value(&response)
            .map_err(|e| JsValue::from_str(&format!("序列化搜索结果失败: {}", e)))
    }

    /// 搜索页入口：从 location.search 读取 q 参数作为初始查询词
    pub fn initial_query(location_search: &str) -> Option<String> {
        crate::initial_query(location_search)
    }
}
