use chrono::Datelike;

use blog_common::models::{Post, ALL};

use crate::models::ArchiveGroup;

/// 提取所有标签：“全部”在首位，其余按首次出现的顺序去重
pub fn collect_tags(posts: &[Post]) -> Vec<String> {
    let mut tags = vec![ALL.to_string()];
    for post in posts {
        for tag in &post.frontmatter.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// 提取所有分类（文章的第一个标签，无标签记为“未分类”），顺序同上
pub fn collect_categories(posts: &[Post]) -> Vec<String> {
    let mut categories = vec![ALL.to_string()];
    for post in posts {
        let category = post.category();
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

/// 按年月归档：组内保持索引顺序，分组按时间倒序排列。
/// 无法解析日期的文章不进入归档
pub fn archives(posts: &[Post]) -> Vec<ArchiveGroup> {
    let mut groups: Vec<((i32, u32), Vec<Post>)> = Vec::new();
    for post in posts {
        let Some(date) = post.published() else {
            continue;
        };
        let key = (date.year(), date.month());
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, group)) => group.push(post.clone()),
            None => groups.push((key, vec![post.clone()])),
        }
    }
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups
        .into_iter()
        .map(|((year, month), posts)| ArchiveGroup {
            label: format!("{}年{:02}月", year, month),
            posts,
        })
        .collect()
}
