use blog_common::models::Post;

/// 按索引顺序返回 (上一篇, 下一篇)。slug不在索引中时两者皆无
pub fn neighbors<'a>(posts: &'a [Post], slug: &str) -> (Option<&'a Post>, Option<&'a Post>) {
    match posts.iter().position(|p| p.slug == slug) {
        None => (None, None),
        Some(i) => {
            let prev = if i > 0 { posts.get(i - 1) } else { None };
            (prev, posts.get(i + 1))
        }
    }
}

/// 相关文章推荐：优先选取与当前文章共享标签的文章，
/// 不足 count 篇时按发布日期补足最新的其他文章
pub fn related_posts(posts: &[Post], slug: &str, count: usize) -> Vec<Post> {
    let current = match posts.iter().find(|p| p.slug == slug) {
        Some(p) => p,
        None => return Vec::new(),
    };

    let mut related: Vec<Post> = posts
        .iter()
        .filter(|p| {
            p.slug != slug
                && p.frontmatter
                    .tags
                    .iter()
                    .any(|t| current.frontmatter.tags.contains(t))
        })
        .take(count)
        .cloned()
        .collect();

    if related.len() < count {
        let mut rest: Vec<&Post> = posts
            .iter()
            .filter(|p| p.slug != slug && !related.iter().any(|r| r.slug == p.slug))
            .collect();
        rest.sort_by(|a, b| b.published().cmp(&a.published()));
        related.extend(rest.into_iter().take(count - related.len()).cloned());
    }

    related
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_common::models::Frontmatter;

    fn post(slug: &str, date: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            frontmatter: Frontmatter {
                title: slug.to_string(),
                date: date.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Frontmatter::default()
            },
        }
    }

    fn catalog() -> Vec<Post> {
        vec![
            post("first", "2024-01-01", &["小说"]),
            post("second", "2024-02-01", &["影评"]),
            post("third", "2024-03-01", &["小说", "2024"]),
            post("fourth", "2024-04-01", &["生活"]),
        ]
    }

    #[test]
    fn neighbors_follow_index_order() {
        let posts = catalog();
        let (prev, next) = neighbors(&posts, "second");
        assert_eq!(prev.map(|p| p.slug.as_str()), Some("first"));
        assert_eq!(next.map(|p| p.slug.as_str()), Some("third"));
    }

    #[test]
    fn neighbors_at_the_edges() {
        let posts = catalog();
        let (prev, next) = neighbors(&posts, "first");
        assert!(prev.is_none());
        assert_eq!(next.map(|p| p.slug.as_str()), Some("second"));

        let (prev, next) = neighbors(&posts, "fourth");
        assert_eq!(prev.map(|p| p.slug.as_str()), Some("third"));
        assert!(next.is_none());
    }

    #[test]
    fn unknown_slug_has_no_neighbors() {
        let posts = catalog();
        assert_eq!(neighbors(&posts, "missing"), (None, None));
    }

    #[test]
    fn related_prefers_shared_tags() {
        let posts = catalog();
        let related = related_posts(&posts, "first", 2);
        let slugs: Vec<&str> = related.iter().map(|p| p.slug.as_str()).collect();
        // “third”共享“小说”标签排在前面，剩余名额按日期补最新的“fourth”
        assert_eq!(slugs, vec!["third", "fourth"]);
    }

    #[test]
    fn related_excludes_the_post_itself() {
        let posts = catalog();
        let related = related_posts(&posts, "third", 3);
        assert!(related.iter().all(|p| p.slug != "third"));
        assert_eq!(related.len(), 3);
    }

    #[test]
    fn related_for_unknown_slug_is_empty() {
        assert!(related_posts(&catalog(), "missing", 2).is_empty());
    }
}
