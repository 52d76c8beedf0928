//! Blog: posts listed newest first.

use serde::Serialize;

use super::SectionBody;
use crate::records::{BlogPost, Content};

pub const NO_POSTS: &str = "No posts yet.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogCard {
    pub title: String,
    pub excerpt: String,
    /// Display date, e.g. `Jan 15, 2024`.
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub slug: String,
    pub featured: bool,
}

impl From<&BlogPost> for BlogCard {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            date: post.date.format("%b %-d, %Y").to_string(),
            read_time: post.read_time.clone(),
            category: post.category.clone(),
            slug: post.slug.clone(),
            featured: post.featured,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogSection {
    pub posts: SectionBody<BlogCard>,
}

impl BlogSection {
    pub fn build(content: &Content) -> Self {
        let mut posts: Vec<&BlogPost> = content.posts.iter().collect();
        // Stable sort keeps file order for same-day posts.
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        let cards = posts.into_iter().map(BlogCard::from).collect();
        Self {
            posts: SectionBody::from_items(cards, NO_POSTS),
        }
    }

    pub fn featured(&self) -> impl Iterator<Item = &BlogCard> {
        self.posts.items().iter().filter(|p| p.featured)
    }
}
