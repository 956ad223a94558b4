//! In-memory blog list kept consistent with server responses.
//!
//! Every mutation re-sorts: blogs with a likes count first, most liked on
//! top, then blogs that were never liked in the order they arrived.

use bloglist_http::Blog;

/// Order blogs by descending likes, pushing blogs without a count to the end.
///
/// Both partitions keep their original relative order among equals.
pub fn sort_blogs_by_likes(blogs: Vec<Blog>) -> Vec<Blog> {
    let (mut with_likes, without_likes): (Vec<Blog>, Vec<Blog>) =
        blogs.into_iter().partition(|b| b.likes.is_some());

    // Vec::sort_by is stable
    with_likes.sort_by(|a, b| b.likes.cmp(&a.likes));
    with_likes.extend(without_likes);
    with_likes
}

#[derive(Debug, Clone, Default)]
pub struct BlogList {
    blogs: Vec<Blog>,
}

impl BlogList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, blogs: Vec<Blog>) {
        self.blogs = sort_blogs_by_likes(blogs);
    }

    /// Add a blog the server just created.
    pub fn append(&mut self, blog: Blog) {
        let mut blogs = std::mem::take(&mut self.blogs);
        blogs.push(blog);
        self.blogs = sort_blogs_by_likes(blogs);
    }

    /// Swap in the server's copy of a blog. Returns false if no entry has its id.
    pub fn replace(&mut self, updated: Blog) -> bool {
        let Some(slot) = self.blogs.iter_mut().find(|b| b.id == updated.id) else {
            return false;
        };
        *slot = updated;
        self.resort();
        true
    }

    /// Returns the removed blog, if any.
    pub fn remove(&mut self, id: &str) -> Option<Blog> {
        let pos = self.blogs.iter().position(|b| b.id == id)?;
        Some(self.blogs.remove(pos))
    }

    pub fn clear(&mut self) {
        self.blogs.clear();
    }

    pub fn get(&self, id: &str) -> Option<&Blog> {
        self.blogs.iter().find(|b| b.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Blog> {
        self.blogs.iter()
    }

    pub fn as_slice(&self) -> &[Blog] {
        &self.blogs
    }

    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }

    fn resort(&mut self) {
        let blogs = std::mem::take(&mut self.blogs);
        self.blogs = sort_blogs_by_likes(blogs);
    }
}

impl<'a> IntoIterator for &'a BlogList {
    type Item = &'a Blog;
    type IntoIter = std::slice::Iter<'a, Blog>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
