//! DTOs for posts_sea adapter.

#[derive(Debug, Clone)]
pub struct PostCreate {
    pub user_id: i32,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: i32,
    pub title: String,
    pub content: String,
}
