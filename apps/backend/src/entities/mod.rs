pub mod comments;
pub mod posts;
pub mod users;

pub use comments::Entity as Comments;
pub use comments::Model as Comment;
pub use posts::Entity as Posts;
pub use posts::Model as Post;
pub use users::Entity as Users;
pub use users::Model as User;
