mod list;
mod service;

pub use list::{COMMENT_ORPHANS, COMMENTS_PER_PAGE, ListCommentsQuery};
pub use service::CommentQueryService;
