pub mod articles;
pub mod categories;
pub mod comments;
pub mod forms;
pub mod pagination;
pub mod serde_time;

pub use articles::{
    ArticleDetailDto, ArticleDto, ArticleFormContextDto, ArticleListDto, StatusChoiceDto,
};
pub use categories::CategoryDto;
pub use comments::{CommentDto, CommentFormContextDto};
pub use forms::{
    ArticleFields, ArticleForm, CommentFields, CommentForm, FieldErrors, FormValidation,
    validate_article_form, validate_comment_form,
};
pub use pagination::{PageDto, PageInfoDto};
