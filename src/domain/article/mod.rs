pub mod entity;
pub mod image;
pub mod localization;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{
    Article, ArticleChangeSet, ArticleContent, ArticleFlags, Classification, NewArticle, Placement,
};
pub use image::{Image, ImageId, NewImage};
pub use localization::LocalizedView;
pub use repository::{
    ArticleListFilter, ArticleReadRepository, ArticleWriteRepository, DeletedFilter,
    ImageRepository,
};
pub use value_objects::{ArticleId, ArticleSlug, Language};
