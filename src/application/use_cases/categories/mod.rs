//! Category Use Cases

mod create_category;
mod list_categories;

pub use create_category::CreateCategoryUseCase;
pub use list_categories::ListCategoriesUseCase;
