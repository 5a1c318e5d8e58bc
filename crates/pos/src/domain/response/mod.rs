mod category;
mod product;

pub use self::category::CategoryResponse;
pub use self::product::{CategorySummary, ProductResponse};
