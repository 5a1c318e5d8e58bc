mod category;
mod product;

pub use self::category::CategoryService;
pub use self::product::ProductService;
