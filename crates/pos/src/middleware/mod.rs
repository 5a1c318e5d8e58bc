pub mod validate;

pub use self::validate::{FieldOrder, PathId, Resource, ValidatedJson};
