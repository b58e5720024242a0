pub mod encode;
pub mod serializer;
