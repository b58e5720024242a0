pub mod equality;
