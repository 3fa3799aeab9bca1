pub mod check;
pub mod interactive;
