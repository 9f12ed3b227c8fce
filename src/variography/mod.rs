pub mod experimental;
