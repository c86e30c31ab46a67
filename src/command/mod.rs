pub mod bump;
