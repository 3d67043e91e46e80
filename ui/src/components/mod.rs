pub mod autocomplete;
pub mod presentation;
