//! Cross-crate tests for the rental desk. Nothing here is built outside `cargo test`.

#[cfg(test)]
mod rental;
