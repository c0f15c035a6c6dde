//! Cross-crate scenarios for the lottery workspace.

#[cfg(test)]
mod session;
