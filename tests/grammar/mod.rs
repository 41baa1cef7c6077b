//! Grammar accumulation and union over the public API.

pub mod tests_union;
pub mod tests_text_round_trip;
