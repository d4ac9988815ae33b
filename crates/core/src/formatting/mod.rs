pub mod brl;

pub use brl::{format_amount, format_amount_no_decimals, format_percent, parse_amount};
