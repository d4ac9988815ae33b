/// Decimal precision for display amounts and allocated shares.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Currency prefix for formatted amounts.
pub const CURRENCY_SYMBOL: &str = "R$";
