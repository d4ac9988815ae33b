//! Proportional distribution of a settled note total across asset lines.

use log::debug;
use rust_decimal::Decimal;

use crate::allocation::allocation_model::{AllocationResult, AssetAllocation};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};

/// Distributes the difference between `target_total` and the sum of
/// `values` across all entries, proportionally to each entry's value.
///
/// `names` and `values` are paired positionally; an unpaired tail on
/// either side is ignored. Values may be zero or negative and names may
/// repeat (later entries overwrite earlier ones in the result); only a
/// zero total is rejected, since the proportion is then undefined.
///
/// Each share is rounded to cents independently, so the final values may
/// drift from `target_total` by a fraction of a cent per entry. The
/// drift is accepted and is not redistributed.
pub fn allocate(
    names: &[String],
    values: &[Decimal],
    target_total: Decimal,
) -> Result<AllocationResult> {
    let total_value: Decimal = values.iter().sum();
    if total_value.is_zero() {
        return Err(Error::InvalidAllocationInput(
            "total value of inputs cannot be zero".to_string(),
        ));
    }

    let surplus = target_total - total_value;
    debug!(
        "allocating surplus {} across {} entries (total value {})",
        surplus,
        values.len(),
        total_value
    );

    let mut result = AllocationResult::new();
    for (name, value) in names.iter().zip(values) {
        let proportion = value / total_value;
        let share = (surplus * proportion).round_dp(DISPLAY_DECIMAL_PRECISION);
        result.insert(AssetAllocation {
            name: name.clone(),
            original_value: *value,
            share,
            final_value: (share + value).round_dp(DISPLAY_DECIMAL_PRECISION),
        });
    }
    Ok(result)
}
