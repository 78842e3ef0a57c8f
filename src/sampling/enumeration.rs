//! Exhaustive enumeration of every combination in a fixed order

use crate::catalog::TraitCategory;
use crate::io::error::{Result, invalid_parameter};
use crate::sampling::attributes::AttributeTuple;

/// Number of distinct combinations, `None` if it overflows `usize`
pub fn combination_count(categories: &[TraitCategory]) -> Option<usize> {
    categories
        .iter()
        .try_fold(1_usize, |acc, category| acc.checked_mul(category.len()))
}

/// Attributes of item `index` in exhaustive order
///
/// `index - 1` is read as a mixed-radix number whose digits select one value
/// per category: the first category is the most significant digit and the
/// last category varies fastest. Weights play no part.
///
/// # Errors
///
/// Returns an error if `index` is zero or beyond the number of combinations
pub fn enumerate_item(index: usize, categories: &[TraitCategory]) -> Result<AttributeTuple> {
    let total = combination_count(categories).ok_or_else(|| {
        invalid_parameter("categories", &categories.len(), &"too many combinations")
    })?;
    if index == 0 || index > total {
        return Err(invalid_parameter(
            "index",
            &index,
            &format!("must be within 1..={total}"),
        ));
    }

    let mut remainder = index - 1;
    let mut positions = vec![0_usize; categories.len()];
    for (slot, category) in positions.iter_mut().zip(categories).rev() {
        let radix = category.len().max(1);
        *slot = remainder % radix;
        remainder /= radix;
    }

    Ok(categories
        .iter()
        .zip(positions)
        .map(|(category, position)| {
            let value = category
                .entries()
                .get(position)
                .map_or("", |entry| entry.value.as_str());
            (category.name(), value)
        })
        .collect())
}
