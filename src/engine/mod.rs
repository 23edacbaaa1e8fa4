// ==========================================
// DOI Dashboard - Engine Layer
// ==========================================
// Merge, enrichment and aggregation over the session dataset.
// All engines are stateless; view functions are pure functions of
// (dataset, selection) and therefore idempotent.
// ==========================================

pub mod aggregation;
pub mod dataset;
pub mod distance;
pub mod frequency;
pub mod merger;

pub use aggregation::{
    product_rows, tidak_aman_rows, total_rl_qty, total_sku_tidak_aman, vendor_comparison,
    SimulationFilter, VendorComparisonGroup,
};
pub use dataset::Dataset;
pub use distance::DistanceEnricher;
pub use frequency::{group_vendors, inbound_series, InboundPoint, VendorGroup};
pub use merger::merge_logics;

use std::borrow::Borrow;

/// Sum treating NaN as missing; an all-NaN or empty input sums to 0.
pub(crate) fn nan_sum<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Borrow<f64>,
{
    values
        .into_iter()
        .map(|v| *v.borrow())
        .filter(|v| !v.is_nan())
        .sum()
}

/// Mean treating NaN as missing; NaN when no finite value exists.
pub(crate) fn nan_mean<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Borrow<f64>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        let v = *v.borrow();
        if !v.is_nan() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_sum_skips_nan() {
        assert_eq!(nan_sum([1.0, f64::NAN, 2.0]), 3.0);
        assert_eq!(nan_sum([f64::NAN]), 0.0);
        assert_eq!(nan_sum::<[f64; 0]>([]), 0.0);
    }

    #[test]
    fn test_nan_mean_skips_nan() {
        assert_eq!(nan_mean([2.0, f64::NAN, 4.0]), 3.0);
        assert!(nan_mean([f64::NAN]).is_nan());
    }
}
