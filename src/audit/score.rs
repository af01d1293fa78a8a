//! Weighted audit score.

use super::types::AuditItem;

/// Weighted score in `0..=100`.
///
/// Each item contributes `weight(category) * score(status)` over the total
/// weight; `success` items weigh nothing. With no weighted items the score is
/// 100.
pub fn calculate_score(items: &[AuditItem]) -> u8 {
    let total: f64 = items.iter().map(|item| item.category.weight()).sum();
    if total == 0.0 {
        return 100;
    }
    let earned: f64 = items
        .iter()
        .map(|item| item.category.weight() * item.status.score())
        .sum();
    let score = (100.0 * earned / total).round();
    score.clamp(0.0, 100.0) as u8
}
