use chrono::{DateTime, Duration, Utc};

use crate::model::item::Item;
use crate::util::relative::parse_iso;

/// Days after which a needs-review item is flagged as stale.
pub const REVIEW_STALE_DAYS: i64 = 7;
/// Days after which a completed item moves to the nested older bucket.
pub const COMPLETED_OLDER_DAYS: i64 = 30;

/// True when the item's last update is more than `days` days before `now`.
/// Items without a parsable timestamp are never stale.
pub fn is_stale(item: &Item, now: DateTime<Utc>, days: i64) -> bool {
    item.last_updated
        .as_deref()
        .and_then(parse_iso)
        .is_some_and(|updated| now - updated > Duration::days(days))
}

/// "3 items older than 7 days", "1 item older than 7 days".
pub fn stale_summary(count: usize, days: i64) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{} {} older than {} days", count, noun, days)
}

/// Split completed items into the recent list and the collapsed older
/// bucket, preserving order.
pub fn split_completed(items: &[Item], now: DateTime<Utc>) -> (Vec<Item>, Vec<Item>) {
    items
        .iter()
        .cloned()
        .partition(|item| !is_stale(item, now, COMPLETED_OLDER_DAYS))
}
