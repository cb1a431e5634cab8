/*
 * Responsibility
 * - 画面に出す日時の整形 (UTC, "YYYY/MM/DD HH:MM")
 */
use chrono::{DateTime, Utc};

const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M";

pub fn format_date(at: DateTime<Utc>) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}
