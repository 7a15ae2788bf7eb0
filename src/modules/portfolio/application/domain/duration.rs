use chrono::NaiveDate;

use crate::shared::locale::Locale;

const DAYS_PER_MONTH: f64 = 30.0;

/// Whole months between two dates, using 30-day months and round-half-even.
/// A range that runs backwards counts as zero.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let days = (end - start).num_days();
    if days <= 0 {
        return 0;
    }
    (days as f64 / DAYS_PER_MONTH).round_ties_even() as i64
}

/// Human readable duration: "N months" below a year, otherwise years with an
/// optional month remainder. Only the year unit is pluralized.
pub fn render_duration(total_months: i64, locale: Locale) -> String {
    let total_months = total_months.max(0);
    if total_months < 12 {
        return months_text(total_months, locale);
    }

    let years = total_months / 12;
    let months = total_months % 12;
    let years_text = match (locale, years) {
        (Locale::Fr, 1) => "1 an".to_string(),
        (Locale::Fr, y) => format!("{y} ans"),
        (Locale::En, 1) => "1 year".to_string(),
        (Locale::En, y) => format!("{y} years"),
    };

    if months == 0 {
        return years_text;
    }

    let joiner = match locale {
        Locale::Fr => "et",
        Locale::En => "and",
    };
    format!("{years_text} {joiner} {}", months_text(months, locale))
}

fn months_text(months: i64, locale: Locale) -> String {
    match locale {
        Locale::Fr => format!("{months} mois"),
        Locale::En => format!("{months} months"),
    }
}
