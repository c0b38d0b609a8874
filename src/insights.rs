//! Derived weather insight statements
//!
//! Produces a short ordered list of comparative statements about the
//! temperature trend and tomorrow's precipitation risk, evaluated over the
//! raw daily series.

use crate::conditions::{classify, ConditionCategory};
use crate::data::weather::RawWeatherData;

/// Day offsets into the daily series.
///
/// The series is aligned so that offset 0 is the reference (most recent
/// past) day, not today. Getting this wrong flips every comparison, so the
/// offsets are named rather than written inline.
pub const YESTERDAY: usize = 0;
pub const TODAY: usize = 1;
pub const TOMORROW: usize = 2;

/// Generates insight statements from a raw payload.
///
/// Rules run in fixed order, each appending at most one statement:
///
/// 1. Temperature trend: today's max vs yesterday's max. Exactly one of
///    hotter / cooler / similar fires whenever both days are present.
/// 2. Precipitation risk: tomorrow's weather code classified into rain,
///    snow, or storm. The code sets are disjoint, so at most one fires.
///
/// Missing `daily` data or either required array yields an empty list;
/// callers treat that as "insufficient data", not a failure. The trend
/// statement, when present, always comes first.
pub fn weather_insights(raw: &RawWeatherData) -> Vec<String> {
    let mut insights = Vec::new();

    let Some(daily) = raw.daily.as_ref() else {
        return insights;
    };
    let (Some(temps), Some(codes)) = (
        daily.temperature_2m_max.as_ref(),
        daily.weathercode.as_ref(),
    ) else {
        return insights;
    };

    if let (Some(&yesterday), Some(&today)) = (temps.get(YESTERDAY), temps.get(TODAY)) {
        if today > yesterday {
            insights.push("Today is hotter than yesterday".to_string());
        } else if today < yesterday {
            insights.push("Today is cooler than yesterday".to_string());
        } else {
            insights.push("Today's temperature is similar to yesterday".to_string());
        }
    }

    if let Some(&code) = codes.get(TOMORROW) {
        match classify(Some(code)) {
            ConditionCategory::Rain => {
                insights.push("Expect rain tomorrow".to_string());
            }
            ConditionCategory::Snow => {
                insights.push("Snowfall is likely tomorrow".to_string());
            }
            ConditionCategory::Storm => {
                insights.push("Thunderstorms possible tomorrow".to_string());
            }
            _ => {}
        }
    }

    insights
}
