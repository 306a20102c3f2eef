//! Trip charge calculation
//!
//! Recomputes every derived field of a [`TripMemo`] from its raw fields.
//! Pure and synchronous; recomputing twice on unchanged raw fields is a
//! no-op on the derived set.

use crate::model::TripMemo;
use crate::service::amount_words::amount_in_words;

/// Lenient numeric read of a raw form field. Unparseable text is 0, never
/// an error.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Duration of one shift window in fractional hours.
///
/// An absent boundary means the shift did not run (0 hours). An end time
/// numerically earlier than the start is a shift crossing midnight.
pub fn shift_hours(start: &str, end: &str) -> f64 {
    let (Some(start_min), Some(end_min)) = (clock_minutes(start), clock_minutes(end)) else {
        return 0.0;
    };
    let end_min = if end_min < start_min {
        end_min + 24 * 60
    } else {
        end_min
    };
    f64::from(end_min - start_min) / 60.0
}

fn clock_minutes(time: &str) -> Option<i32> {
    let (h, m) = time.trim().split_once(':')?;
    let h: i32 = h.trim().parse().ok()?;
    let m: i32 = m.trim().parse().ok()?;
    Some(h * 60 + m)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Recompute the full derived-field set of a memo.
///
/// Any raw-field change invalidates all derived fields at once, so there
/// is deliberately no partial variant of this function.
pub fn recompute(memo: &TripMemo) -> TripMemo {
    let p = parse_or_zero;

    let hours1 = shift_hours(&memo.starting_time1, &memo.closing_time1);
    let hours2 = shift_hours(&memo.starting_time2, &memo.closing_time2);
    let total_hours = round2(hours1 + hours2);
    let driver_bata_qty = total_hours.ceil() as i64;

    // A closing reading below its paired start yields a negative
    // contribution; passed through unmodified (see DESIGN.md).
    let total_km = (p(&memo.closing_km1) - p(&memo.starting_km1))
        + (p(&memo.closing_km2) - p(&memo.starting_km2));

    let extra_hours =
        (total_hours - p(&memo.minimum_hours1) - p(&memo.minimum_hours2)).max(0.0);
    let extra_hour_amount = extra_hours * p(&memo.additional_hour_rate);

    let km_amount = total_km * p(&memo.km_rate);
    let driver_bata_amount = driver_bata_qty as f64 * p(&memo.driver_bata_rate);

    let subtotal = p(&memo.minimum_charges1)
        + p(&memo.minimum_charges2)
        + extra_hour_amount
        + km_amount
        + driver_bata_amount
        + p(&memo.fixed_amount)
        + p(&memo.toll_amount)
        + p(&memo.permit_amount)
        + p(&memo.night_halt_amount)
        + p(&memo.other_charges_amount);

    // Driver bata, toll, permit, night halt and other charges are not
    // eligible for percentage discount.
    let discountable = p(&memo.minimum_charges1)
        + p(&memo.minimum_charges2)
        + extra_hour_amount
        + p(&memo.fixed_amount)
        + km_amount;
    let discount_amount = discountable * (p(&memo.discount_percent) / 100.0);

    let total_amount = subtotal - discount_amount;
    let balance = total_amount - p(&memo.less_advance);

    let mut out = memo.clone();
    out.total_hours = format!("{:.2}", total_hours);
    out.driver_bata_qty = driver_bata_qty.to_string();
    out.total_km = format!("{}", total_km);
    out.extra_hours = format!("{:.2}", extra_hours);
    // Extra-hour amount prints without decimals on the memo; the other
    // monetary fields carry two. Intentional document behavior.
    out.extra_hour_amount = format!("{:.0}", extra_hour_amount);
    out.km_amount = format!("{:.2}", km_amount);
    out.driver_bata_amount = format!("{:.2}", driver_bata_amount);
    out.discount_amount = format!("{:.2}", discount_amount);
    out.total_amount = format!("{:.2}", total_amount);
    out.balance = format!("{:.2}", balance);
    out.total_in_words = amount_in_words(total_amount.round().max(0.0) as u64);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memo_with(f: impl FnOnce(&mut TripMemo)) -> TripMemo {
        let mut memo = TripMemo::default();
        f(&mut memo);
        memo
    }

    #[test]
    fn test_shift_hours_plain() {
        assert!((shift_hours("09:00", "13:00") - 4.0).abs() < f64::EPSILON);
        assert!((shift_hours("09:00", "09:30") - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shift_hours_crossing_midnight() {
        assert!((shift_hours("22:00", "02:00") - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shift_hours_missing_boundary() {
        assert_eq!(shift_hours("", "13:00"), 0.0);
        assert_eq!(shift_hours("09:00", ""), 0.0);
        assert_eq!(shift_hours("garbage", "13:00"), 0.0);
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(parse_or_zero("12.5"), 12.5);
        assert_eq!(parse_or_zero(" 7 "), 7.0);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("n/a"), 0.0);
    }

    #[test]
    fn test_total_hours_and_bata_qty() {
        let memo = memo_with(|m| {
            m.starting_time1 = "09:00".into();
            m.closing_time1 = "13:00".into();
            m.starting_time2 = "15:00".into();
            m.closing_time2 = "17:30".into();
        });
        let out = recompute(&memo);
        assert_eq!(out.total_hours, "6.50");
        assert_eq!(out.driver_bata_qty, "7");
    }

    #[test]
    fn test_extra_hours_zero_within_minimum() {
        let memo = memo_with(|m| {
            m.starting_time1 = "09:00".into();
            m.closing_time1 = "13:00".into();
            m.minimum_hours1 = "4".into();
        });
        let out = recompute(&memo);
        assert_eq!(out.extra_hours, "0.00");
    }

    #[test]
    fn test_extra_hours_beyond_minimum() {
        let memo = memo_with(|m| {
            m.starting_time1 = "09:00".into();
            m.closing_time1 = "15:30".into();
            m.minimum_hours1 = "4".into();
            m.additional_hour_rate = "200".into();
        });
        let out = recompute(&memo);
        assert_eq!(out.extra_hours, "2.50");
        assert_eq!(out.extra_hour_amount, "500");
    }

    #[test]
    fn test_discountable_base_excludes_pass_throughs() {
        // 10% of (1000 + 500 + 200) = 170, regardless of bata/toll/permit/
        // night-halt/other amounts
        let memo = memo_with(|m| {
            m.starting_time1 = "09:00".into();
            m.closing_time1 = "15:30".into();
            m.minimum_hours1 = "4".into();
            m.minimum_charges1 = "1000".into();
            m.additional_hour_rate = "200".into();
            m.starting_km1 = "1000".into();
            m.closing_km1 = "1100".into();
            m.km_rate = "2".into();
            m.discount_percent = "10".into();
            m.toll_amount = "350".into();
            m.permit_amount = "120".into();
            m.night_halt_amount = "400".into();
            m.other_charges_amount = "75".into();
            m.driver_bata_rate = "25".into();
        });
        let out = recompute(&memo);
        assert_eq!(out.discount_amount, "170.00");
    }

    #[test]
    fn test_total_and_balance() {
        let memo = memo_with(|m| {
            m.minimum_charges1 = "1000".into();
            m.fixed_amount = "700".into();
            m.discount_percent = "10".into();
            m.less_advance = "500".into();
        });
        let out = recompute(&memo);
        // subtotal 1700, discount 170
        assert_eq!(out.discount_amount, "170.00");
        assert_eq!(out.total_amount, "1530.00");
        assert_eq!(out.balance, "1030.00");
        assert_eq!(out.total_in_words, "One Thousand Five Hundred Thirty");
    }

    #[test]
    fn test_negative_km_passes_through() {
        let memo = memo_with(|m| {
            m.starting_km1 = "1200".into();
            m.closing_km1 = "1100".into();
            m.km_rate = "2".into();
        });
        let out = recompute(&memo);
        assert_eq!(out.total_km, "-100");
        assert_eq!(out.km_amount, "-200.00");
    }

    #[test]
    fn test_unparseable_raw_fields_read_as_zero() {
        let memo = memo_with(|m| {
            m.minimum_charges1 = "abc".into();
            m.km_rate = String::new();
            m.discount_percent = "??".into();
        });
        let out = recompute(&memo);
        assert_eq!(out.total_amount, "0.00");
        assert_eq!(out.balance, "0.00");
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let memo = memo_with(|m| {
            m.starting_time1 = "22:00".into();
            m.closing_time1 = "02:00".into();
            m.minimum_hours1 = "2".into();
            m.minimum_charges1 = "1550".into();
            m.additional_hour_rate = "300".into();
            m.starting_km1 = "100".into();
            m.closing_km1 = "180".into();
            m.km_rate = "3".into();
            m.driver_bata_rate = "25".into();
            m.discount_percent = "5".into();
            m.less_advance = "200".into();
        });
        let once = recompute(&memo);
        let twice = recompute(&once);
        assert_eq!(once, twice);
    }
}
