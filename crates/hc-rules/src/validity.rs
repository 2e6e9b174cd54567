//! Validity-bounds and recurrence-cycle checks shared by all rule kinds.

use crate::model::RuleInfo;
use hc_core::fail;
use hc_core::Result;

/// Return `true` if the rule applies in `year`: the year must lie within
/// the rule's validity bounds and hit the rule's recurrence cycle.
pub fn is_active(info: &RuleInfo, year: u16) -> Result<bool> {
    Ok(in_bounds(info, year) && in_cycle(info, year)?)
}

/// The validity-bounds check: unset bounds are open.
fn in_bounds(info: &RuleInfo, year: u16) -> bool {
    info.valid_from.map_or(true, |from| from <= year)
        && info.valid_to.map_or(true, |to| to >= year)
}

/// The recurrence-cycle check.
///
/// An absent token and `EVERY_YEAR` hit every year; `ODD_YEARS` and
/// `EVEN_YEARS` check year parity; `2_YEARS` … `6_YEARS` hit every Nth
/// year counted from the `valid_from` anchor.  An N-year token without an
/// anchor, and any unrecognized token, are configuration errors.
fn in_cycle(info: &RuleInfo, year: u16) -> Result<bool> {
    let Some(token) = &info.every else {
        return Ok(true);
    };
    let cycle_years = match token.to_ascii_uppercase().as_str() {
        "EVERY_YEAR" => return Ok(true),
        "ODD_YEARS" => return Ok(year % 2 == 1),
        "EVEN_YEARS" => return Ok(year % 2 == 0),
        "2_YEARS" => 2,
        "3_YEARS" => 3,
        "4_YEARS" => 4,
        "5_YEARS" => 5,
        "6_YEARS" => 6,
        _ => fail!("cannot handle unknown cycle type '{token}'"),
    };
    let Some(anchor) = info.valid_from else {
        fail!("cycle type '{token}' requires a valid_from anchor");
    };
    Ok((year as i32 - anchor as i32).rem_euclid(cycle_years) == 0)
}
