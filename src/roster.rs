//! HP adjustment over open character records
//!
//! Characters are open JSON objects, not a fixed schema: only `stats.HP` is
//! ever touched, everything else passes through untouched regardless of shape.

use serde_json::{Number, Value};

use crate::RosterError;
use crate::consts::{HP_BOOST, HP_THRESHOLD};

/// Boost every character whose `stats.HP` is at or below the threshold.
///
/// Records without a `stats` object or an `HP` stat are left untouched, as are
/// non-object array elements. A non-numeric `HP` under `stats` is an error.
/// Returns the number of records boosted.
pub fn boost_low_hp(characters: &mut [Value]) -> Result<usize, RosterError> {
    let mut boosted = 0;

    for (index, character) in characters.iter_mut().enumerate() {
        let Some(stats) = character.get_mut("stats").and_then(Value::as_object_mut) else {
            continue;
        };
        let Some(hp) = stats.get_mut("HP") else {
            continue;
        };
        let Value::Number(current) = &*hp else {
            return Err(RosterError::BadHp { index });
        };

        if let Some(next) = boost(current) {
            *hp = Value::Number(next);
            boosted += 1;
        }
    }

    Ok(boosted)
}

/// Boosted HP for a qualifying stat, or `None` if it is above the threshold.
///
/// Integer stats stay integers, float stats stay floats.
fn boost(hp: &Number) -> Option<Number> {
    if let Some(v) = hp.as_i64() {
        (v <= HP_THRESHOLD).then(|| Number::from(v + HP_BOOST))
    } else if let Some(v) = hp.as_u64() {
        (v <= HP_THRESHOLD as u64).then(|| Number::from(v + HP_BOOST as u64))
    } else {
        // JSON numbers are finite, so re-packing the sum cannot fail
        let v = hp.as_f64()?;
        (v <= HP_THRESHOLD as f64)
            .then(|| Number::from_f64(v + HP_BOOST as f64))
            .flatten()
    }
}
