use std::collections::BTreeMap;

use cosmwasm_std::{Coin, Decimal, StdError, StdResult, Uint128, Uint256};

/// Merges duplicate denominations, drops zero amounts and sorts by
/// denom. This is the canonical form the SDK keeps `sdk.Coins` in.
pub fn normalize(coins: &[Coin]) -> StdResult<Vec<Coin>> {
    let mut merged: BTreeMap<&str, Uint128> = BTreeMap::new();
    for coin in coins {
        let amount = merged.entry(coin.denom.as_str()).or_default();
        *amount = amount.checked_add(coin.amount)?;
    }
    Ok(merged
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(denom, amount)| Coin {
            denom: denom.to_string(),
            amount,
        })
        .collect())
}

/// The amount of DENOM in COINS. Missing denominations count as zero.
pub fn amount_of(coins: &[Coin], denom: &str) -> Uint128 {
    coins
        .iter()
        .filter(|coin| coin.denom == denom)
        .fold(Uint128::zero(), |acc, coin| acc.saturating_add(coin.amount))
}

/// True if every coin in MINIMUM is strictly greater than the
/// matching amount in ATTACHED. An empty minimum never holds.
pub fn is_all_lt(attached: &[Coin], minimum: &[Coin]) -> bool {
    !minimum.is_empty()
        && minimum
            .iter()
            .all(|min| amount_of(attached, &min.denom) < min.amount)
}

/// Computes `amount * ratio` with 256 bits of precision and rounds
/// the result to an integer, half to even. This matches the SDK's
/// `Dec.RoundInt` so every node derives the same value.
pub fn mul_dec_round_half_even(amount: Uint128, ratio: Decimal) -> StdResult<Uint128> {
    let product = amount.full_mul(ratio.atomics());
    let fractional = Uint256::from(10u64).pow(ratio.decimal_places());

    let quotient = product / fractional;
    let remainder = product % fractional;
    let twice_remainder = remainder + remainder;

    let round_up = twice_remainder > fractional
        || (twice_remainder == fractional && quotient % Uint256::from(2u64) == Uint256::one());
    let rounded = if round_up {
        quotient + Uint256::one()
    } else {
        quotient
    };

    Uint128::try_from(rounded).map_err(|e| StdError::generic_err(e.to_string()))
}

/// Renders coins the way the SDK prints them, e.g. `200stake,10uatom`.
pub fn display_coins(coins: &[Coin]) -> String {
    coins
        .iter()
        .map(|coin| format!("{}{}", coin.amount, coin.denom))
        .collect::<Vec<_>>()
        .join(",")
}
