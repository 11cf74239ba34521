//! Sample-table rendering for indicator sequences.

use spectrum_core::types::{odd_value, Spectrum};

/// Render the leading rows of an indicator sequence as an aligned
/// `n / o_n / T[n]` table.
///
/// Shows at most `max_rows` rows; sequences shorter than that are shown
/// in full.
pub fn sample_table(spectrum: &Spectrum, max_rows: usize) -> String {
    let mut out = String::from(" n    o_n   T[n]\n");
    let last = spectrum.bound().min(max_rows.saturating_sub(1));
    for n in 0..=last {
        out.push_str(&format!(
            "{:2}  {:5}   {}\n",
            n,
            odd_value(n),
            spectrum.indicator(n)
        ));
    }
    out
}
