//! Pure presentation: failure count in, drawable text out. No coupling to
//! round internals beyond the failed-letter list.

use itertools::Itertools;

/// Figure fragments for a failure count: head, torso, legs. Clamped at the
/// full figure for counts past six.
fn fragments(fails: usize) -> (&'static str, &'static str, &'static str) {
    match fails {
        0 => ("", "", ""),
        1 => ("O", "", ""),
        2 => ("O", "\\", ""),
        3 => ("O", "\\|", ""),
        4 => ("O", "\\|/", ""),
        5 => ("O", "\\|/", "/"),
        _ => ("O", "\\|/", "/\\"),
    }
}

/// The gallows and however much of the hanged man `fails` has earned.
pub fn figure(fails: usize) -> String {
    let (head, torso, legs) = fragments(fails);
    format!(
        "  ----------\n  |        |\n  |        {head}\n  |       {torso}\n  |        {legs}\n  |"
    )
}

/// Full game board: figure, the mask on the base line, and the letters that
/// have missed so far.
pub fn board(mask: &str, failed: &[char]) -> String {
    format!(
        "{}\n-------\t\t{} \nFailed: [{}]",
        figure(failed.len()),
        mask,
        failed.iter().join(", "),
    )
}
