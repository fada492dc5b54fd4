use colored::{ColoredString, Colorize};

/// Default separator for joined fragments.
pub const GLUE: &str = ", ";

/// Marker prefixed to ordinary report lines.
pub fn icon() -> ColoredString {
    "::".magenta()
}

/// Marker prefixed to failure report lines.
pub fn icon_fatal() -> ColoredString {
    "!!".magenta().reversed()
}

fn pass(text: &str) -> ColoredString {
    text.cyan().underline()
}

fn fail(text: &str) -> ColoredString {
    text.yellow().underline()
}

/// Join `items` with `glue`, rendering each one inverted.
pub fn emphasize<S: AsRef<str>>(items: &[S], glue: &str) -> String {
    join_styled(items, glue, |text| text.reversed())
}

/// Join `items` with `glue`, rendering each one underlined.
pub fn underline<S: AsRef<str>>(items: &[S], glue: &str) -> String {
    join_styled(items, glue, |text| text.underline())
}

/// Join `labels` with `glue`, coloring each one by outcome: a positive exit
/// code renders as a failure, everything else as a pass.
///
/// `codes` pairs with `labels` by index; a missing code counts as a pass.
/// When `codes` is absent entirely the labels classify themselves: a label
/// that parses as a positive integer is a failure.
pub fn statuses<S: AsRef<str>>(labels: &[S], codes: Option<&[i32]>, glue: &str) -> String {
    let styled: Vec<String> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let label = label.as_ref();
            let failed = match codes {
                Some(codes) => codes.get(i).is_some_and(|code| *code > 0),
                None => label.parse::<i64>().is_ok_and(|code| code > 0),
            };
            let styled = if failed { fail(label) } else { pass(label) };
            styled.to_string()
        })
        .collect();
    styled.join(glue)
}

fn join_styled<S: AsRef<str>>(
    items: &[S],
    glue: &str,
    style: impl Fn(&str) -> ColoredString,
) -> String {
    let styled: Vec<String> = items
        .iter()
        .map(|item| style(item.as_ref()).to_string())
        .collect();
    styled.join(glue)
}
