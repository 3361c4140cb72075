/// Translates a key through a [`TranslationUseCase`](crate::domain::ports::primary::translation_use_case::TranslationUseCase),
/// optionally filling `{name}` placeholders.
///
/// ```ignore
/// tr!(service, "nav.events");
/// tr!(service, "app.welcome", "name" => "Ana");
/// ```
#[macro_export]
macro_rules! tr {
    ($translations:expr, $key:expr) => {
        $translations.translate($key)
    };
    ($translations:expr, $key:expr, $( $k:expr => $v:expr ),* ) => {
        $translations.translate_with($key, &[ $( ($k, $v) ),* ])
    };
}

/// Replaces every `{name}` in `text` with the matching value from `params`.
///
/// Substitution is a single pass over `text`: placeholders appearing inside a
/// substituted value are kept literally. Placeholders without a parameter are left untouched.
#[must_use]
pub fn interpolate(text: &str, params: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            rest = &rest[open..];
            break;
        };

        let name = &after_open[..close];
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => {
                result.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                // Keep the brace and rescan, `{` may open a nested placeholder.
                result.push('{');
                rest = after_open;
            }
        }
    }

    result.push_str(rest);
    result
}
