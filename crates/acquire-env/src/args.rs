//! Shell-argument escaping for synthesized command lines

/// Quote an argument containing spaces unless it is already quoted.
pub fn to_command_argument(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if value.contains(' ') && !value.starts_with('"') && !value.ends_with('"') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// Quote a file path like [`to_command_argument`] and normalise separators to `/`.
pub fn file_to_command_argument(value: &str) -> String {
    to_command_argument(value).replace('\\', "/")
}

/// Characters the platform shell interprets in an unquoted word.
const SHELL_METACHARACTERS: &[char] = &[
    '&', '|', ';', '<', '>', '(', ')', '$', '`', '\\', '\'', '"', '*', '?', '[', ']', '#', '~',
    '{', '}', '^', '%', '!',
];

/// Quote an argument so the platform shell passes it through as one word.
///
/// Arguments already wrapped in double quotes are left alone; the pylint
/// pin relies on the shell removing those quotes.
pub fn to_shell_argument(value: &str) -> String {
    let pre_quoted = value.len() >= 2 && value.starts_with('"') && value.ends_with('"');
    let plain = !value.is_empty()
        && !value.contains(|c: char| c.is_whitespace() || SHELL_METACHARACTERS.contains(&c));
    if pre_quoted || plain {
        return value.to_string();
    }

    if cfg!(windows) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        format!("'{}'", value.replace('\'', "'\\''"))
    }
}

/// Render a program and its arguments as a single shell command line.
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(to_command_argument(program))
        .chain(args.iter().map(|arg| to_shell_argument(arg)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("My-Env01", "My-Env01")]
    #[case("my env", "\"my env\"")]
    #[case("\"my env\"", "\"my env\"")]
    #[case("", "")]
    fn test_to_command_argument(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_command_argument(input), expected);
    }

    #[rstest]
    #[case("conda/path", "conda/path")]
    #[case("C:\\conda\\envs\\py", "C:/conda/envs/py")]
    #[case("C:\\Program Files\\conda", "\"C:/Program Files/conda\"")]
    fn test_file_to_command_argument(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(file_to_command_argument(input), expected);
    }

    #[rstest]
    #[case("install", "install")]
    #[case("http://10.0.0.1:8080", "http://10.0.0.1:8080")]
    #[case("\"pylint<2.0.0\"", "\"pylint<2.0.0\"")]
    #[case("\"My Env\"", "\"My Env\"")]
    fn test_to_shell_argument_leaves_safe_words(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_shell_argument(input), expected);
    }

    #[cfg(unix)]
    #[rstest]
    #[case("http://h:8080/?a=1&b=2", "'http://h:8080/?a=1&b=2'")]
    #[case("my env", "'my env'")]
    #[case("it's", "'it'\\''s'")]
    #[case("", "''")]
    fn test_to_shell_argument_quotes_metacharacters(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_shell_argument(input), expected);
    }

    #[test]
    fn test_command_line_keeps_safe_arguments() {
        let args = vec!["-m".to_string(), "pip".to_string(), "\"pylint<2.0.0\"".to_string()];
        assert_eq!(
            command_line("/opt/my python/bin/python", &args),
            "\"/opt/my python/bin/python\" -m pip \"pylint<2.0.0\""
        );
    }
}
