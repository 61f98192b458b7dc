//! `key: value` / `key=value` field extraction

/// Separator conventions found in the files we read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    /// `KEY=value`, as in /etc/os-release
    Equals,
    /// `key\t: value`, as in /proc/cpuinfo
    Colon,
}

impl FieldStyle {
    pub fn separator(self) -> char {
        match self {
            FieldStyle::Equals => '=',
            FieldStyle::Colon => ':',
        }
    }

    /// Bytes to skip past the separator (the colon is followed by a space)
    pub fn offset(self) -> usize {
        match self {
            FieldStyle::Equals => 1,
            FieldStyle::Colon => 2,
        }
    }

    pub fn extract(self, line: &str) -> String {
        extract_field(line, self.separator(), self.offset())
    }
}

/// Return the text `offset` bytes after the first `separator` in `line`.
///
/// One leading `"`, one trailing newline and then one trailing `"` are
/// stripped. Returns an empty string when the separator is absent or the
/// offset runs past the end of the line.
pub fn extract_field(line: &str, separator: char, offset: usize) -> String {
    let Some(sep) = line.find(separator) else {
        return String::new();
    };
    let Some(mut value) = line.get(sep + offset..) else {
        return String::new();
    };

    value = value.strip_prefix('"').unwrap_or(value);
    value = value.strip_suffix('\n').unwrap_or(value);
    value = value.strip_suffix('"').unwrap_or(value);
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_field_skips_space_and_newline() {
        assert_eq!(
            extract_field("model name : Intel(R) Core(TM) i5\n", ':', 2),
            "Intel(R) Core(TM) i5"
        );
        assert_eq!(FieldStyle::Colon.extract("cpu cores\t: 8\n"), "8");
    }

    #[test]
    fn equals_field_strips_quotes() {
        assert_eq!(
            FieldStyle::Equals.extract("PRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\n"),
            "Debian GNU/Linux 12 (bookworm)"
        );
        assert_eq!(FieldStyle::Equals.extract("ID=arch"), "arch");
    }

    #[test]
    fn only_first_separator_counts() {
        assert_eq!(FieldStyle::Equals.extract("KEY=a=b"), "a=b");
    }

    #[test]
    fn missing_separator_is_empty() {
        assert_eq!(extract_field("no separator here", ':', 2), "");
    }

    #[test]
    fn offset_past_end_is_empty() {
        assert_eq!(extract_field("flags:", ':', 2), "");
        assert_eq!(extract_field("flags:", ':', 1), "");
    }
}
