//! Pure content windows. Counts are validated upstream; every function
//! here is total over its inputs.

pub fn first_lines(content: &str, count: usize) -> String {
    content
        .split('\n')
        .take(count)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Last `count` lines; a request at or beyond the line total yields the
/// whole content.
pub fn last_lines(content: &str, count: usize) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let skip = lines.len().saturating_sub(count);
    lines[skip..].join("\n")
}

pub fn first_bytes(content: &str, count: usize) -> String {
    let end = count.min(content.len());
    String::from_utf8_lossy(&content.as_bytes()[..end]).into_owned()
}

pub fn last_bytes(content: &str, count: usize) -> String {
    let start = content.len().saturating_sub(count);
    String::from_utf8_lossy(&content.as_bytes()[start..]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "AB\nCD\nEF\nGH\nIJ\nKL\nMN\nOP\nQR\nST\nUV\nWX\nYZ";

    #[test]
    fn test_first_lines() {
        assert_eq!(
            first_lines(ALPHABET, 10),
            "AB\nCD\nEF\nGH\nIJ\nKL\nMN\nOP\nQR\nST"
        );
        assert_eq!(first_lines("1\n2\n3\n4", 2), "1\n2");
    }

    #[test]
    fn test_first_lines_empty_content() {
        assert_eq!(first_lines("", 5), "");
    }

    #[test]
    fn test_first_lines_count_beyond_total() {
        assert_eq!(first_lines("1\n2\n3", 10), "1\n2\n3");
    }

    #[test]
    fn test_last_lines() {
        assert_eq!(
            last_lines(ALPHABET, 10),
            "GH\nIJ\nKL\nMN\nOP\nQR\nST\nUV\nWX\nYZ"
        );
        assert_eq!(last_lines("1\n2\n3\n4", 2), "3\n4");
    }

    #[test]
    fn test_last_lines_count_beyond_total() {
        assert_eq!(last_lines("x\ny\nz", 3), "x\ny\nz");
        assert_eq!(last_lines("x\ny\nz", 10), "x\ny\nz");
    }

    #[test]
    fn test_last_lines_empty_content() {
        assert_eq!(last_lines("", 4), "");
    }

    #[test]
    fn test_first_bytes() {
        assert_eq!(first_bytes(ALPHABET, 10), "AB\nCD\nEF\nG");
        assert_eq!(first_bytes("Hello World", 5), "Hello");
    }

    #[test]
    fn test_last_bytes() {
        assert_eq!(last_bytes(ALPHABET, 10), "T\nUV\nWX\nYZ");
        assert_eq!(last_bytes("1\n2\n3\n4", 2), "\n4");
    }

    #[test]
    fn test_byte_windows_beyond_length() {
        assert_eq!(first_bytes("abc", 10), "abc");
        assert_eq!(last_bytes("abc", 10), "abc");
        assert_eq!(first_bytes("", 5), "");
        assert_eq!(last_bytes("", 5), "");
    }
}
