//! Search-term expressions for member lookups.

use std::borrow::Cow;

use mds_types::SearchTermQuoting;

/// Member field a lookup filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Code,
}

impl SearchField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Code => "Code",
        }
    }
}

/// Build the equality filter `<Field> = '<value>'`.
///
/// With [`SearchTermQuoting::Verbatim`] the value is spliced in unchanged; a
/// value containing `'` then rewrites the filter. [`SearchTermQuoting::Escaped`]
/// doubles embedded quotes so the value always stays one string literal.
pub fn build_search_term(field: SearchField, value: &str, quoting: SearchTermQuoting) -> String {
    let literal = match quoting {
        SearchTermQuoting::Verbatim => Cow::Borrowed(value),
        SearchTermQuoting::Escaped => escape_literal(value),
    };
    format!("{} = '{}'", field.as_str(), literal)
}

fn escape_literal(value: &str) -> Cow<'_, str> {
    if value.contains('\'') {
        Cow::Owned(value.replace('\'', "''"))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reads `<Field> = '<literal>'` the way a SQL-style filter parser would and
    /// returns the decoded literal plus whatever text trails its closing quote.
    fn split_literal(term: &str) -> (String, String) {
        let start = term.find('\'').map(|i| i + 1).unwrap_or(term.len());
        let bytes: Vec<char> = term[start..].chars().collect();
        let mut literal = String::new();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == '\'' {
                if bytes.get(i + 1) == Some(&'\'') {
                    literal.push('\'');
                    i += 2;
                    continue;
                }
                let rest: String = bytes[i + 1..].iter().collect();
                return (literal, rest);
            }
            literal.push(bytes[i]);
            i += 1;
        }
        (literal, String::new())
    }

    #[test]
    fn test_plain_values_are_identical_in_both_modes() {
        for quoting in [SearchTermQuoting::Verbatim, SearchTermQuoting::Escaped] {
            assert_eq!(build_search_term(SearchField::Name, "Acme", quoting), "Name = 'Acme'");
            assert_eq!(build_search_term(SearchField::Code, "AC1", quoting), "Code = 'AC1'");
        }
    }

    #[test]
    fn test_escaped_value_cannot_leave_the_literal() {
        let crafted = "x' OR Code <> '";
        let term = build_search_term(SearchField::Name, crafted, SearchTermQuoting::Escaped);

        assert_eq!(term, "Name = 'x'' OR Code <> '''");
        let (literal, trailing) = split_literal(&term);
        assert_eq!(literal, crafted);
        assert!(trailing.is_empty(), "unexpected trailing filter: {trailing:?}");
    }

    #[test]
    fn test_verbatim_value_keeps_original_hazard() {
        let crafted = "x' OR Code <> '";
        let term = build_search_term(SearchField::Name, crafted, SearchTermQuoting::Verbatim);

        assert_eq!(term, "Name = 'x' OR Code <> ''");
        let (literal, trailing) = split_literal(&term);
        assert_eq!(literal, "x");
        assert_eq!(trailing, " OR Code <> ''");
    }

    #[test]
    fn test_escaped_handles_apostrophes_in_real_names() {
        let term = build_search_term(SearchField::Name, "O'Brien", SearchTermQuoting::Escaped);
        assert_eq!(term, "Name = 'O''Brien'");
        assert_eq!(split_literal(&term), ("O'Brien".to_string(), String::new()));
    }
}
