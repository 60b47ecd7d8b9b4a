/// The two identifier grammars and their marker families.
use crate::escape;

/// Target grammar for identifier rendering. One shared semantic model is
/// projected into both; every marker choice lives here so the recursive
/// walks are written once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Exact-lookup format with kind prefixes, used to bind free-text
    /// documentation to a symbol.
    CrossReference,
    /// URL/path-safe format using `/` for nesting and escaped names.
    PathStyle,
}

impl Grammar {
    /// Per-dimension bound token inside a bounded array form.
    pub fn array_bound_token(self) -> &'static str {
        return match self {
            Grammar::CrossReference => "0:",
            Grammar::PathStyle => "0;",
        };
    }

    /// Opening delimiter of the bounded array form (rank ≥ 2 or explicit
    /// lower bounds). The path-style form is the escaped `[`.
    pub fn bounded_array_open(self) -> &'static str {
        return match self {
            Grammar::CrossReference => "[",
            Grammar::PathStyle => "@5B",
        };
    }

    /// Closing delimiter of the bounded array form.
    pub fn bounded_array_close(self) -> &'static str {
        return match self {
            Grammar::CrossReference => "]",
            Grammar::PathStyle => "@5D",
        };
    }

    /// Suffix appended to a by-reference (`ref`/`out`) parameter encoding.
    pub fn by_reference_suffix(self) -> char {
        return match self {
            Grammar::CrossReference => '@',
            Grammar::PathStyle => '-',
        };
    }

    /// Marker for a reference to an enclosing type's generic parameter,
    /// and for a type's own-arity suffix.
    pub fn enclosing_parameter_marker(self) -> &'static str {
        return match self {
            Grammar::CrossReference => "`",
            Grammar::PathStyle => "'",
        };
    }

    /// Opening delimiter of a generic argument list.
    pub fn generic_open(self) -> char {
        return match self {
            Grammar::CrossReference => '{',
            Grammar::PathStyle => '(',
        };
    }

    /// Closing delimiter of a generic argument list.
    pub fn generic_close(self) -> char {
        return match self {
            Grammar::CrossReference => '}',
            Grammar::PathStyle => ')',
        };
    }

    /// Separator between a declaring type and a member, and between
    /// nested type segments. Namespace-to-type is always `.`.
    pub fn nested_separator(self) -> char {
        return match self {
            Grammar::CrossReference => '.',
            Grammar::PathStyle => '/',
        };
    }

    /// Marker for a reference to a generic parameter the member itself
    /// introduced, and for a method's own-arity suffix. Deliberately the
    /// doubled form of the enclosing marker so a type's arity can never be
    /// confused with a method's.
    pub fn own_parameter_marker(self) -> &'static str {
        return match self {
            Grammar::CrossReference => "``",
            Grammar::PathStyle => "''",
        };
    }

    /// Suffix appended to a pointer encoding.
    pub fn pointer_suffix(self) -> char {
        return match self {
            Grammar::CrossReference => '*',
            Grammar::PathStyle => '~',
        };
    }

    /// Suffix for a rank-1 array with default bounds.
    pub fn simple_array_suffix(self) -> &'static str {
        return match self {
            Grammar::CrossReference => "[]",
            Grammar::PathStyle => "$",
        };
    }

    /// Render a member's raw name in this grammar.
    ///
    /// The cross-reference grammar maps `.` to `#` and angle brackets to
    /// braces; this one rule yields `#ctor`, `#cctor`, and
    /// `IGeneric{T}#SampleMethod`. The path-style grammar maps angle
    /// brackets to parentheses and escapes everything else (dots pass).
    pub fn member_name_text(self, raw: &str) -> String {
        return match self {
            Grammar::CrossReference => raw
                .chars()
                .map(|c| match c {
                    '.' => '#',
                    '<' => '{',
                    '>' => '}',
                    other => other,
                })
                .collect(),
            Grammar::PathStyle => {
                let mut out = String::with_capacity(raw.len());
                for c in raw.chars() {
                    match c {
                        '<' => out.push('('),
                        '>' => out.push(')'),
                        other => escape::push_escaped(&mut out, other),
                    }
                }
                out
            },
        };
    }

    /// Render a type segment name or namespace in this grammar.
    /// The cross-reference grammar passes text through unchanged.
    pub fn segment_text(self, raw: &str) -> String {
        return match self {
            Grammar::CrossReference => raw.to_string(),
            Grammar::PathStyle => escape::escape_identifier(raw),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::Grammar;

    #[test]
    fn constructor_name_maps_to_hash_form() {
        assert_eq!(Grammar::CrossReference.member_name_text(".ctor"), "#ctor");
        assert_eq!(Grammar::PathStyle.member_name_text(".ctor"), ".ctor");
    }

    #[test]
    fn explicit_interface_name_maps_per_grammar() {
        let raw = "IGeneric<T>.SampleMethod";
        assert_eq!(
            Grammar::CrossReference.member_name_text(raw),
            "IGeneric{T}#SampleMethod"
        );
        assert_eq!(
            Grammar::PathStyle.member_name_text(raw),
            "IGeneric(T).SampleMethod"
        );
    }

    #[test]
    fn non_ascii_member_name_escapes_only_in_path_style() {
        assert_eq!(
            Grammar::CrossReference.member_name_text("SampleMethôd"),
            "SampleMethôd"
        );
        assert_eq!(
            Grammar::PathStyle.member_name_text("SampleMethôd"),
            "SampleMeth@C3@B4d"
        );
    }

    #[test]
    fn marker_families_are_distinct() {
        for grammar in [Grammar::CrossReference, Grammar::PathStyle] {
            assert_ne!(
                grammar.enclosing_parameter_marker(),
                grammar.own_parameter_marker()
            );
        }
    }
}
