/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field mapper factory method lookup.

use regex::Regex;

/// Finds the public static factory call of a field mapper class.
///
/// Looks for the first `public static <ClassName> <method>(` declaration and
/// returns `<method>()`.
///
/// # Arguments
/// * `class_name` - The field mapper class name
/// * `source` - The field mapper source text
#[must_use]
pub fn find_factory_call(class_name: &str, source: &str) -> Option<String> {
    let pattern = format!(
        r"public\s+static\s+{}\s+([^\s(]+)\s*\(",
        regex::escape(class_name)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| format!("{}()", m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"package eu.nets.mapping;

public class DE49_TransactionCurrencyCodeMapper implements FieldMapper {

    private DE49_TransactionCurrencyCodeMapper() {
    }

    public static DE49_TransactionCurrencyCodeMapper DE49_TransactionCurrencyCode() {
        return new DE49_TransactionCurrencyCodeMapper();
    }
}
"#;

    #[test]
    fn test_finds_factory_call() {
        assert_eq!(
            find_factory_call("DE49_TransactionCurrencyCodeMapper", SOURCE),
            Some("DE49_TransactionCurrencyCode()".to_string())
        );
    }

    #[test]
    fn test_constructor_is_not_a_factory() {
        let source = "public class A {\n    public A() {}\n}\n";
        assert_eq!(find_factory_call("A", source), None);
    }

    #[test]
    fn test_other_class_return_type_ignored() {
        let source = "public static Other make() { return null; }\n\
                      public static Target  target ( ) { return null; }";
        assert_eq!(find_factory_call("Target", source), Some("target()".to_string()));
    }
}
