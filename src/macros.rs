// src/macros.rs

/// `String` shorthand.
///
/// - `s!()` → empty string
/// - `s!(expr)` → `String::from(expr)`
/// - `s!("{} {}", a, b)` → `format!(…)`
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($fmt:literal, $($arg:tt)+) => {
        ::std::format!($fmt, $($arg)+)
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a fresh `String` (file stems + extensions etc.).
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn s_covers_empty_from_and_format() {
        assert_eq!(s!(), "");
        assert_eq!(s!("Heim"), "Heim");
        assert_eq!(s!("{}:{}", 1, 2), "1:2");
    }

    #[test]
    fn join_concatenates_in_order() {
        let stem = "events";
        assert_eq!(join!(stem, ".", "csv"), "events.csv");
    }
}
