// src/macros.rs

/// `s!()` → empty `String`, `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a new `String`: `join!(BASE_URL, href)`.
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
    fn shorthands() {
        assert_eq!(s!(), "");
        assert_eq!(s!("owner"), "owner");
        assert_eq!(join!("https://x", "/movie/", "Y"), "https://x/movie/Y");
    }
}
