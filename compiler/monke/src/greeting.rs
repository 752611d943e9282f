//! Startup banner.

use std::io::{self, Write};

/// Name used when the environment does not say who is logged in.
pub const FALLBACK_USER: &str = "stranger";

/// Name of the current user, from `USER` (Unix) or `USERNAME` (Windows).
pub fn current_user() -> String {
    ["USER", "USERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|name| !name.is_empty()))
        .unwrap_or_else(|| FALLBACK_USER.to_string())
}

pub fn write_greeting<W: Write>(out: &mut W, user: &str) -> io::Result<()> {
    writeln!(out, "Hello {user}! This is the Monkey programming language!")?;
    writeln!(out, "Feel free to type in commands")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_names_the_user() {
        let mut out = Vec::new();
        assert!(write_greeting(&mut out, "ada").is_ok());
        assert_eq!(
            String::from_utf8_lossy(&out),
            "Hello ada! This is the Monkey programming language!\nFeel free to type in commands\n"
        );
    }

    #[test]
    fn current_user_is_never_empty() {
        assert!(!current_user().is_empty());
    }
}
