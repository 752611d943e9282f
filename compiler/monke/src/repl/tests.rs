use super::*;
use pretty_assertions::assert_eq;

/// Helper: run a REPL session over `input` and return everything written.
fn session(input: &str, config: ReplConfig) -> String {
    let mut repl = Repl::new(input.as_bytes(), Vec::new(), config);
    let result = repl.run();
    assert!(result.is_ok(), "repl failed: {result:?}");
    String::from_utf8_lossy(&repl.into_output()).into_owned()
}

fn quiet() -> ReplConfig {
    ReplConfig {
        echo: false,
        ..ReplConfig::default()
    }
}

// === Command parsing ===

#[test]
fn parse_commands() {
    assert_eq!(Command::parse(":quit"), Some(Ok(Command::Quit)));
    assert_eq!(Command::parse(":q"), Some(Ok(Command::Quit)));
    assert_eq!(Command::parse("  :help  "), Some(Ok(Command::Help)));
    assert_eq!(Command::parse(":h"), Some(Ok(Command::Help)));
    assert_eq!(Command::parse(":nope"), Some(Err("nope")));
    assert_eq!(Command::parse("let x = 1;"), None);
    assert_eq!(Command::parse(""), None);
}

// === Sessions ===

#[test]
fn empty_input_prints_one_prompt() {
    assert_eq!(session("", ReplConfig::default()), ">> ");
}

#[test]
fn echoes_line_then_tokens() {
    assert_eq!(
        session("let five = 5;\n", ReplConfig::default()),
        concat!(
            ">> Prompt: let five = 5;\n",
            "LET(\"let\")\n",
            "IDENT(\"five\")\n",
            "ASSIGN(\"=\")\n",
            "INT(\"5\")\n",
            "SEMICOLON(\";\")\n",
            "-- EOF --\n",
            ">> ",
        )
    );
}

#[test]
fn no_echo() {
    assert_eq!(
        session("x\n", quiet()),
        ">> IDENT(\"x\")\n-- EOF --\n>> "
    );
}

#[test]
fn each_line_gets_a_fresh_scanner() {
    assert_eq!(
        session("a\nb\n", quiet()),
        ">> IDENT(\"a\")\n-- EOF --\n>> IDENT(\"b\")\n-- EOF --\n>> "
    );
}

#[test]
fn last_line_without_newline_is_lexed() {
    assert_eq!(session("!=", quiet()), ">> NOT_EQ(\"!=\")\n-- EOF --\n>> ");
}

#[test]
fn crlf_line_endings_are_stripped() {
    assert_eq!(
        session("fn\r\n", ReplConfig::default()),
        ">> Prompt: fn\nFUNCTION(\"fn\")\n-- EOF --\n>> "
    );
}

#[test]
fn invalid_utf8_line_does_not_end_session() {
    let mut repl = Repl::new(&b"\xff\nlet x\n"[..], Vec::new(), quiet());
    let result = repl.run();
    assert!(result.is_ok(), "repl failed: {result:?}");
    assert_eq!(
        String::from_utf8_lossy(&repl.into_output()),
        ">> ILLEGAL(\"\u{FFFD}\")\n-- EOF --\n>> LET(\"let\")\nIDENT(\"x\")\n-- EOF --\n>> "
    );
}

#[test]
fn blank_line_renders_only_eof() {
    assert_eq!(session("\n", quiet()), ">> -- EOF --\n>> ");
}

#[test]
fn quit_stops_before_remaining_input() {
    assert_eq!(session(":quit\nlet\n", quiet()), ">> ");
}

#[test]
fn help_lists_commands() {
    let out = session(":help\n", quiet());
    assert!(out.contains(":quit, :q"), "{out}");
    assert!(out.contains(":help, :h"), "{out}");
    assert!(out.ends_with(">> "));
}

#[test]
fn unknown_command_is_reported_not_lexed() {
    assert_eq!(
        session(":lex\n", quiet()),
        ">> unknown command ':lex' (try :help)\n>> "
    );
}

#[test]
fn custom_prompt() {
    let config = ReplConfig {
        prompt: "monke> ".to_string(),
        echo: false,
        greet: false,
    };
    assert_eq!(session("1\n", config), "monke> INT(\"1\")\n-- EOF --\nmonke> ");
}

// === I/O failures ===

struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_surfaces_as_io_error() {
    let mut repl = Repl::new("x\n".as_bytes(), BrokenWriter, quiet());
    assert!(matches!(repl.run(), Err(DriverError::Io(_))));
}
