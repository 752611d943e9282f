use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn defaults() {
    let config = ReplConfig::default();
    assert_eq!(config.prompt, ">> ");
    assert!(config.echo);
    assert!(config.greet);
}

#[test]
fn no_args_gives_defaults() {
    assert!(matches!(ReplConfig::from_args(&[]), Ok(c) if c == ReplConfig::default()));
}

#[test]
fn all_flags() {
    let parsed = ReplConfig::from_args(&args(&["--prompt=monke> ", "--no-echo", "-q"]));
    let Ok(config) = parsed else {
        panic!("flags should parse: {parsed:?}");
    };
    assert_eq!(config.prompt, "monke> ");
    assert!(!config.echo);
    assert!(!config.greet);
}

#[test]
fn empty_prompt_is_allowed() {
    assert!(matches!(
        ReplConfig::from_args(&args(&["--prompt="])),
        Ok(c) if c.prompt.is_empty()
    ));
}

#[test]
fn unknown_flag_is_rejected() {
    let err = ReplConfig::from_args(&args(&["--verbose"]));
    assert!(matches!(err, Err(DriverError::UnknownOption(ref flag)) if flag == "--verbose"));
}
