//! Tests for log level functionality.

use taglog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Information);
    assert!(Level::Information < Level::Warning);
    assert!(Level::Warning < Level::Error);
}

#[test]
fn level_labels() {
    assert_eq!(Level::Debug.label(), "DEBUG");
    assert_eq!(Level::Information.label(), "INFORMATION");
    assert_eq!(Level::Warning.label(), "WARNING");
    assert_eq!(Level::Error.label(), "ERROR");
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Information.to_string(), "information");
    assert_eq!(Level::Warning.to_string(), "warning");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_from_str() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("info".parse::<Level>().unwrap(), Level::Information);
    assert_eq!("Information".parse::<Level>().unwrap(), Level::Information);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    assert!("invalid".parse::<Level>().is_err());
    assert!(
        "notice"
            .parse::<Level>()
            .unwrap_err()
            .to_string()
            .contains("notice")
    );
}

#[test]
fn level_from_code() {
    for level in Level::all() {
        assert_eq!(Level::from_code(level as u8), Some(level));
    }
    assert_eq!(Level::from_code(4), None);
    assert_eq!(Level::from_code(255), None);
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Information);
}
