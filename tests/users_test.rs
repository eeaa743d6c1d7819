use marketplace::config::UsersConfig;
use marketplace::users::{directory_from_config, JsonUserDirectory, UserDirectory, UserDirectoryError, UserType};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_json_directory_loads_users() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"active": true, "type": "program_staff", "name": "Ada", "admin": true}},
            {{"active": false, "type": "vendor", "name": "Acme", "admin": false}}
        ]"#
    )
    .unwrap();

    let directory = JsonUserDirectory::load(file.path()).unwrap();
    let users = directory.all_users();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].user_type, UserType::ProgramStaff);
    assert!(users[0].admin);
    assert_eq!(users[1].name, "Acme");
    assert_eq!(directory.path(), file.path());
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = JsonUserDirectory::load(file.path()).unwrap_err();
    assert!(matches!(err, UserDirectoryError::Parse { .. }));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = UsersConfig {
        source: Some(dir.path().join("missing.json")),
    };
    assert!(matches!(
        directory_from_config(&config),
        Err(UserDirectoryError::Read { .. })
    ));
}

#[test]
fn test_default_source_is_sample_directory() {
    let directory = directory_from_config(&UsersConfig::default()).unwrap();
    assert_eq!(directory.all_users().len(), 5);
}
