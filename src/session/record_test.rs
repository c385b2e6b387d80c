use super::*;

#[test]
fn storage_keys_are_disjoint_per_role() {
    assert_eq!(Role::Admin.storage_key(), "adminAuth");
    assert_eq!(Role::User.storage_key(), "userAuth");
}

#[test]
fn login_paths_match_backend_routes() {
    assert_eq!(Role::Admin.login_path(), "/api/v1/admin/login");
    assert_eq!(Role::User.login_path(), "/api/v1/auth/login");
}

#[test]
fn record_serializes_with_lowercase_role() {
    let record = SessionRecord::new("a@x.com", Role::Admin);
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@x.com", "role": "admin" }));
}

#[test]
fn record_rejects_unknown_role() {
    let parsed = serde_json::from_str::<SessionRecord>(r#"{"email":"a@x.com","role":"root"}"#);
    assert!(parsed.is_err());
}

#[test]
fn role_display_matches_wire_name() {
    assert_eq!(Role::User.to_string(), "user");
}
