use crate::commands::invites::extract_invite_token;

#[test]
fn test_bare_code_passes_through() {
    let token = extract_invite_token("abc123").unwrap();
    assert_eq!(token, "abc123");
}

#[test]
fn test_code_is_trimmed() {
    let token = extract_invite_token("  abc123\n").unwrap();
    assert_eq!(token, "abc123");
}

#[test]
fn test_token_from_invite_link() {
    let token =
        extract_invite_token("http://localhost:5173/invite/accept?token=abc123").unwrap();
    assert_eq!(token, "abc123");
}

#[test]
fn test_token_from_link_with_other_params() {
    let token =
        extract_invite_token("https://tasks.example.com/invite?from=mail&token=xyz789&lang=fr")
            .unwrap();
    assert_eq!(token, "xyz789");
}

#[test]
fn test_token_from_query_fragment() {
    // A pasted "token=..." fragment still works
    let token = extract_invite_token("token=abc123").unwrap();
    assert_eq!(token, "abc123");
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(extract_invite_token("").is_err());
    assert!(extract_invite_token("   ").is_err());
}

#[test]
fn test_link_without_token_value_is_rejected() {
    assert!(extract_invite_token("http://localhost:5173/invite?token=").is_err());
}
