use jsoncmp_rs::PathContext;

#[test]
fn test_single_segment() {
    let ctx = PathContext::new("{}", "{}");
    assert_eq!(ctx.to_path("name"), "name");
}

#[test]
fn test_dotted_segments() {
    let mut ctx = PathContext::new("{}", "{}");
    ctx.append("user");
    ctx.append("profile");
    assert_eq!(ctx.to_path("age"), "user.profile.age");
}

#[test]
fn test_index_segment_suppresses_separator() {
    let mut ctx = PathContext::new("{}", "{}");
    ctx.append("items");
    assert_eq!(ctx.to_path("[0]"), "items[0]");

    ctx.append("[0]");
    assert_eq!(ctx.to_path("id"), "items[0].id");
}

#[test]
fn test_index_at_root() {
    let ctx = PathContext::new("[]", "[]");
    assert_eq!(ctx.to_path("[3]"), "[3]");
}

#[test]
fn test_consecutive_indices() {
    let mut ctx = PathContext::new("[]", "[]");
    ctx.append("[1]");
    assert_eq!(ctx.to_path("[2]"), "[1][2]");
}

#[test]
fn test_empty_path_renders_root_marker() {
    let ctx = PathContext::new("{}", "{}");
    assert_eq!(ctx.to_path(""), "(root)");
}

#[test]
fn test_display_uses_current_path() {
    let mut ctx = PathContext::new("{}", "{}");
    ctx.append("a");
    ctx.append("[0]");
    assert_eq!(ctx.to_string(), "a[0]");
}

#[test]
fn test_remove_restores_previous_path() {
    let mut ctx = PathContext::new("{}", "{}");
    ctx.append("a");
    ctx.append("b");
    ctx.remove();
    assert_eq!(ctx.to_path("c"), "a.c");
}

#[test]
#[should_panic(expected = "path context underflow")]
fn test_unbalanced_remove_panics() {
    let mut ctx = PathContext::new("{}", "{}");
    ctx.append("a");
    ctx.remove();
    ctx.remove();
}

#[test]
fn test_context_carries_both_documents() {
    let actual = r#"{"a": 1}"#;
    let expected = r#"{"a": 2}"#;
    let ctx = PathContext::new(actual, expected);
    assert_eq!(ctx.actual_document(), actual);
    assert_eq!(ctx.expected_document(), expected);
}
