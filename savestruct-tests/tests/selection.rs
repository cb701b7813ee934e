use savestruct_tests::{GENERATED_FUNCTIONS, GENERATED_TYPES};

#[test]
fn test_unlisted_record_not_generated() {
    assert!(!GENERATED_TYPES.contains("scratch"));
    assert!(!GENERATED_FUNCTIONS.contains("scratch"));
}

#[test]
fn test_records_in_declaration_order() {
    let order: Vec<_> = [
        "pub struct gps ",
        "pub struct point ",
        "pub struct upgrade_socket ",
        "pub struct item ",
        "pub struct enemy ",
        "pub struct mission ",
        "pub struct tux_t ",
    ]
    .iter()
    .map(|decl| GENERATED_TYPES.find(decl).expect(decl))
    .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_one_routine_pair_per_record() {
    for name in ["gps", "point", "upgrade_socket", "item", "enemy", "mission", "tux_t"] {
        let save = format!("pub fn save_{}(", name);
        let read = format!("pub fn read_{}(", name);
        assert_eq!(GENERATED_FUNCTIONS.matches(&save).count(), 1, "{}", save);
        assert_eq!(GENERATED_FUNCTIONS.matches(&read).count(), 1, "{}", read);
    }
}

#[test]
fn test_skipped_declarations_absent() {
    for skipped in ["think", "frame", "phase", "flags", "not_a_field"] {
        assert!(!GENERATED_TYPES.contains(skipped), "{}", skipped);
    }
}

#[test]
fn test_banner_present() {
    assert!(GENERATED_TYPES.starts_with("// Generated by gen-savestruct. Do not edit."));
    assert!(GENERATED_FUNCTIONS.starts_with("// Generated by gen-savestruct. Do not edit."));
}
