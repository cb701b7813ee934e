use savestruct_core::{FixedString, Persist, TagWriter, to_container};
use savestruct_tests::savegame::*;

fn sample_gps(x: f32, y: f32, z: i32) -> gps {
    gps { x, y, z }
}

fn sample_item(kind: i32) -> item {
    let mut stack = item {
        r#type: kind,
        pos: sample_gps(1.5, -2.25, 0),
        multiplicity: -3,
        identified: 255,
        ammo_clip: 12,
        ..item::default()
    };
    stack.upgrade_sockets[1] = upgrade_socket {
        r#type: 7,
        addon: FixedString::new("sharpness"),
    };
    stack
}

fn sample_tux() -> tux_t {
    let mut tux = tux_t {
        pos: sample_gps(10.0, 20.5, 1),
        name: FixedString::new("Tux"),
        level: 42,
        health: u16::MAX,
        camera: point { x: -640, y: 480 },
        ..tux_t::default()
    };
    tux.inventory[0] = sample_item(3);
    tux.inventory[3] = sample_item(9);
    tux
}

#[test]
fn test_tux_round_trip() {
    let tux = sample_tux();
    let mut out = TagWriter::new();
    save_tux_t(&mut out, "tux", &tux);

    let mut back = tux_t::default();
    read_tux_t(out.as_str(), "tux", &mut back).expect("read");
    assert_eq!(back, tux);
}

#[test]
fn test_bare_struct_round_trip() {
    let rescue = mission {
        name: FixedString::new("Rescue Dvorak"),
        done: -1,
        deadline: i32::MIN,
    };
    let text = to_container("mission", &rescue);

    let mut back = mission::default();
    back.read(&text, "mission").expect("read");
    assert_eq!(back, rescue);
}

#[test]
fn test_container_layout() {
    let text = to_container("camera", &point { x: 3, y: -4 });
    assert_eq!(text, "<camera>\n<x>3</x>\n<y>-4</y>\n</camera>\n");
}

#[test]
fn test_fields_saved_in_declaration_order() {
    let text = to_container("item", &sample_item(1));
    let positions: Vec<_> = [
        "<type>",
        "<pos>",
        "<multiplicity>",
        "<identified>",
        "<ammo_clip>",
        "<upgrade_sockets>",
    ]
    .iter()
    .map(|tag| text.find(tag).expect(tag))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_nested_records_through_persist() {
    let mut out = TagWriter::new();
    sample_tux().save(&mut out, "player");
    sample_item(5).save(&mut out, "loot");

    let mut loot = item::default();
    read_item(out.as_str(), "loot", &mut loot).expect("read loot");
    assert_eq!(loot, sample_item(5));

    let mut player = tux_t::default();
    player.read(out.as_str(), "player").expect("read player");
    assert_eq!(player, sample_tux());
}

#[test]
fn test_older_save_keeps_missing_fields() {
    // Written before `health` and `camera` existed.
    let old = "<tux>\n<level>7</level>\n<name>Old Tux</name>\n</tux>\n";
    let mut tux = tux_t {
        health: 100,
        camera: point { x: 1, y: 2 },
        ..tux_t::default()
    };
    read_tux_t(old, "tux", &mut tux).expect("read");

    assert_eq!(tux.level, 7);
    assert_eq!(tux.name, "Old Tux");
    assert_eq!(tux.health, 100);
    assert_eq!(tux.camera, point { x: 1, y: 2 });
}

#[test]
fn test_reordered_fields_still_read() {
    let text = "<p>\n<y>2</y>\n<x>1</x>\n</p>\n";
    let mut p = point::default();
    read_point(text, "p", &mut p).expect("read");
    assert_eq!(p, point { x: 1, y: 2 });
}
