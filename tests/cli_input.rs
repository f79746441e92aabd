//! 대화형 메뉴 입력 처리 테스트.
use std::io::Cursor;

use solar_farm_roi::ui_cli::{parse_menu_choice, read_line_from, MenuChoice};

#[test]
fn closed_input_exits_the_menu() {
    let mut empty = Cursor::new(Vec::<u8>::new());
    let line = read_line_from(&mut empty).expect("read from empty input");
    assert_eq!(line, None);
    assert_eq!(parse_menu_choice(line.as_deref()), Some(MenuChoice::Exit));
}

#[test]
fn blank_line_is_not_end_of_input() {
    let mut input = Cursor::new(b"\n2\n".to_vec());
    let first = read_line_from(&mut input).expect("first line");
    assert_eq!(first.as_deref(), Some("\n"));
    assert_eq!(parse_menu_choice(first.as_deref()), None);

    let second = read_line_from(&mut input).expect("second line");
    assert_eq!(parse_menu_choice(second.as_deref()), Some(MenuChoice::Compare));

    let third = read_line_from(&mut input).expect("after last line");
    assert_eq!(third, None);
}

#[test]
fn menu_numbers_map_to_choices() {
    for (line, expected) in [
        ("1", MenuChoice::Calculator),
        (" 2 ", MenuChoice::Compare),
        ("3\r\n", MenuChoice::Presets),
        ("4\n", MenuChoice::Report),
        ("5", MenuChoice::Settings),
        ("0", MenuChoice::Exit),
    ] {
        assert_eq!(parse_menu_choice(Some(line)), Some(expected), "{line:?}");
    }
    assert_eq!(parse_menu_choice(Some("9")), None);
    assert_eq!(parse_menu_choice(Some("exit")), None);
}
